//! Content record types for the portfolio.
//!
//! All records are plain immutable data supplied wholesale at startup by
//! [`crate::content`]; nothing here carries runtime state.

use crate::tracker::SectionId;

/// The static profile shown in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    /// Full name
    pub name: &'static str,
    /// One-line headline shown under the name
    pub headline: &'static str,
    /// Short introductory summary paragraph
    pub summary: &'static str,
    /// Contact channels
    pub contact: Contact,
}

/// Contact channels for the profile.
///
/// All values are opaque strings; Folio renders them as outbound link
/// targets and never validates or resolves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    /// Email address (mailto target)
    pub email: &'static str,
    /// Portfolio site, without scheme
    pub portfolio: &'static str,
    /// Code hosting profile URL
    pub github: &'static str,
    /// Profile picture URL
    pub picture: &'static str,
}

/// An in-page navigation entry.
///
/// Sequence order defines both menu order and the registration order of the
/// matching sections with the visibility tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Display name
    pub name: &'static str,
    /// Identifier of the section this link targets
    pub target: SectionId,
}

/// A work experience entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    /// Role title
    pub role: &'static str,
    /// Company or engagement name
    pub company: &'static str,
    /// Human-readable period, e.g. "MAR 2024 - PRESENT"
    pub period: &'static str,
    /// Bullet-point details
    pub details: &'static [&'static str],
}

/// A project entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    /// Project title
    pub title: &'static str,
    /// One-paragraph description
    pub description: &'static str,
    /// Technology tags
    pub technologies: &'static [&'static str],
}

/// A named group of skill tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    /// Category name, e.g. "Data Analysis"
    pub name: &'static str,
    /// Skill tags in display order
    pub skills: &'static [&'static str],
}

/// An education entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationEntry {
    /// Degree or qualification name
    pub degree: &'static str,
    /// Awarding institution
    pub institution: &'static str,
    /// Period, may be empty for undated entries
    pub period: &'static str,
    /// Optional extra detail line (e.g. grades)
    pub details: Option<&'static str>,
}

/// A certification entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    /// Certification name
    pub name: &'static str,
    /// Issuing body
    pub issuer: &'static str,
}
