//! Compiled-in portfolio content tables.
//!
//! This is the single content source for the whole application: the profile,
//! navigation links, and every enumerated section. All tables are immutable
//! and read-only input to the presentation layer; there is no external
//! fetch, file I/O, or network involved.

use crate::models::{
    Certification, Contact, EducationEntry, Experience, NavLink, Profile, Project, SkillCategory,
};
use crate::tracker::SectionId;

/// Section identifiers observed by the visibility tracker.
///
/// These must stay in sync with [`NAV_LINKS`]; the tracker registers one
/// region per navigation target.
pub mod section {
    /// About section id
    pub const ABOUT: &str = "about";
    /// Experience section id
    pub const EXPERIENCE: &str = "experience";
    /// Projects section id
    pub const PROJECTS: &str = "projects";
    /// Skills section id
    pub const SKILLS: &str = "skills";
    /// Education section id
    pub const EDUCATION: &str = "education";
    /// Contact section id
    pub const CONTACT: &str = "contact";
}

/// The section considered active before any visibility event arrives.
pub const DEFAULT_SECTION: SectionId = section::ABOUT;

/// The profile rendered in the sidebar.
pub const PROFILE: Profile = Profile {
    name: "Abaidullah",
    headline: "BS Data Science Student",
    summary: "Motivated and detail-oriented BS Data Science student at Government College \
              University Faisalabad, passionate about using data to solve real-world problems. \
              Experienced in guest posting, outreach, and hands-on data science projects.",
    contact: Contact {
        email: "abaidullahsabih123@gmail.com",
        portfolio: "itsabaid.netlify.app",
        github: "https://github.com/its-abaid",
        picture: "https://i.ibb.co/6P6gSjW/Abaidullah.jpg",
    },
};

/// In-page navigation, in menu order.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        name: "About",
        target: section::ABOUT,
    },
    NavLink {
        name: "Experience",
        target: section::EXPERIENCE,
    },
    NavLink {
        name: "Projects",
        target: section::PROJECTS,
    },
    NavLink {
        name: "Skills",
        target: section::SKILLS,
    },
    NavLink {
        name: "Education",
        target: section::EDUCATION,
    },
    NavLink {
        name: "Contact",
        target: section::CONTACT,
    },
];

/// Paragraphs of the About section.
pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Currently pursuing a degree in Data Science, I've dived deep into real-world \
     applications, from collaborating on SEO projects to building predictive models. My \
     experience in guest posting has honed my communication and outreach skills, \
     complementing my technical abilities in data analysis and machine learning.",
    "I'm passionate about transforming raw data into actionable insights and am constantly \
     expanding my toolkit with new technologies and certifications. Whether it's through \
     developing a classification model to predict customer behavior or analyzing economic \
     impacts, I enjoy the challenge of solving complex problems with data.",
];

/// Work experience entries.
pub const EXPERIENCES: &[Experience] = &[Experience {
    role: "Guest Post Outreach Specialist",
    company: "Freelance",
    period: "MAR 2024 - PRESENT",
    details: &[
        "Collaborated with SEO professionals to publish guest posts on niche websites (CBD, \
         Gaming, Health, Textile, etc.).",
        "Handled communication, outreach, and follow-ups with high-authority domain websites.",
        "Secured permanent do-follow backlinks and monitored site metrics (DA, DR, traffic).",
        "Managed custom guest post orders and ensured SEO-friendly content delivery.",
    ],
}];

/// Project entries.
pub const PROJECTS: &[Project] = &[
    Project {
        title: "Customer Churn Predictor",
        description: "Developed a classification model using Python to predict customer churn, \
                      achieving 87% accuracy through feature engineering and logistic regression.",
        technologies: &["Python", "Scikit-learn", "Pandas", "Logistic Regression"],
    },
    Project {
        title: "IPL Economic Impact Analysis",
        description: "Analyzed the social and economic impact of the IPL using Python and data \
                      visualization, submitting insights for a business magazine challenge.",
        technologies: &["Python", "Pandas", "NumPy", "Matplotlib"],
    },
    Project {
        title: "Image Classification using CNN (In Progress)",
        description: "Building a deep learning model with data augmentation and transfer \
                      learning to classify images effectively.",
        technologies: &["Python", "CNN", "Keras", "TensorFlow"],
    },
    Project {
        title: "Personal Portfolio Website",
        description: "Designed and deployed a personal portfolio using HTML, CSS, GitHub, and \
                      Netlify to showcase projects and educational background.",
        technologies: &["HTML", "CSS", "GitHub", "Netlify"],
    },
];

/// Skill categories.
pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Programming & Tools",
        skills: &["Python", "SQL", "Git", "Jupyter Notebook"],
    },
    SkillCategory {
        name: "Data Analysis",
        skills: &["Pandas", "NumPy", "Matplotlib", "Seaborn"],
    },
    SkillCategory {
        name: "Machine Learning",
        skills: &["Scikit-learn", "CNN", "Keras/TensorFlow basics"],
    },
    SkillCategory {
        name: "Web & Hosting",
        skills: &["GitHub Pages", "Netlify"],
    },
    SkillCategory {
        name: "Other",
        skills: &["SEO Outreach", "Guest Posting", "Link Building"],
    },
    SkillCategory {
        name: "Soft Skills",
        skills: &["Communication", "Time Management", "Problem Solving"],
    },
];

/// Education entries.
pub const EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        degree: "BS Data Science",
        institution: "Government College University Faisalabad (GCUF)",
        period: "2023 - 2027",
        details: None,
    },
    EducationEntry {
        degree: "FSc Pre-Medical",
        institution: "BISE Lahore",
        period: "",
        details: Some("965 / 1100"),
    },
    EducationEntry {
        degree: "Matriculation",
        institution: "BISE Lahore",
        period: "",
        details: Some("1033 / 1100"),
    },
];

/// Certification entries, rendered inside the Education section.
pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "Google Advanced Data Analytics Certificate",
        issuer: "Coursera (In Progress)",
    },
    Certification {
        name: "IBM Data Science Professional Certificate",
        issuer: "Coursera (In Progress)",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_section_is_a_nav_target() {
        assert!(NAV_LINKS.iter().any(|link| link.target == DEFAULT_SECTION));
    }

    #[test]
    fn test_nav_targets_are_unique() {
        for (i, link) in NAV_LINKS.iter().enumerate() {
            for other in &NAV_LINKS[i + 1..] {
                assert_ne!(link.target, other.target, "duplicate target {}", link.target);
            }
        }
    }

    #[test]
    fn test_content_tables_nonempty() {
        assert!(!ABOUT_PARAGRAPHS.is_empty());
        assert!(!EXPERIENCES.is_empty());
        assert!(!PROJECTS.is_empty());
        assert!(!SKILLS.is_empty());
        assert!(!EDUCATION.is_empty());
        assert!(!CERTIFICATIONS.is_empty());
    }
}
