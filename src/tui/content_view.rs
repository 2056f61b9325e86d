//! Scrollable content column.
//!
//! Builds every section as pre-wrapped [`Line`]s so each section's line
//! extent is known up front - the visibility tracker needs exact region
//! geometry, which `Paragraph`'s own wrapping would hide. Rebuilt on resize
//! and on theme change; the section set is identical across rebuilds.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};
use ratatui::Frame;

use crate::content;
use crate::tracker::Region;
use crate::tui::Theme;

/// Pre-wrapped content lines plus the section regions they span.
pub struct ContentLayout {
    lines: Vec<Line<'static>>,
    regions: Vec<Region>,
}

impl ContentLayout {
    /// Builds the full content column wrapped to `width` text columns.
    #[must_use]
    pub fn build(width: usize, theme: &Theme) -> Self {
        let width = width.max(20);
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut regions = Vec::new();

        let sections: [(&'static str, Vec<Line<'static>>); 6] = [
            (content::section::ABOUT, about_lines(width, theme)),
            (content::section::EXPERIENCE, experience_lines(width, theme)),
            (content::section::PROJECTS, project_lines(width, theme)),
            (content::section::SKILLS, skill_lines(width, theme)),
            (content::section::EDUCATION, education_lines(width, theme)),
            (content::section::CONTACT, contact_lines(theme)),
        ];

        for (id, section_lines) in sections {
            let start = lines.len();
            lines.extend(section_lines);
            regions.push(Region {
                id,
                start,
                len: lines.len() - start,
            });
            lines.push(Line::from(""));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "Built with Rust and Ratatui. Inspired by the design of Brittany Chiang's portfolio.",
            Style::default().fg(theme.text_muted),
        )));

        Self { lines, regions }
    }

    /// Section regions in navigation order.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Total number of content lines.
    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.lines.len()
    }

    /// Renders the content column with a scrollbar.
    pub fn render(&self, f: &mut Frame, area: Rect, scroll: usize, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Portfolio ")
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let paragraph = Paragraph::new(self.lines.clone())
            .style(Style::default().fg(theme.text).bg(theme.background))
            .scroll((scroll as u16, 0));
        f.render_widget(paragraph, chunks[0]);

        let visible = inner.height as usize;
        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .track_symbol(Some("│"))
            .thumb_symbol("█")
            .style(Style::default().fg(theme.primary));
        let mut scrollbar_state =
            ScrollbarState::new(self.total_lines().saturating_sub(visible)).position(scroll);
        f.render_stateful_widget(scrollbar, chunks[1], &mut scrollbar_state);
    }
}

/// Greedy word wrap. Words longer than `width` get their own line and are
/// left for the terminal to clip.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            out.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Wraps `text` into styled lines, prefixing the first with `first_prefix`
/// and continuation lines with a matching indent.
fn wrapped_lines(
    text: &str,
    width: usize,
    first_prefix: &str,
    style: Style,
) -> Vec<Line<'static>> {
    let indent = " ".repeat(first_prefix.chars().count());
    let body_width = width.saturating_sub(indent.chars().count());
    wrap(text, body_width)
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let prefix = if i == 0 { first_prefix } else { &indent };
            Line::from(Span::styled(format!("{prefix}{row}"), style))
        })
        .collect()
}

fn header(title: &str, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!("═══ {} ═══", title.to_uppercase()),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ]
}

/// Renders a row of pill-styled tags, wrapping to `width`.
fn tag_lines(tags: &[&'static str], width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let pill = Style::default().fg(theme.accent).bg(theme.surface);
    let mut out = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;
    for tag in tags {
        let cell = format!(" {tag} ");
        let needed = cell.chars().count() + usize::from(!spans.is_empty());
        if !spans.is_empty() && used + needed > width {
            out.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
            used += 1;
        }
        used += cell.chars().count();
        spans.push(Span::styled(cell, pill));
    }
    if !spans.is_empty() {
        out.push(Line::from(spans));
    }
    out
}

fn about_lines(width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = header("About", theme);
    let body = Style::default().fg(theme.text);
    for (i, paragraph) in content::ABOUT_PARAGRAPHS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.extend(wrapped_lines(paragraph, width, "", body));
    }
    lines
}

fn experience_lines(width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = header("Experience", theme);
    for (i, exp) in content::EXPERIENCES.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            exp.period.to_string(),
            Style::default().fg(theme.text_muted),
        )));
        lines.push(Line::from(Span::styled(
            format!("{} · {}", exp.role, exp.company),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        for detail in exp.details {
            lines.extend(wrapped_lines(
                detail,
                width,
                "  • ",
                Style::default().fg(theme.text),
            ));
        }
    }
    lines
}

fn project_lines(width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = header("Projects", theme);
    for (i, project) in content::PROJECTS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            format!("{} →", project.title),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.extend(wrapped_lines(
            project.description,
            width,
            "",
            Style::default().fg(theme.text),
        ));
        lines.extend(tag_lines(project.technologies, width, theme));
    }
    lines
}

fn skill_lines(width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = header("Skills", theme);
    for (i, category) in content::SKILLS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            category.name.to_string(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.extend(tag_lines(category.skills, width, theme));
    }
    lines
}

fn education_lines(width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = header("Education", theme);
    for (i, entry) in content::EDUCATION.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        if !entry.period.is_empty() {
            lines.push(Line::from(Span::styled(
                entry.period.to_string(),
                Style::default().fg(theme.text_muted),
            )));
        }
        lines.push(Line::from(Span::styled(
            entry.degree.to_string(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.extend(wrapped_lines(
            entry.institution,
            width,
            "",
            Style::default().fg(theme.text_secondary),
        ));
        if let Some(details) = entry.details {
            lines.push(Line::from(Span::styled(
                details.to_string(),
                Style::default().fg(theme.text_muted),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Certifications",
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )));
    for cert in content::CERTIFICATIONS {
        lines.extend(wrapped_lines(
            cert.name,
            width,
            "  • ",
            Style::default().fg(theme.text),
        ));
        lines.push(Line::from(Span::styled(
            format!("    {}", cert.issuer),
            Style::default().fg(theme.text_muted),
        )));
    }
    lines
}

fn contact_lines(theme: &Theme) -> Vec<Line<'static>> {
    let contact = content::PROFILE.contact;
    let label = Style::default().fg(theme.accent);
    let value = Style::default().fg(theme.text);
    let mut lines = header("Contact", theme);
    for (name, target) in [
        ("Email", format!("mailto:{}", contact.email)),
        ("Portfolio", format!("https://{}", contact.portfolio)),
        ("GitHub", contact.github.to_string()),
        ("Photo", contact.picture.to_string()),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("{name:<10}"), label),
            Span::styled(target, value),
        ]));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NAV_LINKS;

    #[test]
    fn test_regions_match_nav_targets() {
        let layout = ContentLayout::build(70, &Theme::dark());
        let region_ids: Vec<_> = layout.regions().iter().map(|r| r.id).collect();
        let nav_targets: Vec<_> = NAV_LINKS.iter().map(|l| l.target).collect();
        assert_eq!(region_ids, nav_targets);
    }

    #[test]
    fn test_regions_are_ordered_and_disjoint() {
        let layout = ContentLayout::build(70, &Theme::dark());
        let regions = layout.regions();
        for pair in regions.windows(2) {
            assert!(pair[0].end() <= pair[1].start);
        }
        assert!(regions.iter().all(|r| r.len > 0));
        assert!(regions.last().unwrap().end() <= layout.total_lines());
    }

    #[test]
    fn test_reflow_keeps_section_set() {
        let narrow = ContentLayout::build(40, &Theme::dark());
        let wide = ContentLayout::build(120, &Theme::dark());
        let narrow_ids: Vec<_> = narrow.regions().iter().map(|r| r.id).collect();
        let wide_ids: Vec<_> = wide.regions().iter().map(|r| r.id).collect();
        assert_eq!(narrow_ids, wide_ids);
        // Narrower columns wrap to more lines.
        assert!(narrow.total_lines() > wide.total_lines());
    }

    #[test]
    fn test_wrap_respects_width() {
        let rows = wrap("one two three four five six seven eight", 10);
        assert!(rows.iter().all(|row| row.chars().count() <= 10));
        assert_eq!(rows.concat().replace(' ', ""), "onetwothreefourfivesixseveneight");
    }

    #[test]
    fn test_wrap_handles_overlong_word() {
        let rows = wrap("tiny incomprehensibilities end", 8);
        assert!(rows.contains(&"incomprehensibilities".to_string()));
    }

    #[test]
    fn test_tag_lines_wrap() {
        let theme = Theme::dark();
        let tags = ["Python", "Scikit-learn", "Pandas", "Logistic Regression"];
        let lines = tag_lines(&tags, 24, &theme);
        assert!(lines.len() > 1);
    }
}
