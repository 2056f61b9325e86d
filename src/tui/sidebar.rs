//! Sidebar widget: profile, in-page navigation, contact links.
//!
//! The navigation mirrors the source design's indicator bars: the active
//! entry gets a longer, accent-colored bar and a brightened label, matching
//! whatever the visibility tracker currently reports.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::content;
use crate::tui::{AppState, Theme};

/// Indicator bar for the active nav entry.
const ACTIVE_BAR: &str = "────────";
/// Indicator bar for inactive nav entries.
const INACTIVE_BAR: &str = "───";

/// Sidebar widget.
pub struct Sidebar;

impl Sidebar {
    /// Renders the sidebar into `area`.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let width = area.width.saturating_sub(4) as usize;

        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(Span::styled(
            content::PROFILE.name.to_string(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            content::PROFILE.headline.to_string(),
            Style::default().fg(theme.primary),
        )));
        lines.push(Line::from(""));
        for row in wrap_summary(content::PROFILE.summary, width) {
            lines.push(Line::from(Span::styled(
                row,
                Style::default().fg(theme.text_secondary),
            )));
        }

        lines.push(Line::from(""));
        for (index, link) in content::NAV_LINKS.iter().enumerate() {
            lines.push(nav_line(
                index,
                link.name,
                link.target == state.active_section,
                theme,
            ));
        }

        lines.push(Line::from(""));
        let contact = content::PROFILE.contact;
        for (label, value) in [
            ("GitHub", contact.github.to_string()),
            ("Email", contact.email.to_string()),
            ("Website", contact.portfolio.to_string()),
        ] {
            lines.push(Line::from(vec![
                Span::styled(format!("{label:<9}"), Style::default().fg(theme.accent)),
                Span::styled(value, Style::default().fg(theme.text_muted)),
            ]));
        }

        let widget = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            );
        f.render_widget(widget, area);
    }
}

fn nav_line(index: usize, name: &str, active: bool, theme: &Theme) -> Line<'static> {
    if active {
        Line::from(vec![
            Span::styled(
                format!("{ACTIVE_BAR}  "),
                Style::default().fg(theme.accent),
            ),
            Span::styled(
                name.to_uppercase(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(
                format!("{INACTIVE_BAR}  "),
                Style::default().fg(theme.text_muted),
            ),
            Span::styled(
                format!("{} {}", index + 1, name.to_uppercase()),
                Style::default().fg(theme.text_muted),
            ),
        ])
    }
}

fn wrap_summary(text: &str, width: usize) -> Vec<String> {
    let width = width.max(10);
    let mut rows = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            rows.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}
