//! Status bar widget showing the active section and contextual key hints.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::shortcuts::{contexts, ShortcutRegistry};
use crate::tui::{AppState, Theme};

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Renders the status bar.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let section_line = Line::from(vec![
            Span::styled("Section: ", Style::default().fg(theme.primary)),
            Span::styled(
                state.active_section.to_uppercase(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let context = if state.help.is_some() {
            contexts::HELP
        } else {
            contexts::MAIN
        };
        let hints_line = Self::hints_line(context, theme);

        let status = Paragraph::new(vec![section_line, hints_line])
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            );
        f.render_widget(status, area);
    }

    /// Builds the hint line from the shortcut registry.
    fn hints_line(context: &str, theme: &Theme) -> Line<'static> {
        let registry = ShortcutRegistry::new();
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, (keys, label)) in registry.status_hints(context).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                keys,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(label, Style::default().fg(theme.text_muted)));
        }
        Line::from(spans)
    }
}
