//! Theme system for consistent UI colors across dark and light modes.
//!
//! Provides a centralized palette that automatically follows the OS theme
//! (dark/light mode) unless overridden by configuration. Colors echo the
//! amber-on-slate look of the portfolio: amber for emphasis and the active
//! navigation entry, slate tiers for body text.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for borders and titles
    pub primary: Color,
    /// Accent color for highlights and the active nav entry
    pub accent: Color,
    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels and less important content
    pub text_secondary: Color,
    /// Muted text color for help text and dim content
    pub text_muted: Color,
    /// Main background color
    pub background: Color,
    /// Surface color for tag pills and elevated elements
    pub surface: Color,
    /// Base color of the cursor glow
    pub glow: Color,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate palette.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves a configured theme mode to a palette.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Dark palette: amber accents on a near-black slate background.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Rgb(251, 191, 36),
            accent: Color::Rgb(252, 211, 77),
            text: Color::Rgb(226, 232, 240),
            text_secondary: Color::Rgb(148, 163, 184),
            text_muted: Color::Rgb(100, 116, 139),
            background: Color::Rgb(10, 10, 12),
            surface: Color::Rgb(38, 33, 16),
            glow: Color::Rgb(252, 211, 77),
        }
    }

    /// Light palette: darker amber for visibility on a white background.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(180, 83, 9),
            accent: Color::Rgb(146, 64, 14),
            text: Color::Rgb(15, 23, 42),
            text_secondary: Color::Rgb(51, 65, 85),
            text_muted: Color::Rgb(100, 116, 139),
            background: Color::Rgb(255, 251, 240),
            surface: Color::Rgb(254, 243, 199),
            glow: Color::Rgb(251, 191, 36),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::dark(), Theme::light());
    }

    #[test]
    fn test_dark_is_amber_on_dark() {
        let theme = Theme::dark();
        assert_eq!(theme.accent, Color::Rgb(252, 211, 77));
        assert_eq!(theme.background, Color::Rgb(10, 10, 12));
    }

    #[test]
    fn test_from_mode_explicit() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }

    #[test]
    fn test_semantic_colors_distinct() {
        let theme = Theme::dark();
        assert_ne!(theme.text, theme.text_muted);
        assert_ne!(theme.background, theme.surface);
    }
}
