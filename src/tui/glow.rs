//! Decorative cursor glow overlay.
//!
//! The terminal analogue of the portfolio's pointer-following radial
//! gradient: cells around the pointer get their background tinted toward
//! the theme's glow color, with intensity falling off with distance. Only
//! cells still showing the plain background are touched, and only their
//! background - glyphs and foreground colors are left alone, so the effect
//! never obscures text.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

use crate::tracker::PointerPosition;
use crate::tui::Theme;

/// Horizontal glow radius in cells. Terminal cells are roughly twice as
/// tall as wide, so the horizontal radius is double the vertical one to
/// keep the glow visually circular.
const RADIUS_X: f32 = 22.0;
/// Vertical glow radius in cells.
const RADIUS_Y: f32 = 11.0;
/// Peak blend strength at the glow center.
const MAX_ALPHA: f32 = 0.25;

/// Cursor glow widget, rendered over the whole frame after the main UI.
pub struct CursorGlow<'a> {
    center: PointerPosition,
    theme: &'a Theme,
}

impl<'a> CursorGlow<'a> {
    /// Creates a glow centered on the given pointer position.
    #[must_use]
    pub const fn new(center: PointerPosition, theme: &'a Theme) -> Self {
        Self { center, theme }
    }
}

impl Widget for CursorGlow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (Some(base), Some(glow)) = (channels(self.theme.background), channels(self.theme.glow))
        else {
            return;
        };

        let cx = f32::from(self.center.x);
        let cy = f32::from(self.center.y);

        let left = (cx - RADIUS_X).max(f32::from(area.left())) as u16;
        let right = (cx + RADIUS_X).min(f32::from(area.right())) as u16;
        let top = (cy - RADIUS_Y).max(f32::from(area.top())) as u16;
        let bottom = (cy + RADIUS_Y).min(f32::from(area.bottom())) as u16;

        for y in top..bottom {
            for x in left..right {
                let dx = (f32::from(x) - cx) / RADIUS_X;
                let dy = (f32::from(y) - cy) / RADIUS_Y;
                let distance = (dx * dx + dy * dy).sqrt();
                if distance >= 1.0 {
                    continue;
                }
                if let Some(cell) = buf.cell_mut((x, y)) {
                    if cell.bg == self.theme.background {
                        cell.set_bg(blend(base, glow, (1.0 - distance) * MAX_ALPHA));
                    }
                }
            }
        }
    }
}

/// Extracts RGB channels; named ANSI colors cannot be blended.
const fn channels(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}

/// Linear blend from `base` toward `tint` by factor `t` in 0..=1.
fn blend(base: (u8, u8, u8), tint: (u8, u8, u8), t: f32) -> Color {
    let channel = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t) as u8;
    Color::Rgb(
        channel(base.0, tint.0),
        channel(base.1, tint.1),
        channel(base.2, tint.2),
    )
}
