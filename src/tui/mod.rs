//! Terminal user interface: state management, event loop, and widgets.
//!
//! [`AppState`] is the single source of truth; widgets read from it
//! immutably during the render pass and only event handlers mutate it. The
//! two trackers feed it: scroll/resize events run a visibility observation
//! whose batch is reduced into `active_section`, and mouse-move events
//! update the pointer position behind the glow overlay.

pub mod content_view;
pub mod glow;
pub mod help_overlay;
pub mod sidebar;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind,
        MouseEvent, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::content;
use crate::shortcuts::{contexts, Action, ShortcutRegistry};
use crate::tracker::{
    reduce_active, ObserverConfig, PointerTracker, SectionId, SectionObserver, Viewport,
};

// Re-export TUI components
pub use content_view::ContentLayout;
pub use glow::CursorGlow;
pub use help_overlay::HelpOverlayState;
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Lines scrolled per mouse wheel tick.
const WHEEL_SCROLL_LINES: i32 = 3;

/// The three panes of the main view.
struct Panes {
    sidebar: Rect,
    content: Rect,
    status: Rect,
}

/// Splits the terminal area into sidebar, content, and status panes.
fn panes(area: Rect) -> Panes {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(4)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(vertical[0]);
    Panes {
        sidebar: columns[0],
        content: columns[1],
        status: vertical[1],
    }
}

/// Application state - single source of truth.
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Current UI theme
    pub theme: Theme,
    /// Identifier of the currently active section
    pub active_section: SectionId,
    /// Content column scroll offset in lines
    pub scroll: usize,
    /// Help overlay state, if open
    pub help: Option<HelpOverlayState>,
    /// Whether the main loop should exit
    pub should_quit: bool,

    tracker_config: ObserverConfig,
    observer: SectionObserver,
    pointer: PointerTracker,
    layout: ContentLayout,
    area: Rect,
}

impl AppState {
    /// Creates the application state and mounts the visibility tracker.
    ///
    /// Every navigation target is registered with the observer exactly once,
    /// in menu order; an initial observation pass runs so the active section
    /// is consistent with the starting viewport.
    #[must_use]
    pub fn new(config: Config, area: Rect) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        let tracker_config = ObserverConfig::default();
        let layout = ContentLayout::build(content_width(area), &theme);

        let mut observer = SectionObserver::new(tracker_config);
        for region in layout.regions() {
            observer.observe(*region);
        }

        let mut state = Self {
            config,
            theme,
            active_section: content::DEFAULT_SECTION,
            scroll: 0,
            help: None,
            should_quit: false,
            tracker_config,
            observer,
            pointer: PointerTracker::new(),
            layout,
            area,
        };
        state.refresh_active();
        state
    }

    /// The visible slice of the content column.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport {
            height: content_height(self.area),
            scroll: self.scroll,
        }
    }

    /// Largest valid scroll offset.
    #[must_use]
    pub fn max_scroll(&self) -> usize {
        self.layout
            .total_lines()
            .saturating_sub(content_height(self.area))
    }

    /// The most recently recorded pointer position.
    #[must_use]
    pub fn pointer_position(&self) -> crate::tracker::PointerPosition {
        self.pointer.position()
    }

    /// Records a pointer-move event.
    pub fn record_pointer(&mut self, x: u16, y: u16) {
        self.pointer.record(x, y);
    }

    /// Scrolls the content column by `delta` lines and re-observes.
    pub fn scroll_by(&mut self, delta: i32) {
        let current = self.scroll as i64;
        let next = (current + i64::from(delta)).clamp(0, self.max_scroll() as i64);
        self.scroll = next as usize;
        self.refresh_active();
    }

    /// Scrolls so the nav section at `index` enters the observation band.
    ///
    /// The target's first line lands at the top of the band rather than the
    /// top of the viewport, so activation follows from observation.
    pub fn jump_to_section(&mut self, index: usize) {
        let Some(region) = self.layout.regions().get(index).copied() else {
            return;
        };
        let band_offset =
            (content_height(self.area) as f32 * self.tracker_config.top_margin) as usize;
        self.scroll = region.start.saturating_sub(band_offset).min(self.max_scroll());
        self.refresh_active();
    }

    /// Re-wraps content after a resize and updates region extents in place.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.area = Rect::new(0, 0, width, height);
        self.relayout();
    }

    /// Rebuilds the content layout for the current area and theme.
    pub fn relayout(&mut self) {
        self.layout = ContentLayout::build(content_width(self.area), &self.theme);
        self.observer.update_extents(self.layout.regions());
        self.scroll = self.scroll.min(self.max_scroll());
        self.refresh_active();
    }

    /// Runs one observation pass and folds the batch into the active state.
    pub fn refresh_active(&mut self) {
        let batch = self.observer.observe_viewport(self.viewport());
        self.active_section = reduce_active(self.active_section, &batch);
    }

    /// Toggles the help overlay.
    pub fn toggle_help(&mut self) {
        if self.help.is_some() {
            self.help = None;
        } else {
            self.help = Some(HelpOverlayState::new());
        }
    }

    /// Releases both trackers. Safe to call more than once.
    pub fn teardown(&mut self) {
        self.observer.disconnect();
        self.pointer.detach();
        log::debug!("session torn down; observers released");
    }

    /// Whether the visibility observer still holds registrations.
    #[must_use]
    pub fn observer_connected(&self) -> bool {
        self.observer.is_connected()
    }
}

/// Text columns available for content wrapping (borders + scrollbar off).
fn content_width(area: Rect) -> usize {
    panes(area).content.width.saturating_sub(3) as usize
}

/// Rows available inside the content pane.
fn content_height(area: Rect) -> usize {
    panes(area).content.height.saturating_sub(2) as usize
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Re-resolve the theme each frame; Auto follows the OS setting.
        let resolved = Theme::from_mode(state.config.ui.theme_mode);
        if resolved != state.theme {
            state.theme = resolved;
            state.relayout();
        }

        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key_event(state, key)? {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(state, mouse),
                Event::Resize(width, height) => state.handle_resize(width, height),
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle a key event. Returns `Ok(true)` when the app should quit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.kind == KeyEventKind::Release {
        return Ok(false);
    }
    let context = if state.help.is_some() {
        contexts::HELP
    } else {
        contexts::MAIN
    };
    let registry = ShortcutRegistry::new();
    registry
        .lookup(context, key)
        .map_or(Ok(false), |action| dispatch_action(state, action))
}

/// Handle a mouse event.
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            state.record_pointer(mouse.column, mouse.row);
        }
        MouseEventKind::ScrollUp => state.scroll_by(-WHEEL_SCROLL_LINES),
        MouseEventKind::ScrollDown => state.scroll_by(WHEEL_SCROLL_LINES),
        _ => {}
    }
}

/// Apply an action to the state. Returns `Ok(true)` when the app should quit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    let page = content_height(state.area).saturating_sub(1).max(1);

    if state.help.is_some() {
        if action == Action::ToggleHelp {
            state.toggle_help();
            return Ok(false);
        }
        if let Some(help) = state.help.as_mut() {
            match action {
                Action::ScrollUp => help.scroll_up(),
                Action::ScrollDown => help.scroll_down(),
                Action::PageUp => help.page_up(page),
                Action::PageDown => help.page_down(page),
                Action::JumpTop => help.scroll_to_top(),
                Action::JumpBottom => help.scroll_to_bottom(),
                _ => {}
            }
        }
        return Ok(false);
    }

    match action {
        Action::ScrollUp => state.scroll_by(-1),
        Action::ScrollDown => state.scroll_by(1),
        Action::PageUp => state.scroll_by(-(page as i32)),
        Action::PageDown => state.scroll_by(page as i32),
        Action::JumpTop => {
            state.scroll = 0;
            state.refresh_active();
        }
        Action::JumpBottom => {
            state.scroll = state.max_scroll();
            state.refresh_active();
        }
        Action::JumpToSection(index) => state.jump_to_section(index),
        Action::ToggleHelp => state.toggle_help(),
        Action::ToggleTheme => {
            state.config.ui.theme_mode = state.config.ui.theme_mode.next();
        }
        Action::Quit => {
            state.should_quit = true;
            return Ok(true);
        }
    }
    Ok(false)
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let panes = panes(f.area());
    Sidebar::render(f, panes.sidebar, state);
    state
        .layout
        .render(f, panes.content, state.scroll, &state.theme);
    StatusBar::render(f, panes.status, state, &state.theme);

    if state.config.ui.cursor_glow {
        f.render_widget(
            CursorGlow::new(state.pointer_position(), &state.theme),
            f.area(),
        );
    }

    if let Some(help) = &state.help {
        help.render(f, f.area(), &state.theme);
    }
}
