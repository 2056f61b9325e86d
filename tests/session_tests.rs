//! Integration tests for the TUI session state.
//!
//! Drives `AppState` with synthetic key and mouse events - no real terminal
//! is attached at any point.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind, KeyModifiers};
use ratatui::layout::Rect;

use folio::config::{Config, ThemeMode};
use folio::content::{self, NAV_LINKS};
use folio::shortcuts::Action;
use folio::tracker::PointerPosition;
use folio::tui::{dispatch_action, handle_key_event, handle_mouse_event, AppState};

fn test_config() -> Config {
    let mut config = Config::default();
    // Pin the theme so tests do not depend on OS detection.
    config.ui.theme_mode = ThemeMode::Dark;
    config
}

fn test_state() -> AppState {
    AppState::new(test_config(), Rect::new(0, 0, 100, 40))
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::from(code)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn initial_active_section_is_about() {
    let state = test_state();
    assert_eq!(state.active_section, content::DEFAULT_SECTION);
}

#[test]
fn active_section_is_always_a_nav_target() {
    let mut state = test_state();
    for _ in 0..400 {
        handle_key_event(&mut state, key(KeyCode::Down)).unwrap();
        assert!(NAV_LINKS.iter().any(|l| l.target == state.active_section));
    }
    // The bottom of the document keeps the last activated section.
    assert_eq!(state.scroll, state.max_scroll());
}

#[test]
fn number_key_jumps_activate_target_section() {
    let mut state = test_state();
    handle_key_event(&mut state, key(KeyCode::Char('3'))).unwrap();
    assert_eq!(state.active_section, content::section::PROJECTS);

    handle_key_event(&mut state, key(KeyCode::Char('1'))).unwrap();
    assert_eq!(state.active_section, content::section::ABOUT);
}

#[test]
fn wheel_scroll_moves_content() {
    let mut state = test_state();
    handle_mouse_event(&mut state, mouse(MouseEventKind::ScrollDown, 10, 10));
    assert_eq!(state.scroll, 3);
    handle_mouse_event(&mut state, mouse(MouseEventKind::ScrollUp, 10, 10));
    assert_eq!(state.scroll, 0);
}

#[test]
fn pointer_tracks_latest_move_only() {
    let mut state = test_state();
    for i in 0..20u16 {
        handle_mouse_event(&mut state, mouse(MouseEventKind::Moved, i, 40 - i));
    }
    assert_eq!(state.pointer_position(), PointerPosition { x: 19, y: 21 });
}

#[test]
fn resize_keeps_section_set_and_valid_state() {
    let mut state = test_state();
    handle_key_event(&mut state, key(KeyCode::Char('5'))).unwrap();

    state.handle_resize(60, 20);
    state.handle_resize(140, 50);

    assert!(NAV_LINKS.iter().any(|l| l.target == state.active_section));
    assert!(state.scroll <= state.max_scroll());
}

#[test]
fn teardown_stops_state_mutation() {
    let mut state = test_state();
    handle_key_event(&mut state, key(KeyCode::Char('4'))).unwrap();
    let active = state.active_section;
    let pointer = state.pointer_position();

    state.teardown();
    assert!(!state.observer_connected());

    handle_key_event(&mut state, key(KeyCode::Down)).unwrap();
    handle_key_event(&mut state, key(KeyCode::Home)).unwrap();
    handle_mouse_event(&mut state, mouse(MouseEventKind::Moved, 55, 5));

    assert_eq!(state.active_section, active);
    assert_eq!(state.pointer_position(), pointer);
}

#[test]
fn help_overlay_toggles_and_captures_input() {
    let mut state = test_state();
    assert!(state.help.is_none());

    handle_key_event(&mut state, key(KeyCode::Char('?'))).unwrap();
    assert!(state.help.is_some());

    // While help is open, scrolling affects the overlay, not the content.
    let scroll_before = state.scroll;
    handle_key_event(&mut state, key(KeyCode::Down)).unwrap();
    assert_eq!(state.scroll, scroll_before);
    assert_eq!(state.help.as_ref().unwrap().scroll_offset, 1);

    handle_key_event(&mut state, key(KeyCode::Esc)).unwrap();
    assert!(state.help.is_none());
}

#[test]
fn quit_keys_end_the_session() {
    let mut state = test_state();
    assert!(handle_key_event(&mut state, key(KeyCode::Char('q'))).unwrap());
    assert!(state.should_quit);
}

#[test]
fn theme_toggle_cycles_mode() {
    let mut state = test_state();
    assert_eq!(state.config.ui.theme_mode, ThemeMode::Dark);
    dispatch_action(&mut state, Action::ToggleTheme).unwrap();
    assert_eq!(state.config.ui.theme_mode, ThemeMode::Light);
    dispatch_action(&mut state, Action::ToggleTheme).unwrap();
    assert_eq!(state.config.ui.theme_mode, ThemeMode::Auto);
}
