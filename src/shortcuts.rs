//! Centralized shortcut and action system.
//!
//! Connects key bindings with application behavior and with the hint text
//! shown in the status bar and help overlay. Bindings are grouped by input
//! context so the help overlay and the main view can disagree about what a
//! key does.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// All possible actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // === SCROLLING ===
    /// Scroll the content column up one line
    ScrollUp,
    /// Scroll the content column down one line
    ScrollDown,
    /// Scroll up by one page
    PageUp,
    /// Scroll down by one page
    PageDown,
    /// Jump to the top of the content
    JumpTop,
    /// Jump to the bottom of the content
    JumpBottom,
    /// Jump to the nav section with the given index
    JumpToSection(usize),

    // === VIEW ===
    /// Toggle the help overlay
    ToggleHelp,
    /// Cycle the theme mode (Auto/Dark/Light)
    ToggleTheme,

    // === GENERAL ===
    /// Quit the application
    Quit,
}

/// Input contexts.
pub mod contexts {
    /// Main two-column view
    pub const MAIN: &str = "main";
    /// Help overlay
    pub const HELP: &str = "help";
}

/// A key binding within a context.
struct Binding {
    context: &'static str,
    code: KeyCode,
    modifiers: KeyModifiers,
    action: Action,
    /// Hint shown in the status bar, as (keys, label); None for unadvertised
    /// bindings like vim aliases.
    hint: Option<(&'static str, &'static str)>,
}

const fn binding(
    context: &'static str,
    code: KeyCode,
    modifiers: KeyModifiers,
    action: Action,
    hint: Option<(&'static str, &'static str)>,
) -> Binding {
    Binding {
        context,
        code,
        modifiers,
        action,
        hint,
    }
}

/// Registry of all key bindings.
pub struct ShortcutRegistry {
    bindings: Vec<Binding>,
}

impl ShortcutRegistry {
    /// Creates the registry with the built-in binding table.
    #[must_use]
    pub fn new() -> Self {
        use contexts::{HELP, MAIN};

        let mut bindings = vec![
            // Main view: scrolling
            binding(
                MAIN,
                KeyCode::Up,
                KeyModifiers::NONE,
                Action::ScrollUp,
                Some(("↑↓/jk", "Scroll")),
            ),
            binding(MAIN, KeyCode::Char('k'), KeyModifiers::NONE, Action::ScrollUp, None),
            binding(MAIN, KeyCode::Down, KeyModifiers::NONE, Action::ScrollDown, None),
            binding(MAIN, KeyCode::Char('j'), KeyModifiers::NONE, Action::ScrollDown, None),
            binding(MAIN, KeyCode::PageUp, KeyModifiers::NONE, Action::PageUp, None),
            binding(
                MAIN,
                KeyCode::PageDown,
                KeyModifiers::NONE,
                Action::PageDown,
                Some(("PgUp/PgDn", "Page")),
            ),
            binding(MAIN, KeyCode::Home, KeyModifiers::NONE, Action::JumpTop, None),
            binding(MAIN, KeyCode::End, KeyModifiers::NONE, Action::JumpBottom, None),
            // Main view: view toggles
            binding(
                MAIN,
                KeyCode::Char('?'),
                KeyModifiers::NONE,
                Action::ToggleHelp,
                Some(("?", "Help")),
            ),
            binding(MAIN, KeyCode::F(12), KeyModifiers::NONE, Action::ToggleTheme, None),
            // Main view: quit
            binding(
                MAIN,
                KeyCode::Char('q'),
                KeyModifiers::NONE,
                Action::Quit,
                Some(("q", "Quit")),
            ),
            binding(MAIN, KeyCode::Char('q'), KeyModifiers::CONTROL, Action::Quit, None),
            binding(MAIN, KeyCode::Esc, KeyModifiers::NONE, Action::Quit, None),
            // Help overlay
            binding(
                HELP,
                KeyCode::Up,
                KeyModifiers::NONE,
                Action::ScrollUp,
                Some(("↑↓", "Scroll")),
            ),
            binding(HELP, KeyCode::Char('k'), KeyModifiers::NONE, Action::ScrollUp, None),
            binding(HELP, KeyCode::Down, KeyModifiers::NONE, Action::ScrollDown, None),
            binding(HELP, KeyCode::Char('j'), KeyModifiers::NONE, Action::ScrollDown, None),
            binding(HELP, KeyCode::PageUp, KeyModifiers::NONE, Action::PageUp, None),
            binding(HELP, KeyCode::PageDown, KeyModifiers::NONE, Action::PageDown, None),
            binding(HELP, KeyCode::Home, KeyModifiers::NONE, Action::JumpTop, None),
            binding(HELP, KeyCode::End, KeyModifiers::NONE, Action::JumpBottom, None),
            binding(
                HELP,
                KeyCode::Esc,
                KeyModifiers::NONE,
                Action::ToggleHelp,
                Some(("Esc", "Close")),
            ),
            binding(HELP, KeyCode::Char('?'), KeyModifiers::NONE, Action::ToggleHelp, None),
        ];

        // Number keys jump to nav sections in menu order.
        for (index, digit) in ('1'..='6').enumerate() {
            bindings.push(binding(
                contexts::MAIN,
                KeyCode::Char(digit),
                KeyModifiers::NONE,
                Action::JumpToSection(index),
                if index == 0 {
                    Some(("1-6", "Jump"))
                } else {
                    None
                },
            ));
        }

        Self { bindings }
    }

    /// Looks up the action bound to a key within a context.
    ///
    /// SHIFT is ignored for character keys so bindings like `?` match
    /// regardless of how the terminal reports the shifted character.
    #[must_use]
    pub fn lookup(&self, context: &str, key: KeyEvent) -> Option<Action> {
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        self.bindings
            .iter()
            .find(|b| b.context == context && b.code == key.code && b.modifiers == modifiers)
            .map(|b| b.action)
    }

    /// Status bar hints for a context, in binding order.
    #[must_use]
    pub fn status_hints(&self, context: &str) -> Vec<(&'static str, &'static str)> {
        self.bindings
            .iter()
            .filter(|b| b.context == context)
            .filter_map(|b| b.hint)
            .collect()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_main_bindings() {
        let registry = ShortcutRegistry::new();
        assert_eq!(
            registry.lookup(contexts::MAIN, KeyEvent::from(KeyCode::Char('j'))),
            Some(Action::ScrollDown)
        );
        assert_eq!(
            registry.lookup(contexts::MAIN, KeyEvent::from(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(
            registry.lookup(contexts::MAIN, KeyEvent::from(KeyCode::Char('3'))),
            Some(Action::JumpToSection(2))
        );
    }

    #[test]
    fn test_lookup_ignores_shift_on_chars() {
        let registry = ShortcutRegistry::new();
        let shifted = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(
            registry.lookup(contexts::MAIN, shifted),
            Some(Action::ToggleHelp)
        );
    }

    #[test]
    fn test_contexts_are_independent() {
        let registry = ShortcutRegistry::new();
        // Esc quits the main view but closes the help overlay.
        assert_eq!(
            registry.lookup(contexts::MAIN, KeyEvent::from(KeyCode::Esc)),
            Some(Action::Quit)
        );
        assert_eq!(
            registry.lookup(contexts::HELP, KeyEvent::from(KeyCode::Esc)),
            Some(Action::ToggleHelp)
        );
        // Number jumps exist only in the main view.
        assert_eq!(
            registry.lookup(contexts::HELP, KeyEvent::from(KeyCode::Char('1'))),
            None
        );
    }

    #[test]
    fn test_unbound_key_returns_none() {
        let registry = ShortcutRegistry::new();
        assert_eq!(
            registry.lookup(contexts::MAIN, KeyEvent::from(KeyCode::Char('z'))),
            None
        );
    }

    #[test]
    fn test_status_hints_present() {
        let registry = ShortcutRegistry::new();
        let hints = registry.status_hints(contexts::MAIN);
        assert!(hints.iter().any(|(keys, _)| *keys == "?"));
        assert!(hints.iter().any(|(keys, _)| *keys == "q"));
    }
}
