//! Folio - terminal portfolio viewer
//!
//! This library provides the core functionality for the Folio application:
//! the compiled-in portfolio content, the scroll-driven section visibility
//! tracker, the pointer tracker behind the cursor glow effect, and the
//! Ratatui presentation layer.

// Module declarations
pub mod config;
pub mod constants;
pub mod content;
pub mod models;
pub mod shortcuts;
pub mod tracker;
pub mod tui;
