//! Runtime state trackers.
//!
//! Two independent, event-driven observers feed the render pass: the
//! [`visibility`] tracker decides which content section is currently active
//! as the user scrolls, and the [`pointer`] tracker records the mouse
//! position behind the cursor glow effect. Neither depends on the other.

pub mod pointer;
pub mod visibility;

pub use pointer::{PointerPosition, PointerTracker};
pub use visibility::{
    reduce_active, IntersectionEntry, ObserverConfig, Region, SectionId, SectionObserver, Viewport,
};
