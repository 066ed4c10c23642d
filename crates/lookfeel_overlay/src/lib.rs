//! Lookfeel Overlay Management
//!
//! Tracks visibility and anchor of transient overlays (long-press context
//! menus) independently of which design language renders them.
//!
//! - `open` while already visible is a no-op; opening one overlay dismisses
//!   any other visible overlay
//! - `dismiss` is leveled: requesting it on a hidden overlay does nothing
//! - pointer-downs outside a visible overlay's bounds dismiss it before the
//!   same frame renders
//! - the anchor's primary interaction is suppressed while its menu is open

mod manager;

pub use manager::{OverlayId, OverlayManager, PointerOutcome};
