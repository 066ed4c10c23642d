//! Lookfeel Transition System
//!
//! Detects look-and-feel selection changes and drives a crossfade between
//! the outgoing and incoming subtrees instead of an abrupt swap.
//!
//! # Features
//!
//! - **Explicit state machine**: `Stable` / `Transitioning` with a
//!   per-frame tick, so progress and cancellation are testable without a
//!   UI framework
//! - **Coalescing**: re-triggering mid-flight retargets the one active
//!   transition, never stacks
//! - **Input policy**: the outgoing tree is input-disabled the moment a
//!   transition starts

pub mod clock;
pub mod controller;
pub mod easing;

pub use clock::{FrameClock, FrameTick};
pub use controller::{
    InputPolicy, RenderPass, SwitchState, TransitionConfig, TransitionController,
};
pub use easing::Easing;
