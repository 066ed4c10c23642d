//! Lookfeel Application Shell
//!
//! The host side of the adaptive core: [`AdaptiveApp`] owns the language
//! registry, the transition controller, the overlay manager, and the frame
//! clock, and runs the cooperative frame loop — route input, advance the
//! transition, then render one pass per live tree.
//!
//! The shell is the single mutator in the model. Selection changes enter
//! only through [`AdaptiveApp::set_selection`], invoked from user-facing
//! toggle callbacks; the facade and controller never mutate the selection
//! themselves.

pub mod app;
pub mod config;
pub mod error;
pub mod platform;

pub use app::{AdaptiveApp, ComposedPass, FrameOutput};
pub use config::AppConfig;
pub use error::AppError;
pub use platform::platform_name;
