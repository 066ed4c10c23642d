//! Lookfeel Core Vocabulary
//!
//! Shared types for the adaptive look-and-feel toolkit:
//!
//! - **Selections**: [`DesignLanguage`], [`ColorScheme`], [`LookAndFeelSelection`]
//! - **Component vocabulary**: [`ComponentKind`], [`RenderProps`], [`IconGlyph`]
//! - **Visual output**: the [`Visual`] tree emitted by rendering strategies
//! - **Errors**: [`ConfigError`], [`ContextError`]
//!
//! # Example
//!
//! ```rust
//! use lookfeel_core::{DesignLanguage, LookAndFeelSelection};
//!
//! let selection = LookAndFeelSelection::with_dark(DesignLanguage::Cupertino, false);
//! assert!(!selection.is_dark());
//! assert_eq!(selection.language.id(), "cupertino");
//! ```

pub mod color;
pub mod component;
pub mod error;
pub mod events;
pub mod geometry;
pub mod selection;
pub mod visual;

pub use color::Color;
pub use component::{ComponentKind, IconGlyph, RenderProps, TopBarKind};
pub use error::{ConfigError, ContextError};
pub use events::InputEvent;
pub use geometry::Bounds;
pub use selection::{ColorScheme, DesignLanguage, LookAndFeelSelection};
pub use visual::{Primitive, Visual, VisualStyle};
