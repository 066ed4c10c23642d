//! Lookfeel Theme System
//!
//! The adaptive core's resolution layer: a registry mapping each
//! [`DesignLanguage`](lookfeel_core::DesignLanguage) to an immutable
//! [`ImplementationBundle`] of rendering strategies, and the ambient
//! [`LookAndFeel`] context that makes the currently rendering bundle
//! available to every descendant without explicit parameter passing.
//!
//! # Quick Start
//!
//! ```rust
//! use lookfeel_core::{DesignLanguage, LookAndFeelSelection};
//! use lookfeel_theme::{LanguageRegistry, LookAndFeel};
//!
//! let registry = LanguageRegistry::with_builtin().unwrap();
//! registry.verify_complete().unwrap();
//!
//! let lookfeel = LookAndFeel::new();
//! let selection = LookAndFeelSelection::with_dark(DesignLanguage::Cupertino, false);
//! lookfeel
//!     .provide(&registry, selection, |lf| {
//!         let resolved = lf.resolve_current().unwrap();
//!         assert_eq!(resolved.selection.language, DesignLanguage::Cupertino);
//!     })
//!     .unwrap();
//! ```
//!
//! # Architecture
//!
//! - Bundles are validated for completeness when built and never mutated
//!   after, so a missing component kind is a startup-time configuration
//!   error rather than a render-time surprise.
//! - The context is an explicitly-scoped handle, not a global: nested
//!   `provide` calls shadow, and the enclosing binding is restored on every
//!   exit path.

pub mod bundle;
pub mod context;
pub mod languages;
pub mod palette;
pub mod registry;

pub use bundle::{BundleBuilder, ImplementationBundle, RenderComponent, Strategy};
pub use context::{LookAndFeel, ResolvedLookAndFeel};
pub use palette::{Palette, PaletteBundle};
pub use registry::{LanguageRegistry, RegistryBuilder};
