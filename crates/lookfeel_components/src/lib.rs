//! Lookfeel Adaptive Components
//!
//! Semantic components defined once, rendered by whichever design language
//! the ambient context currently provides. Screens written against this
//! facade never name a design language: the structure (what children exist,
//! their order, their semantic props) is identical under every bundle, and
//! only the rendering strategy resolved at draw time differs.
//!
//! # Example
//!
//! ```rust
//! use lookfeel_components::{scaffold, section, toggle};
//! use lookfeel_core::{DesignLanguage, LookAndFeelSelection};
//! use lookfeel_theme::{LanguageRegistry, LookAndFeel};
//!
//! let registry = LanguageRegistry::with_builtin().unwrap();
//! let lookfeel = LookAndFeel::new();
//!
//! let screen = scaffold().child(
//!     section()
//!         .title("Appearance")
//!         .child(toggle("Dark mode", false)),
//! );
//!
//! let selection = LookAndFeelSelection::with_dark(DesignLanguage::Cupertino, false);
//! let visual = lookfeel
//!     .provide(&registry, selection, |lf| screen.render(lf))
//!     .unwrap()
//!     .unwrap();
//! assert!(visual.find_text("Dark mode").is_some());
//! ```

pub mod chrome;
pub mod controls;
pub mod menu;
pub mod tree;

pub use chrome::{navigation_bar, navigation_item, scaffold, top_bar};
pub use controls::{icon_button, label, section, toggle};
pub use menu::context_menu;
pub use tree::{Adaptive, Callback, ToggleCallback};
