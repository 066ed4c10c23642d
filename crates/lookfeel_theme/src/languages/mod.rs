//! Built-in design language implementations
//!
//! Each module supplies the widget-rendering collaborator side of the seam:
//! a complete strategy set plus a light/dark palette pair for one design
//! language. The semantic tree they render is identical; only the visual
//! treatment differs.

pub mod cupertino;
pub mod material;
