//! Settings-style controls

use lookfeel_core::{ComponentKind, IconGlyph};

use crate::tree::Adaptive;

/// Grouped settings section. Title and caption are optional fluent props.
pub fn section() -> Adaptive {
    Adaptive::new(ComponentKind::Section)
}

/// Icon-only button.
pub fn icon_button(icon: IconGlyph) -> Adaptive {
    Adaptive::new(ComponentKind::IconButton).icon(icon)
}

/// Tappable text row. An optional icon renders before the text.
pub fn label(text: impl Into<String>) -> Adaptive {
    Adaptive::new(ComponentKind::Label).title(text)
}

/// Labeled on/off switch row. The checked value is owned by the host and
/// passed in on every build; the toggle itself holds no state.
pub fn toggle(title: impl Into<String>, checked: bool) -> Adaptive {
    Adaptive::new(ComponentKind::Toggle).title(title).checked(checked)
}
