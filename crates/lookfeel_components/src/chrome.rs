//! Scaffold and chrome components

use lookfeel_core::{ComponentKind, IconGlyph};

use crate::tree::Adaptive;

/// Root scaffold. Conventionally holds a top bar, the body, and a
/// navigation bar as children, in paint order.
pub fn scaffold() -> Adaptive {
    Adaptive::new(ComponentKind::Scaffold)
}

/// Top app bar with a title. A navigation icon button goes in as a child.
pub fn top_bar(title: impl Into<String>) -> Adaptive {
    Adaptive::new(ComponentKind::TopBar).title(title)
}

/// Bottom navigation bar holding [`navigation_item`] children.
pub fn navigation_bar() -> Adaptive {
    Adaptive::new(ComponentKind::NavigationBar)
}

/// One navigation destination.
pub fn navigation_item(label: impl Into<String>, icon: IconGlyph, selected: bool) -> Adaptive {
    Adaptive::new(ComponentKind::NavigationItem)
        .title(label)
        .icon(icon)
        .selected(selected)
}
