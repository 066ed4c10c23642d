//! Adaptive context menu
//!
//! The anchor child always renders; menu items are included only while the
//! menu is visible. The anchor's emphasis is a pure function of visibility,
//! and its primary interaction is suppressed while the menu is open so a tap
//! cannot both dismiss the menu and trigger the anchor's normal action.

use lookfeel_core::ComponentKind;

use crate::tree::Adaptive;

/// Context menu attached to an anchor component.
///
/// `visible` comes from the overlay manager; the host wires the anchor's
/// long-press to `OverlayManager::open` and rebuilds the tree each frame.
pub fn context_menu(
    visible: bool,
    anchor: Adaptive,
    items: impl IntoIterator<Item = Adaptive>,
) -> Adaptive {
    let anchor = anchor.elevated(visible).enabled(!visible);
    let mut node = Adaptive::new(ComponentKind::ContextMenu).child(anchor);
    if visible {
        node = node.children(items);
    }
    node
}
