//! Overlay manager

use lookfeel_core::Bounds;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Identity of a registered overlay (one per declaring component).
    pub struct OverlayId;
}

#[derive(Clone, Copy, Debug, Default)]
struct Overlay {
    visible: bool,
    anchor: Bounds,
    /// Rendered menu bounds, registered by the component once known.
    content: Option<Bounds>,
}

/// Outcome of routing a pointer-down through the overlay layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerOutcome {
    /// No visible overlay; the event falls through to the main tree.
    Passthrough,
    /// The event landed inside the visible overlay's content.
    Inside(OverlayId),
    /// The event landed outside and dismissed the visible overlay.
    Dismissed(OverlayId),
}

/// Tracks every declared overlay. At most one is visible at a time.
#[derive(Default)]
pub struct OverlayManager {
    overlays: SlotMap<OverlayId, Overlay>,
}

impl OverlayManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an overlay identity.
    pub fn register(&mut self) -> OverlayId {
        self.overlays.insert(Overlay::default())
    }

    pub fn unregister(&mut self, id: OverlayId) {
        self.overlays.remove(id);
    }

    /// Show `id` anchored at `anchor`.
    ///
    /// Re-entrant opens while already visible are no-ops and return false.
    /// Opening one overlay dismisses any other visible overlay.
    pub fn open(&mut self, id: OverlayId, anchor: Bounds) -> bool {
        match self.overlays.get(id) {
            None => {
                tracing::warn!(?id, "open requested for unregistered overlay");
                return false;
            }
            Some(overlay) if overlay.visible => return false,
            Some(_) => {}
        }

        for (other, overlay) in self.overlays.iter_mut() {
            if other != id && overlay.visible {
                overlay.visible = false;
                overlay.content = None;
                tracing::debug!(?other, "overlay displaced");
            }
        }

        let overlay = &mut self.overlays[id];
        overlay.visible = true;
        overlay.anchor = anchor;
        tracing::debug!(?id, "overlay opened");
        true
    }

    /// Leveled dismiss request; a hidden overlay stays hidden.
    pub fn dismiss(&mut self, id: OverlayId) {
        if let Some(overlay) = self.overlays.get_mut(id) {
            if overlay.visible {
                overlay.visible = false;
                overlay.content = None;
                tracing::debug!(?id, "overlay dismissed");
            }
        }
    }

    pub fn is_visible(&self, id: OverlayId) -> bool {
        self.overlays.get(id).is_some_and(|o| o.visible)
    }

    /// Anchor bounds while visible.
    pub fn anchor(&self, id: OverlayId) -> Option<Bounds> {
        self.overlays
            .get(id)
            .filter(|o| o.visible)
            .map(|o| o.anchor)
    }

    /// Register the rendered menu bounds for outside-interaction hit testing.
    pub fn set_content_bounds(&mut self, id: OverlayId, bounds: Bounds) {
        if let Some(overlay) = self.overlays.get_mut(id) {
            overlay.content = Some(bounds);
        }
    }

    /// While a menu is open its anchor must not also trigger its normal
    /// action or re-open the menu.
    pub fn anchor_interaction_enabled(&self, id: OverlayId) -> bool {
        !self.is_visible(id)
    }

    pub fn visible_overlay(&self) -> Option<OverlayId> {
        self.overlays
            .iter()
            .find_map(|(id, o)| o.visible.then_some(id))
    }

    /// Route a pointer-down through the overlay layer.
    ///
    /// Anything outside the visible overlay's content (the anchor included)
    /// dismisses it; the caller routes this before rendering the frame, so
    /// the dismissed state is what the frame shows.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> PointerOutcome {
        let Some(id) = self.visible_overlay() else {
            return PointerOutcome::Passthrough;
        };
        let inside = self.overlays[id]
            .content
            .is_some_and(|bounds| bounds.contains(x, y));
        if inside {
            PointerOutcome::Inside(id)
        } else {
            self.dismiss(id);
            PointerOutcome::Dismissed(id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> Bounds {
        Bounds::new(20.0, 300.0, 200.0, 44.0)
    }

    fn menu() -> Bounds {
        Bounds::new(20.0, 350.0, 160.0, 90.0)
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut manager = OverlayManager::new();
        let id = manager.register();

        assert!(manager.open(id, anchor()));
        assert!(!manager.open(id, anchor()), "re-entrant open is a no-op");
        assert!(manager.is_visible(id));
    }

    #[test]
    fn test_dismiss_when_hidden_is_a_no_op() {
        let mut manager = OverlayManager::new();
        let id = manager.register();

        manager.dismiss(id);
        assert!(!manager.is_visible(id));

        manager.open(id, anchor());
        manager.dismiss(id);
        manager.dismiss(id);
        assert!(!manager.is_visible(id));
    }

    #[test]
    fn test_outside_interaction_dismisses() {
        let mut manager = OverlayManager::new();
        let id = manager.register();
        manager.open(id, anchor());
        manager.set_content_bounds(id, menu());

        assert_eq!(manager.pointer_down(50.0, 400.0), PointerOutcome::Inside(id));
        assert!(manager.is_visible(id));

        assert_eq!(manager.pointer_down(5.0, 5.0), PointerOutcome::Dismissed(id));
        assert!(!manager.is_visible(id));
        assert_eq!(manager.pointer_down(5.0, 5.0), PointerOutcome::Passthrough);
    }

    #[test]
    fn test_tap_on_anchor_counts_as_outside() {
        let mut manager = OverlayManager::new();
        let id = manager.register();
        manager.open(id, anchor());
        manager.set_content_bounds(id, menu());

        assert_eq!(
            manager.pointer_down(30.0, 310.0),
            PointerOutcome::Dismissed(id)
        );
    }

    #[test]
    fn test_anchor_interaction_suppressed_while_visible() {
        let mut manager = OverlayManager::new();
        let id = manager.register();

        assert!(manager.anchor_interaction_enabled(id));
        manager.open(id, anchor());
        assert!(!manager.anchor_interaction_enabled(id));
        manager.dismiss(id);
        assert!(manager.anchor_interaction_enabled(id));
    }

    #[test]
    fn test_opening_one_overlay_displaces_another() {
        let mut manager = OverlayManager::new();
        let first = manager.register();
        let second = manager.register();

        manager.open(first, anchor());
        manager.open(second, menu());

        assert!(!manager.is_visible(first));
        assert!(manager.is_visible(second));
        assert_eq!(manager.visible_overlay(), Some(second));
    }

    #[test]
    fn test_anchor_query_only_answers_while_visible() {
        let mut manager = OverlayManager::new();
        let id = manager.register();
        assert_eq!(manager.anchor(id), None);

        manager.open(id, anchor());
        assert_eq!(manager.anchor(id), Some(anchor()));

        manager.dismiss(id);
        assert_eq!(manager.anchor(id), None);
    }
}
