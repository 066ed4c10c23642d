//! Semantic component tree
//!
//! An [`Adaptive`] node carries a component kind, semantic props, children,
//! and interaction callbacks. It resolves its rendering strategy purely from
//! the ambient [`LookAndFeel`] context at draw time, never from an explicit
//! parameter.

use std::fmt;
use std::sync::Arc;

use lookfeel_core::{ComponentKind, ContextError, IconGlyph, RenderProps, TopBarKind, Visual};
use lookfeel_theme::LookAndFeel;

/// Activation callback (the "click" primitive).
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// Toggle callback receiving the new checked value.
pub type ToggleCallback = Arc<dyn Fn(bool) + Send + Sync>;

/// A node in the semantic component tree.
pub struct Adaptive {
    kind: ComponentKind,
    id: Option<String>,
    props: RenderProps,
    children: Vec<Adaptive>,
    on_activate: Option<Callback>,
    on_toggle: Option<ToggleCallback>,
    on_long_press: Option<Callback>,
}

impl Adaptive {
    pub(crate) fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            id: None,
            props: RenderProps::default(),
            children: Vec::new(),
            on_activate: None,
            on_toggle: None,
            on_long_press: None,
        }
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn props(&self) -> &RenderProps {
        &self.props
    }

    pub fn child_nodes(&self) -> &[Adaptive] {
        &self.children
    }

    // ========== Fluent construction ==========

    /// Stable id for lookup via [`Adaptive::find`].
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn child(mut self, child: Adaptive) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Adaptive>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.props.title = Some(title.into());
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.props.caption = Some(caption.into());
        self
    }

    pub fn icon(mut self, icon: IconGlyph) -> Self {
        self.props.icon = Some(icon);
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.props.checked = Some(checked);
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.props.selected = Some(selected);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.props.enabled = enabled;
        self
    }

    pub fn elevated(mut self, elevated: bool) -> Self {
        self.props.elevated = elevated;
        self
    }

    pub fn top_bar_kind(mut self, kind: TopBarKind) -> Self {
        self.props.top_bar = kind;
        self
    }

    pub fn on_activate<F: Fn() + Send + Sync + 'static>(mut self, f: F) -> Self {
        self.on_activate = Some(Arc::new(f));
        self
    }

    pub fn on_toggle<F: Fn(bool) + Send + Sync + 'static>(mut self, f: F) -> Self {
        self.on_toggle = Some(Arc::new(f));
        self
    }

    pub fn on_long_press<F: Fn() + Send + Sync + 'static>(mut self, f: F) -> Self {
        self.on_long_press = Some(Arc::new(f));
        self
    }

    // ========== Rendering ==========

    /// Render through the ambient context.
    ///
    /// Every node resolves its strategy from the innermost `provide` scope;
    /// children render first so strategies compose already-rendered output.
    pub fn render(&self, lookfeel: &LookAndFeel) -> Result<Visual, ContextError> {
        let resolved = lookfeel.resolve_current()?;
        let mut children = Vec::with_capacity(self.children.len());
        for child in &self.children {
            children.push(child.render(lookfeel)?);
        }
        Ok(resolved
            .bundle
            .render(self.kind, &self.props, children, resolved.selection.scheme))
    }

    // ========== Lookup and interaction ==========

    /// Depth-first lookup by id.
    pub fn find(&self, id: &str) -> Option<&Adaptive> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Fire the primary action. Suppressed while disabled.
    pub fn activate(&self) -> bool {
        if !self.props.enabled {
            tracing::trace!(kind = %self.kind, "activation suppressed");
            return false;
        }
        match &self.on_activate {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Fire the toggle callback with the new checked value.
    pub fn set_toggled(&self, on: bool) -> bool {
        if !self.props.enabled {
            return false;
        }
        match &self.on_toggle {
            Some(callback) => {
                callback(on);
                true
            }
            None => false,
        }
    }

    /// Fire the long-press gesture. Suppressed while disabled.
    pub fn long_press(&self) -> bool {
        if !self.props.enabled {
            tracing::trace!(kind = %self.kind, "long press suppressed");
            return false;
        }
        match &self.on_long_press {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Adaptive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adaptive")
            .field("kind", &self.kind)
            .field("id", &self.id)
            .field("children", &self.children.len())
            .finish()
    }
}
