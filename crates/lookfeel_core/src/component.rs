//! Semantic component vocabulary shared by bundles and the facade

use std::fmt::{Display, Formatter};

/// The semantic component kinds every design language must implement.
///
/// A bundle missing a kind is a configuration defect caught at bundle
/// construction, never a per-render condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Scaffold,
    TopBar,
    NavigationBar,
    NavigationItem,
    IconButton,
    Section,
    Label,
    Toggle,
    ContextMenu,
}

impl ComponentKind {
    /// Every kind, in declaration order. Bundle completeness is validated
    /// against this list.
    pub const ALL: [ComponentKind; 9] = [
        ComponentKind::Scaffold,
        ComponentKind::TopBar,
        ComponentKind::NavigationBar,
        ComponentKind::NavigationItem,
        ComponentKind::IconButton,
        ComponentKind::Section,
        ComponentKind::Label,
        ComponentKind::Toggle,
        ComponentKind::ContextMenu,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Scaffold => "scaffold",
            Self::TopBar => "top-bar",
            Self::NavigationBar => "navigation-bar",
            Self::NavigationItem => "navigation-item",
            Self::IconButton => "icon-button",
            Self::Section => "section",
            Self::Label => "label",
            Self::Toggle => "toggle",
            Self::ContextMenu => "context-menu",
        }
    }
}

impl Display for ComponentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Top bar sizing variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TopBarKind {
    #[default]
    Small,
    Large,
}

/// Icon glyph identifiers. Asset resolution is a rendering concern; the
/// core only names the glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconGlyph {
    ArrowBack,
    Settings,
    Person,
    Send,
}

/// Semantic props handed to a rendering strategy.
///
/// Structure (children and their order) travels separately through the
/// component tree; these are the leaf-level semantics of a single node.
#[derive(Clone, Debug)]
pub struct RenderProps {
    pub title: Option<String>,
    pub caption: Option<String>,
    pub icon: Option<IconGlyph>,
    pub checked: Option<bool>,
    pub selected: Option<bool>,
    pub top_bar: TopBarKind,
    /// Whether the node's primary interaction is enabled.
    pub enabled: bool,
    /// Visual emphasis for context-menu anchors, a pure function of the
    /// menu's visibility.
    pub elevated: bool,
}

impl Default for RenderProps {
    fn default() -> Self {
        Self {
            title: None,
            caption: None,
            icon: None,
            checked: None,
            selected: None,
            top_bar: TopBarKind::Small,
            enabled: true,
            elevated: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_have_distinct_names() {
        let mut names: Vec<&str> = ComponentKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ComponentKind::ALL.len());
    }

    #[test]
    fn test_props_default_is_enabled() {
        let props = RenderProps::default();
        assert!(props.enabled);
        assert!(!props.elevated);
    }
}
