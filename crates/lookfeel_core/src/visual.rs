//! Visual output tree produced by design-language strategies
//!
//! A [`Visual`] is the `VisualOutput` of the rendering seam: concrete enough
//! for a compositor to paint and for tests to assert which design language
//! produced a node, without committing the core to any pixel pipeline.

use crate::color::Color;
use crate::component::IconGlyph;
use crate::selection::DesignLanguage;

/// Visual primitive emitted by a rendering strategy.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// A styled rectangular container.
    Surface,
    /// A horizontal chrome bar (top bar, navigation bar).
    Bar,
    /// A text run.
    Text(String),
    /// An icon glyph.
    Icon(IconGlyph),
    /// A binary switch control.
    Switch { on: bool },
    /// A hairline separator.
    Divider,
}

/// Style attributes attached to a visual node.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualStyle {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub corner_radius: f32,
    pub elevation: f32,
    pub opacity: f32,
}

impl Default for VisualStyle {
    fn default() -> Self {
        Self {
            background: None,
            foreground: None,
            corner_radius: 0.0,
            elevation: 0.0,
            opacity: 1.0,
        }
    }
}

/// A node of rendered visual output.
///
/// `language` records which design language's strategy produced the node,
/// so compositor passes and tests can assert provenance.
#[derive(Clone, Debug, PartialEq)]
pub struct Visual {
    pub language: DesignLanguage,
    pub primitive: Primitive,
    pub style: VisualStyle,
    pub children: Vec<Visual>,
}

impl Visual {
    pub fn new(language: DesignLanguage, primitive: Primitive) -> Self {
        Self {
            language,
            primitive,
            style: VisualStyle::default(),
            children: Vec::new(),
        }
    }

    pub fn style(mut self, style: VisualStyle) -> Self {
        self.style = style;
        self
    }

    pub fn child(mut self, child: Visual) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Visual>) -> Self {
        self.children.extend(children);
        self
    }

    /// Depth-first search for the first node matching `pred`.
    pub fn find(&self, pred: &dyn Fn(&Visual) -> bool) -> Option<&Visual> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(pred))
    }

    /// First text node containing `needle`.
    pub fn find_text(&self, needle: &str) -> Option<&Visual> {
        self.find(&|v| matches!(&v.primitive, Primitive::Text(t) if t.contains(needle)))
    }

    /// First switch node, if any.
    pub fn find_switch(&self) -> Option<&Visual> {
        self.find(&|v| matches!(v.primitive, Primitive::Switch { .. }))
    }

    /// Total node count including self.
    pub fn count_nodes(&self) -> usize {
        1 + self.children.iter().map(Visual::count_nodes).sum::<usize>()
    }

    /// All text runs, in paint order.
    pub fn collect_text(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_text_into(&mut out);
        out
    }

    fn collect_text_into<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let Primitive::Text(t) = &self.primitive {
            out.push(t.as_str());
        }
        for child in &self.children {
            child.collect_text_into(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Visual {
        Visual::new(DesignLanguage::Cupertino, Primitive::Text(s.into()))
    }

    #[test]
    fn test_find_text_descends() {
        let tree = Visual::new(DesignLanguage::Cupertino, Primitive::Surface)
            .child(Visual::new(DesignLanguage::Cupertino, Primitive::Surface).child(text("Dark mode")))
            .child(text("Settings"));

        assert!(tree.find_text("Dark mode").is_some());
        assert!(tree.find_text("missing").is_none());
        assert_eq!(tree.count_nodes(), 4);
    }

    #[test]
    fn test_collect_text_in_paint_order() {
        let tree = Visual::new(DesignLanguage::Material3, Primitive::Surface)
            .child(Visual::new(DesignLanguage::Material3, Primitive::Text("a".into())))
            .child(Visual::new(DesignLanguage::Material3, Primitive::Text("b".into())));
        assert_eq!(tree.collect_text(), vec!["a", "b"]);
    }
}
