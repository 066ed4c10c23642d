//! Material 3 implementation bundle

use lookfeel_core::{
    Color, ComponentKind, ConfigError, DesignLanguage, Primitive, RenderProps, TopBarKind, Visual,
    VisualStyle,
};

use crate::bundle::{ImplementationBundle, RenderComponent};
use crate::palette::{Palette, PaletteBundle};

const LANGUAGE: DesignLanguage = DesignLanguage::Material3;

/// Material shape scale: medium components.
const CORNER_RADIUS: f32 = 12.0;
/// Disabled content opacity per the Material spec.
const DISABLED_OPACITY: f32 = 0.38;

fn light() -> Palette {
    Palette {
        background: Color::from_hex(0xFEF7FF),
        surface: Color::from_hex(0xFFFFFF),
        surface_variant: Color::from_hex(0xE7E0EC),
        primary: Color::from_hex(0x6750A4),
        on_primary: Color::WHITE,
        text_primary: Color::from_hex(0x1D1B20),
        text_secondary: Color::from_hex(0x49454F),
        separator: Color::from_hex(0xCAC4D0),
        bar: Color::from_hex(0xF3EDF7),
    }
}

fn dark() -> Palette {
    Palette {
        background: Color::from_hex(0x141218),
        surface: Color::from_hex(0x211F26),
        surface_variant: Color::from_hex(0x49454F),
        primary: Color::from_hex(0xD0BCFF),
        on_primary: Color::from_hex(0x381E72),
        text_primary: Color::from_hex(0xE6E0E9),
        text_secondary: Color::from_hex(0xCAC4D0),
        separator: Color::from_hex(0x49454F),
        bar: Color::from_hex(0x2B2930),
    }
}

/// The complete Material 3 strategy set.
pub fn bundle() -> Result<ImplementationBundle, ConfigError> {
    ImplementationBundle::builder(LANGUAGE, PaletteBundle::new(light(), dark()))
        .strategy(ComponentKind::Scaffold, Scaffold)
        .strategy(ComponentKind::TopBar, TopBar)
        .strategy(ComponentKind::NavigationBar, NavigationBar)
        .strategy(ComponentKind::NavigationItem, NavigationItem)
        .strategy(ComponentKind::IconButton, IconButton)
        .strategy(ComponentKind::Section, Section)
        .strategy(ComponentKind::Label, Label)
        .strategy(ComponentKind::Toggle, Toggle)
        .strategy(ComponentKind::ContextMenu, ContextMenu)
        .build()
}

fn text(content: &str, color: Color) -> Visual {
    Visual::new(LANGUAGE, Primitive::Text(content.to_owned())).style(VisualStyle {
        foreground: Some(color),
        ..VisualStyle::default()
    })
}

struct Scaffold;

impl RenderComponent for Scaffold {
    fn render(&self, _props: &RenderProps, children: Vec<Visual>, palette: &Palette) -> Visual {
        Visual::new(LANGUAGE, Primitive::Surface)
            .style(VisualStyle {
                background: Some(palette.background),
                ..VisualStyle::default()
            })
            .children(children)
    }
}

struct TopBar;

impl RenderComponent for TopBar {
    fn render(&self, props: &RenderProps, children: Vec<Visual>, palette: &Palette) -> Visual {
        // Small bars float above content; large bars sit flush with it.
        let elevation = match props.top_bar {
            TopBarKind::Small => 3.0,
            TopBarKind::Large => 0.0,
        };
        let mut bar = Visual::new(LANGUAGE, Primitive::Bar)
            .style(VisualStyle {
                background: Some(palette.bar),
                elevation,
                ..VisualStyle::default()
            })
            .children(children);
        if let Some(title) = &props.title {
            bar = bar.child(text(title, palette.text_primary));
        }
        bar
    }
}

struct NavigationBar;

impl RenderComponent for NavigationBar {
    fn render(&self, _props: &RenderProps, children: Vec<Visual>, palette: &Palette) -> Visual {
        Visual::new(LANGUAGE, Primitive::Bar)
            .style(VisualStyle {
                background: Some(palette.bar),
                elevation: 2.0,
                ..VisualStyle::default()
            })
            .children(children)
    }
}

struct NavigationItem;

impl RenderComponent for NavigationItem {
    fn render(&self, props: &RenderProps, _children: Vec<Visual>, palette: &Palette) -> Visual {
        let tint = if props.selected.unwrap_or(false) {
            palette.primary
        } else {
            palette.text_secondary
        };
        let mut item = Visual::new(LANGUAGE, Primitive::Surface).style(VisualStyle {
            foreground: Some(tint),
            corner_radius: 16.0,
            ..VisualStyle::default()
        });
        if let Some(icon) = props.icon {
            item = item.child(Visual::new(LANGUAGE, Primitive::Icon(icon)));
        }
        if let Some(title) = &props.title {
            item = item.child(text(title, tint));
        }
        item
    }
}

struct IconButton;

impl RenderComponent for IconButton {
    fn render(&self, props: &RenderProps, _children: Vec<Visual>, palette: &Palette) -> Visual {
        let mut button = Visual::new(LANGUAGE, Primitive::Surface).style(VisualStyle {
            foreground: Some(palette.text_primary),
            corner_radius: 20.0,
            opacity: if props.enabled { 1.0 } else { DISABLED_OPACITY },
            ..VisualStyle::default()
        });
        if let Some(icon) = props.icon {
            button = button.child(Visual::new(LANGUAGE, Primitive::Icon(icon)));
        }
        button
    }
}

struct Section;

impl RenderComponent for Section {
    fn render(&self, props: &RenderProps, children: Vec<Visual>, palette: &Palette) -> Visual {
        // Flat list with a tinted header, no grouping card.
        let mut section = Visual::new(LANGUAGE, Primitive::Surface);
        if let Some(title) = &props.title {
            section = section.child(text(title, palette.primary));
        }
        section = section.children(children);
        if let Some(caption) = &props.caption {
            section = section.child(text(caption, palette.text_secondary));
        }
        section
    }
}

struct Label;

impl RenderComponent for Label {
    fn render(&self, props: &RenderProps, _children: Vec<Visual>, palette: &Palette) -> Visual {
        let mut row = Visual::new(LANGUAGE, Primitive::Surface).style(VisualStyle {
            background: Some(palette.surface),
            corner_radius: CORNER_RADIUS,
            elevation: if props.elevated { 10.0 } else { 0.0 },
            opacity: if props.enabled { 1.0 } else { DISABLED_OPACITY },
            ..VisualStyle::default()
        });
        if let Some(icon) = props.icon {
            row = row.child(Visual::new(LANGUAGE, Primitive::Icon(icon)));
        }
        if let Some(title) = &props.title {
            row = row.child(text(title, palette.text_primary));
        }
        row
    }
}

struct Toggle;

impl RenderComponent for Toggle {
    fn render(&self, props: &RenderProps, _children: Vec<Visual>, palette: &Palette) -> Visual {
        let on = props.checked.unwrap_or(false);
        let mut row = Visual::new(LANGUAGE, Primitive::Surface).style(VisualStyle {
            background: Some(palette.surface),
            corner_radius: CORNER_RADIUS,
            ..VisualStyle::default()
        });
        if let Some(title) = &props.title {
            row = row.child(text(title, palette.text_primary));
        }
        row.child(
            Visual::new(LANGUAGE, Primitive::Switch { on }).style(VisualStyle {
                background: Some(if on { palette.primary } else { palette.surface_variant }),
                foreground: Some(palette.on_primary),
                corner_radius: 16.0,
                ..VisualStyle::default()
            }),
        )
    }
}

struct ContextMenu;

impl RenderComponent for ContextMenu {
    fn render(&self, _props: &RenderProps, children: Vec<Visual>, palette: &Palette) -> Visual {
        // First child is the anchor; any remaining children are menu items,
        // present only while the menu is open.
        let mut iter = children.into_iter();
        let mut node = Visual::new(LANGUAGE, Primitive::Surface);
        if let Some(anchor) = iter.next() {
            node = node.child(anchor);
        }
        let items: Vec<Visual> = iter.collect();
        if !items.is_empty() {
            node = node.child(
                Visual::new(LANGUAGE, Primitive::Surface)
                    .style(VisualStyle {
                        background: Some(palette.surface),
                        corner_radius: CORNER_RADIUS,
                        elevation: 8.0,
                        ..VisualStyle::default()
                    })
                    .children(items),
            );
        }
        node
    }
}
