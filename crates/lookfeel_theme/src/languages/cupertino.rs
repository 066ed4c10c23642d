//! Cupertino implementation bundle
//!
//! Inset-grouped sections, hairline separators, and system tint colors per
//! the Apple Human Interface Guidelines.

use lookfeel_core::{
    Color, ComponentKind, ConfigError, DesignLanguage, Primitive, RenderProps, TopBarKind, Visual,
    VisualStyle,
};

use crate::bundle::{ImplementationBundle, RenderComponent};
use crate::palette::{Palette, PaletteBundle};

const LANGUAGE: DesignLanguage = DesignLanguage::Cupertino;

/// Inset grouped card radius.
const CORNER_RADIUS: f32 = 10.0;
const DISABLED_OPACITY: f32 = 0.3;

fn switch_on_green() -> Color {
    // System green, used by switches regardless of tint.
    Color::from_hex(0x34C759)
}

fn light() -> Palette {
    Palette {
        background: Color::from_hex(0xF2F2F7),
        surface: Color::from_hex(0xFFFFFF),
        surface_variant: Color::from_hex(0xE5E5EA),
        primary: Color::from_hex(0x007AFF),
        on_primary: Color::WHITE,
        text_primary: Color::from_hex(0x000000),
        text_secondary: Color::from_hex(0x8E8E93),
        separator: Color::from_hex(0xC6C6C8),
        bar: Color::from_hex(0xF9F9F9),
    }
}

fn dark() -> Palette {
    Palette {
        background: Color::from_hex(0x000000),
        surface: Color::from_hex(0x1C1C1E),
        surface_variant: Color::from_hex(0x2C2C2E),
        primary: Color::from_hex(0x0A84FF),
        on_primary: Color::WHITE,
        text_primary: Color::from_hex(0xFFFFFF),
        text_secondary: Color::from_hex(0x8E8E93),
        separator: Color::from_hex(0x38383A),
        bar: Color::from_hex(0x1D1D1D),
    }
}

/// The complete Cupertino strategy set.
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

fn hairline(palette: &Palette) -> Visual {
    Visual::new(LANGUAGE, Primitive::Divider).style(VisualStyle {
        foreground: Some(palette.separator),
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
        let mut bar = Visual::new(LANGUAGE, Primitive::Bar)
            .style(VisualStyle {
                background: Some(palette.bar),
                ..VisualStyle::default()
            })
            .children(children);
        if let Some(title) = &props.title {
            bar = bar.child(text(title, palette.text_primary));
        }
        // Compact bars end in a hairline; large-title bars blend into content.
        if props.top_bar == TopBarKind::Small {
            bar = bar.child(hairline(palette));
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
                ..VisualStyle::default()
            })
            .child(hairline(palette))
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
            foreground: Some(palette.primary),
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
        // Inset grouped card: rows separated by hairlines, caption below.
        let mut card = Visual::new(LANGUAGE, Primitive::Surface).style(VisualStyle {
            background: Some(palette.surface),
            corner_radius: CORNER_RADIUS,
            ..VisualStyle::default()
        });
        let count = children.len();
        for (index, child) in children.into_iter().enumerate() {
            card = card.child(child);
            if index + 1 < count {
                card = card.child(hairline(palette));
            }
        }

        let mut section = Visual::new(LANGUAGE, Primitive::Surface);
        if let Some(title) = &props.title {
            section = section.child(text(title, palette.text_secondary));
        }
        section = section.child(card);
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
            row = row.child(text(title, palette.primary));
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
                background: Some(if on {
                    switch_on_green()
                } else {
                    palette.surface_variant
                }),
                foreground: Some(Color::WHITE),
                corner_radius: 15.5,
                ..VisualStyle::default()
            }),
        )
    }
}

struct ContextMenu;

impl RenderComponent for ContextMenu {
    fn render(&self, _props: &RenderProps, children: Vec<Visual>, palette: &Palette) -> Visual {
        // First child is the anchor; remaining children are menu items,
        // present only while the menu is open.
        let mut iter = children.into_iter();
        let mut node = Visual::new(LANGUAGE, Primitive::Surface);
        if let Some(anchor) = iter.next() {
            node = node.child(anchor);
        }
        let items: Vec<Visual> = iter.collect();
        if !items.is_empty() {
            let count = items.len();
            let mut menu = Visual::new(LANGUAGE, Primitive::Surface).style(VisualStyle {
                background: Some(palette.surface_variant),
                corner_radius: 13.0,
                elevation: 12.0,
                ..VisualStyle::default()
            });
            for (index, item) in items.into_iter().enumerate() {
                menu = menu.child(item);
                if index + 1 < count {
                    menu = menu.child(hairline(palette));
                }
            }
            node = node.child(menu);
        }
        node
    }
}
