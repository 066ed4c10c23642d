//! Per-design-language color palettes (light/dark pairs)

use lookfeel_core::{Color, ColorScheme};

/// The semantic colors a rendering strategy draws with.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub surface_variant: Color,
    pub primary: Color,
    pub on_primary: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub separator: Color,
    pub bar: Color,
}

impl Palette {
    /// Component-wise interpolation between two palettes.
    pub fn lerp(from: &Palette, to: &Palette, t: f32) -> Palette {
        Palette {
            background: Color::lerp(from.background, to.background, t),
            surface: Color::lerp(from.surface, to.surface, t),
            surface_variant: Color::lerp(from.surface_variant, to.surface_variant, t),
            primary: Color::lerp(from.primary, to.primary, t),
            on_primary: Color::lerp(from.on_primary, to.on_primary, t),
            text_primary: Color::lerp(from.text_primary, to.text_primary, t),
            text_secondary: Color::lerp(from.text_secondary, to.text_secondary, t),
            separator: Color::lerp(from.separator, to.separator, t),
            bar: Color::lerp(from.bar, to.bar, t),
        }
    }
}

/// Light/dark palette pair, one per design language.
#[derive(Clone, Debug)]
pub struct PaletteBundle {
    light: Palette,
    dark: Palette,
}

impl PaletteBundle {
    pub fn new(light: Palette, dark: Palette) -> Self {
        Self { light, dark }
    }

    pub fn for_scheme(&self, scheme: ColorScheme) -> &Palette {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }
}
