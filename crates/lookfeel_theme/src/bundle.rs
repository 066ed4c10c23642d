//! Implementation bundles: the per-language strategy dispatch table

use std::fmt;
use std::sync::Arc;

use lookfeel_core::{ColorScheme, ComponentKind, ConfigError, DesignLanguage, RenderProps, Visual};
use rustc_hash::FxHashMap;

use crate::palette::{Palette, PaletteBundle};

/// A concrete rendering strategy for one semantic component kind.
///
/// This is the seam a design language implementation supplies: given the
/// node's semantic props, its already-rendered children, and the active
/// palette, produce visual output.
pub trait RenderComponent: Send + Sync {
    fn render(&self, props: &RenderProps, children: Vec<Visual>, palette: &Palette) -> Visual;
}

/// Shared strategy entry in a bundle's dispatch table.
pub type Strategy = Arc<dyn RenderComponent>;

/// The full strategy set for one design language, plus its palettes.
///
/// Immutable once built. Completeness over [`ComponentKind::ALL`] is
/// validated by [`BundleBuilder::build`], so per-kind lookup is total.
pub struct ImplementationBundle {
    language: DesignLanguage,
    strategies: FxHashMap<ComponentKind, Strategy>,
    palettes: PaletteBundle,
}

impl ImplementationBundle {
    pub fn builder(language: DesignLanguage, palettes: PaletteBundle) -> BundleBuilder {
        BundleBuilder {
            language,
            palettes,
            strategies: FxHashMap::default(),
        }
    }

    pub fn language(&self) -> DesignLanguage {
        self.language
    }

    pub fn palette(&self, scheme: ColorScheme) -> &Palette {
        self.palettes.for_scheme(scheme)
    }

    /// Render `kind` with this bundle's strategy for it.
    pub fn render(
        &self,
        kind: ComponentKind,
        props: &RenderProps,
        children: Vec<Visual>,
        scheme: ColorScheme,
    ) -> Visual {
        let strategy = self
            .strategies
            .get(&kind)
            .expect("bundle completeness validated at construction");
        strategy.render(props, children, self.palettes.for_scheme(scheme))
    }
}

impl fmt::Debug for ImplementationBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImplementationBundle")
            .field("language", &self.language)
            .field("strategies", &self.strategies.len())
            .finish()
    }
}

/// Builder that validates every component kind has a strategy.
pub struct BundleBuilder {
    language: DesignLanguage,
    palettes: PaletteBundle,
    strategies: FxHashMap<ComponentKind, Strategy>,
}

impl BundleBuilder {
    /// Register the strategy for one component kind.
    pub fn strategy(mut self, kind: ComponentKind, strategy: impl RenderComponent + 'static) -> Self {
        self.strategies.insert(kind, Arc::new(strategy));
        self
    }

    /// Finish the bundle, reporting any missing component kinds.
    pub fn build(self) -> Result<ImplementationBundle, ConfigError> {
        let missing: Vec<ComponentKind> = ComponentKind::ALL
            .iter()
            .copied()
            .filter(|kind| !self.strategies.contains_key(kind))
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::IncompleteBundle {
                language: self.language,
                missing,
            });
        }
        tracing::debug!(language = %self.language, "implementation bundle built");
        Ok(ImplementationBundle {
            language: self.language,
            strategies: self.strategies,
            palettes: self.palettes,
        })
    }
}
