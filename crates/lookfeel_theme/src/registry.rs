//! Design-language registry
//!
//! A static mapping from [`DesignLanguage`] to its [`ImplementationBundle`],
//! populated at process start and never mutated after. Adding a language
//! means registering one bundle; call sites are untouched.

use std::sync::Arc;

use lookfeel_core::{ConfigError, DesignLanguage};
use rustc_hash::FxHashMap;

use crate::bundle::ImplementationBundle;
use crate::languages;

/// Registry of resolved implementation bundles.
pub struct LanguageRegistry {
    bundles: FxHashMap<DesignLanguage, Arc<ImplementationBundle>>,
}

impl LanguageRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder {
            bundles: FxHashMap::default(),
        }
    }

    /// Registry with the built-in Material 3 and Cupertino bundles.
    pub fn with_builtin() -> Result<Self, ConfigError> {
        Ok(Self::builder()
            .register(languages::material::bundle()?)
            .register(languages::cupertino::bundle()?)
            .build())
    }

    /// Pure lookup. An unregistered language is a configuration error;
    /// there is deliberately no fallback bundle.
    pub fn resolve(
        &self,
        language: DesignLanguage,
    ) -> Result<Arc<ImplementationBundle>, ConfigError> {
        self.bundles
            .get(&language)
            .cloned()
            .ok_or(ConfigError::UnsupportedLanguage(language))
    }

    /// Fail-fast startup check: every supported language must resolve.
    pub fn verify_complete(&self) -> Result<(), ConfigError> {
        for &language in DesignLanguage::all() {
            self.resolve(language)?;
        }
        Ok(())
    }

    /// Registered languages, ordered by stable id.
    pub fn languages(&self) -> Vec<DesignLanguage> {
        let mut languages: Vec<DesignLanguage> = self.bundles.keys().copied().collect();
        languages.sort_by_key(|l| l.id());
        languages
    }
}

/// Builder for the startup-time registry population.
pub struct RegistryBuilder {
    bundles: FxHashMap<DesignLanguage, Arc<ImplementationBundle>>,
}

impl RegistryBuilder {
    pub fn register(mut self, bundle: ImplementationBundle) -> Self {
        tracing::debug!(language = %bundle.language(), "design language registered");
        self.bundles.insert(bundle.language(), Arc::new(bundle));
        self
    }

    pub fn build(self) -> LanguageRegistry {
        LanguageRegistry {
            bundles: self.bundles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry_rejects_resolution() {
        let registry = LanguageRegistry::builder().build();
        assert_eq!(
            registry.resolve(DesignLanguage::Cupertino).err(),
            Some(ConfigError::UnsupportedLanguage(DesignLanguage::Cupertino))
        );
        assert!(registry.verify_complete().is_err());
    }

    #[test]
    fn test_builtin_registry_is_complete() {
        let registry = LanguageRegistry::with_builtin().unwrap();
        registry.verify_complete().unwrap();
        assert_eq!(
            registry.languages(),
            vec![DesignLanguage::Cupertino, DesignLanguage::Material3]
        );
    }

    #[test]
    fn test_resolution_is_stable() {
        let registry = LanguageRegistry::with_builtin().unwrap();
        let a = registry.resolve(DesignLanguage::Material3).unwrap();
        let b = registry.resolve(DesignLanguage::Material3).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
