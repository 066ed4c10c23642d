//! Ambient look-and-feel context
//!
//! An explicitly-scoped handle rather than a global: [`LookAndFeel::provide`]
//! binds the resolved bundle for the duration of its closure, nested calls
//! shadow the enclosing binding, and a drop guard restores it on every exit
//! path, early returns and unwinds included.
//!
//! The handle lives on the single render thread and is deliberately not
//! `Sync`; there is exactly one mutator in the whole model.

use std::cell::RefCell;
use std::sync::Arc;

use lookfeel_core::{ConfigError, ContextError, LookAndFeelSelection};

use crate::bundle::ImplementationBundle;
use crate::palette::Palette;
use crate::registry::LanguageRegistry;

struct Frame {
    selection: LookAndFeelSelection,
    bundle: Arc<ImplementationBundle>,
}

/// Scoped ambient binding of the currently rendering selection.
#[derive(Default)]
pub struct LookAndFeel {
    frames: RefCell<Vec<Frame>>,
}

impl LookAndFeel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `selection`'s bundle while `body` runs.
    ///
    /// The binding is re-created from the registry on every call, so a stale
    /// bundle reference can never outlive a selection change. Nested calls
    /// create scoped overrides visible only to their own subtree.
    pub fn provide<R>(
        &self,
        registry: &LanguageRegistry,
        selection: LookAndFeelSelection,
        body: impl FnOnce(&LookAndFeel) -> R,
    ) -> Result<R, ConfigError> {
        let bundle = registry.resolve(selection.language)?;
        self.frames.borrow_mut().push(Frame { selection, bundle });
        let _restore = RestoreGuard {
            frames: &self.frames,
        };
        Ok(body(self))
    }

    /// The innermost binding.
    ///
    /// Calling this outside any `provide` scope is a programming-usage
    /// defect and fails immediately instead of producing a default render.
    pub fn resolve_current(&self) -> Result<ResolvedLookAndFeel, ContextError> {
        let frames = self.frames.borrow();
        let frame = frames.last().ok_or(ContextError::MissingContext)?;
        Ok(ResolvedLookAndFeel {
            selection: frame.selection,
            bundle: Arc::clone(&frame.bundle),
        })
    }

    /// Current nesting depth, 0 outside any scope.
    pub fn depth(&self) -> usize {
        self.frames.borrow().len()
    }
}

/// Pops the frame pushed by `provide` when the scope exits.
struct RestoreGuard<'a> {
    frames: &'a RefCell<Vec<Frame>>,
}

impl Drop for RestoreGuard<'_> {
    fn drop(&mut self) {
        self.frames.borrow_mut().pop();
    }
}

/// The resolved binding handed to rendering code.
#[derive(Clone)]
pub struct ResolvedLookAndFeel {
    pub selection: LookAndFeelSelection,
    pub bundle: Arc<ImplementationBundle>,
}

impl ResolvedLookAndFeel {
    /// The active palette for the selection's color scheme.
    pub fn palette(&self) -> &Palette {
        self.bundle.palette(self.selection.scheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lookfeel_core::DesignLanguage;

    fn selection(language: DesignLanguage) -> LookAndFeelSelection {
        LookAndFeelSelection::with_dark(language, false)
    }

    #[test]
    fn test_resolve_outside_scope_fails() {
        let lookfeel = LookAndFeel::new();
        assert_eq!(
            lookfeel.resolve_current().err(),
            Some(ContextError::MissingContext)
        );
    }

    #[test]
    fn test_nested_provide_shadows_and_restores() {
        let registry = LanguageRegistry::with_builtin().unwrap();
        let lookfeel = LookAndFeel::new();

        lookfeel
            .provide(&registry, selection(DesignLanguage::Cupertino), |lf| {
                assert_eq!(
                    lf.resolve_current().unwrap().selection.language,
                    DesignLanguage::Cupertino
                );

                lf.provide(&registry, selection(DesignLanguage::Material3), |inner| {
                    assert_eq!(
                        inner.resolve_current().unwrap().selection.language,
                        DesignLanguage::Material3
                    );
                })
                .unwrap();

                // A sibling after the nested scope sees the outer binding again.
                assert_eq!(
                    lf.resolve_current().unwrap().selection.language,
                    DesignLanguage::Cupertino
                );
            })
            .unwrap();

        assert_eq!(lookfeel.depth(), 0);
    }

    #[test]
    fn test_restores_on_unwind() {
        let registry = LanguageRegistry::with_builtin().unwrap();
        let lookfeel = LookAndFeel::new();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            lookfeel
                .provide(&registry, selection(DesignLanguage::Material3), |_| {
                    panic!("render aborted");
                })
                .unwrap();
        }));

        assert!(result.is_err());
        assert_eq!(lookfeel.depth(), 0);
        assert_eq!(
            lookfeel.resolve_current().err(),
            Some(ContextError::MissingContext)
        );
    }

    #[test]
    fn test_unregistered_language_fails_before_entering_scope() {
        let registry = LanguageRegistry::builder().build();
        let lookfeel = LookAndFeel::new();

        let result = lookfeel.provide(&registry, selection(DesignLanguage::Cupertino), |_| ());
        assert!(matches!(result, Err(ConfigError::UnsupportedLanguage(_))));
        assert_eq!(lookfeel.depth(), 0);
    }
}
