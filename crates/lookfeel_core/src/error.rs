//! Error types
//!
//! Every failure in the core is local, synchronous, and indicates a code or
//! configuration defect, never a transient condition; there is no retry
//! surface.

use thiserror::Error;

use crate::component::ComponentKind;
use crate::selection::DesignLanguage;

/// Configuration defects: wrong registry or bundle setup.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A language with no registered bundle. Resolution never silently
    /// falls back, since a fallback would render wrong semantics convincingly.
    #[error("no implementation bundle registered for design language `{0}`")]
    UnsupportedLanguage(DesignLanguage),

    /// A config string naming no known language.
    #[error("unknown design language id `{0}`")]
    UnknownLanguageId(String),

    /// A bundle missing strategies for one or more component kinds,
    /// detected at bundle construction.
    #[error("bundle for `{language}` is missing component kinds: {missing:?}")]
    IncompleteBundle {
        language: DesignLanguage,
        missing: Vec<ComponentKind>,
    },
}

/// Ambient-context usage defects.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    /// `resolve_current` was called with no enclosing `provide` scope.
    #[error("no look-and-feel context in scope; wrap rendering in `LookAndFeel::provide`")]
    MissingContext,
}
