//! Error types for selector assembly.

use crate::selector::Category;

/// Result type alias for selector operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while assembling a selector.
///
/// Both kinds are fatal to the in-progress chain: a builder that returned an
/// error must be discarded and the selector rebuilt from scratch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A singular fragment kind was written a second time.
    #[error("duplicate selector part: '{category}' may appear at most once per selector")]
    DuplicateSelectorPart { category: Category },

    /// A fragment arrived after a later-ordered fragment was already stored.
    #[error(
        "selector parts must be added in element, id, class, attribute, \
         pseudo-class, pseudo-element order: '{category}' cannot follow '{after}'"
    )]
    SelectorOrderViolation { category: Category, after: Category },
}

impl Error {
    /// Create a duplicate-part error.
    pub fn duplicate(category: Category) -> Self {
        Self::DuplicateSelectorPart { category }
    }

    /// Create an out-of-order error.
    pub fn out_of_order(category: Category, after: Category) -> Self {
        Self::SelectorOrderViolation { category, after }
    }
}
