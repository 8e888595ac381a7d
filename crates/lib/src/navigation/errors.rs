//! Error types for navigation container operations.

use thiserror::Error;

use crate::page::Identity;

/// Errors raised by [`Navigation`](super::Navigation) mutations.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Existing variants will not be removed in minor versions
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The page's target does not resolve to an href.
    #[error("Invalid page '{label}': {reason}")]
    InvalidPage {
        /// Label of the rejected page
        label: String,
        /// Why the target could not be resolved
        reason: String,
    },

    /// A page was added as a child of itself.
    #[error("A page cannot have itself as a parent: {identity}")]
    SelfParent {
        /// Identity shared by the page and the requested parent
        identity: Identity,
    },

    /// No page with the requested parent identity exists.
    #[error("Parent page not found: {identity}")]
    ParentNotFound {
        /// The missing parent identity
        identity: Identity,
    },
}

impl NavigationError {
    pub fn is_invalid_page(&self) -> bool {
        matches!(self, NavigationError::InvalidPage { .. })
    }

    pub fn is_self_parent(&self) -> bool {
        matches!(self, NavigationError::SelfParent { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, NavigationError::ParentNotFound { .. })
    }
}

impl From<NavigationError> for crate::Error {
    fn from(err: NavigationError) -> Self {
        crate::Error::Navigation(err)
    }
}
