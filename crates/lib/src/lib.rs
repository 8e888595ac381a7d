//!
//! navtree: navigation forests with deterministic page identity.
//! This library provides the pieces for keeping a persisted site navigation in
//! step with the links that extensions contribute to it.
//!
//! ## Core Concepts
//!
//! * **Pages (`page::Page`)**: A navigation entry with a label, a target (an internal route or a literal URI), visibility and protection flags, and optional child pages.
//! * **Identities (`page::Identity`)**: The deterministic `href|label` key a page is deduplicated by.
//! * **Navigation (`navigation::Navigation`)**: An ordered forest of pages in which every identity occurs at most once. Serializes to a JSON array of records.
//! * **Reconciliation (`reconcile::Reconciler`)**: Merges contributed entries into a navigation, adding new pages once, keeping existing ones untouched and removing unprotected pages nobody offers any more.
//! * **Option stores (`store::OptionStore`)**: The key-value persistence a navigation is saved to and loaded from.

pub mod config;
pub mod constants;
pub mod navigation;
pub mod page;
pub mod reconcile;
pub mod store;

pub use config::NavigationConfig;
pub use navigation::{Navigation, NavigationError, PageRecord};
pub use page::{Identity, Page, RouteTarget, Router, Target, UriTarget};
pub use reconcile::{ContributedEntries, Contribution, ContributionProvider, Reconciler};

/// Result type used throughout the navtree library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the navtree library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured navigation errors from the navigation module
    #[error(transparent)]
    Navigation(navigation::NavigationError),

    /// Structured persistence errors from the store module
    #[error(transparent)]
    Store(store::StoreError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Navigation(_) => "navigation",
            Error::Store(_) => "store",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error rejected a page whose target does not resolve.
    pub fn is_invalid_page(&self) -> bool {
        match self {
            Error::Navigation(nav_err) => nav_err.is_invalid_page(),
            _ => false,
        }
    }

    /// Check if this error rejected a page added as its own parent.
    pub fn is_self_parent(&self) -> bool {
        match self {
            Error::Navigation(nav_err) => nav_err.is_self_parent(),
            _ => false,
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Navigation(nav_err) => nav_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is persistence-related.
    pub fn is_store_error(&self) -> bool {
        matches!(self, Error::Store(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Store(store_err) => store_err.is_io_error(),
            _ => false,
        }
    }
}
