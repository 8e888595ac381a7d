//! Href resolution for route targets.
//!
//! The navigation core never builds application URLs itself. It hands each
//! [`RouteTarget`] to a [`Router`] and treats the returned href as opaque.

use super::RouteTarget;
use crate::constants::INDEX;

/// Assembles internal application routes into hrefs.
///
/// Implementations must be deterministic: the same target always assembles
/// to the same href, since page identities are derived from it.
pub trait Router: Send + Sync + std::fmt::Debug {
    /// Assemble the href for a route target, or `None` if the target cannot be
    /// routed (unknown route, missing controller, ...).
    fn assemble(&self, target: &RouteTarget) -> Option<String>;
}

/// Router implementing the conventional `:controller/:action/*` route.
///
/// Parameters are appended as `/key/value` pairs in key order. An `index`
/// action without parameters is omitted, and then an `index` controller as
/// well, so the site root assembles to `{base_url}/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConventionalRouter {
    base_url: String,
}

impl ConventionalRouter {
    /// Creates a router whose hrefs are prefixed with `base_url`.
    ///
    /// A trailing slash on `base_url` is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// The base URL prefixed to every assembled href.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Router for ConventionalRouter {
    fn assemble(&self, target: &RouteTarget) -> Option<String> {
        let controller = target.controller().trim();
        let action = target.action().trim();
        if controller.is_empty() || action.is_empty() {
            return None;
        }

        let mut segments: Vec<&str> = vec![controller, action];
        for (key, value) in target.params() {
            segments.push(key);
            segments.push(value);
        }
        if target.params().is_empty() && action == INDEX {
            segments.pop();
            if controller == INDEX {
                segments.pop();
            }
        }

        let mut href = format!("{}/{}", self.base_url, segments.join("/"));
        if let Some(fragment) = target.fragment() {
            href.push('#');
            href.push_str(fragment);
        }
        Some(href)
    }
}
