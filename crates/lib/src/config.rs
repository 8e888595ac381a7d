//! Configuration for navigation loading and reconciliation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ROUTE, PUBLIC_NAVIGATION_MAIN};
use crate::page::{ConventionalRouter, Router};

/// Settings shared by the navigation container and the reconciler.
///
/// Every field has a default, so a partial JSON object (or `{}`) is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Option key the navigation is persisted under
    pub option_name: String,
    /// Route name given to contributed route pages that do not set one
    pub default_route: String,
    /// Prefix for hrefs assembled by the conventional router
    pub base_url: String,
    /// Whether contributed plain-URI links start out hidden
    pub hide_contributed_links: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            option_name: PUBLIC_NAVIGATION_MAIN.to_string(),
            default_route: DEFAULT_ROUTE.to_string(),
            base_url: String::new(),
            hide_contributed_links: true,
        }
    }
}

impl NavigationConfig {
    /// Parses a configuration from JSON, filling unspecified fields with defaults.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the conventional router for [`base_url`](Self::base_url).
    pub fn router(&self) -> Arc<dyn Router> {
        Arc::new(ConventionalRouter::new(self.base_url.clone()))
    }
}
