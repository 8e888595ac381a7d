//! Constants used throughout the navtree library.
//!
//! This module provides central definitions for reserved option names, scope
//! names and other strings the navigation and reconciliation code agree on.

/// Option name (and reconciliation scope) of the main public navigation.
pub const PUBLIC_NAVIGATION_MAIN: &str = "public_navigation_main";

/// Route name assigned to contributed route pages that do not name a route.
pub const DEFAULT_ROUTE: &str = "default";

/// Separator between the resolved href and the label in a page identity.
pub const IDENTITY_SEPARATOR: char = '|';

/// Controller and action name the conventional router omits from hrefs.
pub const INDEX: &str = "index";
