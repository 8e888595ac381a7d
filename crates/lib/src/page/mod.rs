//! Page descriptors: one navigation entry each.
//!
//! A [`Page`] pairs a display label with a [`Target`] and carries the
//! visibility and protection flags the navigation container and the
//! reconciler act on. Pages may nest child pages.
//!
//! Targets come in exactly two shapes. [`RouteTarget`] names an internal
//! application route and needs a [`Router`] to become an href, while
//! [`UriTarget`] is a literal URI. Everything outside this module only ever
//! asks a target for its href.

mod identity;
pub mod router;

use std::collections::BTreeMap;

pub use identity::Identity;
pub use router::{ConventionalRouter, Router};
use serde::{Deserialize, Serialize};

/// An internal application route: controller, action, optional route name and parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTarget {
    controller: String,
    action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    route: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    params: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fragment: Option<String>,
}

impl RouteTarget {
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            action: action.into(),
            route: None,
            params: BTreeMap::new(),
            fragment: None,
        }
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    pub fn controller(&self) -> &str {
        &self.controller
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    /// The route name, if one was set.
    pub fn route(&self) -> Option<&str> {
        self.route.as_deref()
    }

    pub fn set_route(&mut self, route: impl Into<String>) {
        self.route = Some(route.into());
    }

    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

/// A literal URI, internal or external, with an optional fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UriTarget {
    uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fragment: Option<String>,
}

impl UriTarget {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            fragment: None,
        }
    }

    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// The href this URI resolves to: the URI plus `#fragment` when the URI
    /// has no fragment of its own. `None` for an empty URI.
    pub fn href(&self) -> Option<String> {
        if self.uri.trim().is_empty() {
            return None;
        }
        match &self.fragment {
            Some(fragment) if !self.uri.contains('#') => Some(format!("{}#{fragment}", self.uri)),
            _ => Some(self.uri.clone()),
        }
    }
}

/// Where a page points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Target {
    Route(RouteTarget),
    Uri(UriTarget),
}

impl Target {
    /// Resolve this target to the full href it produces, fragment included.
    pub fn href(&self, router: &dyn Router) -> Option<String> {
        match self {
            Target::Route(route) => router.assemble(route),
            Target::Uri(uri) => uri.href(),
        }
    }

    pub fn is_route(&self) -> bool {
        matches!(self, Target::Route(_))
    }

    pub fn is_uri(&self) -> bool {
        matches!(self, Target::Uri(_))
    }
}

impl From<RouteTarget> for Target {
    fn from(route: RouteTarget) -> Self {
        Target::Route(route)
    }
}

impl From<UriTarget> for Target {
    fn from(uri: UriTarget) -> Self {
        Target::Uri(uri)
    }
}

/// A single navigation entry.
///
/// Pages built by callers are visible and protected by default: they are
/// treated as user-curated and are never removed by reconciliation unless
/// explicitly unprotected.
///
/// The page's [`Identity`] is assigned by the navigation container when the
/// page is added, and cleared whenever the label or target changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    label: String,
    target: Target,
    visible: bool,
    protected: bool,
    children: Vec<Page>,
    identity: Option<Identity>,
}

impl Page {
    pub fn new(label: impl Into<String>, target: impl Into<Target>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            visible: true,
            protected: true,
            children: Vec::new(),
            identity: None,
        }
    }

    /// Creates a page pointing at an internal route.
    pub fn route(label: impl Into<String>, target: RouteTarget) -> Self {
        Self::new(label, target)
    }

    /// Creates a page pointing at a literal URI.
    pub fn uri(label: impl Into<String>, uri: impl Into<String>) -> Self {
        Self::new(label, UriTarget::new(uri))
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_protected(mut self, protected: bool) -> Self {
        self.protected = protected;
        self
    }

    pub fn with_child(mut self, child: Page) -> Self {
        self.children.push(child);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
        self.identity = None;
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn set_target(&mut self, target: impl Into<Target>) {
        self.target = target.into();
        self.identity = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_protected(&self) -> bool {
        self.protected
    }

    pub fn set_protected(&mut self, protected: bool) {
        self.protected = protected;
    }

    pub fn children(&self) -> &[Page] {
        &self.children
    }

    /// The identity assigned when this page was added to a container.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Resolve the href of this page's target.
    pub fn href(&self, router: &dyn Router) -> Option<String> {
        self.target.href(router)
    }

    /// Compute the identity this page would have, without assigning it.
    pub fn compute_identity(&self, router: &dyn Router) -> Option<Identity> {
        self.href(router)
            .map(|href| Identity::compute(&self.label, &href))
    }

    pub(crate) fn target_mut(&mut self) -> &mut Target {
        self.identity = None;
        &mut self.target
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<Page> {
        &mut self.children
    }

    pub(crate) fn take_children(&mut self) -> Vec<Page> {
        std::mem::take(&mut self.children)
    }

    pub(crate) fn assign_identity(&mut self, identity: Identity) {
        self.identity = Some(identity);
    }
}
