//! Contributed entries and the providers that supply them.

use serde_json::Value;

use crate::config::NavigationConfig;
use crate::navigation::PageRecord;
use crate::page::{Page, Target};

/// A raw page offered by a contributor, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum Contribution {
    /// A literal URI. Becomes a URI page, hidden unless configured otherwise.
    Link(String),
    /// A fully built page, route or URI.
    Page(Page),
    /// Untyped data from an external source: a URI string, or an object in
    /// [`PageRecord`] shape whose `label` may be omitted.
    Raw(Value),
}

impl Contribution {
    /// Normalizes this contribution into a labelled page, or `None` if it
    /// does not describe a route or URI target.
    pub(crate) fn normalize(self, label: &str, config: &NavigationConfig) -> Option<Page> {
        let mut page = match self {
            Contribution::Link(uri) => {
                Page::uri(label, uri).with_visible(!config.hide_contributed_links)
            }
            Contribution::Page(page) => page,
            Contribution::Raw(Value::String(uri)) => {
                return Contribution::Link(uri).normalize(label, config);
            }
            Contribution::Raw(Value::Object(mut object)) => {
                object
                    .entry("label")
                    .or_insert_with(|| Value::String(label.to_string()));
                let record: PageRecord = serde_json::from_value(Value::Object(object)).ok()?;
                Page::from(record)
            }
            Contribution::Raw(_) => return None,
        };

        if let Target::Route(route) = page.target_mut()
            && route.route().is_none()
        {
            route.set_route(config.default_route.as_str());
        }
        page.set_label(label);
        Some(page)
    }
}

impl From<&str> for Contribution {
    fn from(uri: &str) -> Self {
        Contribution::Link(uri.to_string())
    }
}

impl From<String> for Contribution {
    fn from(uri: String) -> Self {
        Contribution::Link(uri)
    }
}

impl From<Page> for Contribution {
    fn from(page: Page) -> Self {
        Contribution::Page(page)
    }
}

impl From<Value> for Contribution {
    fn from(value: Value) -> Self {
        Contribution::Raw(value)
    }
}

/// An ordered label → contribution mapping.
///
/// Labels are unique. Inserting under an existing label replaces its
/// contribution but keeps the label's original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContributedEntries {
    entries: Vec<(String, Contribution)>,
}

impl ContributedEntries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, label: impl Into<String>, contribution: impl Into<Contribution>) -> Self {
        self.insert(label, contribution);
        self
    }

    /// Sets the contribution for `label`, returning the one it replaced.
    pub fn insert(
        &mut self,
        label: impl Into<String>,
        contribution: impl Into<Contribution>,
    ) -> Option<Contribution> {
        let label = label.into();
        let contribution = contribution.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some((_, existing)) => Some(std::mem::replace(existing, contribution)),
            None => {
                self.entries.push((label, contribution));
                None
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<&Contribution> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| c)
    }

    pub fn remove(&mut self, label: &str) -> Option<Contribution> {
        let pos = self.entries.iter().position(|(l, _)| l == label)?;
        Some(self.entries.remove(pos).1)
    }

    /// Inserts every entry of `other`, replacing same-label entries in place.
    pub fn overlay(&mut self, other: ContributedEntries) {
        for (label, contribution) in other.entries {
            self.insert(label, contribution);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Contribution)> {
        self.entries.iter().map(|(l, c)| (l.as_str(), c))
    }
}

impl IntoIterator for ContributedEntries {
    type Item = (String, Contribution);
    type IntoIter = std::vec::IntoIter<(String, Contribution)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<L, C> FromIterator<(L, C)> for ContributedEntries
where
    L: Into<String>,
    C: Into<Contribution>,
{
    fn from_iter<I: IntoIterator<Item = (L, C)>>(iter: I) -> Self {
        let mut entries = Self::new();
        entries.extend(iter);
        entries
    }
}

impl<L, C> Extend<(L, C)> for ContributedEntries
where
    L: Into<String>,
    C: Into<Contribution>,
{
    fn extend<I: IntoIterator<Item = (L, C)>>(&mut self, iter: I) {
        for (label, contribution) in iter {
            self.insert(label, contribution);
        }
    }
}

/// Supplies contributed entries for a reconciliation scope.
///
/// Providers run in registration order and each sees the entries added by
/// the ones before it, so a later provider can replace or remove an earlier
/// provider's entry.
pub trait ContributionProvider: Send + Sync {
    fn contribute(&self, scope: &str, entries: &mut ContributedEntries);
}

impl<F> ContributionProvider for F
where
    F: Fn(&str, &mut ContributedEntries) + Send + Sync,
{
    fn contribute(&self, scope: &str, entries: &mut ContributedEntries) {
        self(scope, entries)
    }
}
