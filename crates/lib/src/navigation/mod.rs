//! The navigation container: an ordered forest of pages with unique identities.
//!
//! `Navigation` owns identity assignment. Every page that enters the forest,
//! at any depth, is given the identity computed from its resolved href and
//! label, and an identity is never held by more than one page. Adding a page
//! whose identity is already present is a silent no-op: the existing page wins.
//!
//! The container serializes to a plain ordered list of [`PageRecord`]s and
//! from there to a JSON string, which is what gets handed to an
//! [`OptionStore`](crate::store::OptionStore) for persistence.

mod errors;
mod record;

use std::collections::HashSet;
use std::sync::Arc;

pub use errors::NavigationError;
pub use record::PageRecord;
use tracing::{debug, warn};

use crate::Result;
use crate::page::{ConventionalRouter, Identity, Page, Router, Target};
use crate::store::OptionStore;

/// An ordered forest of navigation pages.
#[derive(Debug, Clone)]
pub struct Navigation {
    pages: Vec<Page>,
    /// Identities of every page in the forest, at any depth
    index: HashSet<Identity>,
    router: Arc<dyn Router>,
}

impl Navigation {
    /// Creates an empty navigation resolving routes with a [`ConventionalRouter`].
    pub fn new() -> Self {
        Self::with_router(Arc::new(ConventionalRouter::default()))
    }

    /// Creates an empty navigation resolving routes with `router`.
    pub fn with_router(router: Arc<dyn Router>) -> Self {
        Self {
            pages: Vec::new(),
            index: HashSet::new(),
            router,
        }
    }

    /// The router used to resolve route targets into hrefs.
    pub fn router(&self) -> &dyn Router {
        self.router.as_ref()
    }

    /// Computes the identity `page` has in this container.
    ///
    /// # Errors
    /// [`NavigationError::InvalidPage`] if the page's target does not resolve.
    pub fn identity_of(&self, page: &Page) -> Result<Identity> {
        page.compute_identity(self.router.as_ref()).ok_or_else(|| {
            let reason = match page.target() {
                Target::Route(route) => format!(
                    "route {}/{} cannot be assembled",
                    route.controller(),
                    route.action()
                ),
                Target::Uri(_) => "URI is empty".to_string(),
            };
            NavigationError::InvalidPage {
                label: page.label().to_string(),
                reason,
            }
            .into()
        })
    }

    /// Appends a page to the root of the forest.
    ///
    /// If a page with the same identity already exists anywhere in the forest
    /// this is a no-op. Children of `page` whose identities are already taken
    /// are dropped.
    ///
    /// # Errors
    /// [`NavigationError::InvalidPage`] if the page or any of its children has
    /// an unresolvable target. The container is unchanged on error.
    pub fn add_page(&mut self, page: Page) -> Result<&mut Self> {
        let identity = self.identity_of(&page)?;
        if self.index.contains(&identity) {
            debug!(identity = %identity, "Page already present, not adding");
            return Ok(self);
        }

        let mut claimed = HashSet::new();
        let page = self.prepare(page, identity, &mut claimed)?;
        self.pages.push(page);
        self.index.extend(claimed);
        Ok(self)
    }

    /// Appends a page to the children of the page identified by `parent`.
    ///
    /// Deduplication follows [`add_page`](Self::add_page).
    ///
    /// # Errors
    /// - [`NavigationError::SelfParent`] if `page` has the identity `parent`
    /// - [`NavigationError::ParentNotFound`] if no page has the identity `parent`
    /// - [`NavigationError::InvalidPage`] as for `add_page`
    pub fn add_child(&mut self, parent: &Identity, page: Page) -> Result<&mut Self> {
        let identity = self.identity_of(&page)?;
        if &identity == parent {
            return Err(NavigationError::SelfParent { identity }.into());
        }
        if !self.index.contains(parent) {
            return Err(NavigationError::ParentNotFound {
                identity: parent.clone(),
            }
            .into());
        }
        if self.index.contains(&identity) {
            debug!(identity = %identity, parent = %parent, "Page already present, not adding");
            return Ok(self);
        }

        let mut claimed = HashSet::new();
        let page = self.prepare(page, identity, &mut claimed)?;
        let Some(parent_page) = find_mut(&mut self.pages, parent) else {
            return Err(NavigationError::ParentNotFound {
                identity: parent.clone(),
            }
            .into());
        };
        parent_page.children_mut().push(page);
        self.index.extend(claimed);
        Ok(self)
    }

    /// Assigns identities to `page` and its descendants, pruning descendants
    /// whose identity is taken by the forest or an earlier sibling subtree.
    fn prepare(
        &self,
        mut page: Page,
        identity: Identity,
        claimed: &mut HashSet<Identity>,
    ) -> Result<Page> {
        page.assign_identity(identity.clone());
        claimed.insert(identity);

        for child in page.take_children() {
            let child_identity = self.identity_of(&child)?;
            if self.index.contains(&child_identity) || claimed.contains(&child_identity) {
                debug!(identity = %child_identity, "Dropping duplicate child page");
                continue;
            }
            let child = self.prepare(child, child_identity, claimed)?;
            page.children_mut().push(child);
        }
        Ok(page)
    }

    /// Removes the page with `identity` from whichever level it occupies,
    /// together with its children. Returns the removed page, or `None` if
    /// no page has that identity.
    pub fn remove_page(&mut self, identity: &Identity) -> Option<Page> {
        if !self.index.contains(identity) {
            return None;
        }
        let removed = remove_from(&mut self.pages, identity)?;
        let mut gone = Vec::new();
        collect_identities(std::slice::from_ref(&removed), &mut gone);
        for id in &gone {
            self.index.remove(id);
        }
        Some(removed)
    }

    /// Returns the page with `identity`, searching the whole forest.
    pub fn get_page_by_identity(&self, identity: &Identity) -> Option<&Page> {
        if !self.index.contains(identity) {
            return None;
        }
        find(&self.pages, identity)
    }

    pub fn contains(&self, identity: &Identity) -> bool {
        self.index.contains(identity)
    }

    /// Shows or hides a page. Returns `false` if no page has `identity`.
    pub fn set_visible(&mut self, identity: &Identity, visible: bool) -> bool {
        match find_mut(&mut self.pages, identity) {
            Some(page) => {
                page.set_visible(visible);
                true
            }
            None => false,
        }
    }

    /// Protects or unprotects a page. Returns `false` if no page has `identity`.
    pub fn set_protected(&mut self, identity: &Identity, protected: bool) -> bool {
        match find_mut(&mut self.pages, identity) {
            Some(page) => {
                page.set_protected(protected);
                true
            }
            None => false,
        }
    }

    /// The root-level pages in order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Page> {
        self.pages.iter()
    }

    /// Number of root-level pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Number of pages in the whole forest.
    pub fn total_pages(&self) -> usize {
        self.index.len()
    }

    /// Every identity in the forest, depth-first in page order.
    pub fn identities(&self) -> Vec<Identity> {
        let mut out = Vec::with_capacity(self.index.len());
        collect_identities(&self.pages, &mut out);
        out
    }

    /// Removes every page.
    pub fn clear(&mut self) {
        self.pages.clear();
        self.index.clear();
    }

    pub fn to_serializable(&self) -> Vec<PageRecord> {
        self.pages.iter().map(PageRecord::from).collect()
    }

    /// Builds a navigation from records using the conventional router.
    ///
    /// Records whose targets do not resolve are skipped.
    pub fn from_serializable(records: Vec<PageRecord>) -> Self {
        Self::from_serializable_with_router(records, Arc::new(ConventionalRouter::default()))
    }

    /// Builds a navigation from records resolving routes with `router`.
    ///
    /// To restore the identities of a serialized navigation, `router` must
    /// assemble routes the same way as the router it was built with.
    pub fn from_serializable_with_router(records: Vec<PageRecord>, router: Arc<dyn Router>) -> Self {
        let mut nav = Self::with_router(router);
        nav.set_pages(records);
        nav
    }

    /// Replaces the forest with `records`, keeping this container's router.
    ///
    /// Records whose targets do not resolve are skipped with a warning.
    pub fn set_pages(&mut self, records: Vec<PageRecord>) {
        self.clear();
        for record in records {
            let label = record.label.clone();
            if let Err(err) = self.add_page(record.into()) {
                warn!(label = %label, error = %err, "Skipping unresolvable navigation record");
            }
        }
    }

    /// Encodes the forest as a JSON array.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_serializable())?)
    }

    /// Decodes a navigation from JSON using the conventional router.
    ///
    /// See [`set_pages_from_json`](Self::set_pages_from_json) for how
    /// malformed input is handled.
    pub fn from_json(json: &str) -> Self {
        Self::from_json_with_router(json, Arc::new(ConventionalRouter::default()))
    }

    /// Decodes a navigation from JSON resolving routes with `router`.
    ///
    /// The router must match the one the navigation was encoded with, as for
    /// [`from_serializable_with_router`](Self::from_serializable_with_router).
    pub fn from_json_with_router(json: &str, router: Arc<dyn Router>) -> Self {
        let mut nav = Self::with_router(router);
        nav.set_pages_from_json(json);
        nav
    }

    /// Replaces the forest with the pages encoded in `json`.
    ///
    /// Never fails. Input that is not a JSON array leaves the forest empty,
    /// and each root record is decoded on its own so one malformed record
    /// does not discard its siblings.
    pub fn set_pages_from_json(&mut self, json: &str) {
        self.clear();
        if json.trim().is_empty() {
            return;
        }

        let values: Vec<serde_json::Value> = match serde_json::from_str(json) {
            Ok(values) => values,
            Err(err) => {
                warn!(error = %err, "Corrupt navigation data, falling back to empty navigation");
                return;
            }
        };

        let mut records = Vec::with_capacity(values.len());
        for (position, value) in values.into_iter().enumerate() {
            match serde_json::from_value::<PageRecord>(value) {
                Ok(record) => records.push(record),
                Err(err) => {
                    warn!(position, error = %err, "Skipping malformed navigation record")
                }
            }
        }
        self.set_pages(records);
    }

    /// Persists the navigation under `key`.
    pub fn save(&self, store: &mut dyn OptionStore, key: &str) -> Result<()> {
        let json = self.to_json()?;
        store.write(key, &json)?;
        debug!(key, pages = self.total_pages(), "Saved navigation");
        Ok(())
    }

    /// Replaces the forest with the navigation persisted under `key`.
    ///
    /// A missing key yields an empty navigation. Only store failures are errors.
    pub fn load(&mut self, store: &dyn OptionStore, key: &str) -> Result<()> {
        match store.read(key)? {
            Some(json) => self.set_pages_from_json(&json),
            None => self.clear(),
        }
        debug!(key, pages = self.total_pages(), "Loaded navigation");
        Ok(())
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

/// Navigations are equal when their page forests are equal; routers are not compared.
impl PartialEq for Navigation {
    fn eq(&self, other: &Self) -> bool {
        self.pages == other.pages
    }
}

impl<'a> IntoIterator for &'a Navigation {
    type Item = &'a Page;
    type IntoIter = std::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

fn find<'a>(pages: &'a [Page], identity: &Identity) -> Option<&'a Page> {
    for page in pages {
        if page.identity() == Some(identity) {
            return Some(page);
        }
        if let Some(found) = find(page.children(), identity) {
            return Some(found);
        }
    }
    None
}

fn find_mut<'a>(pages: &'a mut [Page], identity: &Identity) -> Option<&'a mut Page> {
    for page in pages.iter_mut() {
        if page.identity() == Some(identity) {
            return Some(page);
        }
        if let Some(found) = find_mut(page.children_mut(), identity) {
            return Some(found);
        }
    }
    None
}

fn remove_from(pages: &mut Vec<Page>, identity: &Identity) -> Option<Page> {
    if let Some(pos) = pages.iter().position(|p| p.identity() == Some(identity)) {
        return Some(pages.remove(pos));
    }
    pages
        .iter_mut()
        .find_map(|page| remove_from(page.children_mut(), identity))
}

fn collect_identities(pages: &[Page], out: &mut Vec<Identity>) {
    for page in pages {
        if let Some(identity) = page.identity() {
            out.push(identity.clone());
        }
        collect_identities(page.children(), out);
    }
}
