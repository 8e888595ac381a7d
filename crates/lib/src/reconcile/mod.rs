//! Reconciliation of a navigation against contributed entries.
//!
//! Contributors (plugins, themes, ...) offer pages keyed by label. A
//! reconciliation pass merges those offers into an existing [`Navigation`]:
//!
//! 1. The scope's defaults are overlaid with the contributed entries, so a
//!    contributed entry replaces a default with the same label.
//! 2. Each entry is normalized into a page and its identity computed.
//!    Entries that do not normalize or resolve are skipped.
//! 3. Pages already in the navigation are left exactly as they are,
//!    including any manual visibility or placement edits. New pages and
//!    their children are added unprotected, so later passes may remove them.
//! 4. Unprotected root pages whose identity was not offered in this pass
//!    have expired and are removed. Protected pages are never removed.
//!    Descendants of an expired page that are protected or were offered in
//!    this pass are moved to the root instead of going with it.
//!
//! A pass over unchanged entries leaves the navigation unchanged.

mod contribution;
pub mod defaults;

use std::collections::HashSet;

pub use contribution::{ContributedEntries, Contribution, ContributionProvider};
use tracing::{debug, info, warn};

use crate::Result;
use crate::config::NavigationConfig;
use crate::navigation::Navigation;
use crate::page::{Identity, Page};
use crate::store::OptionStore;

/// What a reconciliation pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Identities of pages added by this pass
    pub added: Vec<Identity>,
    /// Identities of offered pages that were already present
    pub retained: Vec<Identity>,
    /// Identities of unprotected pages removed because nothing offered them
    pub expired: Vec<Identity>,
    /// Identities of pages moved to the root because their parent expired
    pub relocated: Vec<Identity>,
    /// Labels of entries that could not be normalized or resolved
    pub skipped: Vec<String>,
}

impl ReconcileReport {
    /// True if the pass neither added, removed nor moved any page.
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.expired.is_empty() && self.relocated.is_empty()
    }
}

/// Merges contributed entries into navigations.
pub struct Reconciler {
    config: NavigationConfig,
    providers: Vec<Box<dyn ContributionProvider>>,
}

impl Reconciler {
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            config,
            providers: Vec::new(),
        }
    }

    /// Registers a provider consulted by [`gather`](Self::gather).
    pub fn with_provider(mut self, provider: impl ContributionProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// An empty navigation resolving routes with the configured router.
    ///
    /// Identities computed by [`reconcile`](Self::reconcile) depend on the
    /// navigation's router, so navigations passed to this reconciler should
    /// be built here or with the same [`NavigationConfig::router`].
    pub fn navigation(&self) -> Navigation {
        Navigation::with_router(self.config.router())
    }

    /// Collects the entries every registered provider offers for `scope`.
    pub fn gather(&self, scope: &str) -> ContributedEntries {
        let mut entries = ContributedEntries::new();
        for provider in &self.providers {
            provider.contribute(scope, &mut entries);
        }
        debug!(scope, entries = entries.len(), "Gathered contributed entries");
        entries
    }

    /// Reconciles `nav` against `defaults` overlaid with `entries`.
    ///
    /// Per-entry problems never abort the pass; they are logged and reported
    /// in [`ReconcileReport::skipped`].
    ///
    /// Identities are resolved with `nav`'s router, not the configured
    /// `base_url`. Use [`navigation`](Self::navigation) to build a
    /// navigation whose router matches this reconciler's config.
    ///
    /// # Errors
    /// Only if adding a new page fails, which happens when a contributed
    /// page has a child whose target cannot be resolved.
    pub fn reconcile(
        &self,
        nav: &mut Navigation,
        entries: ContributedEntries,
        defaults: ContributedEntries,
    ) -> Result<ReconcileReport> {
        let mut merged = defaults;
        merged.overlay(entries);

        let mut report = ReconcileReport::default();
        let mut seen: HashSet<Identity> = HashSet::with_capacity(merged.len());

        for (label, contribution) in merged {
            let Some(mut page) = contribution.normalize(&label, &self.config) else {
                warn!(label = %label, "Skipping unrecognized contribution");
                report.skipped.push(label);
                continue;
            };
            let identity = match nav.identity_of(&page) {
                Ok(identity) => identity,
                Err(err) => {
                    warn!(label = %label, error = %err, "Skipping unresolvable contribution");
                    report.skipped.push(label);
                    continue;
                }
            };

            seen.insert(identity.clone());
            if nav.contains(&identity) {
                debug!(identity = %identity, "Contributed page already present");
                report.retained.push(identity);
                continue;
            }

            unprotect(&mut page);
            nav.add_page(page)?;
            debug!(identity = %identity, "Added contributed page");
            report.added.push(identity);
        }

        let expired: Vec<Identity> = nav
            .iter()
            .filter(|page| !page.is_protected())
            .filter_map(|page| page.identity())
            .filter(|identity| !seen.contains(*identity))
            .cloned()
            .collect();
        let mut survivors = Vec::new();
        for identity in expired {
            if let Some(mut removed) = nav.remove_page(&identity) {
                debug!(identity = %identity, "Removed expired contributed page");
                report.expired.push(identity);
                collect_survivors(&mut removed, &seen, &mut survivors);
            }
        }
        for page in survivors {
            let Some(identity) = page.identity().cloned() else {
                continue;
            };
            if nav.contains(&identity) {
                continue;
            }
            nav.add_page(page)?;
            debug!(identity = %identity, "Moved page of expired parent to the root");
            report.relocated.push(identity);
        }

        info!(
            added = report.added.len(),
            retained = report.retained.len(),
            expired = report.expired.len(),
            relocated = report.relocated.len(),
            skipped = report.skipped.len(),
            "Reconciled navigation"
        );
        Ok(report)
    }

    /// Reconciles `nav` against `defaults` and the entries the providers offer for `scope`.
    pub fn reconcile_scope(
        &self,
        nav: &mut Navigation,
        scope: &str,
        defaults: ContributedEntries,
    ) -> Result<ReconcileReport> {
        let entries = self.gather(scope);
        self.reconcile(nav, entries, defaults)
    }

    /// The serialized navigation a fresh install starts with for `scope`.
    ///
    /// Returns an empty string when neither the defaults nor any provider
    /// contribute a page. Decode the value with
    /// [`Navigation::from_json_with_router`] and the configured router to get
    /// back the same identities.
    pub fn install_value(&self, scope: &str, defaults: ContributedEntries) -> Result<String> {
        let mut nav = self.navigation();
        self.reconcile_scope(&mut nav, scope, defaults)?;
        if nav.is_empty() {
            return Ok(String::new());
        }
        nav.to_json()
    }

    /// Loads the navigation stored under the configured option name,
    /// reconciles it for that scope and writes it back.
    ///
    /// The option is only rewritten when the pass changed the navigation.
    pub fn refresh_option(
        &self,
        store: &mut dyn OptionStore,
        defaults: ContributedEntries,
    ) -> Result<(Navigation, ReconcileReport)> {
        let key = self.config.option_name.as_str();
        let mut nav = self.navigation();
        nav.load(&*store, key)?;

        let report = self.reconcile_scope(&mut nav, key, defaults)?;
        if !report.is_unchanged() {
            nav.save(store, key)?;
        }
        Ok((nav, report))
    }
}

/// Marks a contributed page and everything under it as removable.
fn unprotect(page: &mut Page) {
    page.set_protected(false);
    for child in page.children_mut() {
        unprotect(child);
    }
}

/// Detaches the descendants of an expired page that must outlive it: protected
/// pages, and pages offered in the current pass. Each keeps its own subtree.
fn collect_survivors(page: &mut Page, seen: &HashSet<Identity>, out: &mut Vec<Page>) {
    for mut child in page.take_children() {
        let offered = child.identity().is_some_and(|identity| seen.contains(identity));
        if child.is_protected() || offered {
            out.push(child);
        } else {
            collect_survivors(&mut child, seen, out);
        }
    }
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new(NavigationConfig::default())
    }
}

impl std::fmt::Debug for Reconciler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reconciler")
            .field("config", &self.config)
            .field("providers", &self.providers.len())
            .finish()
    }
}
