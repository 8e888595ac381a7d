use navtree::{
    ContributedEntries, Identity, Navigation, Page, Reconciler, RouteTarget,
    reconcile::defaults,
};

// ==========================
// IDENTITY HELPERS
// ==========================

/// Shorthand for building an identity in assertions
pub fn id(s: &str) -> Identity {
    Identity::from(s)
}

/// Identities of the root pages, in order
pub fn root_identities(nav: &Navigation) -> Vec<Identity> {
    nav.iter()
        .map(|page| page.identity().cloned().expect("page in navigation has identity"))
        .collect()
}

// ==========================
// FIXTURES
// ==========================

/// A navigation curated by a site administrator: two protected pages, one nested page.
pub fn curated_navigation() -> Navigation {
    let mut nav = Navigation::new();
    nav.add_page(Page::uri("About", "/about").with_child(Page::uri("Team", "/about/team")))
        .unwrap()
        .add_page(Page::route(
            "Exhibits",
            RouteTarget::new("exhibits", "browse").with_route("default"),
        ))
        .unwrap();
    nav
}

/// Entries a typical set of plugins would contribute to the main navigation
pub fn plugin_entries() -> ContributedEntries {
    ContributedEntries::new()
        .with("Blog", "http://example.com/blog")
        .with(
            "Map",
            Page::route("Map", RouteTarget::new("geolocation", "map")).with_visible(true),
        )
}

/// Reconcile `nav` against the standard main-navigation defaults and `entries`.
pub fn reconcile_main(nav: &mut Navigation, entries: ContributedEntries) {
    Reconciler::default()
        .reconcile(nav, entries, defaults::public_navigation_main())
        .expect("reconcile should succeed");
}
