use std::collections::HashSet;
use std::sync::Arc;

use navtree::{Navigation, Page, RouteTarget, Router, UriTarget, page::ConventionalRouter};

use crate::helpers::*;

#[derive(Debug)]
struct ItemsOnlyRouter;

impl Router for ItemsOnlyRouter {
    fn assemble(&self, target: &RouteTarget) -> Option<String> {
        (target.controller() == "items").then(|| format!("/i/{}", target.action()))
    }
}

#[test]
fn test_identities_are_unique_across_forest() {
    let mut nav = curated_navigation();
    // Same identity as a nested page, must not be added at the root
    nav.add_page(Page::uri("Team", "/about/team")).unwrap();
    nav.add_page(Page::uri("Team", "/about/team").with_visible(false))
        .unwrap();

    let identities = nav.identities();
    let unique: HashSet<_> = identities.iter().collect();
    assert_eq!(identities.len(), unique.len());
    assert_eq!(nav.len(), 2);
    assert_eq!(nav.total_pages(), 3);
}

#[test]
fn test_duplicate_add_keeps_existing_instance() {
    let mut nav = Navigation::new();
    nav.add_page(Page::uri("Home", "/home").with_protected(false))
        .unwrap();
    nav.add_page(Page::uri("Home", "/home").with_protected(true))
        .unwrap();

    assert!(!nav.get_page_by_identity(&id("/home|Home")).unwrap().is_protected());
}

#[test]
fn test_insertion_order_is_preserved() {
    let mut nav = Navigation::new();
    for (label, uri) in [("C", "/c"), ("A", "/a"), ("B", "/b")] {
        nav.add_page(Page::uri(label, uri)).unwrap();
    }
    assert_eq!(
        root_identities(&nav),
        vec![id("/c|C"), id("/a|A"), id("/b|B")]
    );
}

#[test]
fn test_route_and_uri_with_same_href_collide() {
    let mut nav = Navigation::new();
    nav.add_page(Page::route("Browse Items", RouteTarget::new("items", "browse")))
        .unwrap();
    nav.add_page(Page::uri("Browse Items", "/items/browse"))
        .unwrap();

    assert_eq!(nav.len(), 1);
    assert!(nav.pages()[0].target().is_route());
}

#[test]
fn test_custom_router_rejects_unroutable_pages() {
    let mut nav = Navigation::with_router(Arc::new(ItemsOnlyRouter));

    nav.add_page(Page::route("Items", RouteTarget::new("items", "browse")))
        .unwrap();
    let err = nav
        .add_page(Page::route("Collections", RouteTarget::new("collections", "browse")))
        .unwrap_err();

    assert!(err.is_invalid_page());
    assert_eq!(err.module(), "navigation");
    assert_eq!(root_identities(&nav), vec![id("/i/browse|Items")]);
}

#[test]
fn test_uri_pages_ignore_router() {
    let mut nav = Navigation::with_router(Arc::new(ConventionalRouter::new("https://museum.example")));
    nav.add_page(Page::new(
        "Docs",
        UriTarget::new("https://docs.example/guide").with_fragment("install"),
    ))
    .unwrap();

    assert_eq!(
        root_identities(&nav),
        vec![id("https://docs.example/guide#install|Docs")]
    );
}

#[test]
fn test_self_parent_rejected_at_any_depth() {
    let mut nav = curated_navigation();

    let err = nav
        .add_child(&id("/about/team|Team"), Page::uri("Team", "/about/team"))
        .unwrap_err();
    assert!(err.is_self_parent());

    nav.add_child(&id("/about/team|Team"), Page::uri("Alice", "/about/team/alice"))
        .unwrap();
    assert_eq!(nav.total_pages(), 4);
}

#[test]
fn test_remove_absent_page_is_noop() {
    let mut nav = curated_navigation();
    let before = nav.clone();

    assert!(nav.remove_page(&id("/nowhere|Nowhere")).is_none());
    assert_eq!(nav, before);
}

#[test]
fn test_readded_page_after_relabel_gets_new_identity() {
    let mut nav = Navigation::new();
    nav.add_page(Page::uri("Home", "/home")).unwrap();

    let mut page = nav.remove_page(&id("/home|Home")).unwrap();
    page.set_label("Start");
    assert!(page.identity().is_none());
    nav.add_page(page).unwrap();

    assert_eq!(root_identities(&nav), vec![id("/home|Start")]);
}
