use navtree::{Navigation, Page, PageRecord, RouteTarget, Target};

use crate::helpers::*;

#[test]
fn test_round_trip_preserves_identities_order_and_flags() {
    let mut nav = curated_navigation();
    reconcile_main(&mut nav, plugin_entries());

    let restored = Navigation::from_json(&nav.to_json().unwrap());

    assert_eq!(restored.identities(), nav.identities());
    for (a, b) in restored.iter().zip(nav.iter()) {
        assert_eq!(a.is_visible(), b.is_visible());
        assert_eq!(a.is_protected(), b.is_protected());
    }
    assert_eq!(restored, nav);
}

#[test]
fn test_records_capture_route_fields() {
    let mut nav = Navigation::new();
    nav.add_page(Page::route(
        "Item 42",
        RouteTarget::new("items", "show")
            .with_route("id")
            .with_param("id", "42")
            .with_fragment("files"),
    ))
    .unwrap();

    let records = nav.to_serializable();
    assert_eq!(records.len(), 1);
    match &records[0].target {
        Target::Route(route) => {
            assert_eq!(route.route(), Some("id"));
            assert_eq!(route.params().get("id").map(String::as_str), Some("42"));
            assert_eq!(route.fragment(), Some("files"));
        }
        other => panic!("expected route target, got {other:?}"),
    }
    assert_eq!(
        root_identities(&nav),
        vec![id("/items/show/id/42#files|Item 42")]
    );
}

#[test]
fn test_json_is_array_of_maps() {
    let mut nav = Navigation::new();
    nav.add_page(Page::uri("Home", "/home")).unwrap();

    let value: serde_json::Value = serde_json::from_str(&nav.to_json().unwrap()).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 1);
    assert_eq!(array[0]["label"], "Home");
    assert_eq!(array[0]["type"], "uri");
    assert_eq!(array[0]["uri"], "/home");
    assert_eq!(array[0]["visible"], true);
    assert_eq!(array[0]["protected"], true);
}

#[test]
fn test_duplicate_records_collapse_on_load() {
    let record = PageRecord::from(&Page::uri("Home", "/home"));
    let nav = Navigation::from_serializable(vec![record.clone(), record]);
    assert_eq!(nav.len(), 1);
}

#[test]
fn test_corrupt_blob_degrades_to_empty() {
    for blob in ["", "null", "{}", "[", "\"text\""] {
        assert!(Navigation::from_json(blob).is_empty(), "blob {blob:?}");
    }
}

#[test]
fn test_set_pages_replaces_existing_forest() {
    let mut nav = curated_navigation();
    nav.set_pages_from_json(r#"[{"label":"Home","type":"uri","uri":"/home"}]"#);

    assert_eq!(nav.identities(), vec![id("/home|Home")]);
    assert!(!nav.contains(&id("/about|About")));
}
