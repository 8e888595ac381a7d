//! Built-in default entries for known reconciliation scopes.

use super::ContributedEntries;
use crate::page::{Page, RouteTarget};

/// The standard browse links of the main public navigation.
///
/// Both are visible route pages: `items/browse` and `collections/browse`.
pub fn public_navigation_main() -> ContributedEntries {
    ContributedEntries::new()
        .with(
            "Browse Items",
            Page::route("Browse Items", RouteTarget::new("items", "browse")).with_visible(true),
        )
        .with(
            "Browse Collections",
            Page::route(
                "Browse Collections",
                RouteTarget::new("collections", "browse"),
            )
            .with_visible(true),
        )
}
