//! Plain serializable form of a navigation forest.
//!
//! A persisted navigation is a JSON array of [`PageRecord`] maps. Identities
//! are not stored; they are recomputed when records are added back to a
//! container.

use serde::{Deserialize, Serialize};

use crate::page::{Page, Target};

fn default_true() -> bool {
    true
}

/// One page and its children, as persisted.
///
/// The target is flattened into the record with a `type` tag, e.g.
/// `{"label":"Browse Items","type":"route","controller":"items","action":"browse"}`.
/// Missing `visible`/`protected` flags default to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    pub label: String,
    #[serde(flatten)]
    pub target: Target,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default = "default_true")]
    pub protected: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<PageRecord>,
}

impl From<&Page> for PageRecord {
    fn from(page: &Page) -> Self {
        Self {
            label: page.label().to_string(),
            target: page.target().clone(),
            visible: page.is_visible(),
            protected: page.is_protected(),
            pages: page.children().iter().map(PageRecord::from).collect(),
        }
    }
}

impl From<PageRecord> for Page {
    fn from(record: PageRecord) -> Self {
        record.pages.into_iter().fold(
            Page::new(record.label, record.target)
                .with_visible(record.visible)
                .with_protected(record.protected),
            |page, child| page.with_child(child.into()),
        )
    }
}
