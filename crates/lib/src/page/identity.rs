//! Deterministic page identity used for deduplication.
//!
//! An `Identity` is the resolved href of a page joined to its label with
//! [`IDENTITY_SEPARATOR`](crate::constants::IDENTITY_SEPARATOR).

use serde::{Deserialize, Serialize};

use crate::constants::IDENTITY_SEPARATOR;

/// The identity of a page within a navigation container.
///
/// Depends only on the href and label it was built from, so it is stable
/// across process restarts and serialization round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Identity(String);

impl Identity {
    /// Computes the identity of a page from its resolved href and label.
    ///
    /// ```
    /// use navtree::Identity;
    ///
    /// let id = Identity::compute("Home", "/home");
    /// assert_eq!(id, "/home|Home");
    /// ```
    pub fn compute(label: &str, href: &str) -> Self {
        let mut id = String::with_capacity(href.len() + label.len() + 1);
        id.push_str(href);
        id.push(IDENTITY_SEPARATOR);
        id.push_str(label);
        Self(id)
    }

    /// Returns the identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Identity {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.0)
    }
}

impl std::ops::Deref for Identity {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq<str> for Identity {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identity {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<Identity> for String {
    fn from(id: Identity) -> Self {
        id.0
    }
}

impl Serialize for Identity {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Identity {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Identity(s))
    }
}
