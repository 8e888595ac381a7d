use std::collections::HashMap;

use super::OptionStore;
use crate::Result;

/// An option table held in a `HashMap`, for tests and for callers that
/// persist the values some other way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryStore {
    options: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Removes an option, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.options.remove(key)
    }
}

impl OptionStore for InMemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.options.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.options.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
