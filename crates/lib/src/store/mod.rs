//! Key-value persistence for serialized navigations.
//!
//! The navigation core does not own storage. It needs two operations from its
//! environment, captured by [`OptionStore`]: read a string stored under a key,
//! and write one. Callers that share a store between writers are responsible
//! for serializing access to it.

use crate::Result;

mod errors;
pub use errors::StoreError;

mod file;
pub use file::JsonFileStore;

mod memory;
pub use memory::InMemoryStore;

/// A string-valued option table.
pub trait OptionStore {
    /// Returns the value stored under `key`, or `None` if the key is absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: OptionStore + ?Sized> OptionStore for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}
