//! Navigation container tests
//!
//! Covers identity assignment and deduplication across the forest, and the
//! serialized record/JSON form.

mod container;
mod serialization;
