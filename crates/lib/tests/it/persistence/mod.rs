//! Persistence tests
//!
//! Saving and loading navigations through the in-memory and file-backed
//! option stores, and the load/reconcile/save cycle.

mod option_stores;
