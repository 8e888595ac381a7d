//! Reconciliation tests
//!
//! Scenario tests for the main public navigation, plus property checks that
//! hold for any sequence of contributed entries.
