/*! Integration tests for navtree.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - navigation: Tests for the Navigation container and its serialized form
 * - reconcile: Tests for reconciliation against contributed entries
 * - persistence: Tests for saving and loading navigations through option stores
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("navtree=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod helpers;
mod navigation;
mod persistence;
mod reconcile;
