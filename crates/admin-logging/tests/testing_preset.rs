//! The testing preset as used from test binaries
//!
//! Separate file so the global subscriber starts out unset.

use admin_logging::init_testing;

#[test]
fn test_init_testing_installs_once_and_tolerates_repeats() {
    assert!(!tracing::dispatcher::has_been_set());

    init_testing();
    assert!(tracing::dispatcher::has_been_set());
    tracing::warn!(preset = "testing", "emitted through the testing subscriber");

    // A second call must not panic even though a subscriber is already set
    init_testing();
    tracing::warn!("still logging after repeated init");
}
