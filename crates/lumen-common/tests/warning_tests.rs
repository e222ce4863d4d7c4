//! Tests for the deduplicated warning channel.
//!
//! The warning set is process-global, so the whole lifecycle runs in a single
//! test to keep `clear_warnings` from racing other assertions.

use lumen_common::warning::{clear_warnings, has_warned, warn_once};

#[test]
fn test_warning_lifecycle() {
    assert!(!has_warned("test", "first-sighting"));
    warn_once("test", "first-sighting");
    assert!(has_warned("test", "first-sighting"));

    // Same message twice is recorded once and stays recorded.
    warn_once("test", "first-sighting");
    assert!(has_warned("test", "first-sighting"));

    // Keyed by component as well as message.
    warn_once("alpha", "shared-message");
    assert!(has_warned("alpha", "shared-message"));
    assert!(!has_warned("beta", "shared-message"));

    clear_warnings();
    assert!(!has_warned("test", "first-sighting"));
    assert!(!has_warned("alpha", "shared-message"));
}
