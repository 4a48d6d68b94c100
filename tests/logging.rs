//! Integration tests for subscriber installation
//!
//! Kept in their own test binary: installing a global subscriber would
//! interfere with log capture in the unit tests.

use bootconf::{init_logging, LoggingConfig};

#[test]
fn test_init_logging_tolerates_existing_subscriber() {
    let json = LoggingConfig { level: "debug".to_string(), json: true };
    assert!(init_logging(&json).is_ok());

    // Second installation is ignored rather than reported
    assert!(init_logging(&LoggingConfig::default()).is_ok());

    tracing::info!(check = "after-init", "Subscriber installed");
}
