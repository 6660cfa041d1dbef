use notesum::{LogFormat, setup_logging, setup_logging_with};

#[test]
fn test_logging_setup() {
    let result = std::panic::catch_unwind(|| {
        setup_logging();
        // A second install must be ignored rather than panic.
        setup_logging_with(LogFormat::Compact);
    });

    assert!(result.is_ok(), "logging setup should not panic");
}
