use log::Log;
use rps_base::logging::{StdoutLogger, format_record, init_stdout_logger};

fn record_at(level: log::Level) -> log::Record<'static> {
    log::RecordBuilder::new()
        .level(level)
        .target("test")
        .file(Some("test.rs"))
        .line(Some(42))
        .build()
}

#[test]
fn test_format_record_contains_location_and_message() {
    let record = log::RecordBuilder::new()
        .level(log::Level::Warn)
        .target("test")
        .file(Some("camera.rs"))
        .line(Some(7))
        .args(format_args!("capture failed"))
        .build();

    let line = format_record(&record);
    assert!(line.contains("[WARN]"));
    assert!(line.contains("thread:"));
    assert!(line.contains("camera.rs:7"));
    assert!(line.ends_with("- capture failed"));
}

#[test]
fn test_format_record_without_location() {
    let record = log::RecordBuilder::new()
        .level(log::Level::Info)
        .args(format_args!("hello"))
        .build();

    assert!(format_record(&record).contains("unknown:0"));
}

#[test]
fn test_init_stdout_logger_sets_global_logger() {
    // set_logger only succeeds once per process; later calls are no-ops
    init_stdout_logger();
    init_stdout_logger();

    let metadata = log::MetadataBuilder::new()
        .level(log::Level::Info)
        .target("test")
        .build();
    assert!(log::logger().enabled(&metadata));

    log::info!("Test message from global logger");

    // Trace is below the max level in every build mode
    let logger = StdoutLogger;
    assert!(!logger.enabled(record_at(log::Level::Trace).metadata()));
    logger.flush();
}
