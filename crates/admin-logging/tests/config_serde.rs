//! Serialization of logging configuration

use std::path::PathBuf;

use admin_logging::{ConsoleFormat, FileConfig, LogConfig, RotationStrategy};

#[test]
fn test_log_config_json_roundtrip() {
    let config = LogConfig::production(PathBuf::from("/tmp/admin-logs"));
    let json = serde_json::to_string(&config).unwrap();
    let parsed: LogConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_log_config_from_handwritten_json() {
    let json = r#"{
        "default_level": "trace",
        "console": { "enabled": true, "format": "json", "ansi": false },
        "file": {
            "directory": "./logs",
            "prefix": "dash",
            "rotation": "hourly",
            "max_files": null
        }
    }"#;
    let config: LogConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.default_level, "trace");
    assert_eq!(config.console.format, ConsoleFormat::Json);

    let file: FileConfig = config.file.unwrap();
    assert_eq!(file.prefix, "dash");
    assert_eq!(file.rotation, RotationStrategy::Hourly);
    assert_eq!(file.max_files, None);
}
