//! Integration tests for configuration loading

use std::io::Write;

use pathswap::config::SwapConfig;
use tempfile::NamedTempFile;

#[test]
fn test_load_from_explicit_path() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "custom:").unwrap();
    writeln!(file, "  \"D:\": /data").unwrap();
    writeln!(file, "  \"W:\": /custom/work").unwrap();
    file.flush().unwrap();

    let config = SwapConfig::load_from(file.path()).unwrap();
    assert_eq!(config.custom.len(), 2);

    let table = config.mapping_table().unwrap();
    assert_eq!(table.mount_for_drive("D:"), Some("/data"));
    assert_eq!(table.drive_for_mount("/custom/work"), Some("W:"));
}

#[test]
fn test_load_from_missing_file_is_an_error() {
    let result = SwapConfig::load_from(std::path::Path::new("/nonexistent/config.yaml"));
    assert!(result.is_err());
}

#[test]
fn test_load_from_invalid_yaml_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "custom: [not, a, map]").unwrap();
    file.flush().unwrap();

    let result = SwapConfig::load_from(file.path());
    assert!(result.is_err());
}

#[test]
fn test_empty_file_gives_empty_table() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{{}}").unwrap();
    file.flush().unwrap();

    let config = SwapConfig::load_from(file.path()).unwrap();
    assert!(config.mapping_table().unwrap().is_empty());
}

#[test]
fn test_conflicting_config_is_rejected_at_table_build() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "custom:").unwrap();
    writeln!(file, "  \"D:\": /shared").unwrap();
    writeln!(file, "  \"E:\": /shared").unwrap();
    file.flush().unwrap();

    // Parsing succeeds; building the bijection does not
    let config = SwapConfig::load_from(file.path()).unwrap();
    assert!(config.mapping_table().is_err());
}
