//! Process-level behaviour of the `shutter` binary.

use std::process::Command;
use tempfile::TempDir;

fn shutter() -> Command {
    Command::new(env!("CARGO_BIN_EXE_shutter"))
}

#[test]
fn test_no_arguments_exits_silently() {
    let output = shutter().output().unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_missing_config_fails_without_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("photo.jpg");
    std::fs::write(&file, b"jpeg").unwrap();

    let output = shutter()
        .arg(&file)
        .env("SHUTTER_CONFIG", temp_dir.path().join("missing-config"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read config file"), "{}", stderr);
}

#[test]
fn test_malformed_config_fails_without_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("shutter-config");
    std::fs::write(&config, "{ not json").unwrap();
    let file = temp_dir.path().join("photo.jpg");
    std::fs::write(&file, b"jpeg").unwrap();

    let output = shutter()
        .arg(&file)
        .env("SHUTTER_CONFIG", &config)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_file_fails_without_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("shutter-config");
    std::fs::write(
        &config,
        r#"{"S3AccessKeyId": "a", "S3SecretAccessKey": "b", "S3Bucket": "c", "S3Url": "cdn.example.com"}"#,
    )
    .unwrap();

    let output = shutter()
        .arg(temp_dir.path().join("missing.png"))
        .env("SHUTTER_CONFIG", &config)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to open"), "{}", stderr);
}
