/// Smoke tests to verify the binary runs without panicking
use std::process::{Command, Output};

/// Run the binary with an empty config dir so a user's settings can't leak in
fn termdonut(args: &[&str]) -> Output {
    let config_home = tempfile::tempdir().expect("Failed to create temp dir");
    Command::new(env!("CARGO_BIN_EXE_termdonut"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute termdonut")
}

#[test]
fn binary_shows_help() {
    let output = termdonut(&["--help"]);

    assert!(
        output.status.success(),
        "Binary failed to run --help: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("termdonut"), "Help output should mention termdonut");
    assert!(stdout.contains("--frames"));
}

#[test]
fn binary_shows_version() {
    let output = termdonut(&["--version"]);

    assert!(
        output.status.success(),
        "Binary failed to run --version: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn invalid_flag_fails_gracefully() {
    let output = termdonut(&["--nonexistent-flag"]);

    // Should fail with error, not panic
    assert!(!output.status.success(), "Invalid flag should return error status");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("panicked at"), "Invalid flag should not cause panic");
}

#[test]
fn zero_frame_limit_is_rejected() {
    let output = termdonut(&["--frames", "0"]);
    assert!(!output.status.success());
}

#[test]
fn print_mode_emits_one_frame() {
    let output = termdonut(&["--print"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("frame should be utf-8");
    assert!(stdout.starts_with("\x1b[38;2;0;255;0m\n"));
    assert!(!stdout.contains("\x1b[H"));
    assert_eq!(stdout.matches("FPS: ").count(), 1);

    // colour prefix line, 24 grid rows, FPS line
    let lines: Vec<&str> = stdout.trim_end_matches('\n').split('\n').collect();
    assert_eq!(lines.len(), 26);
    assert!(lines[1..24].iter().all(|row| row.chars().count() == 80));
    assert!(lines.iter().any(|row| row.contains('@')));
}

#[test]
fn bounded_animation_exits_after_frame_limit() {
    let output = termdonut(&["--frames", "3", "--delay", "0", "--start-a", "-1.5"]);
    assert!(
        output.status.success(),
        "Bounded run failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).expect("frames should be utf-8");
    assert!(stdout.starts_with("\x1b[2J"));
    assert_eq!(stdout.matches("\x1b[H").count(), 3);
    assert_eq!(stdout.matches("FPS: ").count(), 3);
    assert!(stdout.ends_with("\x1b[0m\n"));
}

#[test]
fn broken_settings_file_is_not_fatal() {
    let config_home = tempfile::tempdir().expect("Failed to create temp dir");
    let dir = config_home.path().join("termdonut");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[donut\ndelay_ms = ").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_termdonut"))
        .arg("--print")
        .env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute termdonut");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid settings"), "expected a warning, got: {stderr}");
}
