// Without a display both binaries must fail fast with the fixed message and status 1.
#![cfg(target_os = "linux")]

use presioneme::gui::DISPLAY_ERROR;
use std::process::Command;

fn run_without_display(binary: &str) -> std::process::Output {
    Command::new(binary)
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .env_remove("WAYLAND_SOCKET")
        .output()
        .expect("binary runs")
}

fn assert_display_failure(binary: &str) {
    let output = run_without_display(binary);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1), "stderr: {stderr}");
    assert!(stderr.contains(DISPLAY_ERROR), "stderr: {stderr}");
}

#[test]
fn inline_binary_exits_1_without_display() {
    assert_display_failure(env!("CARGO_BIN_EXE_presioneme"));
}

#[test]
fn dialog_binary_exits_1_without_display() {
    assert_display_failure(env!("CARGO_BIN_EXE_presioneme-dialogo"));
}
