//! Shared test fixtures for library and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use charview::config::Settings;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// A block with a title, mixed categories, and an empty line.
pub const SAMPLE_BLOCK: &str = "title: \"Sample\"\nHello, World 42!\n\nTab\there";

/// Settings with statistics and the color key switched on.
pub fn settings_all_panels() -> Settings {
    let mut settings = Settings::default();
    settings.set_show_statistics(true);
    settings.set_show_color_key(true);
    settings
}

/// Path to the charview binary
pub fn charview_bin() -> String {
    std::env::var("CARGO_BIN_EXE_charview").unwrap_or_else(|_| "target/debug/charview".to_string())
}

/// Creates a Command with an isolated settings directory.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(charview_bin());
    cmd.env("CHARVIEW_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs a command with an isolated settings directory.
pub fn run(args: &[&str], config_dir: &Path) -> Output {
    isolated_command(args, config_dir)
        .output()
        .expect("Failed to execute command")
}

/// Runs a command feeding `input` on stdin.
pub fn run_with_stdin(args: &[&str], config_dir: &Path, input: &str) -> Output {
    let mut child = isolated_command(args, config_dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for command")
}

/// Writes `content` to a file inside `dir` and returns its path.
pub fn write_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write input file");
    path
}

/// Stdout as a String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as a String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
