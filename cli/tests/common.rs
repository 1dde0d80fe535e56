//! # unitconv CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files in `cli/tests/`. Each test
//! file declares `mod common;` and drives the compiled `unitconv` binary.
//!

// Allow potentially unused code in this common module, as different test files might use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// Empty working directory shared by the tests of one binary. It holds a
/// `.git` marker so the project config search never climbs above it.
fn isolated_dir() -> PathBuf {
    let dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join("unitconv-isolated");
    fs::create_dir_all(dir.join(".git")).expect("Failed to create isolated test directory");
    dir
}

/// Creates an `assert_cmd::Command` for the compiled `unitconv` binary.
///
/// The command runs in an isolated directory with `HOME` and
/// `XDG_CONFIG_HOME` pointed there and `UNITCONV_CONFIG` cleared, so neither
/// a developer's user config nor a `.unitconv.toml` in a parent directory
/// can leak in.
///
/// ## Panics
/// Panics if the `unitconv` binary cannot be found via `Command::cargo_bin`.
pub fn unitconv_cmd() -> Command {
    unitconv_cmd_in(&isolated_dir())
}

/// Same as `unitconv_cmd`, but with `dir` as working directory, `HOME` and
/// `XDG_CONFIG_HOME`.
pub fn unitconv_cmd_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("unitconv").expect("Failed to find unitconv binary for testing");
    cmd.env_remove("UNITCONV_CONFIG")
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .current_dir(dir);
    cmd
}

/// Same as `unitconv_cmd`, but reading configuration from `config_path` only.
pub fn unitconv_cmd_with_config(config_path: &Path) -> Command {
    let mut cmd = unitconv_cmd();
    cmd.arg("--config").arg(config_path);
    cmd
}
