//! End-to-end tests for the switchboard binary
//!
//! Gated behind the `integration` feature flag. Run with:
//!
//! ```sh
//! cargo test -p switchboard-cli --features integration
//! ```

#![cfg(feature = "integration")]

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Run the binary with config lookups confined to a temp dir
fn switchboard(config_dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_switchboard"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_dir.path())
        .env("SWITCHBOARD_PROJECT_CONFIG_DIR", config_dir.path())
        .output()
        .expect("Failed to run switchboard")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    let output = switchboard(&dir, &["--help"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("models"));
    assert!(out.contains("token"));
    assert!(out.contains("config"));
}

#[test]
fn resolve_uses_default_provider() {
    let dir = TempDir::new().unwrap();
    let catalog = fixture("providers.json");
    let output = switchboard(
        &dir,
        &["models", "--catalog", catalog.to_str().unwrap(), "resolve"],
    );

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Provider: openai"));
    assert!(out.contains("Model: gpt-4o"));
}

#[test]
fn resolve_session_model_wins_over_persona() {
    let dir = TempDir::new().unwrap();
    let catalog = fixture("providers.json");
    let output = switchboard(
        &dir,
        &[
            "models",
            "--catalog",
            catalog.to_str().unwrap(),
            "resolve",
            "--persona-provider",
            "Claude",
            "--persona-model",
            "claude-3-5-sonnet-20241022",
            "--session-model",
            "o1",
        ],
    );

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Provider: anthropic"));
    assert!(out.contains("Model: o1"));
    assert!(out.contains("Persona pin: Claude (anthropic/claude-3-5-sonnet-20241022)"));
}

#[test]
fn resolve_reads_persona_pin_from_project_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[persona]\nmodel_override = \"retired-model\"\n",
    )
    .unwrap();
    let catalog = fixture("providers.json");
    let output = switchboard(
        &dir,
        &["models", "--catalog", catalog.to_str().unwrap(), "resolve"],
    );

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Model: retired-model"));
    assert!(out.contains("Persona pin: not available in this catalog"));
}

#[test]
fn list_deduplicates_shared_models() {
    let dir = TempDir::new().unwrap();
    let catalog = fixture("providers.json");
    let output = switchboard(
        &dir,
        &["models", "--catalog", catalog.to_str().unwrap(), "list"],
    );

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("GPT-4o__openai__gpt-4o"));
    assert!(!out.contains("GPT-4o__anthropic__gpt-4o"));
}

#[test]
fn missing_catalog_fails() {
    let dir = TempDir::new().unwrap();
    let output = switchboard(
        &dir,
        &["models", "--catalog", "/nonexistent/providers.json", "resolve"],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read catalog"));
}

#[test]
fn token_encode_then_decode() {
    let dir = TempDir::new().unwrap();
    let output = switchboard(&dir, &["token", "encode", "GPT-4o", "openai", "gpt-4o"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "GPT-4o__openai__gpt-4o");

    let output = switchboard(&dir, &["token", "decode", "GPT-4o__openai__gpt-4o"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Display name: GPT-4o"));
    assert!(out.contains("Provider: openai"));
    assert!(out.contains("Model: gpt-4o"));
}

#[test]
fn strict_decode_rejects_short_token() {
    let dir = TempDir::new().unwrap();

    let lenient = switchboard(&dir, &["token", "decode", "GPT-4o__openai"]);
    assert!(lenient.status.success());

    let strict = switchboard(&dir, &["token", "decode", "--strict", "GPT-4o__openai"]);
    assert!(!strict.status.success());
}

#[test]
fn config_path_shows_paths() {
    let dir = TempDir::new().unwrap();
    let output = switchboard(&dir, &["config", "path"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("User config:"));
    assert!(out.contains("Project config:"));
}

#[test]
fn config_show_reports_defaults_without_files() {
    let dir = TempDir::new().unwrap();
    let output = switchboard(&dir, &["config", "show"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("# No config files found"));
    assert!(out.contains("[catalog]"));
    assert!(out.contains("llm-providers.json"));
}

#[test]
fn strict_encode_from_config_rejects_boundary_underscore() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[tokens]\nstrict = true\n").unwrap();

    let output = switchboard(&dir, &["token", "encode", "GPT_", "openai", "gpt-4o"]);
    assert!(!output.status.success());
}
