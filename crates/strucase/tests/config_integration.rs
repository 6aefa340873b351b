//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, not just process success.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    for var in ["STRUCASE_LOG_LEVEL", "STRUCASE_OUTPUT_CASE", "STRUCASE_ERROR_MODE"] {
        cmd.env_remove(var);
    }
    cmd
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(
        json["config"]["log_level"], "info",
        "should use default log level"
    );
    assert!(
        json["config"]["config_file"].is_null(),
        "no config file should be reported"
    );
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join(".strucase.toml");
    fs::write(&config_path, r#"log_level = "debug""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "debug");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with(".strucase.toml"),
        "should report dotfile: {reported}"
    );
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("nested").join("deep");
    fs::create_dir_all(&sub_dir).unwrap();

    // Config in root, run from nested/deep
    fs::write(tmp.path().join(".strucase.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(json["config"]["log_level"], "debug");
    assert!(
        json["config"]["config_file"].as_str().is_some(),
        "should find parent config"
    );
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();

    // regular file has higher precedence
    fs::write(tmp.path().join(".strucase.toml"), r#"log_level = "debug""#).unwrap();
    fs::write(tmp.path().join("strucase.toml"), r#"log_level = "error""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(
        json["config"]["log_level"], "error",
        "regular file should override dotfile"
    );
}

// =============================================================================
// Config Format Parsing
// =============================================================================

#[test]
fn parses_each_config_format() {
    let cases = [
        (".strucase.toml", "output_case = \"snake\"\n", "snake_case"),
        (".strucase.yaml", "output_case: Train-Case\n", "Train-Case"),
        (".strucase.json", r#"{"output_case": "kebab"}"#, "kebab-case"),
    ];
    for (file, contents, expected) in cases {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(file), contents).unwrap();

        let json = info_json(tmp.path());
        assert_eq!(json["config"]["output_case"], expected, "parsing {file}");
    }
}

// =============================================================================
// Config Precedence
// =============================================================================

#[test]
fn closer_config_takes_precedence() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("project");
    fs::create_dir_all(&sub_dir).unwrap();

    fs::write(
        tmp.path().join(".strucase.toml"),
        "input_case = \"snake\"\noutput_case = \"kebab\"\n",
    )
    .unwrap();
    fs::write(sub_dir.join(".strucase.toml"), "output_case = \"pascal\"\n").unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(json["config"]["output_case"], "PascalCase", "closer config should win");
    assert_eq!(
        json["config"]["input_case"], "any",
        "the nearest directory with a config ends the search"
    );
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();

    fs::write(tmp.path().join(".strucase.toml"), r#"log_level = "debug""#).unwrap();
    let explicit = tmp.path().join("override.toml");
    fs::write(&explicit, r#"log_level = "error""#).unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json["config"]["log_level"], "error",
        "--config should override discovered config"
    );
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with("override.toml"),
        "--config path should be reported: {reported}"
    );
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn invalid_toml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".strucase.toml"),
        "this is not valid toml [[[",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration").or(predicate::str::contains("config")));
}

#[test]
fn unknown_config_field_is_ignored() {
    // Figment ignores unknown fields by default with serde
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".strucase.toml"),
        "log_level = \"info\"\nunknown_field = \"should be ignored\"\nanother_unknown = 42\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "info");
}

// =============================================================================
// Boundary Marker Tests
// =============================================================================

#[test]
fn git_boundary_stops_config_search() {
    let tmp = TempDir::new().unwrap();

    // Structure: /tmp/parent/.project.toml + /tmp/parent/repo/.git/ + /tmp/parent/repo/src/
    let parent = tmp.path().join("parent");
    let repo = parent.join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();

    // Config in parent (outside repo)
    fs::write(parent.join(".strucase.toml"), r#"log_level = "error""#).unwrap();

    // .git directory marks repo boundary
    fs::create_dir(repo.join(".git")).unwrap();

    // Running from src/ should NOT find parent config (stopped at .git)
    let json = info_json(&src);

    assert_eq!(
        json["config"]["log_level"], "info",
        "boundary should stop the search"
    );
    assert!(
        json["config"]["config_file"].is_null(),
        "should not find config beyond boundary"
    );
}

#[test]
fn config_in_same_dir_as_git_is_found() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();

    // .git and config in same directory
    fs::create_dir(repo.join(".git")).unwrap();
    fs::write(repo.join(".strucase.toml"), r#"log_level = "debug""#).unwrap();

    // Running from src/ should find the repo config
    let json = info_json(&src);

    assert_eq!(
        json["config"]["log_level"], "debug",
        "config next to .git should be found"
    );
    assert!(
        json["config"]["config_file"].as_str().is_some(),
        "should report config file"
    );
}

// =============================================================================
// Conversion Settings
// =============================================================================

#[test]
fn config_sets_default_dialects() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".strucase.toml"),
        "input_case = \"snake\"\noutput_case = \"SCREAMING_SNAKE_CASE\"\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["input_case"], "snake_case");
    assert_eq!(json["config"]["output_case"], "SCREAMING_SNAKE_CASE");

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "convert", "ab_cd"])
        .assert()
        .success()
        .stdout(predicate::str::diff("AB_CD\n"));
}

#[test]
fn command_flags_override_config_dialects() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".strucase.toml"), "output_case = \"kebab\"\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "convert", "--to", "pascal", "ab_cd"])
        .assert()
        .success()
        .stdout(predicate::str::diff("AbCd\n"));
}

#[test]
fn config_options_table_enables_validation() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".strucase.toml"),
        "input_case = \"snake\"\n\n[options]\nvalidate = true\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert!(
        json["config"]["options"].as_str().unwrap().contains("VALIDATE"),
        "options should list VALIDATE: {}",
        json["config"]["options"]
    );

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "convert", "Not-Snake"])
        .assert()
        .failure();
}

#[test]
fn config_error_mode_applies_to_font_keys() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".strucase.toml"), "error_mode = \"ignore\"\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "font-key", "colour", "fontStyle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("font-style"));
}

#[test]
fn unknown_dialect_in_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".strucase.toml"), "output_case = \"sponge\"\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn input_limit_rejects_large_arguments() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".strucase.toml"), "max_input_bytes = 4\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "convert", "abcdefgh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn disabled_input_limit_is_reported() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".strucase.toml"),
        "max_input_bytes = 4\ndisable_input_limit = true\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert!(json["config"]["max_input_bytes"].is_null());
}

// =============================================================================
// Environment Overrides
// =============================================================================

#[test]
fn env_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".strucase.toml"), "output_case = \"kebab\"\n").unwrap();

    let output = cmd()
        .env("STRUCASE_OUTPUT_CASE", "snake_case")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["output_case"], "snake_case");
}

#[test]
fn env_error_mode_accepts_numeric_code() {
    let tmp = TempDir::new().unwrap();

    let output = cmd()
        .env("STRUCASE_ERROR_MODE", "1")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["error_mode"], "warn");
}

// =============================================================================
// User Config
// =============================================================================

#[cfg(target_os = "linux")]
fn info_json_with_user_config(args: &[&str]) -> Value {
    let home = TempDir::new().unwrap();
    let user_dir = home.path().join("strucase");
    fs::create_dir_all(&user_dir).unwrap();
    fs::write(user_dir.join("config.toml"), "output_case = \"kebab\"\n").unwrap();
    let work = TempDir::new().unwrap();

    let output = cmd()
        .env("XDG_CONFIG_HOME", home.path())
        .args(["-C", work.path().to_str().unwrap()])
        .args(args)
        .args(["info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[cfg(target_os = "linux")]
#[test]
fn user_config_is_loaded() {
    let json = info_json_with_user_config(&[]);
    assert_eq!(json["config"]["output_case"], "kebab-case");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with("config.toml"), "{reported}");
}

#[cfg(target_os = "linux")]
#[test]
fn no_user_config_flag_skips_user_config() {
    let json = info_json_with_user_config(&["--no-user-config"]);
    assert_eq!(json["config"]["output_case"], "camelCase");
    assert!(json["config"]["config_file"].is_null());
}
