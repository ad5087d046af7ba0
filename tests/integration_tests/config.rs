//! Style and exit code overrides from the config file and environment.

use crate::common::{TestEnv, run};
use insta::assert_snapshot;

#[test]
fn test_config_file_overrides_defaults() {
    let env = TestEnv::new();
    env.write_config(
        r#"
[style]
ch_chevron = "|"

[exit-codes]
"1" = "OOPS"
"#,
    );
    let output = run(env
        .command()
        .arg("--limited")
        .env("PROMPT_EXIT_CODE", "1"));

    assert!(output.status.success(), "{}", output.stderr);
    assert_snapshot!(format!("{:?}", output.visible()), @r#"" | / | 1·OOPS |""#);
}

#[test]
fn test_environment_overrides_config_file() {
    let env = TestEnv::new();
    env.write_config(
        r#"
[style]
ch_chevron = "|"
ch_exit_code_sep = "-"
"#,
    );
    let output = run(env
        .command()
        .arg("--limited")
        .env("PROMPT_EXIT_CODE", "2")
        .env("PROMPT_STYLE", r#"{"ch_chevron": ":"}"#)
        .env("PROMPT_EXIT_CODES", r#"{"2": "USAGE"}"#));

    assert_eq!(output.visible(), " : / : 2-USAGE :");
}

#[test]
fn test_config_flag_overrides_environment_path() {
    let env = TestEnv::new();
    env.write_config("[style]\nch_chevron = \"|\"\n");
    let other = tempfile::tempdir().unwrap();
    let other_path = other.path().join("other.toml");
    std::fs::write(&other_path, "[style]\nch_chevron = \"#\"\n").unwrap();

    let output = run(env
        .command()
        .arg("--limited")
        .arg("--config")
        .arg(&other_path));

    assert_eq!(output.visible(), " # / # #");
}

#[test]
fn test_empty_mnemonic_hides_exit_code_name() {
    let env = TestEnv::new();
    let output = run(env
        .command()
        .arg("--limited")
        .env("PROMPT_EXIT_CODE", "130")
        .env("PROMPT_EXIT_CODES", r#"{"130": ""}"#));

    assert_eq!(output.visible(), " > / > 130 >");
}

#[test]
fn test_colour_override_reaches_output() {
    let env = TestEnv::new();
    let output = run(env
        .command()
        .env("PROMPT_STYLE", r#"{"col_path_dir_fg": 42}"#)
        .env("PROMPT_PATH", "/opt"));

    assert!(output.stdout.contains("38;5;42m"), "{:?}", output.stdout);
}

#[test]
fn test_invalid_glyph_is_fatal() {
    let env = TestEnv::new();
    let output = run(env
        .command()
        .env("PROMPT_STYLE", r#"{"ch_chevron": "->"}"#));

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(output.stdout, "");
    assert!(output.stderr.contains("ch_chevron"), "{}", output.stderr);
}

#[test]
fn test_colour_out_of_range_in_file_is_fatal() {
    let env = TestEnv::new();
    env.write_config("[style]\ncol_git_bg = 300\n");
    let output = run(&mut env.command());

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(output.stdout, "");
    assert!(output.stderr.contains("col_git_bg"), "{}", output.stderr);
}

#[test]
fn test_malformed_layers_fall_back_to_defaults() {
    let env = TestEnv::new();
    env.write_config("[style\nch_chevron = ");
    let output = run(env
        .command()
        .arg("--limited")
        .env("PROMPT_STYLE", "{not json")
        .env("PROMPT_EXIT_CODES", "[]"));

    assert!(output.status.success(), "{}", output.stderr);
    assert_eq!(output.visible(), " > / > >");
    assert_eq!(output.stderr, "");
}

#[test]
fn test_verbose_reports_ignored_input() {
    let env = TestEnv::new();
    let output = run(env
        .command()
        .args(["--limited", "-v"])
        .env("PROMPT_STYLE", r#"{"col_sparkles": 1}"#));

    assert!(output.status.success());
    assert!(
        output.stderr.contains("Ignoring unknown style option col_sparkles"),
        "{}",
        output.stderr
    );
    assert_eq!(output.visible(), " > / > >");
}
