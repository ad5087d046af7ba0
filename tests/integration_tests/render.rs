//! End-to-end rendering through the `promptline` binary.

use crate::common::{TestEnv, run};
use insta::assert_snapshot;

#[test]
fn test_failed_command_in_nested_directory() {
    let env = TestEnv::new();
    let output = run(env
        .command()
        .env("PROMPT_LIMITED", "")
        .env("PROMPT_PATH", "/home/user/projects/demo")
        .env("PROMPT_EXIT_CODE", "1"));

    assert!(output.status.success(), "{}", output.stderr);
    assert_snapshot!(format!("{:?}", output.visible()), @r#"" > 4home3user2projects1demo > 1·GENERAL >""#);
}

#[test]
fn test_full_terminal_glyphs() {
    let env = TestEnv::new();
    let output = run(env
        .command()
        .env("PROMPT_EXIT_CODE", "0")
        .env("PROMPT_EXEC_TIME", "3661"));

    assert_eq!(output.visible(), " \u{e0b0} / \u{e0b0} \u{e0b0} ❯ 1h1m");
}

#[test]
fn test_git_repository() {
    let env = TestEnv::new();
    let output = run(env
        .command()
        .arg("--limited")
        .env("PROMPT_PATH", "/srv/repo")
        .env("PROMPT_GIT_DIR_DEPTH", "0")
        .env("PROMPT_GIT_BRANCH", "main")
        .env("PROMPT_GIT_AHEAD", "2")
        .env("PROMPT_GIT_MODIFIED", ""));

    assert_snapshot!(format!("{:?}", output.visible()), @r#"" > 2srv1repo > main ↑2 • > >""#);
}

#[test]
fn test_status_and_dir_flags() {
    let env = TestEnv::new();
    let output = run(env
        .command()
        .arg("--limited")
        .env("PROMPT_STATUS", "[N]")
        .env("PROMPT_PATH", "/tmp")
        .env("PROMPT_DIR_STICKY", "")
        .env("PROMPT_ROOT", ""));

    assert_snapshot!(format!("{:?}", output.visible()), @r#"" [N] > 1tmp T > >""#);
}

#[test]
fn test_path_falls_back_to_pwd() {
    let env = TestEnv::new();
    let output = run(env
        .command()
        .arg("--limited")
        .env_remove("PROMPT_PATH")
        .env("PWD", "/var"));

    assert_eq!(output.visible(), " > 1var > >");
}

#[test]
fn test_escapes_written_to_pipe_by_default() {
    let env = TestEnv::new();
    let output = run(&mut env.command());

    assert!(output.stdout.starts_with("\x1b[0m"), "{:?}", output.stdout);
    assert!(output.stdout.contains("\x1b[38;5;"));
    assert!(!output.stdout.ends_with('\n'));
}

#[test]
fn test_color_never_strips_escapes() {
    let env = TestEnv::new();
    let output = run(env
        .command()
        .args(["--color", "never", "--limited"])
        .env("PROMPT_EXIT_CODE", "130"));

    assert!(!output.stdout.contains('\x1b'), "{:?}", output.stdout);
    assert_eq!(output.stdout, " > / > 130·SIGINT >");
}

#[test]
fn test_quiet_by_default() {
    let env = TestEnv::new();
    let output = run(env.command().env("PROMPT_MAX_LENGTH", "wide"));

    assert!(output.status.success());
    assert_eq!(output.stderr, "");
}
