//! Column budgets from `--max-length` and `PROMPT_MAX_LENGTH`.

use crate::common::{TestEnv, run};
use insta::assert_snapshot;
use rstest::rstest;

fn demo_command(env: &TestEnv) -> std::process::Command {
    let mut cmd = env.command();
    cmd.arg("--limited")
        .env("PROMPT_PATH", "/home/user/projects/demo")
        .env("PROMPT_EXIT_CODE", "1");
    cmd
}

#[test]
fn test_short_exit_code_is_enough() {
    let env = TestEnv::new();
    let output = run(demo_command(&env).args(["--max-length", "35"]));

    assert_snapshot!(format!("{:?}", output.visible()), @r#"" > 4home3user2projects1demo > 1 >""#);
}

#[test]
fn test_path_components_elided_from_the_left() {
    let env = TestEnv::new();
    let output = run(demo_command(&env).env("PROMPT_MAX_LENGTH", "30"));

    assert_snapshot!(format!("{:?}", output.visible()), @r#"" > 4h▶3us▶2projects1demo > 1 >""#);
}

#[rstest]
#[case::tight(10)]
#[case::moderate(25)]
#[case::roomy(41)]
#[case::generous(200)]
fn test_output_fits_budget(#[case] budget: usize) {
    let env = TestEnv::new();
    let output = run(demo_command(&env)
        .env("PROMPT_STATUS", "vi")
        .env("PROMPT_EXEC_TIME", "65")
        .arg("--max-length")
        .arg(budget.to_string()));

    assert!(output.status.success(), "{}", output.stderr);
    let visible = output.visible();
    // Once every cut is made the prompt is as short as it gets
    let floor = " > 4h▶3u▶2p▶1d▶ > >".chars().count();
    assert!(
        visible.chars().count() <= budget.max(floor),
        "{visible:?} exceeds {budget}"
    );
}

#[test]
fn test_flag_overrides_environment() {
    let env = TestEnv::new();
    let unbounded = run(&mut demo_command(&env));
    let output = run(demo_command(&env)
        .env("PROMPT_MAX_LENGTH", "5")
        .args(["--max-length", "200"]));

    assert_eq!(output.stdout, unbounded.stdout);
}

#[test]
fn test_non_integer_budget_is_ignored() {
    let env = TestEnv::new();
    let unbounded = run(&mut demo_command(&env));
    let output = run(demo_command(&env).env("PROMPT_MAX_LENGTH", "wide"));

    assert!(output.status.success());
    assert_eq!(output.stdout, unbounded.stdout);
}

#[rstest]
#[case::zero("0")]
#[case::negative("-3")]
fn test_non_positive_budget_is_fatal(#[case] budget: &str) {
    let env = TestEnv::new();
    let output = run(demo_command(&env).env("PROMPT_MAX_LENGTH", budget));

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(output.stdout, "");
    assert!(
        output.stderr.contains("Maximum prompt length must be positive"),
        "{}",
        output.stderr
    );
    assert!(output.stderr.contains("PROMPT_MAX_LENGTH"));
}

#[test]
fn test_zero_flag_rejected_by_parser() {
    let env = TestEnv::new();
    let output = run(demo_command(&env).args(["--max-length", "0"]));

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(output.stdout, "");
}
