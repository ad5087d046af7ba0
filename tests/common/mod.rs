use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use ansi_str::AnsiStr;
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

/// An isolated environment for running `promptline`.
///
/// Nothing is inherited from the parent process and the user config lives in
/// a fresh temp directory, so a developer's own prompt settings never leak in.
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).unwrap();
    }

    /// Command with a cleared environment and `PROMPT_PATH=/`.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin("promptline"));
        cmd.env_clear();
        cmd.env("PROMPTLINE_CONFIG_PATH", self.config_path());
        cmd.env("PROMPT_PATH", "/");
        cmd
    }
}

pub struct Output {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl Output {
    /// Stdout without escape sequences.
    pub fn visible(&self) -> String {
        self.stdout.ansi_strip().into_owned()
    }
}

pub fn run(cmd: &mut Command) -> Output {
    let output = cmd.output().expect("failed to run promptline");
    Output {
        status: output.status,
        stdout: String::from_utf8(output.stdout).expect("stdout is not UTF-8"),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
