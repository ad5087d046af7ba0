//! Reading prompt inputs from `PROMPT_*` environment variables.
//!
//! The shell integration exports one variable per piece of state and runs
//! the binary. Boolean inputs are keyed off presence alone, so `PROMPT_ROOT=`
//! and `PROMPT_ROOT=0` both mean "root".
//!
//! Everything here takes a lookup function instead of reading the process
//! environment directly; `main` passes [`std::env::var_os`].

use std::ffi::OsString;

use strum::IntoEnumIterator;

use crate::config::{StyleOverrides, UserConfig, exit_codes};
use crate::prompt::state::NO_REPOSITORY;
use crate::prompt::{DirFlag, DirFlags, GitStatus, PromptInput};

pub const STATUS: &str = "PROMPT_STATUS";
pub const PATH: &str = "PROMPT_PATH";
pub const GIT_DIR_DEPTH: &str = "PROMPT_GIT_DIR_DEPTH";
pub const GIT_BRANCH: &str = "PROMPT_GIT_BRANCH";
pub const GIT_DETACHED: &str = "PROMPT_GIT_DETACHED";
pub const GIT_AHEAD: &str = "PROMPT_GIT_AHEAD";
pub const GIT_BEHIND: &str = "PROMPT_GIT_BEHIND";
pub const GIT_MERGING: &str = "PROMPT_GIT_MERGING";
pub const GIT_UNTRACKED: &str = "PROMPT_GIT_UNTRACKED";
pub const GIT_MODIFIED: &str = "PROMPT_GIT_MODIFIED";
pub const GIT_STAGED: &str = "PROMPT_GIT_STAGED";
pub const EXIT_CODE: &str = "PROMPT_EXIT_CODE";
pub const EXEC_TIME: &str = "PROMPT_EXEC_TIME";
pub const ROOT: &str = "PROMPT_ROOT";
pub const LIMITED: &str = "PROMPT_LIMITED";
pub const MAX_LENGTH: &str = "PROMPT_MAX_LENGTH";
pub const STYLE: &str = "PROMPT_STYLE";
pub const EXIT_CODES: &str = "PROMPT_EXIT_CODES";

/// Build a [`PromptInput`] from the variables visible through `lookup`.
pub fn read_input(lookup: impl Fn(&str) -> Option<OsString>) -> PromptInput {
    let string = |name: &str| lookup(name).map(|value| value.to_string_lossy().into_owned());
    let present = |name: &str| lookup(name).is_some();

    let path = string(PATH).or_else(|| string("PWD")).unwrap_or_default();

    let git_dir_depth = match string(GIT_DIR_DEPTH) {
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring non-integer {GIT_DIR_DEPTH}={value:?}");
            NO_REPOSITORY
        }),
        None => NO_REPOSITORY,
    };

    let mut dir_flags = DirFlags::default();
    for flag in DirFlag::iter() {
        let name: &'static str = flag.into();
        if present(format!("PROMPT_DIR_{name}").as_str()) {
            dir_flags.insert(flag);
        }
    }

    let git = string(GIT_BRANCH).map(|branch| GitStatus {
        branch,
        detached: present(GIT_DETACHED),
        ahead: string(GIT_AHEAD),
        behind: string(GIT_BEHIND),
        merging: present(GIT_MERGING),
        untracked: present(GIT_UNTRACKED),
        modified: present(GIT_MODIFIED),
        staged: present(GIT_STAGED),
    });

    let max_length = string(MAX_LENGTH).and_then(|value| match value.trim().parse() {
        Ok(length) => Some(length),
        Err(_) => {
            log::warn!("Ignoring non-integer {MAX_LENGTH}={value:?}");
            None
        }
    });

    PromptInput {
        limited: present(LIMITED),
        root: present(ROOT),
        status: string(STATUS).unwrap_or_default(),
        path,
        dir_flags,
        git_dir_depth,
        git,
        exit_code: string(EXIT_CODE),
        exec_time: string(EXEC_TIME),
        max_length,
    }
}

/// The override layer carried by `PROMPT_STYLE` and `PROMPT_EXIT_CODES`.
pub fn read_overrides(lookup: impl Fn(&str) -> Option<OsString>) -> UserConfig {
    let payload = |name: &str| lookup(name).map(|value| value.to_string_lossy().into_owned());

    UserConfig {
        style: payload(STYLE)
            .map(|json| StyleOverrides::from_json(&json))
            .unwrap_or_default(),
        exit_codes: payload(EXIT_CODES)
            .map(|json| exit_codes::parse_json(&json))
            .unwrap_or_default(),
        ..Default::default()
    }
}
