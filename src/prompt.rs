//! The prompt layout engine.
//!
//! Rendering is three explicit stages, each a plain function over the state:
//!
//! 1. [`prepare`] resolves state-dependent colours, prettifies the exit code
//!    and execution time, and splits the path.
//! 2. [`fit`] measures every segment and truncates to the column budget.
//! 3. [`render`] emits the chained chevron blocks.
//!
//! [`render_prompt`] composes the three.

pub mod layout;
pub mod path;
pub mod prettify;
pub mod render;
pub mod state;
pub mod truncate;

pub use layout::Layout;
pub use path::{PathComponent, PathSegments};
pub use render::render;
pub use state::{DirFlag, DirFlags, ExitCodeText, GitStatus, PromptInput, PromptState};

use crate::config::ExitCodeTable;
use crate::error::PromptError;
use crate::styling::StyleOptions;

/// Derive the render state from raw inputs.
pub fn prepare(
    input: PromptInput,
    style: StyleOptions,
    exit_codes: &ExitCodeTable,
) -> Result<PromptState, PromptError> {
    let max_length = match input.max_length {
        Some(length) if length <= 0 => return Err(PromptError::NonPositiveMaxLength(length)),
        Some(length) => Some(length as usize),
        None => None,
    };

    let colors = style.resolve(input.root, input.exit_code.as_deref());
    let exit_code =
        prettify::prettify_exit_code(input.exit_code.as_deref(), style.exit_code_sep, exit_codes);
    let exec_time = prettify::prettify_exec_time(input.exec_time.as_deref())?;
    let path = PathSegments::split(&input.path, input.git_dir_depth);
    let postfix = style.postfix.clone();

    Ok(PromptState {
        style,
        colors,
        status: input.status,
        path,
        dir_flags: input.dir_flags,
        git: input.git,
        exit_code,
        exec_time,
        postfix,
        max_length,
    })
}

/// Truncate to the state's column budget, if it has one.
pub fn fit(mut state: PromptState) -> PromptState {
    let layout = Layout::measure(&state);
    log::debug!("Measured prompt length {}", layout.total());
    if let Some(max_length) = state.max_length {
        truncate::truncate(&mut state, &layout, max_length);
    }
    state
}

/// Run the whole pipeline.
pub fn render_prompt(
    input: PromptInput,
    style: StyleOptions,
    exit_codes: &ExitCodeTable,
) -> Result<String, PromptError> {
    let state = fit(prepare(input, style, exit_codes)?);
    Ok(render(&state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ansi_str::AnsiStr;

    #[test]
    fn test_prepare_rejects_non_positive_budget() {
        for length in [0, -4] {
            let input = PromptInput {
                max_length: Some(length),
                ..Default::default()
            };
            let err = prepare(input, StyleOptions::defaults(false), &ExitCodeTable::default())
                .unwrap_err();
            assert_eq!(err, PromptError::NonPositiveMaxLength(length));
        }
    }

    #[test]
    fn test_prepare_rejects_negative_exec_time() {
        let input = PromptInput {
            exec_time: Some("-1".into()),
            ..Default::default()
        };
        assert_eq!(
            prepare(input, StyleOptions::defaults(false), &ExitCodeTable::default()),
            Err(PromptError::NegativeExecTime(-1))
        );
    }

    #[test]
    fn test_prepare_copies_postfix_from_style() {
        let mut style = StyleOptions::defaults(false);
        style.postfix = "%".into();
        let state = prepare(PromptInput::default(), style, &ExitCodeTable::default()).unwrap();
        assert_eq!(state.postfix, "%");
    }

    #[test]
    fn test_fit_without_budget_keeps_state() {
        let input = PromptInput {
            path: "/a/very/long/path/indeed".into(),
            exit_code: Some("127".into()),
            ..Default::default()
        };
        let state = prepare(input, StyleOptions::defaults(false), &ExitCodeTable::default())
            .unwrap();
        assert_eq!(fit(state.clone()), state);
    }

    #[test]
    fn test_render_prompt_respects_budget() {
        let input = PromptInput {
            limited: true,
            path: "/home/user/projects/demo".into(),
            exit_code: Some("127".into()),
            max_length: Some(30),
            ..Default::default()
        };
        let rendered =
            render_prompt(input, StyleOptions::defaults(true), &ExitCodeTable::default()).unwrap();
        let visible = rendered.ansi_strip();
        assert!(visible.chars().count() <= 30, "{visible:?}");
        assert!(visible.contains("127"));
        assert!(!visible.contains("NOTFOUND"));
    }
}
