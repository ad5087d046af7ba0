//! Fitting the prompt into a column budget.
//!
//! Cuts are applied in a fixed order, stopping as soon as the prompt fits:
//!
//! 1. drop the postfix
//! 2. switch the exit code to its short form
//! 3. drop the git branch name (history and state glyphs stay)
//! 4. elide path components, first component first
//! 5. drop the execution time
//! 6. blank the exit code text (its chevron stays)
//! 7. blank the status text
//!
//! When every cut has been made the prompt may still be too long; the result
//! is best effort.

use super::layout::{Layout, text_len};
use super::state::PromptState;

/// Shrink `state` to fit `max_length` columns.
///
/// Returns the remaining surplus: zero or negative when the prompt fits.
/// Applying the same budget again is a no-op.
pub fn truncate(state: &mut PromptState, layout: &Layout, max_length: usize) -> isize {
    let mut surplus = layout.total() as isize - max_length as isize;
    if surplus <= 0 {
        return surplus;
    }
    log::debug!(
        "Prompt is {} columns, {surplus} over the budget of {max_length}",
        layout.total()
    );

    // 1. postfix
    surplus -= layout.postfix as isize;
    state.postfix.clear();
    if surplus <= 0 {
        return surplus;
    }

    // 2. short exit code
    surplus -= layout.exit_code_suffix as isize;
    if let Some(exit) = &mut state.exit_code {
        exit.display = exit.short.clone();
    }
    if surplus <= 0 {
        return surplus;
    }

    // 3. branch name
    surplus -= layout.git_branch as isize;
    if let Some(git) = &mut state.git {
        git.branch.clear();
    }
    if surplus <= 0 {
        return surplus;
    }

    // 4. path components
    surplus = elide_path(state, surplus);
    if surplus <= 0 {
        return surplus;
    }

    // 5. execution time
    surplus -= layout.exec_time as isize;
    state.exec_time = None;
    if surplus <= 0 {
        return surplus;
    }

    // 6. exit code text
    if let Some(exit) = &mut state.exit_code {
        surplus -= text_len(&exit.display) as isize;
        exit.display.clear();
        exit.short.clear();
    }
    if surplus <= 0 {
        return surplus;
    }

    // 7. status
    surplus -= layout.status as isize;
    state.status.clear();

    if surplus > 0 {
        log::debug!("Prompt still {surplus} columns over budget after every cut");
    }
    surplus
}

/// Elide trailing characters of path components, left to right.
///
/// A component longer than two characters can shrink to its first character
/// plus one omission marker. The marker costs one column the first time a
/// component is elided.
fn elide_path(state: &mut PromptState, mut surplus: isize) -> isize {
    for component in &mut state.path.components {
        let max_omitted = component.max_omitted();
        let omitted = component.omitted();
        if component.len() <= 2 || omitted == max_omitted {
            continue;
        }

        let marker = usize::from(omitted == 0);
        let capacity = (max_omitted - omitted - marker) as isize;
        if surplus > capacity {
            component.set_omitted(max_omitted);
            surplus -= capacity;
        } else {
            component.set_omitted(omitted + surplus as usize + marker);
            return 0;
        }
    }
    surplus
}
