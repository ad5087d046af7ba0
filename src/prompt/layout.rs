//! Length calculation.
//!
//! Measures the visible width of every segment straight from state, without
//! rendering. The sum must equal the visible width of [`super::render`]'s
//! output for the same state, so any change to what the renderer emits has to
//! be mirrored here.
//!
//! Shape of the rendered prompt (`>` is the chevron):
//!
//! ```text
//!  [status ]> path [flags ][> [branch ][history ][state ]]> [exit ]>[postfix][ exec]
//! ```

use super::state::{GitStatus, PromptState};

/// Chevron glyph plus the space after it.
pub const BLOCK_OVERHEAD: usize = 2;

/// Width of each segment of a prompt, in characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Layout {
    /// Leading space inside the status block
    pub lead: usize,
    /// Status text and its trailing space
    pub status: usize,
    /// Chevron, path content and trailing space
    pub path: usize,
    /// Directory flag letters and their trailing space
    pub dir_flags: usize,
    /// Whole git block, including `git_branch`
    pub git: usize,
    /// Branch name and its trailing space
    pub git_branch: usize,
    /// Whole exit code block, including `exit_code_text`
    pub exit_code: usize,
    /// Exit code text and its trailing space
    pub exit_code_text: usize,
    /// Width saved by switching the exit code to its short form
    pub exit_code_suffix: usize,
    /// The final chevron
    pub end: usize,
    pub postfix: usize,
    /// Execution time and its leading space
    pub exec_time: usize,
}

impl Layout {
    pub fn measure(state: &PromptState) -> Self {
        let (exit_code_text, exit_code_suffix) = match &state.exit_code {
            Some(exit) => (
                text_len(&exit.display),
                char_len(&exit.display).saturating_sub(char_len(&exit.short)),
            ),
            None => (0, 0),
        };
        let git_branch = state
            .git
            .as_ref()
            .map_or(0, |git| text_len(&git.branch));

        Self {
            lead: 1,
            status: text_len(&state.status),
            path: BLOCK_OVERHEAD + state.path.rendered_len() + 1,
            dir_flags: match state.dir_flags.count() {
                0 => 0,
                n => n + 1,
            },
            git: state.git.as_ref().map_or(0, git_len),
            git_branch,
            exit_code: BLOCK_OVERHEAD + exit_code_text,
            exit_code_text,
            exit_code_suffix,
            end: 1,
            postfix: char_len(&state.postfix),
            exec_time: state
                .exec_time
                .as_deref()
                .map_or(0, |exec| 1 + char_len(exec)),
        }
    }

    /// Total visible width of the prompt.
    pub fn total(&self) -> usize {
        self.lead
            + self.status
            + self.path
            + self.dir_flags
            + self.git
            + self.exit_code
            + self.end
            + self.postfix
            + self.exec_time
    }
}

fn git_len(git: &GitStatus) -> usize {
    let mut len = BLOCK_OVERHEAD + text_len(&git.branch);

    if git.has_history() {
        // glyph + count for each direction, then a space
        len += git.ahead().map_or(0, |ahead| 1 + char_len(ahead));
        len += git.behind().map_or(0, |behind| 1 + char_len(behind));
        len += 1;
    }

    if git.has_state() {
        len += [git.merging, git.untracked, git.modified, git.staged]
            .into_iter()
            .filter(|set| *set)
            .count();
        len += 1;
    }

    len
}

pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Width of an optional text followed by a space; zero when empty.
pub(crate) fn text_len(text: &str) -> usize {
    match char_len(text) {
        0 => 0,
        n => n + 1,
    }
}
