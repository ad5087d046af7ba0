//! Segment rendering.
//!
//! Blocks are emitted left to right. Each block opens with a chevron drawn in
//! the previous block's background colour on the new block's background, so
//! adjacent blocks blend into each other. The final chevron sits on the
//! terminal's own background.

use std::fmt::Write;

use anstyle::Reset;

use crate::styling::{Glyph, block, fg};

use super::path::{PathRun, PathSegments};
use super::state::{GitStatus, PromptState};

/// Render `state` as an SGR-escaped string, starting and ending with a reset.
pub fn render(state: &PromptState) -> String {
    let style = &state.style;
    let colors = &state.colors;
    let mut painter = Painter::open(style.chevron, colors.status_fg, colors.status_bg);

    if !state.status.is_empty() {
        painter.raw(&state.status);
        painter.raw(" ");
    }

    painter.chevron(style.path_bg);
    render_path(&mut painter, state, &state.path);
    painter.raw(" ");

    if state.dir_flags.count() > 0 {
        for flag in state.dir_flags.iter() {
            painter.paint(style.dir_flags_fg, flag.glyph(style));
        }
        painter.raw(" ");
    }

    if let Some(git) = &state.git {
        render_git(&mut painter, state, git);
    }

    painter.chevron(colors.exit_code_bg);
    if let Some(exit) = &state.exit_code
        && !exit.display.is_empty()
    {
        painter.paint(colors.exit_code_fg, &exit.display);
        painter.raw(" ");
    }

    painter.end();
    if !state.postfix.is_empty() {
        painter.paint(colors.postfix_fg, &state.postfix);
    }
    if let Some(exec_time) = &state.exec_time {
        painter.reset();
        painter.raw(" ");
        painter.raw(exec_time);
    }

    painter.finish()
}

fn render_path(painter: &mut Painter, state: &PromptState, path: &PathSegments) {
    let style = &state.style;
    if path.is_root() {
        let color = if path.root_in_repository {
            style.path_repo_fg
        } else {
            style.path_dir_fg
        };
        painter.paint(color, "/");
        return;
    }

    for component in &path.components {
        painter.paint(style.path_sep_fg, component.separator);
        let text_fg = if component.in_repository {
            style.path_repo_fg
        } else {
            style.path_dir_fg
        };
        for run in component.runs() {
            match run {
                PathRun::Text(text) => painter.paint(text_fg, text),
                PathRun::NonPrintable(count) => painter.paint(
                    style.path_nonprint_fg,
                    style.path_nonprint.to_string().repeat(count),
                ),
            }
        }
        if component.omitted() > 0 {
            painter.paint(style.path_omit_fg, style.path_omit);
        }
    }
}

fn render_git(painter: &mut Painter, state: &PromptState, git: &GitStatus) {
    let style = &state.style;
    painter.chevron(style.git_bg);

    if !git.branch.is_empty() {
        let branch_fg = if git.detached {
            style.git_detached_fg
        } else {
            style.git_branch_fg
        };
        painter.paint(branch_fg, &git.branch);
        painter.raw(" ");
    }

    if git.has_history() {
        if let Some(ahead) = git.ahead() {
            painter.paint(style.git_ahead_fg, format_args!("{}{ahead}", style.git_ahead));
        }
        if let Some(behind) = git.behind() {
            painter.paint(style.git_behind_fg, format_args!("{}{behind}", style.git_behind));
        }
        painter.raw(" ");
    }

    if git.has_state() {
        let glyphs = [
            (git.merging, style.git_merging_fg, style.git_merging),
            (git.untracked, style.git_untracked_fg, style.git_untracked),
            (git.modified, style.git_modified_fg, style.git_modified),
            (git.staged, style.git_staged_fg, style.git_staged),
        ];
        for (_, color, glyph) in glyphs.into_iter().filter(|(set, _, _)| *set) {
            painter.paint(color, glyph);
        }
        painter.raw(" ");
    }
}

/// Accumulates escape sequences and text, tracking the current background.
struct Painter {
    out: String,
    chevron: Glyph,
    prev_bg: u8,
}

impl Painter {
    fn open(chevron: Glyph, status_fg: u8, status_bg: u8) -> Self {
        let mut painter = Self {
            out: String::new(),
            chevron,
            prev_bg: status_bg,
        };
        let _ = write!(painter.out, "{Reset}{} ", block(status_fg, status_bg));
        painter
    }

    fn raw(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn paint(&mut self, color: u8, text: impl std::fmt::Display) {
        let _ = write!(self.out, "{}{text}", fg(color));
    }

    /// Start a new block on `bg`.
    fn chevron(&mut self, bg: u8) {
        let _ = write!(self.out, "{}{} ", block(self.prev_bg, bg), self.chevron);
        self.prev_bg = bg;
    }

    /// Final chevron, on the terminal background.
    fn end(&mut self) {
        let _ = write!(self.out, "{Reset}{}{}", fg(self.prev_bg), self.chevron);
    }

    fn reset(&mut self) {
        let _ = write!(self.out, "{Reset}");
    }

    fn finish(mut self) -> String {
        self.reset();
        self.out
    }
}
