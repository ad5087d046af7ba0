//! Prompt inputs and the derived state threaded through the pipeline.

use crate::styling::{Glyph, ResolvedStyle, StyleOptions};

use super::path::PathSegments;

/// Repository depth meaning "not inside a repository".
///
/// `-1` is not usable for this: it is the depth reported when the repository
/// root is `/` itself, which has no path components.
pub const NO_REPOSITORY: i64 = -2;

/// A permission attribute of the current directory.
///
/// Iteration order is the order flags are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter, strum::IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DirFlag {
    Unreadable,
    Unwritable,
    Unvisitable,
    Setguid,
    Sticky,
}

impl DirFlag {
    /// Glyph configured for this flag.
    pub fn glyph(self, style: &StyleOptions) -> Glyph {
        match self {
            DirFlag::Unreadable => style.dir_unreadable,
            DirFlag::Unwritable => style.dir_unwritable,
            DirFlag::Unvisitable => style.dir_unvisitable,
            DirFlag::Setguid => style.dir_setguid,
            DirFlag::Sticky => style.dir_sticky,
        }
    }
}

/// Independent permission flags of the current directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirFlags {
    pub unreadable: bool,
    pub unwritable: bool,
    pub unvisitable: bool,
    pub setguid: bool,
    pub sticky: bool,
}

impl DirFlags {
    pub fn contains(&self, flag: DirFlag) -> bool {
        match flag {
            DirFlag::Unreadable => self.unreadable,
            DirFlag::Unwritable => self.unwritable,
            DirFlag::Unvisitable => self.unvisitable,
            DirFlag::Setguid => self.setguid,
            DirFlag::Sticky => self.sticky,
        }
    }

    pub fn insert(&mut self, flag: DirFlag) {
        match flag {
            DirFlag::Unreadable => self.unreadable = true,
            DirFlag::Unwritable => self.unwritable = true,
            DirFlag::Unvisitable => self.unvisitable = true,
            DirFlag::Setguid => self.setguid = true,
            DirFlag::Sticky => self.sticky = true,
        }
    }

    /// Set flags in render order.
    pub fn iter(&self) -> impl Iterator<Item = DirFlag> + '_ {
        use strum::IntoEnumIterator;
        DirFlag::iter().filter(|flag| self.contains(*flag))
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

/// Repository status. Its presence is keyed off the branch being known.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitStatus {
    /// Branch name (or commit when detached). Empty once truncated away.
    pub branch: String,
    pub detached: bool,
    /// Commits ahead of upstream, as given
    pub ahead: Option<String>,
    /// Commits behind upstream, as given
    pub behind: Option<String>,
    pub merging: bool,
    pub untracked: bool,
    pub modified: bool,
    pub staged: bool,
}

impl GitStatus {
    /// Ahead count, ignoring empty values.
    pub fn ahead(&self) -> Option<&str> {
        self.ahead.as_deref().filter(|s| !s.is_empty())
    }

    /// Behind count, ignoring empty values.
    pub fn behind(&self) -> Option<&str> {
        self.behind.as_deref().filter(|s| !s.is_empty())
    }

    pub fn has_history(&self) -> bool {
        self.ahead().is_some() || self.behind().is_some()
    }

    pub fn has_state(&self) -> bool {
        self.merging || self.untracked || self.modified || self.staged
    }
}

/// Raw inputs, as read from the environment or command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptInput {
    /// Only a reduced palette is available
    pub limited: bool,
    pub root: bool,
    /// Free-form status text, empty when absent
    pub status: String,
    pub path: String,
    pub dir_flags: DirFlags,
    /// Trailing path components inside a repository, 0-based from the end
    pub git_dir_depth: i64,
    pub git: Option<GitStatus>,
    /// Exit status of the previous command as decimal text
    pub exit_code: Option<String>,
    /// Elapsed seconds of the previous command as decimal text
    pub exec_time: Option<String>,
    /// Column budget
    pub max_length: Option<i64>,
}

impl Default for PromptInput {
    fn default() -> Self {
        Self {
            limited: false,
            root: false,
            status: String::new(),
            path: String::new(),
            dir_flags: DirFlags::default(),
            git_dir_depth: NO_REPOSITORY,
            git: None,
            exit_code: None,
            exec_time: None,
            max_length: None,
        }
    }
}

/// Exit code text in its full and short forms.
///
/// `short` is never longer than `display`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExitCodeText {
    pub display: String,
    pub short: String,
}

/// State after style resolution, prettification and path segmentation.
///
/// Truncation may narrow `status`, `path`, `git.branch`, `exit_code`,
/// `exec_time` and `postfix`; nothing else changes after [`super::prepare`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptState {
    pub style: StyleOptions,
    pub colors: ResolvedStyle,
    pub status: String,
    pub path: PathSegments,
    pub dir_flags: DirFlags,
    pub git: Option<GitStatus>,
    /// `None` when there is no previous command; its block is still drawn
    pub exit_code: Option<ExitCodeText>,
    pub exec_time: Option<String>,
    pub postfix: String,
    pub max_length: Option<usize>,
}
