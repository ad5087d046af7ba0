//! Prompt style options and the colours derived from prompt state.
//!
//! [`StyleOptions`] holds every glyph and colour the renderer uses, starting
//! from built-in defaults that depend only on terminal capability. Overrides
//! from config are applied on top of it (see `config::overrides`).
//!
//! A few colours depend on the prompt itself (root or not, last command
//! succeeded or failed). Those are computed by [`StyleOptions::resolve`] unless
//! the user pinned them explicitly.

use std::fmt;

use crate::error::PromptError;

/// Chevron used on terminals with a powerline-capable font.
pub const UNICODE_CHEVRON: Glyph = Glyph('\u{e0b0}');

/// Chevron used on terminals with a reduced palette.
pub const ASCII_CHEVRON: Glyph = Glyph('>');

/// Postfix printed after the final chevron on full terminals.
pub const DEFAULT_POSTFIX: &str = " ❯";

/// A single printable character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph(char);

impl Glyph {
    /// Validate a glyph option value.
    pub fn parse(option: &'static str, value: &str) -> Result<Self, PromptError> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_control() => Ok(Self(c)),
            _ => Err(PromptError::InvalidGlyph {
                option,
                value: value.to_string(),
            }),
        }
    }

    pub const fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Every visual option of the prompt.
///
/// Colour fields are 256-colour palette indices. The `Option` colour fields are
/// derived colours: `None` means "compute from prompt state".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleOptions {
    pub chevron: Glyph,

    pub status_nr_fg: u8,
    pub status_nr_bg: u8,
    pub status_r_fg: u8,
    pub status_r_bg: u8,
    pub status_fg: Option<u8>,
    pub status_bg: Option<u8>,

    pub path_omit: Glyph,
    pub path_nonprint: Glyph,
    pub path_dir_fg: u8,
    pub path_repo_fg: u8,
    pub path_sep_fg: u8,
    pub path_omit_fg: u8,
    pub path_nonprint_fg: u8,
    pub path_bg: u8,

    pub dir_unreadable: Glyph,
    pub dir_unwritable: Glyph,
    pub dir_unvisitable: Glyph,
    pub dir_setguid: Glyph,
    pub dir_sticky: Glyph,
    pub dir_flags_fg: u8,

    pub git_ahead: Glyph,
    pub git_behind: Glyph,
    pub git_merging: Glyph,
    pub git_untracked: Glyph,
    pub git_modified: Glyph,
    pub git_staged: Glyph,
    pub git_branch_fg: u8,
    pub git_detached_fg: u8,
    pub git_ahead_fg: u8,
    pub git_behind_fg: u8,
    pub git_merging_fg: u8,
    pub git_untracked_fg: u8,
    pub git_modified_fg: u8,
    pub git_staged_fg: u8,
    pub git_bg: u8,

    pub exit_code_sep: Glyph,
    pub exit_code_success_fg: u8,
    pub exit_code_success_bg: u8,
    pub exit_code_fail_fg: u8,
    pub exit_code_fail_bg: u8,
    pub exit_code_none_bg: u8,
    pub exit_code_fg: Option<u8>,
    pub exit_code_bg: Option<u8>,

    pub postfix: String,
    pub postfix_fg: Option<u8>,
}

impl StyleOptions {
    /// Built-in defaults. `limited` swaps the chevron for an ASCII arrow and
    /// drops the postfix.
    pub fn defaults(limited: bool) -> Self {
        Self {
            chevron: if limited {
                ASCII_CHEVRON
            } else {
                UNICODE_CHEVRON
            },

            status_nr_fg: 248,
            status_nr_bg: 238,
            status_r_fg: 236,
            status_r_bg: 202,
            status_fg: None,
            status_bg: None,

            path_omit: Glyph('▶'),
            path_nonprint: Glyph('_'),
            path_dir_fg: 254,
            path_repo_fg: 187,
            path_sep_fg: 236,
            path_omit_fg: 200,
            path_nonprint_fg: 196,
            path_bg: 240,

            dir_unreadable: Glyph('R'),
            dir_unwritable: Glyph('W'),
            dir_unvisitable: Glyph('X'),
            dir_setguid: Glyph('S'),
            dir_sticky: Glyph('T'),
            dir_flags_fg: 214,

            git_ahead: Glyph('↑'),
            git_behind: Glyph('↓'),
            git_merging: Glyph('↕'),
            git_untracked: Glyph('•'),
            git_modified: Glyph('•'),
            git_staged: Glyph('•'),
            git_branch_fg: 228,
            git_detached_fg: 208,
            git_ahead_fg: 254,
            git_behind_fg: 166,
            git_merging_fg: 33,
            git_untracked_fg: 160,
            git_modified_fg: 214,
            git_staged_fg: 34,
            git_bg: 238,

            exit_code_sep: Glyph('·'),
            exit_code_success_fg: 254,
            exit_code_success_bg: 35,
            exit_code_fail_fg: 252,
            exit_code_fail_bg: 124,
            exit_code_none_bg: 242,
            exit_code_fg: None,
            exit_code_bg: None,

            postfix: if limited {
                String::new()
            } else {
                DEFAULT_POSTFIX.to_string()
            },
            postfix_fg: None,
        }
    }

    /// Fill in the state-dependent colours the user did not pin.
    ///
    /// `exit_code` is the raw code before prettification.
    pub fn resolve(&self, root: bool, exit_code: Option<&str>) -> ResolvedStyle {
        let (status_fg, status_bg) = if root {
            (self.status_r_fg, self.status_r_bg)
        } else {
            (self.status_nr_fg, self.status_nr_bg)
        };

        let (exit_code_fg, exit_code_bg) = match exit_code {
            Some(code) if is_success(code) => {
                (self.exit_code_success_fg, self.exit_code_success_bg)
            }
            Some(_) => (self.exit_code_fail_fg, self.exit_code_fail_bg),
            None => (self.exit_code_success_fg, self.exit_code_none_bg),
        };
        let exit_code_bg = self.exit_code_bg.unwrap_or(exit_code_bg);

        ResolvedStyle {
            status_fg: self.status_fg.unwrap_or(status_fg),
            status_bg: self.status_bg.unwrap_or(status_bg),
            exit_code_fg: self.exit_code_fg.unwrap_or(exit_code_fg),
            exit_code_bg,
            postfix_fg: self.postfix_fg.unwrap_or(exit_code_bg),
        }
    }
}

/// An exit status counts as success when it is `0` or empty.
pub fn is_success(exit_code: &str) -> bool {
    exit_code.is_empty() || exit_code == "0"
}

/// Colours that depend on prompt state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub status_fg: u8,
    pub status_bg: u8,
    pub exit_code_fg: u8,
    pub exit_code_bg: u8,
    pub postfix_fg: u8,
}
