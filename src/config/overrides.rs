//! Style overrides.
//!
//! Every field is optional and named after the option key users write in
//! `PROMPT_STYLE` or the `[style]` table. Values are checked when applied:
//! glyphs must be a single printable character and colours must be palette
//! indices. Unknown keys are logged and ignored.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::de::IgnoredAny;

use crate::error::PromptError;
use crate::styling::{Glyph, StyleOptions};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleOverrides {
    pub ch_chevron: Option<String>,

    pub col_status_nr_fg: Option<i64>,
    pub col_status_nr_bg: Option<i64>,
    pub col_status_r_fg: Option<i64>,
    pub col_status_r_bg: Option<i64>,
    pub col_status_fg: Option<i64>,
    pub col_status_bg: Option<i64>,

    pub ch_path_omit: Option<String>,
    pub ch_path_nonprint: Option<String>,
    pub col_path_dir_fg: Option<i64>,
    pub col_path_repo_fg: Option<i64>,
    pub col_path_sep_fg: Option<i64>,
    pub col_path_omit_fg: Option<i64>,
    pub col_path_nonprint_fg: Option<i64>,
    pub col_path_bg: Option<i64>,

    pub ch_dir_unreadable: Option<String>,
    pub ch_dir_unwritable: Option<String>,
    pub ch_dir_unvisitable: Option<String>,
    pub ch_dir_setguid: Option<String>,
    pub ch_dir_sticky: Option<String>,
    pub col_dir_flags_fg: Option<i64>,

    pub ch_git_ahead: Option<String>,
    pub ch_git_behind: Option<String>,
    pub ch_git_merging: Option<String>,
    pub ch_git_untracked: Option<String>,
    pub ch_git_modified: Option<String>,
    pub ch_git_staged: Option<String>,
    pub col_git_branch_fg: Option<i64>,
    pub col_git_detached_fg: Option<i64>,
    pub col_git_ahead_fg: Option<i64>,
    pub col_git_behind_fg: Option<i64>,
    pub col_git_merging_fg: Option<i64>,
    pub col_git_untracked_fg: Option<i64>,
    pub col_git_modified_fg: Option<i64>,
    pub col_git_staged_fg: Option<i64>,
    pub col_git_bg: Option<i64>,

    pub ch_exit_code_sep: Option<String>,
    pub col_exit_code_success_fg: Option<i64>,
    pub col_exit_code_success_bg: Option<i64>,
    pub col_exit_code_fail_fg: Option<i64>,
    pub col_exit_code_fail_bg: Option<i64>,
    pub col_exit_code_none_bg: Option<i64>,
    pub col_exit_code_fg: Option<i64>,
    pub col_exit_code_bg: Option<i64>,

    pub str_postfix: Option<String>,
    pub col_postfix_fg: Option<i64>,

    #[serde(flatten)]
    pub unknown: BTreeMap<String, IgnoredAny>,
}

impl StyleOverrides {
    /// Parse a JSON object of style options.
    ///
    /// A malformed payload is logged and treated as empty.
    pub fn from_json(payload: &str) -> Self {
        serde_json::from_str(payload).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed style overrides: {e}");
            Self::default()
        })
    }

    /// Apply these overrides on top of `style`.
    pub fn apply(&self, style: &mut StyleOptions) -> Result<(), PromptError> {
        for key in self.unknown.keys() {
            log::warn!("Ignoring unknown style option {key}");
        }

        set_glyph(&mut style.chevron, "ch_chevron", &self.ch_chevron)?;

        set_color(&mut style.status_nr_fg, "col_status_nr_fg", self.col_status_nr_fg)?;
        set_color(&mut style.status_nr_bg, "col_status_nr_bg", self.col_status_nr_bg)?;
        set_color(&mut style.status_r_fg, "col_status_r_fg", self.col_status_r_fg)?;
        set_color(&mut style.status_r_bg, "col_status_r_bg", self.col_status_r_bg)?;
        pin_color(&mut style.status_fg, "col_status_fg", self.col_status_fg)?;
        pin_color(&mut style.status_bg, "col_status_bg", self.col_status_bg)?;

        set_glyph(&mut style.path_omit, "ch_path_omit", &self.ch_path_omit)?;
        set_glyph(&mut style.path_nonprint, "ch_path_nonprint", &self.ch_path_nonprint)?;
        set_color(&mut style.path_dir_fg, "col_path_dir_fg", self.col_path_dir_fg)?;
        set_color(&mut style.path_repo_fg, "col_path_repo_fg", self.col_path_repo_fg)?;
        set_color(&mut style.path_sep_fg, "col_path_sep_fg", self.col_path_sep_fg)?;
        set_color(&mut style.path_omit_fg, "col_path_omit_fg", self.col_path_omit_fg)?;
        set_color(
            &mut style.path_nonprint_fg,
            "col_path_nonprint_fg",
            self.col_path_nonprint_fg,
        )?;
        set_color(&mut style.path_bg, "col_path_bg", self.col_path_bg)?;

        set_glyph(&mut style.dir_unreadable, "ch_dir_unreadable", &self.ch_dir_unreadable)?;
        set_glyph(&mut style.dir_unwritable, "ch_dir_unwritable", &self.ch_dir_unwritable)?;
        set_glyph(
            &mut style.dir_unvisitable,
            "ch_dir_unvisitable",
            &self.ch_dir_unvisitable,
        )?;
        set_glyph(&mut style.dir_setguid, "ch_dir_setguid", &self.ch_dir_setguid)?;
        set_glyph(&mut style.dir_sticky, "ch_dir_sticky", &self.ch_dir_sticky)?;
        set_color(&mut style.dir_flags_fg, "col_dir_flags_fg", self.col_dir_flags_fg)?;

        set_glyph(&mut style.git_ahead, "ch_git_ahead", &self.ch_git_ahead)?;
        set_glyph(&mut style.git_behind, "ch_git_behind", &self.ch_git_behind)?;
        set_glyph(&mut style.git_merging, "ch_git_merging", &self.ch_git_merging)?;
        set_glyph(&mut style.git_untracked, "ch_git_untracked", &self.ch_git_untracked)?;
        set_glyph(&mut style.git_modified, "ch_git_modified", &self.ch_git_modified)?;
        set_glyph(&mut style.git_staged, "ch_git_staged", &self.ch_git_staged)?;
        set_color(&mut style.git_branch_fg, "col_git_branch_fg", self.col_git_branch_fg)?;
        set_color(
            &mut style.git_detached_fg,
            "col_git_detached_fg",
            self.col_git_detached_fg,
        )?;
        set_color(&mut style.git_ahead_fg, "col_git_ahead_fg", self.col_git_ahead_fg)?;
        set_color(&mut style.git_behind_fg, "col_git_behind_fg", self.col_git_behind_fg)?;
        set_color(&mut style.git_merging_fg, "col_git_merging_fg", self.col_git_merging_fg)?;
        set_color(
            &mut style.git_untracked_fg,
            "col_git_untracked_fg",
            self.col_git_untracked_fg,
        )?;
        set_color(
            &mut style.git_modified_fg,
            "col_git_modified_fg",
            self.col_git_modified_fg,
        )?;
        set_color(&mut style.git_staged_fg, "col_git_staged_fg", self.col_git_staged_fg)?;
        set_color(&mut style.git_bg, "col_git_bg", self.col_git_bg)?;

        set_glyph(&mut style.exit_code_sep, "ch_exit_code_sep", &self.ch_exit_code_sep)?;
        set_color(
            &mut style.exit_code_success_fg,
            "col_exit_code_success_fg",
            self.col_exit_code_success_fg,
        )?;
        set_color(
            &mut style.exit_code_success_bg,
            "col_exit_code_success_bg",
            self.col_exit_code_success_bg,
        )?;
        set_color(
            &mut style.exit_code_fail_fg,
            "col_exit_code_fail_fg",
            self.col_exit_code_fail_fg,
        )?;
        set_color(
            &mut style.exit_code_fail_bg,
            "col_exit_code_fail_bg",
            self.col_exit_code_fail_bg,
        )?;
        set_color(
            &mut style.exit_code_none_bg,
            "col_exit_code_none_bg",
            self.col_exit_code_none_bg,
        )?;
        pin_color(&mut style.exit_code_fg, "col_exit_code_fg", self.col_exit_code_fg)?;
        pin_color(&mut style.exit_code_bg, "col_exit_code_bg", self.col_exit_code_bg)?;

        if let Some(postfix) = &self.str_postfix {
            style.postfix = postfix.clone();
        }
        pin_color(&mut style.postfix_fg, "col_postfix_fg", self.col_postfix_fg)?;

        Ok(())
    }
}

fn set_glyph(
    target: &mut Glyph,
    option: &'static str,
    value: &Option<String>,
) -> Result<(), PromptError> {
    if let Some(value) = value {
        *target = Glyph::parse(option, value)?;
    }
    Ok(())
}

fn set_color(target: &mut u8, option: &'static str, value: Option<i64>) -> Result<(), PromptError> {
    if let Some(value) = value {
        *target = color_index(option, value)?;
    }
    Ok(())
}

/// Pin a colour that would otherwise be derived from prompt state.
fn pin_color(
    target: &mut Option<u8>,
    option: &'static str,
    value: Option<i64>,
) -> Result<(), PromptError> {
    if let Some(value) = value {
        *target = Some(color_index(option, value)?);
    }
    Ok(())
}

fn color_index(option: &'static str, value: i64) -> Result<u8, PromptError> {
    u8::try_from(value).map_err(|_| PromptError::ColorOutOfRange { option, value })
}
