use std::path::PathBuf;

use anstream::ColorChoice;
use clap::{ArgAction, Parser, ValueEnum};

/// Render a single-line shell prompt from `PROMPT_*` environment variables.
///
/// Flags take precedence over the matching environment variables.
#[derive(Parser, Debug)]
#[command(name = "promptline", version)]
pub(crate) struct Cli {
    /// Column budget; segments are shortened to fit [overrides PROMPT_MAX_LENGTH]
    #[arg(long, value_name = "COLUMNS", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_length: Option<u32>,

    /// ASCII chevrons and no postfix, for terminals without powerline fonts [overrides PROMPT_LIMITED]
    #[arg(long)]
    pub limited: bool,

    /// User config file [default: <config dir>/promptline/config.toml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// When to emit colour escape sequences
    #[arg(long, value_enum, value_name = "WHEN", default_value_t = ColorMode::Always)]
    pub color: ColorMode,

    /// Log to stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ColorMode {
    /// Always colour; prompts are usually captured by command substitution
    Always,
    /// Colour only when stdout is a terminal
    Auto,
    /// Strip all escape sequences
    Never,
}

impl ColorMode {
    pub fn choice(self) -> ColorChoice {
        match self {
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}
