//! Contract violations.
//!
//! Misconfiguration aborts the render: a glyph that is not a single printable
//! character, a colour index outside the 256-colour palette, a negative
//! execution time or a non-positive length budget. Recoverable input problems
//! (malformed payloads, non-numeric values) never reach this type; they are
//! logged and replaced with defaults where they are read.

/// Errors that abort the render before anything is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// A glyph option is not exactly one printable character
    InvalidGlyph { option: &'static str, value: String },
    /// A colour option is outside 0..=255
    ColorOutOfRange { option: &'static str, value: i64 },
    /// Execution time was negative
    NegativeExecTime(i64),
    /// Length budget was zero or negative
    NonPositiveMaxLength(i64),
}

impl PromptError {
    /// Suggestion printed below the error.
    pub fn hint(&self) -> &'static str {
        match self {
            PromptError::InvalidGlyph { .. } | PromptError::ColorOutOfRange { .. } => {
                "Check PROMPT_STYLE and the [style] table of the config file"
            }
            PromptError::NegativeExecTime(_) => "PROMPT_EXEC_TIME is the elapsed time in seconds",
            PromptError::NonPositiveMaxLength(_) => {
                "Unset PROMPT_MAX_LENGTH to render without a length budget"
            }
        }
    }
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::InvalidGlyph { option, value } => write!(
                f,
                "Style option {option} must be exactly one printable character, got {value:?}"
            ),
            PromptError::ColorOutOfRange { option, value } => write!(
                f,
                "Style option {option} must be a colour index in 0..=255, got {value}"
            ),
            PromptError::NegativeExecTime(seconds) => {
                write!(f, "Execution time must not be negative, got {seconds}")
            }
            PromptError::NonPositiveMaxLength(length) => {
                write!(f, "Maximum prompt length must be positive, got {length}")
            }
        }
    }
}

impl std::error::Error for PromptError {}
