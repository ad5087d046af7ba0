//! Single-line shell prompt renderer.
//!
//! The shell exports its state as `PROMPT_*` variables; this crate turns that
//! state into a chain of coloured chevron blocks that fits a column budget.
//! See [`prompt`] for the pipeline.

pub mod config;
pub mod environment;
pub mod error;
pub mod prompt;
pub mod styling;

pub use error::PromptError;
