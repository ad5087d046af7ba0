//! Human-readable exit codes and execution times.

use crate::config::ExitCodeTable;
use crate::error::PromptError;
use crate::styling::Glyph;

use super::state::ExitCodeText;

/// Prettify an exit code.
///
/// - `None` means there is no previous command: no text at all.
/// - `0` or empty renders as an empty block.
/// - Known codes get their mnemonic: `137·SIGKILL`, short form `137`.
/// - Anything else is shown unchanged in both forms.
pub fn prettify_exit_code(
    code: Option<&str>,
    separator: Glyph,
    table: &ExitCodeTable,
) -> Option<ExitCodeText> {
    let code = code?;
    if code.is_empty() || code == "0" {
        return Some(ExitCodeText::default());
    }

    let display = match table.get(code) {
        Some(mnemonic) => format!("{code}{separator}{mnemonic}"),
        None => code.to_string(),
    };
    Some(ExitCodeText {
        display,
        short: code.to_string(),
    })
}

/// Prettify elapsed seconds as the two coarsest non-zero units.
///
/// `65` → `1m5s`, `3661` → `1h1m`, `90000` → `1d1h`. Zero elapsed time and
/// empty input are not displayed. Fractional seconds are floored.
/// Non-numeric input passes through unchanged.
pub fn prettify_exec_time(raw: Option<&str>) -> Result<Option<String>, PromptError> {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let Some(seconds) = parse_seconds(raw.trim()) else {
        log::debug!("Execution time {raw:?} is not numeric, showing it unchanged");
        return Ok(Some(raw.to_string()));
    };
    if seconds < 0 {
        return Err(PromptError::NegativeExecTime(seconds));
    }

    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    let hours = hours % 24;
    let minutes = minutes % 60;
    let seconds = seconds % 60;

    let formatted = if days > 0 {
        format!("{days}d{hours}h")
    } else if hours > 0 {
        format!("{hours}h{minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else if seconds > 0 {
        format!("{seconds}s")
    } else {
        return Ok(None);
    };
    Ok(Some(formatted))
}

/// Whole seconds, accepting integers and finite decimals.
fn parse_seconds(raw: &str) -> Option<i64> {
    if let Ok(seconds) = raw.parse::<i64>() {
        return Some(seconds);
    }
    let seconds = raw.parse::<f64>().ok().filter(|s| s.is_finite())?;
    // `as` saturates out-of-range floats
    Some(seconds.floor() as i64)
}
