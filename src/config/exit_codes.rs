//! Exit code mnemonics.
//!
//! Covers success, the common shell errors and the Linux signals reported as
//! `128 + N`. Users may add, rename or remove entries; an empty mnemonic
//! removes the entry.

use std::collections::BTreeMap;

const KNOWN_EXIT_CODES: &[(&str, &str)] = &[
    ("0", "SUCCESS"),
    ("1", "GENERAL"),
    ("2", "MISUSE"),
    ("126", "NOTEXEC"),
    ("127", "NOTFOUND"),
    // signals
    ("129", "SIGHUP"),
    ("130", "SIGINT"),
    ("131", "SIGQUIT"),
    ("132", "SIGILL"),
    ("133", "SIGTRAP"),
    ("134", "SIGABRT"),
    ("135", "SIGBUS"),
    ("136", "SIGFPE"),
    ("137", "SIGKILL"),
    ("138", "SIGUSR1"),
    ("139", "SIGSEGV"),
    ("140", "SIGUSR2"),
    ("141", "SIGPIPE"),
    ("142", "SIGALRM"),
    ("143", "SIGTERM"),
    ("144", "SIGSTKFLT"),
    ("145", "SIGCHLD"),
    ("146", "SIGCONT"),
    ("147", "SIGSTOP"),
    ("148", "SIGTSTP"),
    ("149", "SIGTTIN"),
    ("150", "SIGTTOU"),
    ("151", "SIGURG"),
    ("152", "SIGXCPU"),
    ("153", "SIGXFSZ"),
    ("154", "SIGVTALRM"),
    ("155", "SIGPROF"),
    ("156", "SIGWINCH"),
    ("157", "SIGIO"),
    ("158", "SIGPWR"),
    ("159", "SIGSYS"),
    ("255", "OUTOFRANGE"),
];

/// Decimal exit code to mnemonic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitCodeTable(BTreeMap<String, String>);

impl Default for ExitCodeTable {
    fn default() -> Self {
        KNOWN_EXIT_CODES.iter().copied().collect()
    }
}

impl ExitCodeTable {
    pub fn get(&self, code: &str) -> Option<&str> {
        self.0.get(code).map(String::as_str)
    }

    /// Merge user entries over the table.
    pub fn merge(&mut self, overrides: &BTreeMap<String, String>) {
        for (code, mnemonic) in overrides {
            if mnemonic.is_empty() {
                self.0.remove(code);
            } else {
                self.0.insert(code.clone(), mnemonic.clone());
            }
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ExitCodeTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(code, mnemonic)| (code.into(), mnemonic.into()))
                .collect(),
        )
    }
}

/// Parse a JSON object of exit code mnemonics.
///
/// A malformed payload is logged and treated as empty.
pub fn parse_json(payload: &str) -> BTreeMap<String, String> {
    serde_json::from_str(payload).unwrap_or_else(|e| {
        log::warn!("Ignoring malformed exit code overrides: {e}");
        BTreeMap::new()
    })
}
