// crates/zet-core/src/search.rs - Content matching delegated to grep
//
// zet does not interpret patterns. Each candidate file is handed to
// `grep -E -q` and exit status 0 means "this file matches". A grep that
// cannot be started counts as no match rather than as an error.

use std::path::Path;
use tracing::debug;

use crate::runner::{CommandRunner, Invocation, StdioMode};

/// External matcher program
pub const SEARCH_PROGRAM: &str = "grep";

/// Width of the rule printed above each matching note
pub const SEPARATOR_WIDTH: usize = 80;

/// Line printed above each matching note
pub fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// Quiet extended-regex match of `pattern` against one file.
///
/// `-e` and `--` keep patterns and paths that start with `-` from being read
/// as options.
pub fn match_invocation(pattern: &str, path: &Path) -> Invocation {
    Invocation::new(SEARCH_PROGRAM)
        .args(["-E", "-q", "-e", pattern, "--"])
        .arg(path)
        .stdio(StdioMode::Null)
}

/// Whether `path` matches `pattern` according to the search program
pub fn file_matches<R: CommandRunner + ?Sized>(runner: &R, pattern: &str, path: &Path) -> bool {
    match runner.run(&match_invocation(pattern, path)) {
        Ok(outcome) => outcome.success,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "search program failed to start");
            false
        }
    }
}
