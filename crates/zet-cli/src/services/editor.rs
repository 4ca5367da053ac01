// crates/zet-cli/src/services/editor.rs - Editor Integration Service
//
// Launches the configured editor on a note and waits for it. The editor
// shares the terminal with zet, so the user interacts with it directly.
//
// FAILURE SEVERITY:
// - The editor could not be started at all: fatal, the command aborts
// - The editor ran but exited non-zero: warning only, the command succeeds

use std::path::Path;
use tracing::debug;
use zet_core::{CommandRunner, EditorCommand, ZetError, ZetResult};

/// Handles text editor operations
pub struct EditorService {
    command: EditorCommand,
}

impl EditorService {
    pub fn new(command: EditorCommand) -> Self {
        Self { command }
    }

    /// Open a file in the configured editor and block until it exits
    pub fn open_file<R: CommandRunner + ?Sized>(&self, runner: &R, path: &Path) -> ZetResult<()> {
        debug!(editor = %self.command, path = %path.display(), "opening editor");

        let outcome = runner
            .run(&self.command.invocation(path))
            .map_err(|source| ZetError::EditorLaunch {
                editor: self.command.to_string(),
                source,
            })?;

        if !outcome.success {
            debug!(editor = %self.command, code = ?outcome.code, "editor exited with an error");
            eprintln!(
                "Editor '{}' exited with error code: {}",
                self.command,
                outcome
                    .code
                    .map_or_else(|| "none (terminated by signal)".to_string(), |c| c.to_string())
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingRunner;
    use std::ffi::OsString;
    use std::io;
    use zet_core::{Outcome, StdioMode};

    fn service(raw: &str) -> EditorService {
        EditorService::new(EditorCommand::parse(raw).unwrap())
    }

    #[test]
    fn test_open_file_passes_path_last() {
        let runner = RecordingRunner::succeeding();
        service("hx --vsplit")
            .open_file(&runner, Path::new("/z/24/2403051412.md"))
            .unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program, "hx");
        assert_eq!(
            calls[0].args,
            vec![OsString::from("--vsplit"), OsString::from("/z/24/2403051412.md")]
        );
        assert_eq!(calls[0].stdio, StdioMode::Inherit);
    }

    #[test]
    fn test_non_zero_exit_is_not_fatal() {
        let runner = RecordingRunner::responding(|_| Ok(Outcome::failure(3)));
        assert!(service("vi").open_file(&runner, Path::new("x.md")).is_ok());
    }

    #[test]
    fn test_launch_failure_is_fatal() {
        let runner = RecordingRunner::responding(|_| {
            Err(io::Error::new(io::ErrorKind::NotFound, "not found"))
        });
        let err = service("nano").open_file(&runner, Path::new("x.md")).unwrap_err();

        assert!(matches!(err, ZetError::EditorLaunch { ref editor, .. } if editor == "nano"));
        assert_eq!(err.to_string(), "failed to launch editor 'nano'");
    }
}
