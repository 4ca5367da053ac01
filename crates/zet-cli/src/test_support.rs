// crates/zet-cli/src/test_support.rs - Shared fixtures for handler tests

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zet_core::{CommandRunner, EditorCommand, Invocation, Outcome, ZetConfig};

use crate::context::Context;

type Responder = Box<dyn Fn(&Invocation) -> io::Result<Outcome>>;

/// Fake runner that records every invocation and answers through a closure
pub(crate) struct RecordingRunner {
    calls: RefCell<Vec<Invocation>>,
    respond: Responder,
}

impl RecordingRunner {
    pub(crate) fn succeeding() -> Self {
        Self::responding(|_| Ok(Outcome::success()))
    }

    pub(crate) fn responding<F>(respond: F) -> Self
    where
        F: Fn(&Invocation) -> io::Result<Outcome> + 'static,
    {
        Self {
            calls: RefCell::new(Vec::new()),
            respond: Box::new(respond),
        }
    }

    /// Stand-in for `grep -E -q -e <pattern> -- <file>` doing a plain substring test
    pub(crate) fn substring_grep() -> Self {
        Self::responding(|inv| {
            let pattern = inv.args[3].to_string_lossy().into_owned();
            let path = PathBuf::from(inv.args.last().expect("grep gets a file"));
            let content = fs::read_to_string(path)?;
            Ok(if content.contains(&pattern) {
                Outcome::success()
            } else {
                Outcome::failure(1)
            })
        })
    }

    pub(crate) fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<Outcome> {
        self.calls.borrow_mut().push(invocation.clone());
        (self.respond)(invocation)
    }
}

/// Context over a fresh temporary root, editor `true`
pub(crate) fn test_context(runner: RecordingRunner) -> (TempDir, Context<RecordingRunner>) {
    let dir = TempDir::new().unwrap();
    let config = ZetConfig::new(
        dir.path().to_path_buf(),
        EditorCommand::parse("true").unwrap(),
    );
    (dir, Context::new(config, runner))
}

/// Write a note at `<root>/<YY>/<id>.md`, creating the partition
pub(crate) fn write_note(root: &Path, id: &str, content: &str) -> PathBuf {
    let year = root.join(&id[..2]);
    fs::create_dir_all(&year).unwrap();
    let path = year.join(format!("{id}.md"));
    fs::write(&path, content).unwrap();
    path
}
