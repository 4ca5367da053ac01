// crates/zet-core/src/runner.rs - Launching external programs
//
// zet hands two jobs to other programs: editing (the user's $EDITOR) and
// matching (grep). Both go through the CommandRunner trait so the command
// handlers can be exercised with a recording fake instead of real processes.

use std::ffi::OsString;
use std::io;
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

/// How the child's standard streams are wired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdioMode {
    /// Child shares the terminal with zet (interactive editors)
    Inherit,
    /// Child sees /dev/null on every stream (quiet matchers)
    Null,
}

/// A fully described program launch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
    pub stdio: StdioMode,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            stdio: StdioMode::Inherit,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn stdio(mut self, stdio: StdioMode) -> Self {
        self.stdio = stdio;
        self
    }
}

/// How a launched program finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub success: bool,
    /// Exit code, `None` when the child was killed by a signal
    pub code: Option<i32>,
}

impl Outcome {
    pub fn success() -> Self {
        Self {
            success: true,
            code: Some(0),
        }
    }

    pub fn failure(code: i32) -> Self {
        Self {
            success: false,
            code: Some(code),
        }
    }
}

impl From<ExitStatus> for Outcome {
    fn from(status: ExitStatus) -> Self {
        Self {
            success: status.success(),
            code: status.code(),
        }
    }
}

/// Capability to run an external program to completion.
///
/// `Err` means the program could not be started at all; a program that ran
/// and exited non-zero is an `Ok` outcome with `success == false`.
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<Outcome>;
}

/// Runs programs with `std::process::Command`, blocking until they exit
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<Outcome> {
        debug!(program = %invocation.program, args = ?invocation.args, "spawning");

        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);

        match invocation.stdio {
            StdioMode::Inherit => {
                command
                    .stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit());
            }
            StdioMode::Null => {
                command
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null());
            }
        }

        let outcome = Outcome::from(command.status()?);
        debug!(program = %invocation.program, ?outcome, "exited");
        Ok(outcome)
    }
}
