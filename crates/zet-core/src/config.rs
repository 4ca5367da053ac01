// crates/zet-core/src/config.rs - Resolved configuration for one invocation
//
// zet is configured entirely from two values:
//
//   ZET_DIR   root of the note tree (required)
//   EDITOR    editor command line (optional, defaults to vi)
//
// The binary reads them once at startup (clap handles the environment lookup
// and the --dir/--editor overrides) and hands the resulting ZetConfig to every
// command. Nothing below reads the process environment itself, which keeps
// the resolution rules testable without touching global state.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{ZetError, ZetResult};
use crate::runner::{Invocation, StdioMode};

/// Environment variable naming the note root
pub const ROOT_ENV: &str = "ZET_DIR";

/// Environment variable naming the editor
pub const EDITOR_ENV: &str = "EDITOR";

/// Editor used when EDITOR is unset or blank
pub const DEFAULT_EDITOR: &str = "vi";

/// Editor command line, split into program and leading arguments.
///
/// The value is split with shell word rules so `EDITOR="code --wait"` works;
/// the note path is always appended as the final argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    raw: String,
    program: String,
    args: Vec<String>,
}

impl EditorCommand {
    pub fn parse(raw: &str) -> ZetResult<Self> {
        let words = shell_words::split(raw).map_err(|e| ZetError::InvalidEditor {
            editor: raw.to_string(),
            reason: e.to_string(),
        })?;

        let mut words = words.into_iter();
        let program = words.next().ok_or_else(|| ZetError::InvalidEditor {
            editor: raw.to_string(),
            reason: "no program given".to_string(),
        })?;

        Ok(Self {
            raw: raw.to_string(),
            program,
            args: words.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Interactive launch of the editor on `path`
    pub fn invocation(&self, path: &Path) -> Invocation {
        Invocation::new(&self.program)
            .args(&self.args)
            .arg(path)
            .stdio(StdioMode::Inherit)
    }
}

impl Default for EditorCommand {
    fn default() -> Self {
        Self {
            raw: DEFAULT_EDITOR.to_string(),
            program: DEFAULT_EDITOR.to_string(),
            args: Vec::new(),
        }
    }
}

impl fmt::Display for EditorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Everything a command needs to know about its surroundings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZetConfig {
    root: PathBuf,
    editor: EditorCommand,
}

impl ZetConfig {
    pub fn new(root: PathBuf, editor: EditorCommand) -> Self {
        Self { root, editor }
    }

    /// Build the configuration from raw (possibly absent) values.
    ///
    /// Empty values count as unset, matching how shells usually treat
    /// `ZET_DIR=` and `EDITOR=`. The root is not checked for existence; a
    /// missing directory surfaces later as an I/O error from the operation.
    pub fn resolve(root: Option<PathBuf>, editor: Option<String>) -> ZetResult<Self> {
        let root = root
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or(ZetError::MissingRoot)?;

        let editor = match editor.filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => EditorCommand::parse(&raw)?,
            None => EditorCommand::default(),
        };

        Ok(Self { root, editor })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn editor(&self) -> &EditorCommand {
        &self.editor
    }
}
