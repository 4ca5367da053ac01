// crates/zet-core/src/error.rs - Error taxonomy shared by the library and the CLI

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::id::IdError;

/// Errors raised by zet operations.
///
/// Handlers decide the severity: `CreateNote` is printed by `add`, which then
/// opens the editor anyway, while the rest end the command with status 1.
#[derive(Error, Debug)]
pub enum ZetError {
    #[error("ZET_DIR not defined")]
    MissingRoot,

    #[error("{command}: missing parameter '{parameter}'")]
    MissingParameter {
        command: &'static str,
        parameter: &'static str,
    },

    #[error("Wrong CMD '{0}'")]
    UnknownCommand(String),

    #[error(transparent)]
    InvalidId(#[from] IdError),

    #[error("invalid editor command '{editor}': {reason}")]
    InvalidEditor { editor: String, reason: String },

    #[error("failed to launch editor '{editor}'")]
    EditorLaunch {
        editor: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to create note {}", path.display())]
    CreateNote {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for zet operations
pub type ZetResult<T> = Result<T, ZetError>;
