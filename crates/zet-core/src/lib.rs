//! # zet-core
//!
//! Building blocks for the `zet` note tool.
//!
//! A zet is a plain Markdown file named after the minute it was created
//! (`YYMMDDHHmm`) and stored under a two-digit year partition:
//!
//! ```text
//! $ZET_DIR/
//! ├── 24/
//! │   ├── 2403051412.md
//! │   └── 2411300905.md
//! └── 25/
//!     └── 2501021830.md
//! ```
//!
//! This crate owns the pieces that do not touch the terminal: identifier and
//! path derivation ([`id`]), the note template ([`template`]), the resolved
//! configuration ([`config`]), traversal of the note tree ([`walk`]), and the
//! seam through which external programs are launched ([`runner`], [`search`]).

pub mod config;
pub mod error;
pub mod id;
pub mod runner;
pub mod search;
pub mod template;
pub mod walk;

pub use config::{EditorCommand, ZetConfig};
pub use error::{ZetError, ZetResult};
pub use id::{IdError, NoteId, path_for};
pub use runner::{CommandRunner, Invocation, Outcome, StdioMode, SystemRunner};
pub use walk::{NoteFiles, note_files};
