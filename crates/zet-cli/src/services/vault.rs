// crates/zet-cli/src/services/vault.rs - File System Operations Service
//
// This service handles all file system operations on the note tree. It knows
// HOW to touch files but not WHY; the command handlers decide which failures
// are fatal and which are only reported.
//
// LAYOUT:
//   <root>/<YY>/<id>.md
//
// The <YY> partition is never created here. Adding a note in a year whose
// directory does not exist fails with the underlying I/O error.

use anyhow::{Context as AnyhowContext, Result};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use zet_core::{NoteFiles, NoteId, ZetError, ZetResult, note_files, path_for, template};

/// Handles all file system operations on the note tree
pub struct VaultService {
    /// Path to the note root (ZET_DIR)
    root: PathBuf,
}

impl VaultService {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Storage path of `id`
    pub fn note_path(&self, id: &NoteId) -> PathBuf {
        path_for(&self.root, id)
    }

    /// Write the template for `id`, replacing any file already at that path
    pub fn create_note(&self, id: &NoteId) -> ZetResult<PathBuf> {
        let path = self.note_path(id);
        fs::write(&path, template::initial_content(id)).map_err(|source| {
            ZetError::CreateNote {
                path: path.clone(),
                source,
            }
        })?;

        debug!(path = %path.display(), "created note");
        Ok(path)
    }

    /// Remove the note file for `id`
    pub fn remove_note(&self, id: &NoteId) -> Result<PathBuf> {
        let path = self.note_path(id);
        fs::remove_file(&path)
            .with_context(|| format!("Failed to delete note {}", path.display()))?;

        debug!(path = %path.display(), "deleted note");
        Ok(path)
    }

    /// Read up to `limit` lines of `path` (all of them when `None`).
    ///
    /// Lines are returned without their terminator (`\n` or `\r\n`). Content
    /// is kept as raw bytes so notes that are not valid UTF-8 still print.
    pub fn read_lines(&self, path: &Path, limit: Option<usize>) -> Result<Vec<Vec<u8>>> {
        let file =
            File::open(path).with_context(|| format!("Failed to open note {}", path.display()))?;

        BufReader::new(file)
            .split(b'\n')
            .take(limit.unwrap_or(usize::MAX))
            .map(|line| {
                line.map(|mut bytes| {
                    if bytes.last() == Some(&b'\r') {
                        bytes.pop();
                    }
                    bytes
                })
            })
            .collect::<io::Result<Vec<_>>>()
            .with_context(|| format!("Failed to read note {}", path.display()))
    }

    /// Lazy walk over every file under the root
    pub fn files(&self) -> NoteFiles {
        note_files(&self.root)
    }

    /// Get the note root
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Print `lines`, terminating each with a newline
pub fn write_lines<W: Write + ?Sized>(out: &mut W, lines: &[Vec<u8>]) -> io::Result<()> {
    for line in lines {
        out.write_all(line)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}
