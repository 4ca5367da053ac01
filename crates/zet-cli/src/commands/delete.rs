// crates/zet-cli/src/commands/delete.rs - Remove a zet

use anyhow::Result;
use std::io::Write;
use zet_core::{CommandRunner, NoteId};

use crate::commands::report;
use crate::context::Context;

/// Remove the note file. A failed removal is reported and the command still
/// succeeds, so deleting twice is harmless in scripts.
pub fn handle<R, W>(ctx: &Context<R>, id: &NoteId, out: &mut W) -> Result<()>
where
    R: CommandRunner,
    W: Write + ?Sized,
{
    if let Err(err) = ctx.vault_service.remove_note(id) {
        report(out, err)?;
    }
    Ok(())
}
