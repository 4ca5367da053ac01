// crates/zet-cli/src/commands/add.rs - Create a zet and open it
//
// The identifier is the current local minute. A second `add` within the same
// minute targets the same file and overwrites it.
//
// A note that cannot be written (usually a missing year directory) is
// reported and the editor is opened on the path anyway; only an editor that
// cannot be launched fails the command.

use anyhow::Result;
use std::io::Write;
use zet_core::{CommandRunner, NoteId};

use crate::commands::report;
use crate::context::Context;

pub fn handle<R, W>(ctx: &Context<R>, out: &mut W) -> Result<()>
where
    R: CommandRunner,
    W: Write + ?Sized,
{
    let id = NoteId::now();
    let path = ctx.vault_service.note_path(&id);

    if let Err(err) = ctx.vault_service.create_note(&id) {
        report(out, anyhow::Error::new(err))?;
    }
    out.flush()?;

    ctx.editor_service.open_file(ctx.runner(), &path)?;
    Ok(())
}
