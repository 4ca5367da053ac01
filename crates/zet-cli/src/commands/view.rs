// crates/zet-cli/src/commands/view.rs - Print a zet

use anyhow::Result;
use std::io::Write;
use zet_core::{CommandRunner, NoteId};

use crate::commands::report;
use crate::context::Context;
use crate::services::vault::write_lines;

/// Print the whole note. A note that cannot be opened is reported, not fatal.
pub fn handle<R, W>(ctx: &Context<R>, id: &NoteId, out: &mut W) -> Result<()>
where
    R: CommandRunner,
    W: Write + ?Sized,
{
    let path = ctx.vault_service.note_path(id);
    match ctx.vault_service.read_lines(&path, None) {
        Ok(lines) => write_lines(out, &lines)?,
        Err(err) => report(out, err)?,
    }
    Ok(())
}
