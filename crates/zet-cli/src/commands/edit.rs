// crates/zet-cli/src/commands/edit.rs - Open an existing zet in the editor
//
// No existence check: whether editing a missing note creates it is up to the
// editor.

use anyhow::Result;
use zet_core::{CommandRunner, NoteId};

use crate::context::Context;

pub fn handle<R: CommandRunner>(ctx: &Context<R>, id: &NoteId) -> Result<()> {
    let path = ctx.vault_service.note_path(id);
    ctx.editor_service.open_file(ctx.runner(), &path)?;
    Ok(())
}
