// crates/zet-cli/src/commands/list.rs - One line per zet
//
// Prints the first line of every file under the root, which for notes made
// by `add` is the `# <id> <title>` heading. Order is the walk order: by file
// name within each directory.

use anyhow::Result;
use std::io::Write;
use tracing::debug;
use zet_core::CommandRunner;

use crate::commands::report;
use crate::context::Context;
use crate::services::vault::write_lines;

pub fn handle<R, W>(ctx: &Context<R>, out: &mut W) -> Result<()>
where
    R: CommandRunner,
    W: Write + ?Sized,
{
    debug!(root = %ctx.vault_service.root().display(), "listing notes");

    for entry in ctx.vault_service.files() {
        let path = match entry {
            Ok(path) => path,
            Err(err) => {
                report(out, err)?;
                continue;
            }
        };

        match ctx.vault_service.read_lines(&path, Some(1)) {
            Ok(first) => write_lines(out, &first)?,
            Err(err) => report(out, err)?,
        }
    }

    Ok(())
}
