// crates/zet-cli/src/commands/mod.rs - Command Handler Modules
//
// One module per subcommand. `dispatch` validates the positional parameter a
// command needs and hands off; handlers decide which I/O failures are fatal
// (returned as errors) and which are only reported on stdout, alongside the
// command's normal output.
//
// SEVERITY AT A GLANCE:
// - add:    creation failure is reported and the editor still opens;
//           editor launch failure is fatal
// - edit:   editor launch failure is fatal
// - view:   unreadable note is reported, exit 0
// - delete: failed removal is reported, exit 0
// - list:   traversal/read errors are reported per entry, walk continues
// - grep:   like list; a grep that cannot start counts as no match

use anyhow::Result;
use std::fmt::Display;
use std::io::{self, Write};
use tracing::debug;
use zet_core::{CommandRunner, NoteId, ZetError, ZetResult};

use crate::cli::Commands;
use crate::context::Context;

pub mod add;
pub mod delete;
pub mod edit;
pub mod grep;
pub mod list;
pub mod view;

/// Route a parsed command to its handler
pub fn dispatch<R, W>(ctx: &Context<R>, command: Commands, out: &mut W) -> Result<()>
where
    R: CommandRunner,
    W: Write + ?Sized,
{
    match command {
        Commands::Add { .. } => add::handle(ctx, out),
        Commands::View { id, .. } => view::handle(ctx, &note_id("view", id)?, out),
        Commands::Edit { id, .. } => edit::handle(ctx, &note_id("edit", id)?),
        Commands::Delete { id, .. } => delete::handle(ctx, &note_id("delete", id)?, out),
        Commands::List { .. } => list::handle(ctx, out),
        Commands::Grep { regexp, .. } => {
            grep::handle(ctx, &required("grep", "regexp", regexp)?, out)
        }
        Commands::Other(args) => {
            let token = args.into_iter().next().unwrap_or_default();
            Err(ZetError::UnknownCommand(token).into())
        }
    }
}

fn required(
    command: &'static str,
    parameter: &'static str,
    value: Option<String>,
) -> ZetResult<String> {
    value.ok_or(ZetError::MissingParameter { command, parameter })
}

fn note_id(command: &'static str, value: Option<String>) -> ZetResult<NoteId> {
    let raw = required(command, "id", value)?;
    Ok(NoteId::parse(&raw)?)
}

/// Report a failure the command tolerates and carry on
pub(crate) fn report<W: Write + ?Sized>(out: &mut W, err: impl Display) -> io::Result<()> {
    debug!(error = %err, "continuing after error");
    writeln!(out, "{err:#}")
}
