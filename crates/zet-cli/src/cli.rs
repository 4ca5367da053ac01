use clap::{Parser, Subcommand};
use std::ffi::OsString;
use zet_core::config::{EDITOR_ENV, ROOT_ENV};

/// Main CLI structure
#[derive(Parser, Debug)]
#[command(name = "zet")]
#[command(about = "Timestamped notes in a year-partitioned directory")]
#[command(version)]
#[command(after_help = "\
Environment Variables:
  ZET_DIR    Root directory holding the <YY>/<id>.md notes (required)
  EDITOR     Editor used by add and edit (defaults to vi)")]
pub struct Cli {
    /// Notes root directory (overrides ZET_DIR)
    #[arg(long, global = true, env = ROOT_ENV, value_name = "PATH", hide_env = true)]
    pub dir: Option<OsString>,

    /// Editor command line (overrides EDITOR)
    #[arg(long, global = true, env = EDITOR_ENV, value_name = "CMD", hide_env = true)]
    pub editor: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Note commands
///
/// Positional parameters are optional at the parser level so a missing one
/// can be reported as `<command>: missing parameter '<name>'`. They also take
/// values starting with `-` (a pattern like `-x` is still a pattern), and any
/// arguments after the one a command uses are accepted and ignored.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a zet and open it in the editor
    #[command(visible_alias = "a")]
    Add {
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        ignored: Vec<String>,
    },

    /// View a zet
    #[command(visible_alias = "v")]
    View {
        /// Note identifier (YYMMDDHHmm)
        #[arg(allow_hyphen_values = true)]
        id: Option<String>,

        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        ignored: Vec<String>,
    },

    /// Edit a zet
    #[command(visible_alias = "e")]
    Edit {
        /// Note identifier (YYMMDDHHmm)
        #[arg(allow_hyphen_values = true)]
        id: Option<String>,

        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        ignored: Vec<String>,
    },

    /// Delete a zet
    #[command(visible_alias = "d")]
    Delete {
        /// Note identifier (YYMMDDHHmm)
        #[arg(allow_hyphen_values = true)]
        id: Option<String>,

        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        ignored: Vec<String>,
    },

    /// List zets (first line of each)
    #[command(visible_alias = "ls")]
    List {
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        ignored: Vec<String>,
    },

    /// Grep for keywords
    #[command(visible_alias = "g")]
    Grep {
        /// Extended regular expression handed to grep -E
        #[arg(allow_hyphen_values = true)]
        regexp: Option<String>,

        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        ignored: Vec<String>,
    },

    /// Anything else is reported as an unknown command
    #[command(external_subcommand)]
    Other(Vec<String>),
}
