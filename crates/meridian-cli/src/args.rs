use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ListZonesArgs, ShowZoneArgs, StateCommands};

/// Browse timezones and their current local time
///
/// Meridian fetches the list of timezone identifiers from a remote time
/// service and shows the current date and time of any zone you pick. Run
/// without a command to list the zones.
#[derive(Parser)]
#[command(version, about, name = "meridian")]
pub struct Args {
    /// Base URL of the time service. Defaults to
    /// https://worldtimeapi.org/api
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Save the final state to the snapshot file on exit
    #[arg(long, global = true)]
    pub snapshot: bool,

    /// Path to the snapshot file. Defaults to
    /// $XDG_STATE_HOME/meridian/state.json
    #[arg(long, global = true)]
    pub snapshot_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Meridian CLI
#[derive(Subcommand)]
pub enum Commands {
    /// List timezone identifiers
    #[command(aliases = ["l", "ls"])]
    List(ListZonesArgs),
    /// Show the current time in one zone
    #[command(alias = "s")]
    Show(ShowZoneArgs),
    /// Expand and collapse zones interactively
    #[command(alias = "b")]
    Browse,
    /// Inspect or delete the saved snapshot
    State {
        #[command(subcommand)]
        command: StateCommands,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_list_aliases_and_flags() {
        let args = Args::parse_from(["meridian", "ls", "--region", "Europe", "--all"]);
        match args.command {
            Some(Commands::List(list)) => {
                assert_eq!(list.region.as_deref(), Some("Europe"));
                assert!(list.all);
            }
            _ => panic!("expected the list command"),
        }
    }

    #[test]
    fn test_global_flags_after_command() {
        let args = Args::parse_from(["meridian", "s", "Europe/London", "--no-color", "--snapshot"]);
        assert!(args.no_color);
        assert!(args.snapshot);
        assert!(matches!(args.command, Some(Commands::Show(_))));
    }
}
