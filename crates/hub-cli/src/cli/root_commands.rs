use clap::Subcommand;

use crate::cli::subcommands::{AuthCommands, TechCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Session management.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Show your profile and technologies.
    Profile,
    /// Technologies on your profile.
    Tech {
        #[command(subcommand)]
        action: TechCommands,
    },
}
