use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `techhub` binary.
#[derive(Debug, Parser)]
#[command(name = "techhub", version, about = "TechHub - your profile and tech stack")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};
    use crate::cli::subcommands::{AuthCommands, TechCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["techhub", "--format", "json", "--verbose", "profile"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Profile));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["techhub", "tech", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Tech {
                action: TechCommands::List
            }
        ));
    }

    #[test]
    fn default_format_is_table() {
        let cli = Cli::try_parse_from(["techhub", "profile"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn login_requires_email_and_password() {
        assert!(Cli::try_parse_from(["techhub", "auth", "login", "--email", "a@b.co"]).is_err());
        let cli = Cli::try_parse_from([
            "techhub", "auth", "login", "--email", "a@b.co", "--password", "pw",
        ])
        .expect("cli should parse");
        match cli.command {
            Commands::Auth {
                action: AuthCommands::Login(args),
            } => {
                assert_eq!(args.email, "a@b.co");
                assert_eq!(args.password, "pw");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn tech_edit_takes_positional_id() {
        let cli = Cli::try_parse_from(["techhub", "tech", "edit", "t-1", "--status", "advanced"])
            .expect("cli should parse");
        match cli.command {
            Commands::Tech {
                action: TechCommands::Edit(args),
            } => {
                assert_eq!(args.id, "t-1");
                assert_eq!(args.status, "advanced");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["techhub", "--format", "xml", "profile"]).is_err());
    }
}
