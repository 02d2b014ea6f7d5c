mod add;
mod edit;
mod list;
mod remove;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TechCommands;
use crate::context::AppContext;

/// Handle `techhub tech <subcommand>`.
pub async fn handle(
    action: &TechCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TechCommands::List => list::handle(ctx, flags).await,
        TechCommands::Add(args) => add::handle(args, ctx, flags).await,
        TechCommands::Edit(args) => edit::handle(args, ctx, flags).await,
        TechCommands::Remove(args) => remove::handle(args, ctx, flags).await,
    }
}
