mod login;
mod logout;
mod register;
mod status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;

/// Handle `techhub auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, ctx, flags).await,
        AuthCommands::Register(args) => register::handle(args, ctx, flags).await,
        AuthCommands::Logout => logout::handle(ctx, flags),
        AuthCommands::Status => status::handle(ctx, flags),
    }
}
