pub mod auth;
pub mod profile;
mod shared;
pub mod tech;

use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

/// Route a parsed command to its handler.
pub async fn dispatch(
    command: &Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => auth::handle(action, ctx, flags).await,
        Commands::Profile => profile::handle(ctx, flags).await,
        Commands::Tech { action } => tech::handle(action, ctx, flags).await,
    }
}
