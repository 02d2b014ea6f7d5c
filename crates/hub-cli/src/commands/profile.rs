use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::views;

/// Handle `techhub profile`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.authenticate(flags).await?;
    views::show_dashboard(&session.user, &session.inventory.techs(), flags)
}
