use serde::Serialize;

use crate::cli::subcommands::tech::TechRemoveArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::require_success;
use crate::context::AppContext;
use crate::output::output;
use crate::{progress, views};

#[derive(Serialize)]
struct TechRemoveResponse<'a> {
    removed: bool,
    id: &'a str,
}

pub async fn handle(
    args: &TechRemoveArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let session = ctx.authenticate(flags).await?;
    let inventory = &session.inventory;
    if !inventory.open_edit_modal(&args.id) {
        anyhow::bail!("no technology with id '{}' on your profile", args.id);
    }

    let outcome = inventory
        .remove_tech(&args.id, progress::loading("Removing technology"))
        .await;
    require_success(outcome, "remove technology")?;

    if flags.format == OutputFormat::Table {
        views::show_dashboard(&session.user, &inventory.techs(), flags)
    } else {
        output(
            &TechRemoveResponse {
                removed: true,
                id: &args.id,
            },
            flags.format,
        )
    }
}
