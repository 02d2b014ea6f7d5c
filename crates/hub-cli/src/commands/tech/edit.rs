use hub_core::{CoreError, EditTechForm};

use crate::cli::subcommands::tech::TechEditArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::{reject_form, require_success};
use crate::context::AppContext;
use crate::output::output;
use crate::{progress, views};

pub async fn handle(
    args: &TechEditArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let form = match EditTechForm::parse(&args.status) {
        Ok(form) => form,
        Err(CoreError::InvalidForm(errors)) => {
            let view = views::edit_tech_form(&args.id, &args.status, &errors);
            return reject_form(&view, &errors, flags);
        }
        Err(other) => return Err(other.into()),
    };

    let session = ctx.authenticate(flags).await?;
    let inventory = &session.inventory;
    if !inventory.open_edit_modal(&args.id) {
        anyhow::bail!("no technology with id '{}' on your profile", args.id);
    }

    let outcome = inventory
        .edit_tech(&args.id, &form, progress::loading("Updating technology"))
        .await;
    let tech = require_success(outcome, "update technology")?;

    if flags.format == OutputFormat::Table {
        views::show_dashboard(&session.user, &inventory.techs(), flags)
    } else {
        output(&tech, flags.format)
    }
}
