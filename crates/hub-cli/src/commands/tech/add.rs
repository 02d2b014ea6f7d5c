use hub_core::{AddTechForm, CoreError};

use crate::cli::subcommands::tech::TechAddArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::{reject_form, require_success};
use crate::context::AppContext;
use crate::output::output;
use crate::{progress, views};

pub async fn handle(
    args: &TechAddArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let form = match AddTechForm::parse(&args.title, &args.status) {
        Ok(form) => form,
        Err(CoreError::InvalidForm(errors)) => {
            let view = views::add_tech_form(&args.title, &args.status, &errors);
            return reject_form(&view, &errors, flags);
        }
        Err(other) => return Err(other.into()),
    };

    let session = ctx.authenticate(flags).await?;
    let inventory = &session.inventory;
    inventory.open_add_modal();
    let outcome = inventory
        .add_tech(&form, progress::loading("Adding technology"))
        .await;
    let tech = require_success(outcome, "add technology")?;

    if flags.format == OutputFormat::Table {
        views::show_dashboard(&session.user, &inventory.techs(), flags)
    } else {
        output(&tech, flags.format)
    }
}
