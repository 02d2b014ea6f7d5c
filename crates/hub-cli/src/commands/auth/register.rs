use hub_core::RegisterForm;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthRegisterArgs;
use crate::commands::shared::{field_errors, reject_form, require_success};
use crate::context::AppContext;
use crate::{progress, views};

pub async fn handle(
    args: &AuthRegisterArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let form = RegisterForm {
        name: args.name.trim().to_string(),
        email: args.email.trim().to_string(),
        password: args.password.clone(),
        confirm_password: args.confirm_password.clone(),
        bio: args.bio.trim().to_string(),
        contact: args.contact.trim().to_string(),
        course_module: args.course_module.trim().to_string(),
    };
    if let Some(errors) = field_errors(form.validate())? {
        return reject_form(&views::register_form(&form, &errors), &errors, flags);
    }

    let outcome = ctx
        .session
        .register(&form, progress::loading("Creating account"))
        .await;
    let redirect = outcome.requested_view();
    let user = require_success(outcome, "registration")?;
    tracing::debug!(user_id = %user.id, "registration complete");

    match redirect {
        Some(view) => ctx.navigate(view, Some("Account created. Log in to continue."), flags),
        None => Ok(()),
    }
}
