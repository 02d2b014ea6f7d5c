use hub_core::LoginForm;
use hub_session::View;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::commands::shared::{field_errors, reject_form, require_success};
use crate::context::AppContext;
use crate::output::output;
use crate::{progress, views};

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: String,
    name: String,
    techs: usize,
}

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let form = LoginForm {
        email: args.email.trim().to_string(),
        password: args.password.clone(),
    };
    if let Some(errors) = field_errors(form.validate())? {
        return reject_form(&views::login_form(&form, &errors), &errors, flags);
    }

    let outcome = ctx.session.login(&form, progress::loading("Logging in")).await;
    let redirect = outcome.requested_view();
    let user = require_success(outcome, "login")?;

    if let Some(view) = redirect.filter(|view| {
        *view != View::Dashboard || ctx.config.general.dashboard_after_login
    }) {
        return ctx.navigate(view, None, flags);
    }

    output(
        &AuthLoginResponse {
            authenticated: true,
            techs: user.techs.len(),
            user_id: user.id,
            name: user.name,
        },
        flags.format,
    )
}
