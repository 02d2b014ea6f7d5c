use crate::cli::GlobalFlags;
use crate::context::AppContext;

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let view = ctx.session.logout();
    let notice = logout_notice(ctx.store.token_source());
    ctx.navigate(view, Some(&notice), flags)
}

/// Logout clears what it stored; a token from the environment outlives it.
fn logout_notice(remaining: Option<&str>) -> String {
    match remaining {
        None => String::from("Logged out"),
        Some("env") => String::from(
            "Logged out, but TECHHUB_AUTH__TOKEN is still set and will be used by the next command. Unset it to stay logged out.",
        ),
        Some(source) => format!("Logged out, but a token is still stored in the {source} backend."),
    }
}
