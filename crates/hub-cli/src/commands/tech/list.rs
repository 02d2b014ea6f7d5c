use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, render_array_table};

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.authenticate(flags).await?;
    let techs = session.inventory.techs();

    if flags.format != OutputFormat::Table {
        return output(&techs, flags.format);
    }

    let rows = techs
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;
    println!("{}", render_array_table(&rows, &["id", "title", "status"]));
    Ok(())
}
