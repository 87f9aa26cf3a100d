use crate::Context;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::output::{self, OutputFormat};

/// Handle the `show` command (also the default with no subcommand)
pub fn handle(format: OutputFormat, ctx: &Context) -> AppResult<()> {
    let store = ctx.store();
    let view = Core::today_view(&store, &ctx.zone, ctx.now, ctx.cfg.rollover)?;
    println!("{}", output::render(&view, format, &ctx.cfg.icon_path)?);
    Ok(())
}
