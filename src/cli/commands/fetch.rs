use crate::Context;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::store::{BundleStorage, CacheKey};
use crate::ui::messages::{info, success};
use chrono::Datelike;

/// Handle the `fetch` command
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Fetch { year, force } = cmd {
        let year = year.unwrap_or_else(|| ctx.now.year());
        let store = ctx.store();
        let key = CacheKey::new(ctx.zone.clone(), year);

        let bundle = if *force {
            store.refresh(&ctx.zone, year)?
        } else {
            if store.storage().exists(&key) {
                info(format!("{} already cached (use --force to refetch)", key));
            }
            store.get(&ctx.zone, year)?
        };

        success(format!(
            "{} days cached for {} in {}",
            bundle.days.len(),
            key,
            store.storage().path_for(&key).display()
        ));
    }
    Ok(())
}
