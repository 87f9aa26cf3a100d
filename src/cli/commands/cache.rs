use crate::Context;
use crate::cli::parser::CacheAction;
use crate::errors::AppResult;
use crate::store::BundleStorage;
use crate::ui::messages::{info, success};

/// Handle the `cache` subcommands
pub fn handle(action: &CacheAction, ctx: &Context) -> AppResult<()> {
    let storage = ctx.storage();

    match action {
        CacheAction::Path => {
            println!("{}", storage.dir().display());
        }
        CacheAction::List => {
            let keys = storage.keys()?;
            if keys.is_empty() {
                info(format!("No cached timetables in {}", storage.dir().display()));
            }
            for key in keys {
                println!("{}\t{}\t{}", key.zone, key.year, storage.path_for(&key).display());
            }
        }
        CacheAction::Clear { zone_only } => {
            let mut removed = 0;
            for key in storage.keys()? {
                if *zone_only && key.zone != ctx.zone {
                    continue;
                }
                if storage.remove(&key)? {
                    removed += 1;
                }
            }
            success(format!("Removed {} cached timetable(s)", removed));
        }
    }
    Ok(())
}
