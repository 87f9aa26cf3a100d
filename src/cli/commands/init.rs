use crate::Context;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// Writes the effective configuration (defaults plus any command-line
/// overrides) and creates the cache directory.
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        if ctx.cfg.init_at(&ctx.config_path, *force)? {
            success(format!("Config file: {}", ctx.config_path.display()));
        } else {
            warning(format!(
                "Config file {} already exists (use --force to overwrite)",
                ctx.config_path.display()
            ));
        }
        success(format!("Cache dir:   {}", ctx.cfg.cache_path().display()));
    }
    Ok(())
}
