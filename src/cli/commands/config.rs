use crate::Context;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            info(format!("Configuration ({}):\n", ctx.config_path.display()));
            println!("{}", ctx.cfg.to_yaml()?);
        } else {
            println!("{}", ctx.config_path.display());
        }
    }
    Ok(())
}
