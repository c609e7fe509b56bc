//! `levtool`: load a `.LEV` level and print a summary, trace rays through it,
//! pick sectors, or write it back out.

mod cli;
mod commands;
mod config;

use std::error::Error;

use cli::*;
use level::log;
use simplelog::TermLogger;

use crate::config::UserConfig;

const BASE_DIR: &str = "levtool/";

fn main() -> Result<(), Box<dyn Error>> {
    let mut options: CLIOptions = argh::from_env();

    // The logger filters nothing itself. The global max level starts at the
    // CLI value so config loading is logged, then follows the synced config.
    TermLogger::init(
        log::LevelFilter::Trace,
        simplelog::ConfigBuilder::default()
            .set_time_level(log::LevelFilter::Trace)
            .build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;
    log::set_max_level(options.log_level());

    let mut user_config = UserConfig::load()?;
    user_config.sync_cli(&mut options);
    user_config.write()?;
    log::set_max_level(options.log_level());

    let layer = options.layer.unwrap_or_default();
    let mut resolver = commands::texture_resolver(options.textures.as_deref())?;

    match &options.command {
        Command::Info(args) => {
            let level = commands::open_level(&args.file, &mut resolver)?;
            commands::info(args, &level);
        }
        Command::Trace(args) => {
            let level = commands::open_level(&args.file, &mut resolver)?;
            commands::trace(args, &level, layer);
        }
        Command::Pick(args) => {
            let level = commands::open_level(&args.file, &mut resolver)?;
            commands::pick(args, &level, layer);
        }
        Command::Export(args) => {
            let level = commands::open_level(&args.file, &mut resolver)?;
            commands::export(args, &level)?;
        }
    }
    Ok(())
}
