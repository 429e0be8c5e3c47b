//! poro-idmap CLI
//!
//! Command-line interface for building and querying card ID maps.

mod cli_types;
mod commands;
mod error;

use clap::Parser;
use log::LevelFilter;

use poro_idmap_lib::settings::settings_path;

use cli_types::{Cli, Commands, ConfigAction, strict_override};
use commands::config::{run_config_path, run_config_show};
use commands::convert::run_convert;
use commands::lookup::run_lookup;
use commands::stats::run_stats;
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let result = match cli.command {
        Commands::Convert {
            input,
            output,
            strict,
            no_strict,
        } => run_convert(
            input,
            output,
            strict_override(strict, no_strict),
            &settings_path(),
        ),
        Commands::Lookup { map, query } => run_lookup(&map, query),
        Commands::Stats { map } => run_stats(&map),
        Commands::Config { action } => match action {
            ConfigAction::Show => run_config_show(),
            ConfigAction::Path => {
                run_config_path();
                Ok(())
            }
        },
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

/// Install the global logger. `RUST_LOG` still overrides the level.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();
    if !verbose {
        builder.format_timestamp(None).format_target(false);
    }
    builder.init();
}
