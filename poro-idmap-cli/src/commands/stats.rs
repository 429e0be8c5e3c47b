use std::io;
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use poro_idmap_lib::IdMap;

use super::write_stats;
use crate::CliError;

pub(crate) fn run_stats(map_path: &Path) -> Result<(), CliError> {
    let map = IdMap::load(map_path)?;

    println!(
        "{}",
        map_path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    write_stats(&mut io::stdout().lock(), &map.stats())?;

    Ok(())
}
