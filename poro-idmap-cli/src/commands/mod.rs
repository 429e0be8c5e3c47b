pub(crate) mod config;
pub(crate) mod convert;
pub(crate) mod lookup;
pub(crate) mod stats;

use std::io::{self, Write};

use poro_idmap_lib::MapStats;

/// Write the four map counts, one `label: count` line each.
pub(crate) fn write_stats(out: &mut impl Write, stats: &MapStats) -> io::Result<()> {
    writeln!(out, "Total cards: {}", stats.total_cards)?;
    writeln!(out, "Cards with MCM ID: {}", stats.cards_with_mcm)?;
    writeln!(out, "Cards with TCGplayer ID: {}", stats.cards_with_tcg)?;
    writeln!(out, "Cards with both IDs: {}", stats.cards_with_both)?;
    Ok(())
}
