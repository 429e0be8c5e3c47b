use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use poro_idmap_lib::{IdMap, IdQuery, mcm_product_url, tcg_product_url};

use crate::CliError;
use crate::cli_types::LookupQuery;

impl From<LookupQuery> for IdQuery {
    fn from(q: LookupQuery) -> Self {
        // clap's arg group guarantees exactly one is set
        match (q.card, q.mcm, q.tcg) {
            (Some(card), _, _) => IdQuery::Card(card),
            (None, Some(mcm), _) => IdQuery::Mcm(mcm),
            (None, None, Some(tcg)) => IdQuery::Tcg(tcg),
            (None, None, None) => IdQuery::Card(String::new()),
        }
    }
}

/// Entry point for `lookup`.
pub(crate) fn run_lookup(map_path: &Path, query: LookupQuery) -> Result<(), CliError> {
    let map = IdMap::load(map_path)?;
    let query = IdQuery::from(query);

    let Some((card_id, entry)) = map.resolve(&query) else {
        return Err(CliError::not_found(format!(
            "no card with {} in {}",
            query,
            map_path.display()
        )));
    };

    println!(
        "Card:   {}",
        card_id.if_supports_color(Stdout, |t| t.bold()),
    );
    print_id("MCM:", entry.mcm_id.as_deref(), mcm_product_url);
    print_id("TCG:", entry.tcg_id.as_deref(), tcg_product_url);

    Ok(())
}

fn print_id(label: &str, id: Option<&str>, url: fn(&str) -> String) {
    match id {
        Some(id) => println!(
            "{:<7} {}  {}",
            label,
            id,
            url(id).if_supports_color(Stdout, |t| t.cyan()),
        ),
        None => println!(
            "{:<7} {}",
            label,
            "-".if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }
}
