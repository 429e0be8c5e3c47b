//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "poro-idmap")]
#[command(about = "Build and query card ID maps for Cardmarket and TCGplayer", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal log output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Exactly one identifier to look up.
#[derive(Args, Clone)]
#[group(required = true, multiple = false)]
pub(crate) struct LookupQuery {
    /// Card ID (the map key)
    #[arg(long)]
    pub card: Option<String>,

    /// Cardmarket (MCM) product ID
    #[arg(long)]
    pub mcm: Option<String>,

    /// TCGplayer product ID
    #[arg(long)]
    pub tcg: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Convert a card CSV into a compact JSON ID map
    Convert {
        /// Input CSV with CardId, McmId and TcgplayerProductId columns
        input: Option<PathBuf>,

        /// Output JSON path
        output: Option<PathBuf>,

        /// Fail on rows whose field count differs from the header instead of skipping them
        #[arg(long, overrides_with = "no_strict")]
        strict: bool,

        /// Skip malformed rows even if the settings file enables strict mode
        #[arg(long, overrides_with = "strict")]
        no_strict: bool,
    },

    /// Look up a card in an existing ID map
    Lookup {
        /// ID map JSON file
        map: PathBuf,

        #[command(flatten)]
        query: LookupQuery,
    },

    /// Show statistics for an existing ID map
    Stats {
        /// ID map JSON file
        map: PathBuf,
    },

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Collapse `--strict` / `--no-strict` into an optional override.
pub(crate) fn strict_override(strict: bool, no_strict: bool) -> Option<bool> {
    match (strict, no_strict) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved settings and their sources
    Show,

    /// Print the settings file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_paths_optional() {
        let cli = Cli::try_parse_from(["poro-idmap", "convert"]).unwrap();
        match cli.command {
            Commands::Convert {
                input,
                output,
                strict,
                no_strict,
            } => {
                assert!(input.is_none());
                assert!(output.is_none());
                assert_eq!(strict_override(strict, no_strict), None);
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_convert_with_paths() {
        let cli =
            Cli::try_parse_from(["poro-idmap", "convert", "in.csv", "out.json", "--strict"])
                .unwrap();
        match cli.command {
            Commands::Convert {
                input,
                output,
                strict,
                no_strict,
            } => {
                assert_eq!(input, Some(PathBuf::from("in.csv")));
                assert_eq!(output, Some(PathBuf::from("out.json")));
                assert_eq!(strict_override(strict, no_strict), Some(true));
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_last_strictness_flag_wins() {
        let cli =
            Cli::try_parse_from(["poro-idmap", "convert", "--strict", "--no-strict"]).unwrap();
        match cli.command {
            Commands::Convert {
                strict, no_strict, ..
            } => assert_eq!(strict_override(strict, no_strict), Some(false)),
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_lookup_requires_exactly_one_id() {
        assert!(Cli::try_parse_from(["poro-idmap", "lookup", "map.json"]).is_err());
        assert!(
            Cli::try_parse_from(["poro-idmap", "lookup", "map.json", "--mcm", "1", "--tcg", "2"])
                .is_err()
        );
        assert!(Cli::try_parse_from(["poro-idmap", "lookup", "map.json", "--tcg", "2"]).is_ok());
    }
}
