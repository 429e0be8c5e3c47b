//! Card ID map conversion and lookup.
//!
//! Turns a CSV export mapping card IDs to Cardmarket (MCM) and TCGplayer
//! product IDs into a compact JSON lookup map, and answers lookups against
//! a finished map.

pub mod convert;
pub mod error;
pub mod lookup;
pub mod reader;
pub mod settings;
pub mod types;

pub use convert::{ConversionReport, ConvertOptions, build_map, convert, convert_files, write_map};
pub use error::{ConvertError, LookupError, SettingsError};
pub use lookup::{IdQuery, mcm_product_url, tcg_product_url};
pub use reader::{CardReader, CardRow, MalformedRowPolicy};
pub use settings::{SettingSource, Settings};
pub use types::{IdEntry, IdMap, MapStats};
