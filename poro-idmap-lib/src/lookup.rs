//! Lookups against a finished ID map: forward by card ID, reverse by
//! marketplace ID, and direct product URLs.

use std::path::Path;

use crate::error::LookupError;
use crate::types::{IdEntry, IdMap};

const MCM_PRODUCT_URL: &str = "https://www.cardmarket.com/Pokemon/Products?idProduct=";
const TCG_PRODUCT_URL: &str = "https://www.tcgplayer.com/product/";

/// Direct Cardmarket product page for an MCM ID.
pub fn mcm_product_url(mcm_id: &str) -> String {
    format!("{MCM_PRODUCT_URL}{mcm_id}")
}

/// Direct TCGplayer product page for a TCGplayer ID.
pub fn tcg_product_url(tcg_id: &str) -> String {
    format!("{TCG_PRODUCT_URL}{tcg_id}")
}

/// Which identifier a lookup starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdQuery {
    Card(String),
    Mcm(String),
    Tcg(String),
}

impl std::fmt::Display for IdQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Card(id) => write!(f, "card {id}"),
            Self::Mcm(id) => write!(f, "MCM ID {id}"),
            Self::Tcg(id) => write!(f, "TCGplayer ID {id}"),
        }
    }
}

impl IdMap {
    /// Load a JSON map previously written by the converter.
    pub fn load(path: &Path) -> Result<Self, LookupError> {
        let contents = std::fs::read_to_string(path).map_err(|e| LookupError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let map = Self::from_json(&contents).map_err(|e| LookupError::Json {
            path: path.display().to_string(),
            source: e,
        })?;
        log::debug!("Loaded {} entries from {}", map.len(), path.display());
        Ok(map)
    }

    pub fn mcm_id(&self, card_id: &str) -> Option<&str> {
        self.get(card_id)?.mcm_id.as_deref()
    }

    pub fn tcg_id(&self, card_id: &str) -> Option<&str> {
        self.get(card_id)?.tcg_id.as_deref()
    }

    /// First card (in map order) carrying this MCM ID.
    pub fn card_id_for_mcm(&self, mcm_id: &str) -> Option<&str> {
        self.iter()
            .find(|(_, e)| e.mcm_id.as_deref() == Some(mcm_id))
            .map(|(card, _)| card)
    }

    /// First card (in map order) carrying this TCGplayer ID.
    pub fn card_id_for_tcg(&self, tcg_id: &str) -> Option<&str> {
        self.iter()
            .find(|(_, e)| e.tcg_id.as_deref() == Some(tcg_id))
            .map(|(card, _)| card)
    }

    pub fn tcg_id_for_mcm(&self, mcm_id: &str) -> Option<&str> {
        self.tcg_id(self.card_id_for_mcm(mcm_id)?)
    }

    pub fn mcm_id_for_tcg(&self, tcg_id: &str) -> Option<&str> {
        self.mcm_id(self.card_id_for_tcg(tcg_id)?)
    }

    /// Resolve a query to its card ID and entry.
    pub fn resolve(&self, query: &IdQuery) -> Option<(&str, &IdEntry)> {
        let card_id = match query {
            IdQuery::Card(id) => id.trim(),
            IdQuery::Mcm(id) => self.card_id_for_mcm(id.trim())?,
            IdQuery::Tcg(id) => self.card_id_for_tcg(id.trim())?,
        };
        self.get_key_value(card_id)
    }
}
