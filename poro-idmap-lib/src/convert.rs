//! CSV to JSON ID map conversion.
//!
//! Reads a card CSV in a single pass, builds an [`IdMap`] in memory, and only
//! then writes it out, so a failed read never touches the output file.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::ConvertError;
use crate::reader::{CardReader, MalformedRowPolicy};
use crate::types::{IdEntry, IdMap, MapStats};

/// Options controlling a conversion run.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub malformed_rows: MalformedRowPolicy,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn malformed_rows(mut self, policy: MalformedRowPolicy) -> Self {
        self.malformed_rows = policy;
        self
    }

    /// Shorthand for `malformed_rows(MalformedRowPolicy::Fail)` when `strict`.
    pub fn strict(self, strict: bool) -> Self {
        self.malformed_rows(if strict {
            MalformedRowPolicy::Fail
        } else {
            MalformedRowPolicy::Skip
        })
    }
}

/// Outcome of a conversion: map statistics plus row accounting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub stats: MapStats,
    /// Well-formed data rows read
    pub rows_read: usize,
    /// Rows skipped because the card ID was blank
    pub blank_card_ids: usize,
    /// Rows with a card ID but neither marketplace ID
    pub rows_without_ids: usize,
    /// Rows skipped for not matching the header
    pub malformed_rows: usize,
    /// Rows that replaced an earlier entry with the same card ID
    pub duplicates: usize,
}

/// Build an ID map from CSV input.
///
/// Rows with a blank card ID, or with neither marketplace ID, produce no
/// entry. A repeated card ID replaces the earlier entry (last write wins).
/// `stats` in the returned report describes the finished map.
pub fn build_map<R: Read>(
    input: R,
    source: &str,
    options: &ConvertOptions,
) -> Result<(IdMap, ConversionReport), ConvertError> {
    let mut reader = CardReader::new(input, source, options.malformed_rows)?;
    let mut map = IdMap::new();
    let mut report = ConversionReport::default();

    while let Some(row) = reader.next_row()? {
        report.rows_read += 1;

        let card_id = row.card_id.trim();
        if card_id.is_empty() {
            report.blank_card_ids += 1;
            continue;
        }

        let Some(entry) = IdEntry::from_fields(&row.mcm_id, &row.tcg_id) else {
            report.rows_without_ids += 1;
            continue;
        };

        if map.insert(card_id, entry).is_some() {
            log::debug!("Card {} appears more than once; keeping the later row", card_id);
            report.duplicates += 1;
        }
    }

    report.malformed_rows = reader.malformed_rows();
    report.stats = map.stats();
    Ok((map, report))
}

/// Write `map` as compact JSON to `path`.
///
/// The JSON goes to a uniquely named temporary file in the same directory,
/// which is then renamed over `path`. On failure the temporary file is
/// dropped (and deleted) and `path` is left as it was.
pub fn write_map(map: &IdMap, path: &Path) -> Result<(), ConvertError> {
    let json = map.to_json()?;

    let mut tmp = temp_builder()
        .tempfile_in(output_dir(path))
        .map_err(|e| ConvertError::output(path, e))?;
    tmp.write_all(json.as_bytes())
        .map_err(|e| ConvertError::output(path, e))?;
    tmp.persist(path)
        .map_err(|e| ConvertError::output(path, e.error))?;

    log::debug!("Wrote {} entries to {}", map.len(), path.display());
    Ok(())
}

fn temp_builder() -> tempfile::Builder<'static, 'static> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".idmap-").suffix(".tmp");
    // Temp files default to 0600; the finished map should be world-readable
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }
    builder
}

fn output_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

/// Convert the CSV at `input` into a JSON map at `output`.
///
/// The input file is closed before the output is written.
pub fn convert(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<ConversionReport, ConvertError> {
    let (map, report) = {
        let file = File::open(input).map_err(|e| ConvertError::input(input, e))?;
        build_map(file, &input.display().to_string(), options)?
    };

    write_map(&map, output)?;
    Ok(report)
}

/// [`convert`] with default options (malformed rows are skipped).
pub fn convert_files(input: &Path, output: &Path) -> Result<ConversionReport, ConvertError> {
    convert(input, output, &ConvertOptions::default())
}
