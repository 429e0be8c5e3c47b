//! Header-driven reader for card ID CSV exports.
//!
//! The CSV must carry a header row naming the `CardId`, `McmId` and
//! `TcgplayerProductId` columns; any other columns are ignored. Columns are
//! located by name, never by position.

use std::io::Read;

use csv::{ErrorKind, StringRecord};

use crate::error::ConvertError;

pub const CARD_ID_COLUMN: &str = "CardId";
pub const MCM_ID_COLUMN: &str = "McmId";
pub const TCG_ID_COLUMN: &str = "TcgplayerProductId";

/// What to do with a row whose field count differs from the header
/// (or that is not valid UTF-8).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedRowPolicy {
    /// Log a warning and continue with the next row
    #[default]
    Skip,
    /// Abort the conversion
    Fail,
}

/// A single data row, with the three fields exactly as read (untrimmed).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardRow {
    pub card_id: String,
    pub mcm_id: String,
    pub tcg_id: String,
}

/// Column indices of the required fields.
#[derive(Debug, Clone, Copy)]
struct Columns {
    card_id: usize,
    mcm_id: usize,
    tcg_id: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, ConvertError> {
        // A repeated header name resolves to its last occurrence
        let find = |name: &str| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, h)| h.trim_start_matches('\u{feff}').trim() == name)
                .map(|(i, _)| i)
                .last()
        };

        let card_id = find(CARD_ID_COLUMN);
        let mcm_id = find(MCM_ID_COLUMN);
        let tcg_id = find(TCG_ID_COLUMN);

        match (card_id, mcm_id, tcg_id) {
            (Some(card_id), Some(mcm_id), Some(tcg_id)) => Ok(Self {
                card_id,
                mcm_id,
                tcg_id,
            }),
            _ => {
                let missing: Vec<&str> = [
                    (CARD_ID_COLUMN, card_id),
                    (MCM_ID_COLUMN, mcm_id),
                    (TCG_ID_COLUMN, tcg_id),
                ]
                .iter()
                .filter(|(_, idx)| idx.is_none())
                .map(|(name, _)| *name)
                .collect();
                Err(ConvertError::schema(format!(
                    "missing required column(s): {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

/// Streaming reader yielding [`CardRow`]s from CSV input.
pub struct CardReader<R> {
    reader: csv::Reader<R>,
    columns: Columns,
    policy: MalformedRowPolicy,
    source: String,
    record: StringRecord,
    malformed: usize,
}

impl<R: Read> CardReader<R> {
    /// Wrap `input` and validate its header row.
    ///
    /// `source` names the input in error messages. Fails with
    /// [`ConvertError::Schema`] before any data row is read if a required
    /// column is absent.
    pub fn new(
        input: R,
        source: impl Into<String>,
        policy: MalformedRowPolicy,
    ) -> Result<Self, ConvertError> {
        let source = source.into();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(input);

        let headers = match reader.headers() {
            Ok(h) => h,
            Err(e) => {
                return Err(match e.into_kind() {
                    ErrorKind::Io(io) => ConvertError::Input {
                        path: source,
                        source: io,
                    },
                    other => ConvertError::schema(format!("unreadable header row: {other:?}")),
                });
            }
        };
        let columns = Columns::resolve(headers)?;

        Ok(Self {
            reader,
            columns,
            policy,
            source,
            record: StringRecord::new(),
            malformed: 0,
        })
    }

    /// Number of malformed rows skipped so far.
    pub fn malformed_rows(&self) -> usize {
        self.malformed
    }

    /// Read the next well-formed row, or `None` at end of input.
    pub fn next_row(&mut self) -> Result<Option<CardRow>, ConvertError> {
        loop {
            match self.reader.read_record(&mut self.record) {
                Ok(false) => return Ok(None),
                Ok(true) => {
                    let get = |i: usize| self.record.get(i).unwrap_or("").to_string();
                    return Ok(Some(CardRow {
                        card_id: get(self.columns.card_id),
                        mcm_id: get(self.columns.mcm_id),
                        tcg_id: get(self.columns.tcg_id),
                    }));
                }
                Err(e) => {
                    let line = e.position().map(|p| p.line()).unwrap_or(0);
                    let reason = match e.into_kind() {
                        ErrorKind::Io(io) => {
                            return Err(ConvertError::Input {
                                path: self.source.clone(),
                                source: io,
                            });
                        }
                        ErrorKind::UnequalLengths {
                            expected_len, len, ..
                        } => format!("expected {expected_len} fields, found {len}"),
                        ErrorKind::Utf8 { err, .. } => format!("invalid UTF-8: {err}"),
                        other => format!("{other:?}"),
                    };

                    match self.policy {
                        MalformedRowPolicy::Fail => {
                            return Err(ConvertError::malformed_row(line, reason));
                        }
                        MalformedRowPolicy::Skip => {
                            log::warn!(
                                "Skipping malformed row in {} at line {}: {}",
                                self.source,
                                line,
                                reason
                            );
                            self.malformed += 1;
                        }
                    }
                }
            }
        }
    }
}

impl<R: Read> Iterator for CardReader<R> {
    type Item = Result<CardRow, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_row().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(csv: &str, policy: MalformedRowPolicy) -> CardReader<&[u8]> {
        CardReader::new(csv.as_bytes(), "<test>", policy).unwrap()
    }

    #[test]
    fn test_reads_by_header_name() {
        let csv = "\
Name,TcgplayerProductId,Set,CardId,McmId
Pikachu,200,Base,A1,100";
        let rows: Vec<CardRow> = reader(csv, MalformedRowPolicy::Skip)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(
            rows,
            vec![CardRow {
                card_id: "A1".to_string(),
                mcm_id: "100".to_string(),
                tcg_id: "200".to_string(),
            }]
        );
    }

    #[test]
    fn test_header_with_bom_and_padding() {
        let csv = "\u{feff}CardId , McmId,TcgplayerProductId\nA1,1,2";
        let rows: Vec<CardRow> = reader(csv, MalformedRowPolicy::Skip)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].card_id, "A1");
    }

    #[test]
    fn test_repeated_header_uses_last_column() {
        let csv = "CardId,McmId,TcgplayerProductId,McmId\nA1,old,2,new";
        let row = reader(csv, MalformedRowPolicy::Skip)
            .next_row()
            .unwrap()
            .unwrap();
        assert_eq!(row.mcm_id, "new");
        assert_eq!(row.tcg_id, "2");
    }

    #[test]
    fn test_quoted_fields() {
        let csv = "CardId,McmId,TcgplayerProductId\n\"A,1\",\" 100 \",\"2\"\"0\"";
        let row = reader(csv, MalformedRowPolicy::Skip)
            .next_row()
            .unwrap()
            .unwrap();
        assert_eq!(row.card_id, "A,1");
        assert_eq!(row.mcm_id, " 100 ");
        assert_eq!(row.tcg_id, "2\"0");
    }

    #[test]
    fn test_missing_columns_reported() {
        let csv = "CardId,Name\nA1,Pikachu";
        let err = CardReader::new(csv.as_bytes(), "<test>", MalformedRowPolicy::Skip)
            .err()
            .unwrap();
        match err {
            ConvertError::Schema(msg) => {
                assert!(msg.contains("McmId"));
                assert!(msg.contains("TcgplayerProductId"));
                assert!(!msg.contains("CardId"));
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_is_schema_error() {
        let err = CardReader::new("".as_bytes(), "<test>", MalformedRowPolicy::Skip)
            .err()
            .unwrap();
        assert!(matches!(err, ConvertError::Schema(_)));
    }

    #[test]
    fn test_skip_malformed_row() {
        let csv = "\
CardId,McmId,TcgplayerProductId
A1,1,2
A2,3
A3,4,5";
        let mut r = reader(csv, MalformedRowPolicy::Skip);
        let rows: Vec<CardRow> = r.by_ref().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].card_id, "A1");
        assert_eq!(rows[1].card_id, "A3");
        assert_eq!(r.malformed_rows(), 1);
    }

    #[test]
    fn test_fail_on_malformed_row() {
        let csv = "\
CardId,McmId,TcgplayerProductId
A1,1,2
A2,3,4,extra";
        let mut r = reader(csv, MalformedRowPolicy::Fail);
        assert!(r.next_row().unwrap().is_some());
        match r.next_row() {
            Err(ConvertError::MalformedRow { line, reason }) => {
                assert_eq!(line, 3);
                assert!(reason.contains("expected 3 fields, found 4"));
            }
            other => panic!("expected malformed row error, got {other:?}"),
        }
    }
}
