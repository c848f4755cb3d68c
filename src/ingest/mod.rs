//! Tabular ingestion pipeline
//!
//! Recovers a structured component list from a loosely-formatted grid of
//! untyped cells. Structural problems (grid too small, unresolvable
//! mandatory columns, nothing valid at all) abort the whole ingestion; bad
//! individual rows are skipped, tallied, and reported without stopping the
//! pass. The pipeline is a pure function of its input - on failure the
//! caller's state is untouched.

pub mod cell;
pub mod header;
pub mod row;
pub mod sheet;

use thiserror::Error;

use crate::entities::Component;

pub use cell::{parse_number, Cell};
pub use header::{Field, HeaderError, HeaderMap, KeywordSet};
pub use row::{RowOutcome, SkipReason};
pub use sheet::read_grid;

/// A rejected data row: its 0-based grid index and every failed check.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    pub row: usize,
    pub reasons: Vec<SkipReason>,
}

impl SkippedRow {
    /// Comma-joined reason list for display.
    pub fn reason_text(&self) -> String {
        self.reasons
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A successful ingestion: the components recovered, in original row order,
/// plus the rows that were skipped along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingestion {
    /// Valid components in the order their rows appeared
    pub components: Vec<Component>,

    /// Skipped rows with their defects
    pub skipped: Vec<SkippedRow>,

    /// Grid index of the row used as the header
    pub header_row: usize,
}

impl Ingestion {
    pub fn valid_count(&self) -> usize {
        self.components.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Structural ingestion failures. Any of these aborts the whole pass with
/// no components produced.
#[derive(Debug, Clone, Error)]
pub enum IngestError {
    #[error("grid has {rows} row(s); need at least a header row and one data row")]
    TooFewRows { rows: usize },

    #[error(transparent)]
    Header(#[from] HeaderError),

    #[error("no valid component data found ({skipped} row(s) skipped)")]
    NoValidRows { skipped: usize },

    #[error("failed to read tabular input: {0}")]
    Read(String),
}

/// Drive header resolution and row validation over a full grid.
pub fn ingest(grid: &[Vec<Cell>], keywords: &KeywordSet) -> Result<Ingestion, IngestError> {
    if grid.len() < 2 {
        return Err(IngestError::TooFewRows { rows: grid.len() });
    }

    let headers = header::resolve(grid, keywords)?;

    let mut components = Vec::new();
    let mut skipped = Vec::new();

    for (idx, cells) in grid.iter().enumerate().skip(headers.header_row + 1) {
        match row::build_component(cells, &headers) {
            RowOutcome::Component(cmp) => components.push(cmp),
            RowOutcome::Blank => {}
            RowOutcome::Skipped(reasons) => skipped.push(SkippedRow { row: idx, reasons }),
        }
    }

    if components.is_empty() {
        return Err(IngestError::NoValidRows {
            skipped: skipped.len(),
        });
    }

    Ok(Ingestion {
        components,
        skipped,
        header_row: headers.header_row,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_grid(rows: &[&[&str]]) -> Vec<Vec<Cell>> {
        rows.iter()
            .map(|r| r.iter().map(|s| Cell::from_text(*s)).collect())
            .collect()
    }

    #[test]
    fn test_chinese_grid_single_component() {
        let grid = text_grid(&[
            &["类型", "数量", "失效率", "描述"],
            &["电阻", "10", "0.000001", "精密电阻"],
        ]);
        let ingestion = ingest(&grid, &KeywordSet::default()).unwrap();

        assert_eq!(ingestion.valid_count(), 1);
        assert_eq!(ingestion.skipped_count(), 0);

        let cmp = &ingestion.components[0];
        assert_eq!(cmp.kind, "电阻");
        assert_eq!(cmp.quantity, 10);
        assert_eq!(cmp.failure_rate, 0.000001);
        assert_eq!(cmp.description, "精密电阻");
    }

    #[test]
    fn test_bad_quantity_row_skipped_rest_ingests() {
        let grid = text_grid(&[
            &["type", "quantity", "failure rate"],
            &["resistor", "abc", "1e-6"],
            &["capacitor", "4", "2e-6"],
        ]);
        let ingestion = ingest(&grid, &KeywordSet::default()).unwrap();

        assert_eq!(ingestion.valid_count(), 1);
        assert_eq!(ingestion.skipped_count(), 1);
        assert_eq!(ingestion.components[0].kind, "capacitor");
        assert_eq!(ingestion.skipped[0].row, 1);
        assert_eq!(ingestion.skipped[0].reasons, vec![SkipReason::InvalidQuantity]);
    }

    #[test]
    fn test_blank_rows_not_counted() {
        let grid = text_grid(&[
            &["type", "quantity", "failure rate"],
            &["resistor", "10", "1e-6"],
            &["", "", ""],
            &["diode", "2", "4e-6"],
        ]);
        let ingestion = ingest(&grid, &KeywordSet::default()).unwrap();

        assert_eq!(ingestion.valid_count(), 2);
        assert_eq!(ingestion.skipped_count(), 0);
    }

    #[test]
    fn test_components_keep_row_order() {
        let grid = text_grid(&[
            &["type", "quantity", "failure rate"],
            &["resistor", "10", "1e-6"],
            &["capacitor", "4", "2e-6"],
            &["diode", "2", "4e-6"],
        ]);
        let ingestion = ingest(&grid, &KeywordSet::default()).unwrap();
        let kinds: Vec<&str> = ingestion.components.iter().map(|c| c.kind.as_str()).collect();
        assert_eq!(kinds, vec!["resistor", "capacitor", "diode"]);
    }

    #[test]
    fn test_header_found_after_banner() {
        let grid = text_grid(&[
            &["Component Reliability Worksheet", "", ""],
            &["Type", "Qty", "Failure Rate"],
            &["resistor", "10", "1e-6"],
        ]);
        let ingestion = ingest(&grid, &KeywordSet::default()).unwrap();
        assert_eq!(ingestion.header_row, 1);
        assert_eq!(ingestion.valid_count(), 1);
    }

    #[test]
    fn test_too_few_rows() {
        let grid = text_grid(&[&["type", "quantity", "failure rate"]]);
        assert!(matches!(
            ingest(&grid, &KeywordSet::default()),
            Err(IngestError::TooFewRows { rows: 1 })
        ));

        assert!(matches!(
            ingest(&[], &KeywordSet::default()),
            Err(IngestError::TooFewRows { rows: 0 })
        ));
    }

    #[test]
    fn test_missing_failure_rate_column_fails_structurally() {
        let grid = text_grid(&[
            &["type", "quantity", "unit cost"],
            &["resistor", "10", "0.02"],
        ]);
        match ingest(&grid, &KeywordSet::default()) {
            Err(IngestError::Header(err)) => {
                assert_eq!(err.missing, vec![Field::FailureRate]);
            }
            other => panic!("expected header error, got {:?}", other),
        }
    }

    #[test]
    fn test_all_rows_bad_is_overall_failure() {
        let grid = text_grid(&[
            &["type", "quantity", "failure rate"],
            &["resistor", "abc", "1e-6"],
            &["", "4", "2e-6"],
        ]);
        match ingest(&grid, &KeywordSet::default()) {
            Err(IngestError::NoValidRows { skipped }) => assert_eq!(skipped, 2),
            other => panic!("expected NoValidRows, got {:?}", other),
        }
    }
}
