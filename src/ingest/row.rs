//! Row validation - turn one data row into a Component or a skip record

use thiserror::Error;

use crate::entities::{default_description, Component};

use super::cell::{parse_number, Cell};
use super::header::HeaderMap;

/// Why a data row was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("empty type")]
    EmptyType,

    #[error("invalid quantity")]
    InvalidQuantity,

    #[error("invalid failure rate")]
    InvalidFailureRate,
}

/// Outcome of validating one data row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// The row produced a valid component
    Component(Component),
    /// Every cell was blank; tolerated silently, not an error
    Blank,
    /// The row failed validation; all failing checks are reported
    Skipped(Vec<SkipReason>),
}

fn cell_at(row: &[Cell], idx: usize) -> &Cell {
    static EMPTY: Cell = Cell::Empty;
    row.get(idx).unwrap_or(&EMPTY)
}

/// Validate a single data row against the resolved header layout.
///
/// The three mandatory checks are independent and all of them run, so a
/// skip record names every defect in the row, but one failing check is
/// enough to reject it. Nothing here can abort the surrounding ingestion.
pub fn build_component(row: &[Cell], headers: &HeaderMap) -> RowOutcome {
    if row.iter().all(Cell::is_blank) {
        return RowOutcome::Blank;
    }

    let mut reasons = Vec::new();

    let kind = cell_at(row, headers.kind_col()).text();
    if kind.is_empty() {
        reasons.push(SkipReason::EmptyType);
    }

    let quantity_raw = parse_number(cell_at(row, headers.quantity_col()));
    let quantity = quantity_raw.round();
    if !quantity_raw.is_finite() || quantity_raw <= 0.0 || quantity < 1.0 {
        reasons.push(SkipReason::InvalidQuantity);
    }

    let failure_rate = parse_number(cell_at(row, headers.failure_rate_col()));
    if !failure_rate.is_finite() || failure_rate <= 0.0 {
        reasons.push(SkipReason::InvalidFailureRate);
    }

    if !reasons.is_empty() {
        return RowOutcome::Skipped(reasons);
    }

    let description = headers
        .description_col()
        .map(|idx| cell_at(row, idx).text())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| default_description(&kind));

    RowOutcome::Component(Component::with_description(
        kind,
        quantity as u32,
        failure_rate,
        description,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::header::{resolve, KeywordSet};

    fn headers() -> HeaderMap {
        let grid = vec![
            vec![
                Cell::from_text("type"),
                Cell::from_text("quantity"),
                Cell::from_text("failure rate"),
                Cell::from_text("description"),
            ],
            vec![Cell::from_text("x"), Cell::from_text("1"), Cell::from_text("1e-6")],
        ];
        resolve(&grid, &KeywordSet::default()).unwrap()
    }

    fn row(cells: &[&str]) -> Vec<Cell> {
        cells.iter().map(|s| Cell::from_text(*s)).collect()
    }

    #[test]
    fn test_valid_row() {
        let outcome = build_component(&row(&["resistor", "10", "1e-6", "pull-up"]), &headers());
        match outcome {
            RowOutcome::Component(cmp) => {
                assert_eq!(cmp.kind, "resistor");
                assert_eq!(cmp.quantity, 10);
                assert_eq!(cmp.failure_rate, 1e-6);
                assert_eq!(cmp.description, "pull-up");
            }
            other => panic!("expected component, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_row_tolerated() {
        assert_eq!(
            build_component(&row(&["", "  ", ""]), &headers()),
            RowOutcome::Blank
        );
        assert_eq!(build_component(&[], &headers()), RowOutcome::Blank);
    }

    #[test]
    fn test_missing_description_gets_default() {
        let outcome = build_component(&row(&["relay", "2", "1.5e-5", "  "]), &headers());
        match outcome {
            RowOutcome::Component(cmp) => assert_eq!(cmp.description, "relay component"),
            other => panic!("expected component, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_type_skipped() {
        let outcome = build_component(&row(&["", "10", "1e-6"]), &headers());
        assert_eq!(outcome, RowOutcome::Skipped(vec![SkipReason::EmptyType]));
    }

    #[test]
    fn test_unparseable_quantity_skipped() {
        let outcome = build_component(&row(&["resistor", "abc", "1e-6"]), &headers());
        assert_eq!(
            outcome,
            RowOutcome::Skipped(vec![SkipReason::InvalidQuantity])
        );
    }

    #[test]
    fn test_nonpositive_values_skipped() {
        assert_eq!(
            build_component(&row(&["resistor", "0", "1e-6"]), &headers()),
            RowOutcome::Skipped(vec![SkipReason::InvalidQuantity])
        );
        assert_eq!(
            build_component(&row(&["resistor", "-2", "1e-6"]), &headers()),
            RowOutcome::Skipped(vec![SkipReason::InvalidQuantity])
        );
        assert_eq!(
            build_component(&row(&["resistor", "10", "-1e-6"]), &headers()),
            RowOutcome::Skipped(vec![SkipReason::InvalidFailureRate])
        );
    }

    #[test]
    fn test_quantity_rounding_to_zero_skipped() {
        let outcome = build_component(&row(&["resistor", "0.3", "1e-6"]), &headers());
        assert_eq!(
            outcome,
            RowOutcome::Skipped(vec![SkipReason::InvalidQuantity])
        );
    }

    #[test]
    fn test_all_defects_reported() {
        let outcome = build_component(&row(&["", "abc", "zzz"]), &headers());
        assert_eq!(
            outcome,
            RowOutcome::Skipped(vec![
                SkipReason::EmptyType,
                SkipReason::InvalidQuantity,
                SkipReason::InvalidFailureRate,
            ])
        );
    }

    #[test]
    fn test_numeric_cells_accepted() {
        let cells = vec![
            Cell::from_text("capacitor"),
            Cell::Number(4.0),
            Cell::Number(2e-6),
        ];
        match build_component(&cells, &headers()) {
            RowOutcome::Component(cmp) => {
                assert_eq!(cmp.quantity, 4);
                assert_eq!(cmp.failure_rate, 2e-6);
            }
            other => panic!("expected component, got {:?}", other),
        }
    }
}
