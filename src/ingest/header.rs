//! Fuzzy header resolution for loosely-formatted component tables
//!
//! Real-world component lists rarely start at row 0 with clean column names:
//! title banners, merged cells, and localized headers are the norm. The
//! resolver scans the first few rows for one that mentions every mandatory
//! field, then maps each logical field to a column by candidate-name
//! matching. Keyword lists are data, so new locales extend the tables
//! without touching the matching logic.

use thiserror::Error;

use super::cell::Cell;

/// How many leading rows are inspected when hunting for the header row.
const HEADER_SCAN_ROWS: usize = 3;

/// The logical fields a component table must (or may) provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Component category label ("type")
    Kind,
    /// Unit count
    Quantity,
    /// Per-unit failure rate
    FailureRate,
    /// Free-text description (optional)
    Description,
}

impl Field {
    /// The three fields a table cannot do without
    pub const MANDATORY: [Field; 3] = [Field::Kind, Field::Quantity, Field::FailureRate];

    /// Human-facing field name used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            Field::Kind => "type",
            Field::Quantity => "quantity",
            Field::FailureRate => "failure rate",
            Field::Description => "description",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Ordered candidate header names for one logical field.
#[derive(Debug, Clone)]
pub struct FieldKeywords {
    pub field: Field,
    /// Lowercase candidates, highest priority first
    pub candidates: Vec<String>,
}

/// The full keyword table driving header detection and column assignment.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    fields: Vec<FieldKeywords>,
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KeywordSet {
    /// Built-in English and Chinese candidate names.
    pub fn builtin() -> Self {
        let field = |field, names: &[&str]| FieldKeywords {
            field,
            candidates: names.iter().map(|s| s.to_string()).collect(),
        };
        Self {
            fields: vec![
                field(
                    Field::Kind,
                    &["type", "component type", "category", "kind", "类型", "元件类型"],
                ),
                field(
                    Field::Quantity,
                    &["quantity", "qty", "count", "数量"],
                ),
                field(
                    Field::FailureRate,
                    &["failure rate", "failure_rate", "failurerate", "lambda", "失效率"],
                ),
                field(
                    Field::Description,
                    &["description", "desc", "remark", "notes", "描述", "说明", "备注"],
                ),
            ],
        }
    }

    /// Append extra candidates for a field (e.g. another locale).
    pub fn extend(&mut self, field: Field, names: &[&str]) {
        if let Some(entry) = self.fields.iter_mut().find(|f| f.field == field) {
            entry
                .candidates
                .extend(names.iter().map(|s| s.to_lowercase()));
        }
    }

    fn candidates(&self, field: Field) -> &[String] {
        self.fields
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.candidates.as_slice())
            .unwrap_or(&[])
    }
}

/// Resolved header layout: which row holds the headers and where each
/// logical field lives.
#[derive(Debug, Clone)]
pub struct HeaderMap {
    pub header_row: usize,
    kind: usize,
    quantity: usize,
    failure_rate: usize,
    description: Option<usize>,
}

impl HeaderMap {
    pub fn kind_col(&self) -> usize {
        self.kind
    }

    pub fn quantity_col(&self) -> usize {
        self.quantity
    }

    pub fn failure_rate_col(&self) -> usize {
        self.failure_rate
    }

    pub fn description_col(&self) -> Option<usize> {
        self.description
    }
}

/// Structural header failure: the table names its columns, but not the ones
/// we need. Carries the literal headers found to aid diagnosis.
#[derive(Debug, Clone, Error)]
#[error("missing mandatory column(s) {}: found headers [{}]",
    missing.iter().map(|f| f.label()).collect::<Vec<_>>().join(", "),
    found.join(", "))]
pub struct HeaderError {
    /// Mandatory fields that could not be mapped to a column
    pub missing: Vec<Field>,
    /// The literal header cells of the row that was used
    pub found: Vec<String>,
}

/// Locate the header row and map logical fields to column indices.
pub fn resolve(grid: &[Vec<Cell>], keywords: &KeywordSet) -> Result<HeaderMap, HeaderError> {
    if grid.is_empty() {
        return Err(HeaderError {
            missing: Field::MANDATORY.to_vec(),
            found: Vec::new(),
        });
    }

    let header_row = detect_header_row(grid, keywords);
    let cells = &grid[header_row];

    let kind = find_column(cells, keywords.candidates(Field::Kind));
    let quantity = find_column(cells, keywords.candidates(Field::Quantity));
    let failure_rate = find_column(cells, keywords.candidates(Field::FailureRate));
    let description = find_column(cells, keywords.candidates(Field::Description));

    match (kind, quantity, failure_rate) {
        (Some(kind), Some(quantity), Some(failure_rate)) => Ok(HeaderMap {
            header_row,
            kind,
            quantity,
            failure_rate,
            description,
        }),
        _ => {
            let mut missing = Vec::new();
            if kind.is_none() {
                missing.push(Field::Kind);
            }
            if quantity.is_none() {
                missing.push(Field::Quantity);
            }
            if failure_rate.is_none() {
                missing.push(Field::FailureRate);
            }
            Err(HeaderError {
                missing,
                found: cells.iter().map(Cell::text).collect(),
            })
        }
    }
}

/// A row qualifies as the header row when its case-folded concatenated cells
/// mention every mandatory field. The first qualifying row within the scan
/// window wins; row 0 is used unconditionally when none qualifies.
fn detect_header_row(grid: &[Vec<Cell>], keywords: &KeywordSet) -> usize {
    for (idx, row) in grid.iter().take(HEADER_SCAN_ROWS).enumerate() {
        let folded: String = row
            .iter()
            .map(|c| c.text().to_lowercase())
            .collect::<Vec<_>>()
            .join("");

        let qualifies = Field::MANDATORY.iter().all(|field| {
            keywords
                .candidates(*field)
                .iter()
                .any(|kw| folded.contains(kw.as_str()))
        });

        if qualifies {
            return idx;
        }
    }
    0
}

/// Assign a column for one field: walk candidates in priority order, trying
/// exact (trimmed, case-folded) matches before substring containment.
fn find_column(cells: &[Cell], candidates: &[String]) -> Option<usize> {
    let headers: Vec<String> = cells.iter().map(|c| c.text().to_lowercase()).collect();

    for candidate in candidates {
        if let Some(idx) = headers.iter().position(|h| h == candidate) {
            return Some(idx);
        }
        if let Some(idx) = headers
            .iter()
            .position(|h| !h.is_empty() && h.contains(candidate.as_str()))
        {
            return Some(idx);
        }
    }
    None
}
