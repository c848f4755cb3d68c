//! CSV decoding - turns a file into the raw cell grid
//!
//! This is the spreadsheet-decoding collaborator: it knows about the file
//! format and nothing about component semantics. Header detection belongs
//! to the resolver, so the reader treats every record as data.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::ReaderBuilder;

use super::cell::Cell;
use super::IngestError;

/// Read a CSV file into an untyped cell grid.
///
/// Rows may be ragged; quoting and delimiters follow RFC 4180 as handled by
/// the `csv` crate. Whitespace-only cells come back as `Cell::Empty`.
pub fn read_grid(path: &Path) -> Result<Vec<Vec<Cell>>, IngestError> {
    let file = File::open(path)
        .map_err(|e| IngestError::Read(format!("{}: {}", path.display(), e)))?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut grid = Vec::new();
    for record in rdr.records() {
        let record =
            record.map_err(|e| IngestError::Read(format!("{}: {}", path.display(), e)))?;
        grid.push(record.iter().map(Cell::from_text).collect());
    }

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_simple_grid() {
        let file = write_csv("type,quantity,failure rate\nresistor,10,1e-6\n");
        let grid = read_grid(file.path()).unwrap();

        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0][0], Cell::Text("type".into()));
        assert_eq!(grid[1][1], Cell::Text("10".into()));
    }

    #[test]
    fn test_ragged_rows_tolerated() {
        let file = write_csv("a,b,c\nx\ny,z\n");
        let grid = read_grid(file.path()).unwrap();

        assert_eq!(grid[1].len(), 1);
        assert_eq!(grid[2].len(), 2);
    }

    #[test]
    fn test_blank_cells_become_empty() {
        let file = write_csv("a,,c\n");
        let grid = read_grid(file.path()).unwrap();
        assert_eq!(grid[0][1], Cell::Empty);
    }

    #[test]
    fn test_quoted_cells_with_commas() {
        let file = write_csv("type,description\nresistor,\"10k, 1%\"\n");
        let grid = read_grid(file.path()).unwrap();
        assert_eq!(grid[1][1], Cell::Text("10k, 1%".into()));
    }

    #[test]
    fn test_missing_file() {
        let err = read_grid(Path::new("/nonexistent/components.csv")).unwrap_err();
        assert!(matches!(err, IngestError::Read(_)));
    }
}
