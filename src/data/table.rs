//! Sample Table Module
//! Labeled rows x columns grid of optional vector-valued cells.

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Row {row} has {got} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("Got {got} row labels for {rows} rows")]
    RowLabelCount { rows: usize, got: usize },
    #[error("Got {got} column labels for {cols} columns")]
    ColLabelCount { cols: usize, got: usize },
}

/// One table entry, classified once at ingestion.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// No data for this grid position.
    Empty,
    /// Ordered 2D points; a zero-length sequence is still non-null.
    Vectors(Vec<[f64; 2]>),
    /// Non-null value that is not a vector sequence, kept verbatim.
    Invalid(Value),
}

impl Cell {
    /// Classify a raw JSON value.
    ///
    /// Null maps to `Empty`; an array of two-element numeric arrays maps to
    /// `Vectors`; everything else, strings included, maps to `Invalid`.
    pub fn classify(value: Value) -> Cell {
        match value {
            Value::Null => Cell::Empty,
            Value::Array(ref items) => match parse_vectors(items) {
                Some(vectors) => Cell::Vectors(vectors),
                None => Cell::Invalid(value),
            },
            other => Cell::Invalid(other),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

fn parse_vectors(items: &[Value]) -> Option<Vec<[f64; 2]>> {
    items
        .iter()
        .map(|item| {
            let pair = item.as_array()?;
            if pair.len() != 2 {
                return None;
            }
            Some([pair[0].as_f64()?, pair[1].as_f64()?])
        })
        .collect()
}

/// Rectangular grid of cells with row and column labels.
///
/// Dimensions are fixed at construction; cells are stored row-major.
/// The labels are purely presentational and end up as axis tick labels.
#[derive(Debug, Clone)]
pub struct SampleTable {
    nrows: usize,
    ncols: usize,
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    cells: Vec<Cell>,
}

impl SampleTable {
    /// Build a table from already-classified cells.
    pub fn new(
        rows: Vec<Vec<Cell>>,
        row_labels: Vec<String>,
        col_labels: Vec<String>,
    ) -> Result<SampleTable, TableError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());

        for (i, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(TableError::RaggedRow {
                    row: i,
                    expected: ncols,
                    got: row.len(),
                });
            }
        }
        if row_labels.len() != nrows {
            return Err(TableError::RowLabelCount {
                rows: nrows,
                got: row_labels.len(),
            });
        }
        if col_labels.len() != ncols {
            return Err(TableError::ColLabelCount {
                cols: ncols,
                got: col_labels.len(),
            });
        }

        Ok(SampleTable {
            nrows,
            ncols,
            row_labels,
            col_labels,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Build a table from raw JSON cell values, classifying each cell.
    pub fn from_json(
        rows: Vec<Vec<Value>>,
        row_labels: Vec<String>,
        col_labels: Vec<String>,
    ) -> Result<SampleTable, TableError> {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Cell::classify).collect())
            .collect();
        SampleTable::new(rows, row_labels, col_labels)
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row * self.ncols + col]
    }

    /// Iterate cells in row-major order as `(row, col, cell)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (i / self.ncols, i % self.ncols, cell))
    }
}
