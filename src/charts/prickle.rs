//! Prickle Chart Geometry
//! Turns a sample table plus a shared reference point into dots and segments.
//!
//! All geometry is recomputed on every call; nothing is cached. Grid
//! coordinates are `(col, row)`, so column index maps to x and row index
//! to y, matching the axis layout of the rendered plot.

use crate::data::{Cell, SampleTable};
use serde::Serialize;
use serde_json::Value;

/// One drawn prickle: from a cell's grid position to the displaced point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: (f64, f64),
    pub end: (f64, f64),
}

/// Record of a non-null cell that could not be plotted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellDiagnostic {
    pub row: usize,
    pub col: usize,
    pub row_label: String,
    pub col_label: String,
    pub raw: Value,
}

/// Axis limits for the full plot, padded around the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x_lim: (f64, f64),
    pub y_lim: (f64, f64),
}

impl Frame {
    pub fn x_span(&self) -> f64 {
        self.x_lim.1 - self.x_lim.0
    }

    pub fn y_span(&self) -> f64 {
        self.y_lim.1 - self.y_lim.0
    }
}

/// Prickle plot over a sample table and a shared reference point.
///
/// Each vector in a cell is an absolute 2D point; the drawn displacement is
/// `vector - zero`, anchored at the cell's grid position.
pub struct PrickleChart {
    table: SampleTable,
    zero: [f64; 2],
}

impl PrickleChart {
    pub fn new(table: SampleTable, zero: [f64; 2]) -> PrickleChart {
        PrickleChart { table, zero }
    }

    pub fn table(&self) -> &SampleTable {
        &self.table
    }

    /// Grid coordinates `(col, row)` of every cell holding a vector
    /// sequence, zero-length sequences included.
    pub fn dot_points(&self) -> Vec<(f64, f64)> {
        self.table
            .iter()
            .filter(|(_, _, cell)| matches!(cell, Cell::Vectors(_)))
            .map(|(row, col, _)| (col as f64, row as f64))
            .collect()
    }

    /// All prickle segments in row-major cell order, plus one diagnostic
    /// per cell that is non-null but holds no vector sequence.
    ///
    /// Malformed cells are skipped with a warning; they never abort the
    /// scan.
    pub fn segments(&self) -> (Vec<Segment>, Vec<CellDiagnostic>) {
        let mut segments = Vec::new();
        let mut diagnostics = Vec::new();

        for (row, col, cell) in self.table.iter() {
            match cell {
                Cell::Vectors(vectors) => {
                    let (x0, y0) = (col as f64, row as f64);
                    for v in vectors {
                        segments.push(Segment {
                            start: (x0, y0),
                            end: (x0 + v[0] - self.zero[0], y0 + v[1] - self.zero[1]),
                        });
                    }
                }
                Cell::Invalid(raw) => {
                    let row_label = self.table.row_labels()[row].clone();
                    let col_label = self.table.col_labels()[col].clone();
                    log::warn!(
                        "odd cell at [{}, {}]: not null, but it could not be plotted",
                        row_label,
                        col_label
                    );
                    diagnostics.push(CellDiagnostic {
                        row,
                        col,
                        row_label,
                        col_label,
                        raw: raw.clone(),
                    });
                }
                Cell::Empty => {}
            }
        }

        (segments, diagnostics)
    }

    /// Axis limits with `pad` units of margin around the grid.
    pub fn frame(&self, pad: f64) -> Frame {
        Frame {
            x_lim: (-pad, self.table.ncols() as f64 + pad - 1.0),
            y_lim: (-pad, self.table.nrows() as f64 + pad - 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SampleTable;
    use serde_json::json;

    fn labels(prefix: &str, n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{}{}", prefix, i)).collect()
    }

    /// 2x2 scenario: one plain cell, one null, one two-vector cell, one
    /// malformed scalar.
    fn sample_chart() -> PrickleChart {
        let table = SampleTable::from_json(
            vec![
                vec![json!([[1, 1]]), json!(null)],
                vec![json!([[2, 0], [0, 2]]), json!(5)],
            ],
            labels("r", 2),
            labels("c", 2),
        )
        .unwrap();
        PrickleChart::new(table, [0.0, 0.0])
    }

    #[test]
    fn dots_skip_null_and_invalid_cells() {
        let chart = sample_chart();
        assert_eq!(chart.dot_points(), vec![(0.0, 0.0), (0.0, 1.0)]);
    }

    #[test]
    fn zero_length_cell_still_gets_a_dot() {
        let table = SampleTable::from_json(
            vec![vec![json!([]), json!(null)]],
            labels("r", 1),
            labels("c", 2),
        )
        .unwrap();
        let chart = PrickleChart::new(table, [0.0, 0.0]);

        assert_eq!(chart.dot_points(), vec![(0.0, 0.0)]);
        let (segments, diagnostics) = chart.segments();
        assert!(segments.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn one_segment_per_vector_with_reference_offset() {
        let table = SampleTable::from_json(
            vec![vec![json!(null), json!([[3.0, 4.0], [1.0, 2.0]])]],
            labels("r", 1),
            labels("c", 2),
        )
        .unwrap();
        let chart = PrickleChart::new(table, [1.0, 2.0]);

        let (segments, diagnostics) = chart.segments();
        assert!(diagnostics.is_empty());
        assert_eq!(
            segments,
            vec![
                Segment {
                    start: (1.0, 0.0),
                    end: (3.0, 2.0)
                },
                Segment {
                    start: (1.0, 0.0),
                    end: (1.0, 0.0)
                },
            ]
        );
    }

    #[test]
    fn sample_scenario_segments_and_diagnostic() {
        let chart = sample_chart();
        let (segments, diagnostics) = chart.segments();

        assert_eq!(
            segments,
            vec![
                Segment {
                    start: (0.0, 0.0),
                    end: (1.0, 1.0)
                },
                Segment {
                    start: (0.0, 1.0),
                    end: (2.0, 1.0)
                },
                Segment {
                    start: (0.0, 1.0),
                    end: (0.0, 3.0)
                },
            ]
        );

        assert_eq!(diagnostics.len(), 1);
        let diag = &diagnostics[0];
        assert_eq!((diag.row, diag.col), (1, 1));
        assert_eq!(diag.row_label, "r1");
        assert_eq!(diag.col_label, "c1");
        assert_eq!(diag.raw, json!(5));
    }

    #[test]
    fn invalid_cell_does_not_stop_the_scan() {
        let table = SampleTable::from_json(
            vec![vec![json!("oops"), json!([[1, 1]])]],
            labels("r", 1),
            labels("c", 2),
        )
        .unwrap();
        let chart = PrickleChart::new(table, [0.0, 0.0]);

        let (segments, diagnostics) = chart.segments();
        assert_eq!(diagnostics.len(), 1);
        // The cell after the malformed one still renders.
        assert_eq!(
            segments,
            vec![Segment {
                start: (1.0, 0.0),
                end: (2.0, 1.0)
            }]
        );
    }

    #[test]
    fn frame_pads_around_the_grid() {
        let table = SampleTable::from_json(
            vec![
                vec![json!(null), json!(null), json!(null)],
                vec![json!(null), json!(null), json!(null)],
            ],
            labels("r", 2),
            labels("c", 3),
        )
        .unwrap();
        let chart = PrickleChart::new(table, [0.0, 0.0]);

        let frame = chart.frame(1.0);
        assert_eq!(frame.x_lim, (-1.0, 3.0));
        assert_eq!(frame.y_lim, (-1.0, 2.0));

        let frame = chart.frame(0.5);
        assert_eq!(frame.x_lim, (-0.5, 2.5));
        assert_eq!(frame.y_lim, (-0.5, 1.5));
    }
}
