//! Prickle - grid-of-displacement-vectors plot renderer
//!
//! A prickle plot lays a table of samples out on a rows x columns grid.
//! Each non-null cell gets a dot at its grid position and one line segment
//! ("prickle") per vector it holds, pointing from the grid position by the
//! vector's offset from a shared reference point.
//!
//! ```no_run
//! use plotters::prelude::*;
//! use prickle::{PlotOptions, PrickleChart, SampleTable};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = SampleTable::from_json(
//!     vec![
//!         vec![json!([[1, 1]]), json!(null)],
//!         vec![json!([[2, 0], [0, 2]]), json!(null)],
//!     ],
//!     vec!["wt".into(), "mut".into()],
//!     vec!["day0".into(), "day1".into()],
//! )?;
//! let chart = PrickleChart::new(table, [0.0, 0.0]);
//!
//! let root = BitMapBackend::new("prickle.png", (600, 600)).into_drawing_area();
//! root.fill(&WHITE)?;
//! let report = chart.render(&root, &PlotOptions::default())?;
//! assert_eq!(report.segments, 3);
//! # Ok(())
//! # }
//! ```

mod charts;
mod data;

pub use charts::{
    CellDiagnostic, ChartError, DotStyle, Frame, PlotOptions, PrickleChart, PrickleReport,
    PrickleStyle, RenderReport, Segment,
};
pub use data::{Cell, SampleTable, TableError};
