//! Charts module - prickle geometry and rendering

mod prickle;
mod surface;

pub use prickle::{CellDiagnostic, Frame, PrickleChart, Segment};
pub use surface::{ChartError, DotStyle, PlotOptions, PrickleReport, PrickleStyle, RenderReport};
