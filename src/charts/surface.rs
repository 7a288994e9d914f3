//! Chart Surface Module
//! Draws prickle geometry onto a caller-supplied plotters drawing area.
//!
//! The drawing area handle is passed into every call; this crate holds no
//! global rendering state. Callers keep ownership of the surface and decide
//! when to present or encode it.

use plotters::chart::{ChartBuilder, ChartContext};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;

use crate::charts::prickle::{CellDiagnostic, PrickleChart, Segment};

/// Pixels reserved for the tick-label strips of the full plot.
const X_LABEL_AREA: u32 = 30;
const Y_LABEL_AREA: u32 = 40;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Rendering backend error: {0}")]
    Backend(String),
}

fn backend_err<E: std::error::Error + Send + Sync>(
    err: plotters::drawing::DrawingAreaErrorKind<E>,
) -> ChartError {
    ChartError::Backend(err.to_string())
}

/// Marker style for grid dots.
#[derive(Debug, Clone, Copy)]
pub struct DotStyle {
    pub size: u32,
    pub color: RGBColor,
}

impl Default for DotStyle {
    fn default() -> Self {
        DotStyle {
            size: 10,
            color: BLACK,
        }
    }
}

/// Stroke style for prickle segments.
#[derive(Debug, Clone, Copy)]
pub struct PrickleStyle {
    pub width: u32,
    pub color: RGBColor,
}

impl Default for PrickleStyle {
    fn default() -> Self {
        PrickleStyle {
            width: 1,
            color: BLACK,
        }
    }
}

/// Options for the combined plot.
#[derive(Debug, Clone, Copy)]
pub struct PlotOptions {
    /// Units of margin around the grid.
    pub pad: f64,
    pub dots: DotStyle,
    pub prickles: PrickleStyle,
}

impl Default for PlotOptions {
    fn default() -> Self {
        PlotOptions {
            pad: 1.0,
            dots: DotStyle::default(),
            prickles: PrickleStyle::default(),
        }
    }
}

/// Outcome of a prickle pass: what was drawn and what was skipped.
#[derive(Debug, Clone)]
pub struct PrickleReport {
    pub segments: usize,
    pub diagnostics: Vec<CellDiagnostic>,
}

/// Outcome of a combined render.
#[derive(Debug, Clone)]
pub struct RenderReport {
    pub dots: usize,
    pub segments: usize,
    pub diagnostics: Vec<CellDiagnostic>,
}

type GridContext<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

impl PrickleChart {
    /// Draw one dot per non-null cell at its grid position.
    ///
    /// Uses default padding for the coordinate range; use [`Self::render`]
    /// for the fully furnished plot.
    pub fn render_dots<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        style: &DotStyle,
    ) -> Result<usize, ChartError> {
        let mut chart = self.grid_context(area)?;
        self.draw_dots(&mut chart, style)
    }

    /// Draw every prickle segment, skipping malformed cells with a warning.
    pub fn render_prickles<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        style: &PrickleStyle,
    ) -> Result<PrickleReport, ChartError> {
        let mut chart = self.grid_context(area)?;
        self.draw_prickles(&mut chart, style)
    }

    /// Draw the full plot: dots, then prickles, then axis furniture.
    ///
    /// Ticks sit at every row and column index, labeled from the table; the
    /// plot region keeps a 1:1 aspect ratio so prickle angles and lengths
    /// are not distorted.
    pub fn render<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        options: &PlotOptions,
    ) -> Result<RenderReport, ChartError> {
        let frame = self.frame(options.pad);

        // Carve out a centered viewport whose inner plot region matches the
        // data aspect, label strips excluded.
        let (w, h) = area.dim_in_pixel();
        let avail = (
            w.saturating_sub(Y_LABEL_AREA),
            h.saturating_sub(X_LABEL_AREA),
        );
        let ((ox, oy), (pw, ph)) = aspect_viewport(avail, frame.x_span(), frame.y_span());
        let view = area
            .clone()
            .shrink((ox, oy), (pw + Y_LABEL_AREA, ph + X_LABEL_AREA));

        let mut chart = ChartBuilder::on(&view)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d(frame.x_lim.0..frame.x_lim.1, frame.y_lim.0..frame.y_lim.1)
            .map_err(backend_err)?;

        let dots = self.draw_dots(&mut chart, &options.dots)?;
        let prickles = self.draw_prickles(&mut chart, &options.prickles)?;

        let col_labels = self.table().col_labels().to_vec();
        let row_labels = self.table().row_labels().to_vec();
        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(frame.x_span() as usize + 1)
            .y_labels(frame.y_span() as usize + 1)
            .x_label_formatter(&move |x| label_at(&col_labels, *x))
            .y_label_formatter(&move |y| label_at(&row_labels, *y))
            .axis_style(&BLACK)
            .draw()
            .map_err(backend_err)?;

        Ok(RenderReport {
            dots,
            segments: prickles.segments,
            diagnostics: prickles.diagnostics,
        })
    }

    fn grid_context<'a, DB: DrawingBackend>(
        &self,
        area: &'a DrawingArea<DB, Shift>,
    ) -> Result<GridContext<'a, DB>, ChartError> {
        let frame = self.frame(PlotOptions::default().pad);
        ChartBuilder::on(area)
            .build_cartesian_2d(frame.x_lim.0..frame.x_lim.1, frame.y_lim.0..frame.y_lim.1)
            .map_err(backend_err)
    }

    fn draw_dots<DB: DrawingBackend>(
        &self,
        chart: &mut GridContext<'_, DB>,
        style: &DotStyle,
    ) -> Result<usize, ChartError> {
        let dots = self.dot_points();
        chart
            .draw_series(
                dots.iter()
                    .map(|&p| Circle::new(p, style.size, style.color.filled())),
            )
            .map_err(backend_err)?;
        Ok(dots.len())
    }

    fn draw_prickles<DB: DrawingBackend>(
        &self,
        chart: &mut GridContext<'_, DB>,
        style: &PrickleStyle,
    ) -> Result<PrickleReport, ChartError> {
        let (segments, diagnostics) = self.segments();
        let stroke = ShapeStyle::from(&style.color).stroke_width(style.width);
        chart
            .draw_series(
                segments
                    .iter()
                    .map(|&Segment { start, end }| PathElement::new(vec![start, end], stroke)),
            )
            .map_err(backend_err)?;
        Ok(PrickleReport {
            segments: segments.len(),
            diagnostics,
        })
    }
}

/// Tick label for integer axis positions; everything else stays blank.
fn label_at(labels: &[String], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels
        .get(idx as usize)
        .cloned()
        .unwrap_or_default()
}

/// Largest centered sub-rectangle of `dims` with the same width:height
/// ratio as `x_span:y_span`, so one data unit maps to the same number of
/// pixels on both axes.
fn aspect_viewport(dims: (u32, u32), x_span: f64, y_span: f64) -> ((u32, u32), (u32, u32)) {
    let (w, h) = dims;
    if w == 0 || h == 0 || x_span <= 0.0 || y_span <= 0.0 {
        return ((0, 0), dims);
    }
    let scale = (w as f64 / x_span).min(h as f64 / y_span);
    let pw = (scale * x_span).round() as u32;
    let ph = (scale * y_span).round() as u32;
    (((w - pw) / 2, (h - ph) / 2), (pw, ph))
}
