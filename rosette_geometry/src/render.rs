// Copyright 2025 the Rosette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering seam.
//!
//! Geometry computation never draws. Drawing goes through [`VectorRenderTarget`], which exposes
//! the small vocabulary every vector backend shares (paths with arcs, polygons, text), and is
//! implemented once per host technology. [`PathCollector`] is the in-crate implementation: it
//! turns everything into `kurbo::BezPath`s for curve-based renderers and for tests.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point, Vec2};
use peniko::Brush;
use peniko::color::palette::css;

use crate::legend::{LegendEntry, LegendLayout};
use crate::path::{ArcTo, ChartPath, PathCommand};
use crate::radar::RadarChart;
use crate::share::ShareChart;

/// Horizontal text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor.
    Start,
    /// Text is centered on the anchor.
    Middle,
    /// Text ends at the anchor.
    End,
}

/// A paint + width pair for stroked outlines.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in chart coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Fill and outline of a path or polygon.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeStyle {
    /// Fill paint; `None` leaves the interior unpainted.
    pub fill: Option<Brush>,
    /// Outline; `None` draws no outline.
    pub stroke: Option<StrokeStyle>,
}

impl ShapeStyle {
    /// A fill-only style.
    pub fn filled(fill: impl Into<Brush>) -> Self {
        Self {
            fill: Some(fill.into()),
            stroke: None,
        }
    }

    /// A stroke-only style.
    pub fn stroked(stroke: StrokeStyle) -> Self {
        Self {
            fill: None,
            stroke: Some(stroke),
        }
    }

    /// Adds or replaces the outline.
    pub fn with_stroke(mut self, stroke: Option<StrokeStyle>) -> Self {
        self.stroke = stroke;
        self
    }
}

/// Text styling.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in chart coordinates.
    pub font_size: f64,
    /// Fill paint.
    pub fill: Brush,
}

impl TextStyle {
    /// Creates a text style.
    pub fn new(font_size: f64, fill: impl Into<Brush>) -> Self {
        Self {
            font_size,
            fill: fill.into(),
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(10.0, css::BLACK)
    }
}

/// A vector drawing backend.
///
/// Paths are bracketed by [`begin_path`](Self::begin_path) and [`end_path`](Self::end_path);
/// the commands in between follow SVG path semantics.
pub trait VectorRenderTarget {
    /// Starts a new path.
    fn begin_path(&mut self);
    /// Starts a new subpath at `p`.
    fn move_to(&mut self, p: Point);
    /// Straight segment to `p`.
    fn line_to(&mut self, p: Point);
    /// Circular arc from the current point.
    fn arc_to(&mut self, arc: ArcTo);
    /// Closes the current subpath.
    fn close_path(&mut self);
    /// Paints the current path.
    fn end_path(&mut self, style: &ShapeStyle);
    /// Paints a closed polygon.
    fn polygon(&mut self, points: &[Point], style: &ShapeStyle);
    /// Paints a single line of text.
    fn text(&mut self, text: &str, pos: Point, anchor: TextAnchor, style: &TextStyle);
}

/// Styling for [`draw_share_chart`].
#[derive(Clone, Debug, PartialEq)]
pub struct ShareStyle {
    /// Outline drawn around every slice.
    pub slice_stroke: Option<StrokeStyle>,
    /// Fill for the donut hole. Donut slices are already annuli, so this is only needed to
    /// paint a background-colored disk.
    pub hole_fill: Option<Brush>,
    /// Percentage labels at slice centroids; `None` disables them.
    pub slice_labels: Option<TextStyle>,
    /// Legend label style.
    pub legend: TextStyle,
    /// Horizontal gap between the chart and the legend.
    pub legend_gap: f64,
}

impl Default for ShareStyle {
    fn default() -> Self {
        Self {
            slice_stroke: Some(StrokeStyle::solid(css::WHITE, 1.0)),
            hole_fill: None,
            slice_labels: None,
            legend: TextStyle::default(),
            legend_gap: 16.0,
        }
    }
}

/// Styling for [`draw_radar_chart`].
#[derive(Clone, Debug, PartialEq)]
pub struct RadarStyle {
    /// Grid polygon outline.
    pub grid: StrokeStyle,
    /// Spoke line style.
    pub spokes: StrokeStyle,
    /// Axis label style.
    pub labels: TextStyle,
    /// Alpha applied to the series color for the polygon fill.
    pub series_fill_alpha: f32,
    /// Series polygon outline width.
    pub series_stroke_width: f64,
    /// Radius of the dot drawn at each series vertex; `0.0` disables dots.
    pub point_radius: f64,
    /// Legend label style.
    pub legend: TextStyle,
    /// Horizontal gap between the chart and the legend.
    pub legend_gap: f64,
}

impl Default for RadarStyle {
    fn default() -> Self {
        let grid = StrokeStyle::solid(css::BLACK.with_alpha(40.0 / 255.0), 1.0);
        Self {
            spokes: grid.clone(),
            grid,
            labels: TextStyle::new(11.0, css::DARK_SLATE_GRAY),
            series_fill_alpha: 0.3,
            series_stroke_width: 2.0,
            point_radius: 3.0,
            legend: TextStyle::default(),
            legend_gap: 16.0,
        }
    }
}

/// Draws slices, the optional hole, optional slice labels and (if enabled) the legend.
pub fn draw_share_chart<T: VectorRenderTarget + ?Sized>(
    target: &mut T,
    chart: &ShareChart,
    style: &ShareStyle,
) {
    for slice in &chart.slices {
        target.begin_path();
        slice.path.replay(target);
        target.end_path(&ShapeStyle::filled(slice.color).with_stroke(style.slice_stroke.clone()));
    }

    if let (Some(hole), Some(fill)) = (chart.hole, &style.hole_fill) {
        let mut path = ChartPath::new();
        path.full_circle(
            hole.center,
            hole.radius,
            hole.center - Vec2::new(0.0, hole.radius),
            true,
        );
        target.begin_path();
        path.replay(target);
        target.end_path(&ShapeStyle::filled(fill.clone()));
    }

    if let Some(text_style) = &style.slice_labels {
        for slice in chart.slices.iter().filter(|s| s.value > 0.0) {
            let text = format!("{:.1}%", slice.percentage);
            target.text(&text, slice.centroid, TextAnchor::Middle, text_style);
        }
    }

    if chart.show_legend {
        let diameter = chart.outer_radius * 2.0;
        let layout = LegendLayout::new((diameter + style.legend_gap, 0.0))
            .with_font_size(style.legend.font_size);
        draw_legend(target, &chart.legend(), &layout, &style.legend);
    }
}

/// Draws grid, spokes, series polygons and dots, axis labels and (if enabled) the legend.
///
/// Paint order is back to front: grid, spokes, series fills, dots, labels, legend.
pub fn draw_radar_chart<T: VectorRenderTarget + ?Sized>(
    target: &mut T,
    chart: &RadarChart,
    style: &RadarStyle,
) {
    let grid_style = ShapeStyle::stroked(style.grid.clone());
    for level in &chart.grid {
        target.polygon(&level.vertices, &grid_style);
    }

    let spoke_style = ShapeStyle::stroked(style.spokes.clone());
    for spoke in &chart.spokes {
        target.begin_path();
        target.move_to(spoke.p0);
        target.line_to(spoke.p1);
        target.end_path(&spoke_style);
    }

    for series in &chart.series {
        let polygon_style = ShapeStyle::filled(series.color.with_alpha(style.series_fill_alpha))
            .with_stroke(Some(StrokeStyle::solid(
                series.color,
                style.series_stroke_width,
            )));
        target.polygon(&series.vertices, &polygon_style);
    }

    if style.point_radius > 0.0 {
        for series in &chart.series {
            let dot_style = ShapeStyle::filled(series.color);
            for &v in &series.vertices {
                let mut dot = ChartPath::new();
                dot.full_circle(
                    v,
                    style.point_radius,
                    v - Vec2::new(0.0, style.point_radius),
                    true,
                );
                target.begin_path();
                dot.replay(target);
                target.end_path(&dot_style);
            }
        }
    }

    for label in &chart.labels {
        for line in &label.lines {
            target.text(&line.text, line.position, label.text_anchor, &style.labels);
        }
    }

    if chart.show_legend {
        let size = chart.center.x * 2.0;
        let layout = LegendLayout::new((size + style.legend_gap, 0.0))
            .with_font_size(style.legend.font_size);
        draw_legend(target, &chart.legend(), &layout, &style.legend);
    }
}

/// Draws a swatch + label row for each entry, positioned by `layout`.
pub fn draw_legend<T: VectorRenderTarget + ?Sized>(
    target: &mut T,
    entries: &[LegendEntry],
    layout: &LegendLayout,
    style: &TextStyle,
) {
    for row in layout.rows(entries) {
        let r = row.swatch;
        target.polygon(
            &[
                Point::new(r.x0, r.y0),
                Point::new(r.x1, r.y0),
                Point::new(r.x1, r.y1),
                Point::new(r.x0, r.y1),
            ],
            &ShapeStyle::filled(row.color),
        );
        target.text(&row.text, row.label_pos, TextAnchor::Start, style);
    }
}

/// A finished path recorded by [`PathCollector`].
#[derive(Clone, Debug)]
pub struct CollectedPath {
    /// The path, with arcs approximated by cubic curves.
    pub path: BezPath,
    /// Paint applied to the path.
    pub style: ShapeStyle,
}

/// A text run recorded by [`PathCollector`].
#[derive(Clone, Debug, PartialEq)]
pub struct CollectedText {
    /// Text content.
    pub text: String,
    /// Anchor position.
    pub pos: Point,
    /// Horizontal alignment.
    pub anchor: TextAnchor,
    /// Text paint and size.
    pub style: TextStyle,
}

/// A render target that records paths as `kurbo::BezPath`s.
///
/// Polygons are recorded as closed paths, in draw order with the other paths.
#[derive(Clone, Debug)]
pub struct PathCollector {
    /// Arc flattening tolerance.
    pub tolerance: f64,
    /// Finished paths in draw order.
    pub paths: Vec<CollectedPath>,
    /// Text runs in draw order.
    pub texts: Vec<CollectedText>,
    current: ChartPath,
}

impl PathCollector {
    /// Creates an empty collector with the given arc tolerance.
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            paths: Vec::new(),
            texts: Vec::new(),
            current: ChartPath::new(),
        }
    }
}

impl Default for PathCollector {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl VectorRenderTarget for PathCollector {
    fn begin_path(&mut self) {
        self.current = ChartPath::new();
    }

    fn move_to(&mut self, p: Point) {
        self.current.move_to(p);
    }

    fn line_to(&mut self, p: Point) {
        self.current.line_to(p);
    }

    fn arc_to(&mut self, arc: ArcTo) {
        self.current.push(PathCommand::ArcTo(arc));
    }

    fn close_path(&mut self) {
        self.current.close_path();
    }

    fn end_path(&mut self, style: &ShapeStyle) {
        let current = core::mem::take(&mut self.current);
        self.paths.push(CollectedPath {
            path: current.to_bez_path(self.tolerance),
            style: style.clone(),
        });
    }

    fn polygon(&mut self, points: &[Point], style: &ShapeStyle) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut path = BezPath::new();
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
        path.close_path();
        self.paths.push(CollectedPath {
            path,
            style: style.clone(),
        });
    }

    fn text(&mut self, text: &str, pos: Point, anchor: TextAnchor, style: &TextStyle) {
        self.texts.push(CollectedText {
            text: text.into(),
            pos,
            anchor,
            style: style.clone(),
        });
    }
}
