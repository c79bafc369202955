// Copyright 2025 the Rosette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radar (spider) chart geometry.
//!
//! `N` axes are spread evenly around the center, axis 0 pointing up. Every axis carries its own
//! maximum (falling back to [`RadarConfig::max_value`]), so one chart can compare metrics with
//! unrelated scales: a value sits at `value / axis_max` of the outer radius along its spoke.
//!
//! Values above an axis maximum are not clamped. Their vertex lands outside the outer grid ring,
//! which makes the overflow visible.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Line, Point};
use peniko::Color;
use smallvec::SmallVec;
use tracing::debug;

use crate::error::GeometryError;
use crate::legend::LegendEntry;
use crate::palette::palette_color;
use crate::polar::{axis_angle, polar_to_cartesian, radius_fraction};
use crate::render::TextAnchor;

/// Horizontal direction threshold (cosine of the axis angle) beyond which labels are
/// start/end anchored instead of centered.
const LABEL_ANCHOR_THRESHOLD: f64 = 0.1;

/// One dimension of a radar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    /// Display label. Whitespace separates wrapped label lines.
    pub label: String,
    /// Value mapped to the outer ring. `None` uses [`RadarConfig::max_value`].
    pub max: Option<f64>,
}

impl Axis {
    /// Creates an axis that uses the configured fallback maximum.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            max: None,
        }
    }

    /// Sets an axis-specific maximum.
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// One labeled set of values, one per axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    /// Display label.
    pub label: String,
    /// Values in axis order.
    pub values: Vec<f64>,
    /// Explicit color. When `None`, the default palette is cycled by series index.
    pub color: Option<Color>,
}

impl Series {
    /// Creates a series that uses the default palette.
    pub fn new(label: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self {
            label: label.into(),
            values: values.into(),
            color: None,
        }
    }

    /// Sets an explicit color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Display configuration for a radar chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadarConfig {
    /// Side of the square the chart occupies.
    pub size: f64,
    /// Maximum used by axes without their own.
    pub max_value: f64,
    /// Number of concentric grid polygons.
    pub levels: usize,
    /// Whether renderers should draw the legend.
    pub show_legend: bool,
    /// Margin between the outer ring and the edge of the chart square, reserved for labels.
    pub label_padding: f64,
    /// Distance from the outer ring to the axis label anchor.
    pub label_offset: f64,
    /// Vertical distance between wrapped label lines.
    pub line_height: f64,
}

impl RadarConfig {
    /// Creates a configuration with a fallback maximum of 100 and five grid levels.
    pub fn new(size: f64) -> Self {
        Self {
            size,
            max_value: 100.0,
            levels: 5,
            show_legend: true,
            label_padding: 40.0,
            label_offset: 12.0,
            line_height: 14.0,
        }
    }

    /// Sets the fallback maximum.
    pub fn with_max_value(mut self, max_value: f64) -> Self {
        self.max_value = max_value;
        self
    }

    /// Sets the number of grid levels.
    pub fn with_levels(mut self, levels: usize) -> Self {
        self.levels = levels;
        self
    }

    /// Enables or disables the legend.
    pub fn with_legend(mut self, show_legend: bool) -> Self {
        self.show_legend = show_legend;
        self
    }

    /// Sets the label padding.
    pub fn with_label_padding(mut self, label_padding: f64) -> Self {
        self.label_padding = label_padding;
        self
    }

    /// Sets the distance from the outer ring to the label anchors.
    pub fn with_label_offset(mut self, label_offset: f64) -> Self {
        self.label_offset = label_offset;
        self
    }

    /// Sets the spacing between wrapped label lines.
    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }

    /// Returns the chart center.
    pub fn center(&self) -> Point {
        Point::new(self.size * 0.5, self.size * 0.5)
    }

    /// Returns the outer grid radius: half the size minus the label padding, never negative.
    pub fn radius(&self) -> f64 {
        (self.size * 0.5 - self.label_padding).max(0.0)
    }
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self::new(300.0)
    }
}

/// One concentric grid polygon.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLevel {
    /// Fraction of the outer radius (`k / levels`).
    pub fraction: f64,
    /// One vertex per axis.
    pub vertices: Vec<Point>,
}

/// One line of a wrapped axis label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelLine {
    /// Line text.
    pub text: String,
    /// Anchor position of this line.
    pub position: Point,
}

/// Placement of an axis label.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    /// Anchor point just outside the outer ring.
    pub anchor: Point,
    /// Horizontal alignment, chosen from the side of the chart the axis points to.
    pub text_anchor: TextAnchor,
    /// Wrapped lines, the first at `anchor` and the rest stacked below it.
    pub lines: SmallVec<[LabelLine; 2]>,
}

/// Geometry of one series.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesGeometry {
    /// Display label.
    pub label: String,
    /// Resolved color.
    pub color: Color,
    /// Radius fraction per axis (`value / axis_max`, unclamped).
    pub fractions: Vec<f64>,
    /// Polygon vertices per axis; also the per-vertex point set.
    pub vertices: Vec<Point>,
}

/// Computed radar chart geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarChart {
    /// Chart center.
    pub center: Point,
    /// Outer grid radius.
    pub radius: f64,
    /// Screen angle (radians) of each axis.
    pub angles: Vec<f64>,
    /// Resolved maximum of each axis.
    pub axis_max: Vec<f64>,
    /// Grid polygons from innermost to outermost.
    pub grid: Vec<GridLevel>,
    /// One spoke per axis, from the center to the outer ring.
    pub spokes: Vec<Line>,
    /// One label per axis.
    pub labels: Vec<AxisLabel>,
    /// Series in input order.
    pub series: Vec<SeriesGeometry>,
    /// Copied from [`RadarConfig::show_legend`].
    pub show_legend: bool,
}

impl RadarChart {
    /// Computes radar geometry for `axes` and `series`.
    ///
    /// Fails with [`GeometryError::InvalidSeriesLength`] when a series does not have one value
    /// per axis and with [`GeometryError::NonPositiveAxisMax`] when an axis has no usable
    /// maximum.
    pub fn compute(
        axes: &[Axis],
        series: &[Series],
        config: &RadarConfig,
    ) -> Result<Self, GeometryError> {
        let axis_max = validate(axes, series, config)
            .inspect_err(|err| debug!(%err, "radar chart input rejected"))?;

        let n = axes.len();
        let center = config.center();
        let radius = config.radius();
        let angles: Vec<f64> = (0..n).map(|i| axis_angle(i, n)).collect();
        let ring = |fraction: f64| -> Vec<Point> {
            angles
                .iter()
                .map(|&a| polar_to_cartesian(center, fraction * radius, a))
                .collect()
        };

        let grid = (1..=config.levels)
            .map(|k| {
                let fraction = k as f64 / config.levels as f64;
                GridLevel {
                    fraction,
                    vertices: ring(fraction),
                }
            })
            .collect();

        let spokes = angles
            .iter()
            .map(|&a| Line::new(center, polar_to_cartesian(center, radius, a)))
            .collect();

        let labels = axes
            .iter()
            .zip(&angles)
            .map(|(axis, &a)| {
                axis_label(
                    &axis.label,
                    center,
                    radius + config.label_offset,
                    a,
                    config.line_height,
                )
            })
            .collect();

        let series = series
            .iter()
            .enumerate()
            .map(|(s, input)| {
                let fractions: Vec<f64> = input
                    .values
                    .iter()
                    .zip(&axis_max)
                    .map(|(&v, &max)| radius_fraction(v, max))
                    .collect();
                for (axis, &f) in fractions.iter().enumerate() {
                    if f > 1.0 {
                        debug!(
                            series = s,
                            axis,
                            value = input.values[axis],
                            max = axis_max[axis],
                            "value exceeds axis maximum, drawn beyond the outer ring"
                        );
                    }
                }
                let vertices = fractions
                    .iter()
                    .zip(&angles)
                    .map(|(&f, &a)| polar_to_cartesian(center, f * radius, a))
                    .collect();
                SeriesGeometry {
                    label: input.label.clone(),
                    color: input.color.unwrap_or_else(|| palette_color(s)),
                    fractions,
                    vertices,
                }
            })
            .collect::<Vec<_>>();

        debug!(
            axes = n,
            series = series.len(),
            levels = config.levels,
            radius,
            "computed radar chart geometry"
        );

        Ok(Self {
            center,
            radius,
            angles,
            axis_max,
            grid,
            spokes,
            labels,
            series,
            show_legend: config.show_legend,
        })
    }

    /// Legend entries (label and color) in series order.
    pub fn legend(&self) -> Vec<LegendEntry> {
        self.series
            .iter()
            .map(|s| LegendEntry::new(s.label.clone(), s.color))
            .collect()
    }

    /// The outermost grid polygon.
    pub fn outer_ring(&self) -> &[Point] {
        self.grid
            .last()
            .map_or(&[][..], |level| level.vertices.as_slice())
    }
}

/// Validates inputs and returns the resolved maximum of each axis.
fn validate(
    axes: &[Axis],
    series: &[Series],
    config: &RadarConfig,
) -> Result<Vec<f64>, GeometryError> {
    if !(config.size.is_finite() && config.size > 0.0) {
        return Err(GeometryError::InvalidSize { size: config.size });
    }
    let layout = [
        ("label_padding", config.label_padding, config.label_padding.is_finite()),
        ("label_offset", config.label_offset, config.label_offset.is_finite()),
        (
            "line_height",
            config.line_height,
            config.line_height.is_finite() && config.line_height >= 0.0,
        ),
    ];
    if let Some(&(field, value, _)) = layout.iter().find(|(_, _, ok)| !ok) {
        return Err(GeometryError::InvalidLayout { field, value });
    }
    if config.levels == 0 {
        return Err(GeometryError::NoGridLevels);
    }
    if axes.is_empty() {
        return Err(GeometryError::NoAxes);
    }
    let axis_max = axes
        .iter()
        .enumerate()
        .map(|(axis, a)| {
            let max = a.max.unwrap_or(config.max_value);
            if max.is_finite() && max > 0.0 {
                Ok(max)
            } else {
                Err(GeometryError::NonPositiveAxisMax { axis, max })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    for (s, input) in series.iter().enumerate() {
        if input.values.len() != axes.len() {
            return Err(GeometryError::InvalidSeriesLength {
                series: s,
                expected: axes.len(),
                actual: input.values.len(),
            });
        }
        for (axis, &value) in input.values.iter().enumerate() {
            if !(value.is_finite() && value >= 0.0) {
                return Err(GeometryError::InvalidSeriesValue {
                    series: s,
                    axis,
                    value,
                });
            }
        }
    }
    Ok(axis_max)
}

fn axis_label(
    label: &str,
    center: Point,
    radius: f64,
    angle: f64,
    line_height: f64,
) -> AxisLabel {
    let anchor = polar_to_cartesian(center, radius, angle);
    let dx = anchor.x - center.x;
    let reach = radius.max(f64::MIN_POSITIVE);
    let text_anchor = if dx / reach > LABEL_ANCHOR_THRESHOLD {
        TextAnchor::Start
    } else if dx / reach < -LABEL_ANCHOR_THRESHOLD {
        TextAnchor::End
    } else {
        TextAnchor::Middle
    };
    let lines = label
        .split_whitespace()
        .enumerate()
        .map(|(k, word)| LabelLine {
            text: word.into(),
            position: Point::new(anchor.x, anchor.y + k as f64 * line_height),
        })
        .collect();
    AxisLabel {
        anchor,
        text_anchor,
        lines,
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use peniko::color::palette::css;

    use super::*;

    fn assert_point_close(a: Point, b: Point) {
        let eps = 1e-9;
        assert!((a.x - b.x).abs() <= eps, "x {a:?} != {b:?}");
        assert!((a.y - b.y).abs() <= eps, "y {a:?} != {b:?}");
    }

    fn abc() -> Vec<Axis> {
        vec![
            Axis::new("A").with_max(100.0),
            Axis::new("B").with_max(100.0),
            Axis::new("C").with_max(100.0),
        ]
    }

    #[test]
    fn counts_match_the_axis_count() {
        for n in 3..=8 {
            let axes: Vec<_> = (0..n).map(|i| Axis::new(alloc::format!("axis {i}"))).collect();
            let series = [Series::new("s", vec![10.0; n])];
            let chart = RadarChart::compute(&axes, &series, &RadarConfig::default()).unwrap();
            assert_eq!(chart.spokes.len(), n);
            assert_eq!(chart.labels.len(), n);
            assert_eq!(chart.grid.len(), 5);
            for level in &chart.grid {
                assert_eq!(level.vertices.len(), n);
            }
            assert_eq!(chart.series[0].vertices.len(), n);
        }
    }

    #[test]
    fn axes_normalize_independently() {
        let axes = [Axis::new("x").with_max(100.0), Axis::new("y").with_max(50.0)];
        let series = [Series::new("s", [50.0, 50.0])];
        let chart = RadarChart::compute(&axes, &series, &RadarConfig::default()).unwrap();
        assert_eq!(chart.series[0].fractions, vec![0.5, 1.0]);
        assert_eq!(chart.axis_max, vec![100.0, 50.0]);
    }

    #[test]
    fn full_values_coincide_with_the_outer_ring() {
        let series = [Series::new("s", [100.0, 100.0, 100.0])];
        let chart = RadarChart::compute(&abc(), &series, &RadarConfig::default()).unwrap();
        let outer = chart.outer_ring();
        assert_eq!(chart.grid.last().map(|l| l.fraction), Some(1.0));
        for (v, o) in chart.series[0].vertices.iter().zip(outer) {
            assert_point_close(*v, *o);
        }
    }

    #[test]
    fn grid_levels_nest_from_inner_to_outer() {
        let chart =
            RadarChart::compute(&abc(), &[], &RadarConfig::new(200.0).with_levels(4)).unwrap();
        let fractions: Vec<_> = chart.grid.iter().map(|l| l.fraction).collect();
        assert_eq!(fractions, vec![0.25, 0.5, 0.75, 1.0]);
        // Axis 0 points up: its vertex is straight above the center.
        let r = chart.radius;
        assert_eq!(r, 60.0);
        assert_point_close(chart.grid[0].vertices[0], Point::new(100.0, 100.0 - 0.25 * r));
        assert_point_close(chart.spokes[0].p1, Point::new(100.0, 100.0 - r));
        assert_eq!(chart.spokes[0].p0, Point::new(100.0, 100.0));
    }

    #[test]
    fn fallback_max_applies_to_axes_without_their_own() {
        let axes = [Axis::new("a"), Axis::new("b").with_max(10.0)];
        let series = [Series::new("s", [20.0, 5.0])];
        let config = RadarConfig::default().with_max_value(40.0);
        let chart = RadarChart::compute(&axes, &series, &config).unwrap();
        assert_eq!(chart.series[0].fractions, vec![0.5, 0.5]);
    }

    #[test]
    fn values_over_the_max_are_not_clamped() {
        let series = [Series::new("s", [150.0, 50.0, 100.0])];
        let chart = RadarChart::compute(&abc(), &series, &RadarConfig::default()).unwrap();
        let s = &chart.series[0];
        assert_eq!(s.fractions[0], 1.5);
        let dist = (s.vertices[0] - chart.center).hypot();
        assert!(dist > chart.radius, "{dist} <= {}", chart.radius);
        assert!((dist - 1.5 * chart.radius).abs() < 1e-9);
    }

    #[test]
    fn labels_wrap_on_whitespace_and_anchor_by_side() {
        let axes = [
            Axis::new("Top"),
            Axis::new("Right  side label"),
            Axis::new("Bottom"),
            Axis::new("Left"),
        ];
        let config = RadarConfig::new(300.0);
        let chart = RadarChart::compute(&axes, &[], &config).unwrap();

        let top = &chart.labels[0];
        assert_eq!(top.text_anchor, TextAnchor::Middle);
        assert_point_close(top.anchor, Point::new(150.0, 150.0 - (110.0 + 12.0)));

        let right = &chart.labels[1];
        assert_eq!(right.text_anchor, TextAnchor::Start);
        let texts: Vec<_> = right.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["Right", "side", "label"]);
        for (k, line) in right.lines.iter().enumerate() {
            assert_point_close(
                line.position,
                Point::new(right.anchor.x, right.anchor.y + k as f64 * 14.0),
            );
        }

        assert_eq!(chart.labels[2].text_anchor, TextAnchor::Middle);
        assert_eq!(chart.labels[3].text_anchor, TextAnchor::End);
    }

    #[test]
    fn series_colors_and_legend_follow_series_order() {
        let series = [
            Series::new("first", [1.0, 2.0, 3.0]),
            Series::new("second", [3.0, 2.0, 1.0]).with_color(css::BLACK),
        ];
        let chart = RadarChart::compute(&abc(), &series, &RadarConfig::default()).unwrap();
        let legend = chart.legend();
        assert_eq!(legend.len(), 2);
        assert_eq!(legend[0].label, "first");
        assert_eq!(legend[0].color, palette_color(0));
        assert_eq!(legend[1].color, css::BLACK);
        assert_eq!(legend[1].percentage, None);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let config = RadarConfig::default();
        assert_eq!(
            RadarChart::compute(&abc(), &[Series::new("s", [1.0, 2.0])], &config),
            Err(GeometryError::InvalidSeriesLength {
                series: 0,
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            RadarChart::compute(
                &[Axis::new("a"), Axis::new("b").with_max(0.0)],
                &[],
                &config
            ),
            Err(GeometryError::NonPositiveAxisMax { axis: 1, max: 0.0 })
        );
        assert_eq!(
            RadarChart::compute(&[Axis::new("a")], &[], &config.with_max_value(-1.0)),
            Err(GeometryError::NonPositiveAxisMax { axis: 0, max: -1.0 })
        );
        assert_eq!(
            RadarChart::compute(&abc(), &[Series::new("s", [1.0, -2.0, 3.0])], &config),
            Err(GeometryError::InvalidSeriesValue {
                series: 0,
                axis: 1,
                value: -2.0
            })
        );
        assert_eq!(
            RadarChart::compute(&[], &[], &config),
            Err(GeometryError::NoAxes)
        );
        assert_eq!(
            RadarChart::compute(&abc(), &[], &config.with_levels(0)),
            Err(GeometryError::NoGridLevels)
        );
        assert_eq!(
            RadarChart::compute(&abc(), &[], &RadarConfig::new(f64::INFINITY)),
            Err(GeometryError::InvalidSize {
                size: f64::INFINITY
            })
        );
    }

    #[test]
    fn non_finite_layout_settings_are_rejected() {
        let offset = RadarChart::compute(
            &abc(),
            &[],
            &RadarConfig::default().with_label_offset(f64::NAN),
        );
        assert!(
            matches!(
                offset,
                Err(GeometryError::InvalidLayout { field: "label_offset", value }) if value.is_nan()
            ),
            "{offset:?}"
        );
        assert_eq!(
            RadarChart::compute(
                &abc(),
                &[Series::new("s", [1.0, 2.0, 3.0])],
                &RadarConfig::default().with_label_padding(f64::NEG_INFINITY),
            ),
            Err(GeometryError::InvalidLayout {
                field: "label_padding",
                value: f64::NEG_INFINITY
            })
        );
        let height = RadarChart::compute(
            &[Axis::new("Two words")],
            &[],
            &RadarConfig::default().with_line_height(f64::NAN),
        );
        assert!(
            matches!(
                height,
                Err(GeometryError::InvalidLayout { field: "line_height", value }) if value.is_nan()
            ),
            "{height:?}"
        );
        assert_eq!(
            RadarChart::compute(&abc(), &[], &RadarConfig::default().with_line_height(-2.0)),
            Err(GeometryError::InvalidLayout {
                field: "line_height",
                value: -2.0
            })
        );
    }

    #[test]
    fn label_offset_and_line_height_place_label_lines() {
        let config = RadarConfig::new(200.0)
            .with_label_padding(50.0)
            .with_label_offset(20.0)
            .with_line_height(8.0);
        let chart = RadarChart::compute(&[Axis::new("Top axis")], &[], &config).unwrap();
        let label = &chart.labels[0];
        // Axis 0 points up: the anchor is `radius + offset` above the center.
        assert_point_close(label.anchor, Point::new(100.0, 100.0 - 70.0));
        assert_eq!(label.lines.len(), 2);
        assert_point_close(label.lines[1].position, Point::new(100.0, 38.0));
    }

    #[test]
    fn small_charts_collapse_to_the_center_instead_of_inverting() {
        let chart = RadarChart::compute(&abc(), &[], &RadarConfig::new(40.0)).unwrap();
        assert_eq!(chart.radius, 0.0);
        for v in chart.outer_ring() {
            assert_point_close(*v, chart.center);
        }
    }
}
