// Copyright 2025 the Rosette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Share (pie/donut) chart geometry.
//!
//! Each slice covers `value / total` of a full turn. Angles are measured in degrees from
//! 12 o'clock, clockwise, and converted to screen radians with [`share_angle`].
//!
//! A pie slice is a wedge: center, line out to the start point, arc to the end point, close.
//! A donut slice is an annulus segment: the outer arc runs clockwise (sweep flag 1) and the
//! inner arc returns counter-clockwise (sweep flag 0), so the boundary winds consistently and
//! fills as a ring.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{Circle, Point};
use peniko::Color;
use tracing::debug;

use crate::error::GeometryError;
use crate::legend::LegendEntry;
use crate::palette::palette_color;
use crate::path::ChartPath;
use crate::polar::{polar_to_cartesian, share_angle};

/// Sweep angles (in degrees) within this distance of a full turn are drawn as full circles.
pub const FULL_CIRCLE_EPSILON: f64 = 1e-6;

/// One labeled value of a share chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    /// Display label.
    pub label: String,
    /// Non-negative value; its share of the total sets the slice angle.
    pub value: f64,
    /// Explicit color. When `None`, the default palette is cycled by slice index.
    pub color: Option<Color>,
}

impl Slice {
    /// Creates a slice that uses the default palette.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }

    /// Sets an explicit color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Display configuration for a share chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShareChartConfig {
    /// Outer diameter. The chart occupies the square `[0, diameter]²`.
    pub diameter: f64,
    /// Radius of the hole; `0.0` draws a solid pie.
    pub inner_radius: f64,
    /// Whether renderers should draw the legend.
    pub show_legend: bool,
}

impl ShareChartConfig {
    /// Creates a solid pie configuration with a legend.
    pub fn new(diameter: f64) -> Self {
        Self {
            diameter,
            inner_radius: 0.0,
            show_legend: true,
        }
    }

    /// Sets the hole radius, turning the pie into a donut.
    pub fn with_inner_radius(mut self, inner_radius: f64) -> Self {
        self.inner_radius = inner_radius;
        self
    }

    /// Enables or disables the legend.
    pub fn with_legend(mut self, show_legend: bool) -> Self {
        self.show_legend = show_legend;
        self
    }

    /// Returns the outer radius (`diameter / 2`).
    pub fn outer_radius(&self) -> f64 {
        self.diameter * 0.5
    }

    /// Returns the chart center.
    pub fn center(&self) -> Point {
        let r = self.outer_radius();
        Point::new(r, r)
    }
}

impl Default for ShareChartConfig {
    fn default() -> Self {
        Self::new(200.0)
    }
}

/// Geometry of one slice.
#[derive(Clone, Debug, PartialEq)]
pub struct SliceGeometry {
    /// Boundary path of the wedge or annulus segment.
    pub path: ChartPath,
    /// Resolved fill color.
    pub color: Color,
    /// Display label.
    pub label: String,
    /// Input value.
    pub value: f64,
    /// `value / total`.
    pub fraction: f64,
    /// `fraction * 100`, rounded to one decimal.
    pub percentage: f64,
    /// Start angle in degrees (0 = 12 o'clock, clockwise).
    pub start_angle: f64,
    /// Sweep angle in degrees.
    pub sweep_angle: f64,
    /// The SVG large-arc flag used for this slice's arcs.
    pub large_arc: bool,
    /// A point inside the slice at its mid angle, suitable for a slice label.
    pub centroid: Point,
}

/// Computed share chart geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct ShareChart {
    /// Chart center.
    pub center: Point,
    /// Outer radius.
    pub outer_radius: f64,
    /// Hole radius (`0.0` for a pie).
    pub inner_radius: f64,
    /// Sum of all slice values.
    pub total: f64,
    /// Slices in input order.
    pub slices: Vec<SliceGeometry>,
    /// The hole, for donut charts.
    pub hole: Option<Circle>,
    /// Copied from [`ShareChartConfig::show_legend`].
    pub show_legend: bool,
}

impl ShareChart {
    /// Computes pie or donut geometry for `slices`.
    ///
    /// Fails with [`GeometryError::DegenerateInput`] when the values sum to zero,
    /// [`GeometryError::TotalOverflow`] when the sum is not representable, and with the other
    /// validation variants for negative values or an unusable size/inner radius.
    pub fn compute(slices: &[Slice], config: &ShareChartConfig) -> Result<Self, GeometryError> {
        let total = validate(slices, config)
            .inspect_err(|err| debug!(%err, "share chart input rejected"))?;

        let center = config.center();
        let outer = config.outer_radius();
        let inner = config.inner_radius;

        let mut start_angle = 0.0;
        let mut out = Vec::with_capacity(slices.len());
        for (i, slice) in slices.iter().enumerate() {
            let fraction = slice.value / total;
            let sweep_angle = fraction * 360.0;
            let large_arc = sweep_angle > 180.0;
            let mid = share_angle(start_angle + sweep_angle * 0.5);
            let centroid_radius = if inner > 0.0 {
                (inner + outer) * 0.5
            } else {
                outer * 0.5
            };
            out.push(SliceGeometry {
                path: slice_path(center, outer, inner, start_angle, sweep_angle),
                color: slice.color.unwrap_or_else(|| palette_color(i)),
                label: slice.label.clone(),
                value: slice.value,
                fraction,
                percentage: round_to_tenth(fraction * 100.0),
                start_angle,
                sweep_angle,
                large_arc,
                centroid: polar_to_cartesian(center, centroid_radius, mid),
            });
            start_angle += sweep_angle;
        }

        debug!(
            slices = out.len(),
            total,
            donut = inner > 0.0,
            "computed share chart geometry"
        );

        Ok(Self {
            center,
            outer_radius: outer,
            inner_radius: inner,
            total,
            slices: out,
            hole: (inner > 0.0).then(|| Circle::new(center, inner)),
            show_legend: config.show_legend,
        })
    }

    /// Returns `true` when the chart has a hole.
    pub fn is_donut(&self) -> bool {
        self.hole.is_some()
    }

    /// Legend entries in input order, sharing the percentages used for the arc sweeps.
    pub fn legend(&self) -> Vec<LegendEntry> {
        self.slices
            .iter()
            .map(|s| LegendEntry::with_share(s.label.clone(), s.color, s.value, s.percentage))
            .collect()
    }
}

/// Validates inputs and returns the total.
fn validate(slices: &[Slice], config: &ShareChartConfig) -> Result<f64, GeometryError> {
    if !(config.diameter.is_finite() && config.diameter > 0.0) {
        return Err(GeometryError::InvalidSize {
            size: config.diameter,
        });
    }
    let outer = config.outer_radius();
    let inner = config.inner_radius;
    if !(inner.is_finite() && inner >= 0.0 && inner < outer) {
        return Err(GeometryError::InvalidInnerRadius { inner, outer });
    }
    for (slice, s) in slices.iter().enumerate() {
        if !(s.value.is_finite() && s.value >= 0.0) {
            return Err(GeometryError::InvalidSliceValue {
                slice,
                value: s.value,
            });
        }
    }
    let total: f64 = slices.iter().map(|s| s.value).sum();
    if total.is_infinite() {
        return Err(GeometryError::TotalOverflow);
    }
    if total <= 0.0 {
        return Err(GeometryError::DegenerateInput { total });
    }
    Ok(total)
}

fn slice_path(
    center: Point,
    outer: f64,
    inner: f64,
    start_angle: f64,
    sweep_angle: f64,
) -> ChartPath {
    let mut path = ChartPath::new();
    let start = share_angle(start_angle);
    let end = share_angle(start_angle + sweep_angle);

    if sweep_angle >= 360.0 - FULL_CIRCLE_EPSILON {
        path.full_circle(center, outer, polar_to_cartesian(center, outer, start), true);
        if inner > 0.0 {
            // Opposite winding punches the hole under the nonzero fill rule.
            path.full_circle(center, inner, polar_to_cartesian(center, inner, start), false);
        }
        return path;
    }

    let large_arc = sweep_angle > 180.0;
    let outer_start = polar_to_cartesian(center, outer, start);
    let outer_end = polar_to_cartesian(center, outer, end);
    if inner > 0.0 {
        path.move_to(outer_start);
        path.arc_to(outer, large_arc, true, outer_end);
        path.line_to(polar_to_cartesian(center, inner, end));
        path.arc_to(
            inner,
            large_arc,
            false,
            polar_to_cartesian(center, inner, start),
        );
    } else {
        path.move_to(center);
        path.line_to(outer_start);
        path.arc_to(outer, large_arc, true, outer_end);
    }
    path.close_path();
    path
}

fn round_to_tenth(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
