// Copyright 2025 the Rosette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie, donut and radar chart geometry.
//!
//! This crate turns abstract numeric data into vector drawing primitives:
//! - **Share charts** (pie/donut): each [`Slice`] becomes a wedge or annulus segment, described
//!   as a [`ChartPath`] using move/line/arc/close commands.
//! - **Radar charts**: [`Axis`] and [`Series`] inputs become nested grid polygons, spokes, label
//!   anchors and one polygon per series.
//!
//! Computation is pure: every call validates its inputs, fails fast with a [`GeometryError`]
//! instead of emitting `NaN` coordinates, and returns a plain geometric result. Rendering lives
//! behind the [`VectorRenderTarget`] trait so the same geometry can be replayed into SVG, a
//! `kurbo::BezPath` based renderer, or anything else that can draw arcs and polygons.
//!
//! ```
//! use rosette_geometry::{ShareChart, ShareChartConfig, Slice};
//!
//! let chart = ShareChart::compute(
//!     &[Slice::new("a", 25.0), Slice::new("b", 75.0)],
//!     &ShareChartConfig::new(100.0),
//! )
//! .unwrap();
//! assert!(!chart.slices[0].large_arc);
//! assert!(chart.slices[1].large_arc);
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod cache;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod legend;
mod palette;
mod path;
mod polar;
mod radar;
mod render;
mod share;

pub use cache::GeometryCache;
pub use error::GeometryError;
pub use legend::{LegendEntry, LegendLayout, LegendRow};
pub use palette::{DEFAULT_PALETTE, palette_color};
pub use path::{ArcTo, ChartPath, PathCommand};
pub use polar::{
    axis_angle, polar_to_cartesian, radius_fraction, share_angle, to_degrees, to_radians,
};
pub use radar::{
    Axis, AxisLabel, GridLevel, LabelLine, RadarChart, RadarConfig, Series, SeriesGeometry,
};
pub use render::{
    CollectedPath, CollectedText, PathCollector, RadarStyle, ShapeStyle, ShareStyle, StrokeStyle,
    TextAnchor, TextStyle, VectorRenderTarget, draw_legend, draw_radar_chart, draw_share_chart,
};
pub use share::{FULL_CIRCLE_EPSILON, ShareChart, ShareChartConfig, Slice, SliceGeometry};
