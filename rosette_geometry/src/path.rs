// Copyright 2025 the Rosette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path descriptors.
//!
//! Chart outlines are described with the same vocabulary as the SVG path mini-language:
//! move-to, line-to, elliptical arc-to (restricted to circles) and close-path. Keeping arcs as
//! arcs, rather than flattening them into cubic segments up front, lets SVG-style renderers emit
//! exact `A` commands while [`ChartPath::to_bez_path`] still serves curve-based renderers.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Arc, BezPath, Point, SvgArc, Vec2};

use crate::render::VectorRenderTarget;

/// A circular arc segment, in SVG `A` command terms.
///
/// The arc starts at the current point of the path and ends at `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcTo {
    /// Circle radius (used for both SVG radii).
    pub radius: f64,
    /// Rotation of the ellipse x-axis, in degrees. Always `0.0` for chart arcs.
    pub x_rotation: f64,
    /// Selects the larger of the two candidate arcs.
    pub large_arc: bool,
    /// Selects clockwise (in screen space) traversal when `true`.
    pub sweep: bool,
    /// End point.
    pub to: Point,
}

impl ArcTo {
    /// Converts this segment into a [`kurbo::SvgArc`] starting at `from`.
    pub fn to_svg_arc(&self, from: Point) -> SvgArc {
        SvgArc {
            from,
            to: self.to,
            radii: Vec2::new(self.radius, self.radius),
            x_rotation: self.x_rotation.to_radians(),
            large_arc: self.large_arc,
            sweep: self.sweep,
        }
    }
}

/// One command of a [`ChartPath`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Starts a new subpath.
    MoveTo(Point),
    /// Straight segment to a point.
    LineTo(Point),
    /// Circular arc from the current point.
    ArcTo(ArcTo),
    /// Closes the current subpath.
    ClosePath,
}

/// An ordered list of path commands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartPath {
    commands: Vec<PathCommand>,
}

impl ChartPath {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the commands in order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns `true` if the path has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Appends a raw command.
    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    /// Starts a new subpath at `p`.
    pub fn move_to(&mut self, p: impl Into<Point>) {
        self.commands.push(PathCommand::MoveTo(p.into()));
    }

    /// Adds a straight segment to `p`.
    pub fn line_to(&mut self, p: impl Into<Point>) {
        self.commands.push(PathCommand::LineTo(p.into()));
    }

    /// Adds a circular arc from the current point to `to`.
    pub fn arc_to(&mut self, radius: f64, large_arc: bool, sweep: bool, to: impl Into<Point>) {
        self.commands.push(PathCommand::ArcTo(ArcTo {
            radius,
            x_rotation: 0.0,
            large_arc,
            sweep,
            to: to.into(),
        }));
    }

    /// Closes the current subpath.
    pub fn close_path(&mut self) {
        self.commands.push(PathCommand::ClosePath);
    }

    /// Appends a closed full circle as two half-arcs.
    ///
    /// A single arc cannot describe a full circle (its start and end points coincide), so the
    /// circle is split at `start` and the diametrically opposite point.
    /// `start` is expected to lie on the circle of `radius` around `center`.
    pub fn full_circle(&mut self, center: Point, radius: f64, start: Point, sweep: bool) {
        let opposite = center + (center - start);
        self.move_to(start);
        self.arc_to(radius, false, sweep, opposite);
        self.arc_to(radius, false, sweep, start);
        self.close_path();
    }

    /// Serializes the path using SVG path syntax.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            match cmd {
                PathCommand::MoveTo(p) => out.push_str(&format!("M{},{}", p.x, p.y)),
                PathCommand::LineTo(p) => out.push_str(&format!("L{},{}", p.x, p.y)),
                PathCommand::ArcTo(a) => out.push_str(&format!(
                    "A{},{} {} {} {} {},{}",
                    a.radius,
                    a.radius,
                    a.x_rotation,
                    u8::from(a.large_arc),
                    u8::from(a.sweep),
                    a.to.x,
                    a.to.y
                )),
                PathCommand::ClosePath => out.push('Z'),
            }
        }
        out
    }

    /// Converts the path to a [`kurbo::BezPath`], approximating arcs with cubic curves.
    ///
    /// Arcs whose endpoints coincide or whose radius is zero degrade to line segments, matching
    /// SVG's out-of-range arc rules.
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        let mut path = BezPath::new();
        let mut current = Point::ORIGIN;
        let mut subpath_start = Point::ORIGIN;
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    path.move_to(p);
                    current = p;
                    subpath_start = p;
                }
                PathCommand::LineTo(p) => {
                    path.line_to(p);
                    current = p;
                }
                PathCommand::ArcTo(a) => {
                    match Arc::from_svg_arc(&a.to_svg_arc(current)) {
                        Some(arc) => {
                            for el in arc.append_iter(tolerance) {
                                path.push(el);
                            }
                        }
                        None => path.line_to(a.to),
                    }
                    current = a.to;
                }
                PathCommand::ClosePath => {
                    path.close_path();
                    current = subpath_start;
                }
            }
        }
        path
    }

    /// Replays the commands onto a render target (without `begin_path`/`end_path`).
    pub fn replay<T: VectorRenderTarget + ?Sized>(&self, target: &mut T) {
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => target.move_to(p),
                PathCommand::LineTo(p) => target.line_to(p),
                PathCommand::ArcTo(a) => target.arc_to(a),
                PathCommand::ClosePath => target.close_path(),
            }
        }
    }
}
