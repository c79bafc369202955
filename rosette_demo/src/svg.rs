// Copyright 2025 the Rosette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG writer implementing `VectorRenderTarget`.

use kurbo::{Arc, Point, Rect, Shape};
use peniko::Brush;
use rosette_geometry::{ArcTo, ShapeStyle, TextAnchor, TextStyle, VectorRenderTarget};

#[derive(Debug, Default)]
pub(crate) struct SvgTarget {
    body: String,
    path_data: String,
    current: Point,
    subpath_start: Point,
    bounds: Option<Rect>,
}

impl SvgTarget {
    /// Wraps the drawn elements in an `<svg>` root sized to their bounds.
    pub(crate) fn finish(&self, title: Option<&str>) -> String {
        let view_box = self
            .bounds
            .map(|r| {
                // Add a small padding margin.
                let pad = 10.0;
                Rect::new(r.x0 - pad, r.y0 - pad, r.x1 + pad, r.y1 + pad)
            })
            .unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));

        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');
        if let Some(title) = title {
            out.push_str(&format!("<title>{}</title>\n", escape_xml(title)));
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    fn separate(&mut self) {
        if !self.path_data.is_empty() {
            self.path_data.push(' ');
        }
    }

    fn include(&mut self, rect: Rect) {
        self.bounds = Some(match self.bounds {
            None => rect,
            Some(r) => r.union(rect),
        });
    }

    fn include_point(&mut self, p: Point) {
        self.include(Rect::from_points(p, p));
    }

    fn push_shape_attrs(&mut self, style: &ShapeStyle) {
        match &style.fill {
            Some(fill) => write_paint_attr(&mut self.body, "fill", fill),
            None => self.body.push_str(r#" fill="none""#),
        }
        if let Some(stroke) = &style.stroke
            && stroke.stroke_width > 0.0
        {
            write_paint_attr(&mut self.body, "stroke", &stroke.brush);
            self.body.push_str(&format!(r#" stroke-width="{}""#, stroke.stroke_width));
        }
    }
}

impl VectorRenderTarget for SvgTarget {
    fn begin_path(&mut self) {
        self.path_data.clear();
    }

    fn move_to(&mut self, p: Point) {
        self.separate();
        self.path_data.push_str(&format!("M{},{}", p.x, p.y));
        self.current = p;
        self.subpath_start = p;
        self.include_point(p);
    }

    fn line_to(&mut self, p: Point) {
        self.separate();
        self.path_data.push_str(&format!("L{},{}", p.x, p.y));
        self.current = p;
        self.include_point(p);
    }

    fn arc_to(&mut self, arc: ArcTo) {
        self.separate();
        self.path_data.push_str(&format!(
            "A{},{} {} {} {} {},{}",
            arc.radius,
            arc.radius,
            arc.x_rotation,
            u8::from(arc.large_arc),
            u8::from(arc.sweep),
            arc.to.x,
            arc.to.y
        ));
        match Arc::from_svg_arc(&arc.to_svg_arc(self.current)) {
            Some(a) => self.include(a.bounding_box()),
            None => self.include_point(arc.to),
        }
        self.current = arc.to;
    }

    fn close_path(&mut self) {
        self.separate();
        self.path_data.push('Z');
        self.current = self.subpath_start;
    }

    fn end_path(&mut self, style: &ShapeStyle) {
        if self.path_data.is_empty() {
            return;
        }
        let d = std::mem::take(&mut self.path_data);
        self.body.push_str(&format!(r#"<path d="{d}""#));
        self.push_shape_attrs(style);
        self.body.push_str("/>\n");
    }

    fn polygon(&mut self, points: &[Point], style: &ShapeStyle) {
        if points.is_empty() {
            return;
        }
        self.body.push_str(r#"<polygon points=""#);
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                self.body.push(' ');
            }
            self.body.push_str(&format!("{},{}", p.x, p.y));
        }
        self.body.push('"');
        self.push_shape_attrs(style);
        self.body.push_str("/>\n");
        for &p in points {
            self.include_point(p);
        }
    }

    fn text(&mut self, text: &str, pos: Point, anchor: TextAnchor, style: &TextStyle) {
        self.body.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="middle""#,
            pos.x, pos.y, style.font_size
        ));
        self.body.push_str(match anchor {
            TextAnchor::Start => r#" text-anchor="start""#,
            TextAnchor::Middle => r#" text-anchor="middle""#,
            TextAnchor::End => r#" text-anchor="end""#,
        });
        write_paint_attr(&mut self.body, "fill", &style.fill);
        self.body.push('>');
        self.body.push_str(&escape_xml(text));
        self.body.push_str("</text>\n");
        self.include(estimate_text_bounds_anchored(
            pos.x,
            pos.y,
            style.font_size,
            anchor,
            text,
        ));
    }
}

fn estimate_text_bounds_anchored(
    x: f64,
    y: f64,
    font_size: f64,
    anchor: TextAnchor,
    text: &str,
) -> Rect {
    // Very rough heuristic: assume ~0.6em average glyph width, centered on `y`.
    let glyph_w = 0.6 * font_size;
    let width = glyph_w * text.chars().count() as f64;
    let half_height = 0.5 * font_size;
    let (x0, x1) = match anchor {
        TextAnchor::Start => (x, x + width),
        TextAnchor::Middle => (x - width / 2.0, x + width / 2.0),
        TextAnchor::End => (x - width, x),
    };
    Rect::new(x0, y - half_height, x1, y + half_height)
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;
    use rosette_geometry::{
        RadarChart, RadarConfig, RadarStyle, ShareChart, ShareChartConfig, ShareStyle, Slice,
        StrokeStyle, draw_radar_chart, draw_share_chart,
    };

    use super::*;

    #[test]
    fn paths_carry_arc_commands_and_paint() {
        let chart = ShareChart::compute(
            &[
                Slice::new("a", 1.0).with_color(css::TOMATO),
                Slice::new("b", 1.0),
            ],
            &ShareChartConfig::new(100.0).with_legend(false),
        )
        .unwrap();
        let mut svg = SvgTarget::default();
        draw_share_chart(&mut svg, &chart, &ShareStyle::default());
        let out = svg.finish(Some("Halves & more"));

        assert!(out.starts_with("<svg "));
        assert!(out.contains("<title>Halves &amp; more</title>"));
        assert_eq!(out.matches("<path ").count(), 2);
        assert!(out.contains(" A50,50 0 0 1 "));
        assert!(out.contains(r##"fill="#ff6347""##));
        assert!(out.contains(r##"stroke="#ffffff" stroke-width="1""##));
        assert!(out.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn view_box_covers_the_drawing_plus_padding() {
        let chart = ShareChart::compute(
            &[Slice::new("a", 1.0)],
            &ShareChartConfig::new(100.0).with_legend(false),
        )
        .unwrap();
        let mut svg = SvgTarget::default();
        draw_share_chart(&mut svg, &chart, &ShareStyle::default());
        let bounds = svg.bounds.expect("drawing has bounds");
        assert!(bounds.x0 < 1.0 && bounds.y0 < 1.0, "{bounds:?}");
        assert!(bounds.x1 > 99.0 && bounds.y1 > 99.0, "{bounds:?}");
        assert!(svg.finish(None).contains(r#"width="1"#));
    }

    #[test]
    fn radar_output_uses_polygons_and_escaped_labels() {
        let axes = [
            rosette_geometry::Axis::new("R&D"),
            rosette_geometry::Axis::new("Sales"),
            rosette_geometry::Axis::new("Support"),
        ];
        let series = [rosette_geometry::Series::new("2024", [10.0, 20.0, 30.0])];
        let chart = RadarChart::compute(&axes, &series, &RadarConfig::default()).unwrap();
        let mut svg = SvgTarget::default();
        let style = RadarStyle {
            point_radius: 0.0,
            spokes: StrokeStyle::solid(css::GRAY, 0.5),
            ..RadarStyle::default()
        };
        draw_radar_chart(&mut svg, &chart, &style);
        let out = svg.finish(None);

        // Five grid levels, one series polygon, one legend swatch.
        assert_eq!(out.matches("<polygon ").count(), 7);
        // Three spokes.
        assert_eq!(out.matches("<path ").count(), 3);
        assert!(out.contains(">R&amp;D</text>"));
        assert!(out.contains(r#"fill-opacity="#));
    }

    #[test]
    fn empty_paths_are_not_written() {
        let mut svg = SvgTarget::default();
        svg.begin_path();
        svg.end_path(&ShapeStyle::default());
        assert!(svg.body.is_empty());
    }
}
