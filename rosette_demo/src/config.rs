// Copyright 2025 the Rosette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! TOML chart definitions.
//!
//! A chart file holds exactly one of a `[share]` or a `[radar]` table:
//!
//! ```toml
//! name = "budget"
//! title = "Monthly budget"
//!
//! [share]
//! diameter = 240.0
//! inner_radius = 60.0
//!
//! [[share.slices]]
//! label = "Rent"
//! value = 1200.0
//! color = "#4e79a7"
//! ```

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use peniko::Color;
use peniko::color::{Srgb, parse_color};
use rosette_geometry::{Axis, RadarConfig, Series, ShareChartConfig, Slice};
use serde::Deserialize;

/// Built-in chart definitions rendered when no files are given.
const BUILTIN: [(&str, &str); 3] = [
    ("budget", include_str!("../../demos/budget.toml")),
    ("traffic", include_str!("../../demos/traffic.toml")),
    ("athletes", include_str!("../../demos/athletes.toml")),
];

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChartFile {
    name: Option<String>,
    title: Option<String>,
    share: Option<ShareSection>,
    radar: Option<RadarSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ShareSection {
    #[serde(default = "default_diameter")]
    diameter: f64,
    #[serde(default)]
    inner_radius: f64,
    #[serde(default = "default_true")]
    show_legend: bool,
    slices: Vec<SliceDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SliceDef {
    label: String,
    value: f64,
    color: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RadarSection {
    #[serde(default = "default_radar_size")]
    size: f64,
    #[serde(default = "default_max_value")]
    max_value: f64,
    #[serde(default = "default_levels")]
    levels: usize,
    #[serde(default = "default_true")]
    show_legend: bool,
    label_padding: Option<f64>,
    label_offset: Option<f64>,
    line_height: Option<f64>,
    axes: Vec<AxisDef>,
    series: Vec<SeriesDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AxisDef {
    label: String,
    max: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeriesDef {
    label: String,
    values: Vec<f64>,
    color: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_diameter() -> f64 {
    ShareChartConfig::default().diameter
}

fn default_radar_size() -> f64 {
    RadarConfig::default().size
}

fn default_max_value() -> f64 {
    RadarConfig::default().max_value
}

fn default_levels() -> usize {
    RadarConfig::default().levels
}

/// Geometry inputs for one chart.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ChartInput {
    Share {
        slices: Vec<Slice>,
        config: ShareChartConfig,
    },
    Radar {
        axes: Vec<Axis>,
        series: Vec<Series>,
        config: RadarConfig,
    },
}

/// A parsed chart definition.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ChartDef {
    /// Output file stem.
    pub(crate) name: String,
    /// Optional SVG `<title>`.
    pub(crate) title: Option<String>,
    pub(crate) input: ChartInput,
}

impl ChartDef {
    /// Loads a chart file. The file stem is the default name.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "chart".to_string());
        Self::parse(&content, &stem)
            .with_context(|| format!("invalid chart file {}", path.display()))
    }

    /// Parses a chart definition from TOML text.
    pub(crate) fn parse(content: &str, default_name: &str) -> Result<Self> {
        let file: ChartFile = toml::from_str(content)?;
        let input = match (file.share, file.radar) {
            (Some(share), None) => share.into_input()?,
            (None, Some(radar)) => radar.into_input()?,
            (Some(_), Some(_)) => bail!("a chart file holds either [share] or [radar], not both"),
            (None, None) => bail!("a chart file needs a [share] or a [radar] table"),
        };
        let name = file.name.unwrap_or_else(|| default_name.to_string());
        check_name(&name)?;
        Ok(Self {
            name,
            title: file.title,
            input,
        })
    }

    /// The built-in example charts.
    pub(crate) fn builtin() -> Result<Vec<Self>> {
        BUILTIN
            .iter()
            .map(|(name, content)| {
                Self::parse(content, name).with_context(|| format!("built-in chart {name}"))
            })
            .collect()
    }
}

impl ShareSection {
    fn into_input(self) -> Result<ChartInput> {
        let slices = self
            .slices
            .into_iter()
            .map(|s| {
                let slice = Slice::new(s.label, s.value);
                Ok(match s.color {
                    Some(c) => slice.with_color(parse_css_color(&c)?),
                    None => slice,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let config = ShareChartConfig::new(self.diameter)
            .with_inner_radius(self.inner_radius)
            .with_legend(self.show_legend);
        Ok(ChartInput::Share { slices, config })
    }
}

impl RadarSection {
    fn into_input(self) -> Result<ChartInput> {
        let axes = self
            .axes
            .into_iter()
            .map(|a| match a.max {
                Some(max) => Axis::new(a.label).with_max(max),
                None => Axis::new(a.label),
            })
            .collect();
        let series = self
            .series
            .into_iter()
            .map(|s| {
                let series = Series::new(s.label, s.values);
                Ok(match s.color {
                    Some(c) => series.with_color(parse_css_color(&c)?),
                    None => series,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let mut config = RadarConfig::new(self.size)
            .with_max_value(self.max_value)
            .with_levels(self.levels)
            .with_legend(self.show_legend);
        if let Some(padding) = self.label_padding {
            config = config.with_label_padding(padding);
        }
        if let Some(offset) = self.label_offset {
            config = config.with_label_offset(offset);
        }
        if let Some(line_height) = self.line_height {
            config = config.with_line_height(line_height);
        }
        Ok(ChartInput::Radar {
            axes,
            series,
            config,
        })
    }
}

/// Chart names become file stems inside the output directory.
fn check_name(name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        bail!("chart name {name:?} is not a plain file stem");
    }
    Ok(())
}

/// Fails if two charts would write the same output file.
pub(crate) fn check_unique_names(charts: &[ChartDef]) -> Result<()> {
    let mut seen = HashSet::new();
    for chart in charts {
        if !seen.insert(chart.name.as_str()) {
            bail!("more than one chart is named {:?}", chart.name);
        }
    }
    Ok(())
}

/// Parses any CSS color string (`#rrggbb`, `rgb(...)`, named colors, ...).
fn parse_css_color(s: &str) -> Result<Color> {
    let color = parse_color(s).map_err(|e| anyhow!("invalid color {s:?}: {e}"))?;
    Ok(color.to_alpha_color::<Srgb>())
}
