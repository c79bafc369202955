// Copyright 2025 the Rosette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders pie, donut and radar charts to SVG files.
//!
//! Without `--chart` arguments the built-in demo charts are rendered.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use peniko::color::palette::css;
use rosette_geometry::{
    GeometryCache, RadarStyle, ShareStyle, TextStyle, draw_radar_chart, draw_share_chart,
};
use tracing::{debug, info};

mod config;
mod svg;

use config::{ChartDef, ChartInput, check_unique_names};
use svg::SvgTarget;

#[derive(Parser, Debug)]
#[command(name = "rosette_demo")]
#[command(author, version, about = "Render pie, donut and radar charts to SVG")]
struct Args {
    /// Chart definition file (TOML); may be repeated
    #[arg(short, long = "chart")]
    charts: Vec<PathBuf>,

    /// Directory the SVG files are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Print percentages inside share chart slices
    #[arg(long)]
    slice_labels: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rosette_demo=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let charts = if args.charts.is_empty() {
        info!("no chart files given, rendering built-in charts");
        ChartDef::builtin()?
    } else {
        args.charts
            .iter()
            .map(|path| ChartDef::load(path))
            .collect::<Result<Vec<_>>>()?
    };
    check_unique_names(&charts)?;

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;

    let share_style = ShareStyle {
        slice_labels: args.slice_labels.then(|| TextStyle::new(10.0, css::WHITE)),
        ..ShareStyle::default()
    };
    let radar_style = RadarStyle::default();
    let mut cache = GeometryCache::new();

    for chart in &charts {
        let mut target = SvgTarget::default();
        match &chart.input {
            ChartInput::Share { slices, config } => {
                let geometry = cache
                    .share_chart(slices, config)
                    .with_context(|| format!("chart {:?}", chart.name))?;
                draw_share_chart(&mut target, geometry, &share_style);
            }
            ChartInput::Radar {
                axes,
                series,
                config,
            } => {
                let geometry = cache
                    .radar_chart(axes, series, config)
                    .with_context(|| format!("chart {:?}", chart.name))?;
                draw_radar_chart(&mut target, geometry, &radar_style);
            }
        }

        let path = args.out_dir.join(format!("{}.svg", chart.name));
        fs::write(&path, target.finish(chart.title.as_deref()))
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote chart");
    }

    debug!(
        hits = cache.hits(),
        misses = cache.misses(),
        "geometry cache"
    );
    Ok(())
}
