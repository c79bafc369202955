// Copyright 2025 the Rosette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Memoization of computed chart geometry.
//!
//! Hosts often re-render the same chart many times with unchanged data. [`GeometryCache`] keeps
//! computed results keyed by an owned copy of the inputs. Floats participate in the key by bit
//! pattern, so a hit means the inputs are bit-identical and the cached result is exactly what a
//! fresh computation would return.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use peniko::Color;
use tracing::trace;

use crate::error::GeometryError;
use crate::radar::{Axis, RadarChart, RadarConfig, Series};
use crate::share::{ShareChart, ShareChartConfig, Slice};

const DEFAULT_CAPACITY: usize = 64;

fn color_key(color: Option<Color>) -> Option<[u32; 4]> {
    color.map(|c| c.components.map(f32::to_bits))
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct SliceKey {
    label: String,
    value: u64,
    color: Option<[u32; 4]>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct ShareKey {
    slices: Vec<SliceKey>,
    diameter: u64,
    inner_radius: u64,
    show_legend: bool,
}

impl ShareKey {
    fn new(slices: &[Slice], config: &ShareChartConfig) -> Self {
        Self {
            slices: slices
                .iter()
                .map(|s| SliceKey {
                    label: s.label.clone(),
                    value: s.value.to_bits(),
                    color: color_key(s.color),
                })
                .collect(),
            diameter: config.diameter.to_bits(),
            inner_radius: config.inner_radius.to_bits(),
            show_legend: config.show_legend,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct AxisKey {
    label: String,
    max: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct SeriesKey {
    label: String,
    values: Vec<u64>,
    color: Option<[u32; 4]>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct RadarKey {
    axes: Vec<AxisKey>,
    series: Vec<SeriesKey>,
    size: u64,
    max_value: u64,
    levels: usize,
    show_legend: bool,
    label_padding: u64,
    label_offset: u64,
    line_height: u64,
}

impl RadarKey {
    fn new(axes: &[Axis], series: &[Series], config: &RadarConfig) -> Self {
        Self {
            axes: axes
                .iter()
                .map(|a| AxisKey {
                    label: a.label.clone(),
                    max: a.max.map(f64::to_bits),
                })
                .collect(),
            series: series
                .iter()
                .map(|s| SeriesKey {
                    label: s.label.clone(),
                    values: s.values.iter().map(|v| v.to_bits()).collect(),
                    color: color_key(s.color),
                })
                .collect(),
            size: config.size.to_bits(),
            max_value: config.max_value.to_bits(),
            levels: config.levels,
            show_legend: config.show_legend,
            label_padding: config.label_padding.to_bits(),
            label_offset: config.label_offset.to_bits(),
            line_height: config.line_height.to_bits(),
        }
    }
}

/// A memo of computed share and radar charts.
///
/// Errors are returned but never cached. Each chart family keeps at most `capacity` entries;
/// inserting into a full map clears it first.
#[derive(Clone, Debug)]
pub struct GeometryCache {
    share: HashMap<ShareKey, ShareChart>,
    radar: HashMap<RadarKey, RadarChart>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl GeometryCache {
    /// Creates a cache holding up to 64 charts of each family.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a cache holding up to `capacity` charts of each family (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            share: HashMap::new(),
            radar: HashMap::new(),
            capacity: capacity.max(1),
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the share chart for these inputs, computing it on a miss.
    pub fn share_chart(
        &mut self,
        slices: &[Slice],
        config: &ShareChartConfig,
    ) -> Result<&ShareChart, GeometryError> {
        let key = ShareKey::new(slices, config);
        if self.share.contains_key(&key) {
            self.hits += 1;
            trace!(slices = slices.len(), "share chart cache hit");
            return Ok(&self.share[&key]);
        }
        self.misses += 1;
        trace!(slices = slices.len(), "share chart cache miss");
        let chart = ShareChart::compute(slices, config)?;
        if self.share.len() >= self.capacity {
            self.share.clear();
        }
        let cached: &ShareChart = self.share.entry(key).or_insert(chart);
        Ok(cached)
    }

    /// Returns the radar chart for these inputs, computing it on a miss.
    pub fn radar_chart(
        &mut self,
        axes: &[Axis],
        series: &[Series],
        config: &RadarConfig,
    ) -> Result<&RadarChart, GeometryError> {
        let key = RadarKey::new(axes, series, config);
        if self.radar.contains_key(&key) {
            self.hits += 1;
            trace!(axes = axes.len(), series = series.len(), "radar chart cache hit");
            return Ok(&self.radar[&key]);
        }
        self.misses += 1;
        trace!(axes = axes.len(), series = series.len(), "radar chart cache miss");
        let chart = RadarChart::compute(axes, series, config)?;
        if self.radar.len() >= self.capacity {
            self.radar.clear();
        }
        let cached: &RadarChart = self.radar.entry(key).or_insert(chart);
        Ok(cached)
    }

    /// Number of cached charts across both families.
    pub fn len(&self) -> usize {
        self.share.len() + self.radar.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached chart (hit/miss counters are kept).
    pub fn clear(&mut self) {
        self.share.clear();
        self.radar.clear();
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that required a computation.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

impl Default for GeometryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn hits_return_what_a_fresh_computation_returns() {
        let slices = vec![Slice::new("a", 2.0), Slice::new("b", 5.0)];
        let config = ShareChartConfig::new(120.0).with_inner_radius(30.0);
        let mut cache = GeometryCache::new();

        let first = cache.share_chart(&slices, &config).unwrap().clone();
        let second = cache.share_chart(&slices, &config).unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(first, ShareChart::compute(&slices, &config).unwrap());
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn any_input_change_is_a_miss() {
        let axes = vec![Axis::new("x"), Axis::new("y"), Axis::new("z")];
        let series = vec![Series::new("s", [1.0, 2.0, 3.0])];
        let config = RadarConfig::default();
        let mut cache = GeometryCache::new();

        cache.radar_chart(&axes, &series, &config).unwrap();
        cache
            .radar_chart(&axes, &series, &config.with_levels(3))
            .unwrap();
        let recolored = vec![Series::new("s", [1.0, 2.0, 3.0]).with_color(css::TEAL)];
        cache.radar_chart(&axes, &recolored, &config).unwrap();
        cache.radar_chart(&axes, &series, &config).unwrap();

        assert_eq!(cache.misses(), 3);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn errors_are_not_cached() {
        let mut cache = GeometryCache::new();
        let config = ShareChartConfig::default();
        for _ in 0..2 {
            assert_eq!(
                cache.share_chart(&[], &config),
                Err(GeometryError::DegenerateInput { total: 0.0 })
            );
        }
        assert!(cache.is_empty());
        assert_eq!(cache.misses(), 2);
    }

    #[test]
    fn full_cache_starts_over() {
        let mut cache = GeometryCache::with_capacity(2);
        let config = ShareChartConfig::default();
        for v in 1..=3 {
            cache
                .share_chart(&[Slice::new("a", f64::from(v))], &config)
                .unwrap();
        }
        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }
}
