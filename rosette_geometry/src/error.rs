// Copyright 2025 the Rosette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input validation errors.

/// Errors returned when chart inputs cannot produce well-defined geometry.
///
/// All variants are caller errors. They are detected before any geometry is computed, so a
/// failed call never yields partial output.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// The slice values of a share chart sum to zero (or less).
    #[error("share chart total must be positive, got {total}")]
    DegenerateInput {
        /// The computed total.
        total: f64,
    },
    /// A radar series does not carry exactly one value per axis.
    #[error("series {series} has {actual} values but the chart has {expected} axes")]
    InvalidSeriesLength {
        /// Index of the offending series.
        series: usize,
        /// The axis count.
        expected: usize,
        /// The number of values in the series.
        actual: usize,
    },
    /// A radar axis resolves to a maximum that is not a positive finite number.
    #[error("axis {axis} resolves to a non-positive maximum ({max})")]
    NonPositiveAxisMax {
        /// Index of the offending axis.
        axis: usize,
        /// The resolved maximum (the axis max, or the config fallback).
        max: f64,
    },
    /// A slice value is negative or not finite.
    #[error("slice {slice} has an invalid value ({value})")]
    InvalidSliceValue {
        /// Index of the offending slice.
        slice: usize,
        /// The rejected value.
        value: f64,
    },
    /// A radar series value is negative or not finite.
    #[error("series {series} has an invalid value ({value}) on axis {axis}")]
    InvalidSeriesValue {
        /// Index of the offending series.
        series: usize,
        /// Index of the axis the value belongs to.
        axis: usize,
        /// The rejected value.
        value: f64,
    },
    /// A radar chart was requested without any axes.
    #[error("radar chart needs at least one axis")]
    NoAxes,
    /// A radar chart was requested with zero grid levels.
    #[error("radar chart needs at least one grid level")]
    NoGridLevels,
    /// The chart size (diameter) is not a positive finite number.
    #[error("chart size must be positive and finite, got {size}")]
    InvalidSize {
        /// The rejected size.
        size: f64,
    },
    /// The donut inner radius is negative, not finite, or does not fit inside the outer radius.
    #[error("inner radius {inner} must lie in [0, {outer})")]
    InvalidInnerRadius {
        /// The rejected inner radius.
        inner: f64,
        /// The outer radius derived from the diameter.
        outer: f64,
    },
    /// The slice values are valid but their sum is not representable.
    #[error("share chart total overflows")]
    TotalOverflow,
    /// A radar layout setting (label padding, label offset or line height) is unusable.
    #[error("radar layout setting `{field}` is invalid ({value})")]
    InvalidLayout {
        /// Name of the offending [`RadarConfig`](crate::RadarConfig) field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = GeometryError::InvalidSeriesLength {
            series: 2,
            expected: 5,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "series 2 has 4 values but the chart has 5 axes"
        );

        let err = GeometryError::NonPositiveAxisMax { axis: 1, max: 0.0 };
        assert_eq!(
            err.to_string(),
            "axis 1 resolves to a non-positive maximum (0)"
        );

        let err = GeometryError::InvalidLayout {
            field: "line_height",
            value: -2.0,
        };
        assert_eq!(
            err.to_string(),
            "radar layout setting `line_height` is invalid (-2)"
        );
    }
}
