// Copyright 2025 the Rosette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default categorical palette.

use peniko::Color;

/// The fixed, ordered palette used for slices and series without an explicit color.
pub const DEFAULT_PALETTE: [Color; 10] = [
    Color::from_rgba8(0x88, 0x84, 0xd8, 0xff),
    Color::from_rgba8(0x82, 0xca, 0x9d, 0xff),
    Color::from_rgba8(0xff, 0xc6, 0x58, 0xff),
    Color::from_rgba8(0xff, 0x80, 0x42, 0xff),
    Color::from_rgba8(0x00, 0x88, 0xfe, 0xff),
    Color::from_rgba8(0x00, 0xc4, 0x9f, 0xff),
    Color::from_rgba8(0xff, 0xbb, 0x28, 0xff),
    Color::from_rgba8(0xff, 0x6b, 0x6b, 0xff),
    Color::from_rgba8(0xa2, 0x8f, 0xd0, 0xff),
    Color::from_rgba8(0x4e, 0xcd, 0xc4, 0xff),
];

/// Returns the default palette color for `index`, cycling when `index` exceeds the palette.
pub fn palette_color(index: usize) -> Color {
    DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()]
}
