// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Colorimetric transforms between temperature, CIE 1931 xy and hue/saturation.
//!
//! Hue/saturation is interpreted as sRGB HSV at full value. xy coordinates
//! are taken at unit luminance and pushed through linear sRGB (D65); colors
//! outside the sRGB gamut are normalized to the brightest in-gamut color
//! and negative channels are dropped.

use palette::convert::FromColorUnclamped;
use palette::{FromColor, Hsv, LinSrgb, Srgb, Xyz, Yxy};

/// Lowest temperature accepted by the locus approximation.
const MIN_KELVIN: f64 = 1_667.0;

/// Highest temperature accepted by the locus approximation.
const MAX_KELVIN: f64 = 25_000.0;

/// Smallest y used when lifting xy to XYZ.
const MIN_Y: f64 = 1e-6;

/// Approximates the xy chromaticity of a black body at `kelvin`.
///
/// Cubic spline fit of the Planckian locus by Kang et al. (2002),
/// valid between 1667 K and 25000 K; inputs are clamped to that range.
pub(crate) fn kelvin_to_xy(kelvin: f64) -> (f64, f64) {
    let t = kelvin.clamp(MIN_KELVIN, MAX_KELVIN);
    let (t2, t3) = (t * t, t * t * t);

    let x = if t <= 4_000.0 {
        -0.266_123_9e9 / t3 - 0.234_358_9e6 / t2 + 0.877_695_6e3 / t + 0.179_910
    } else {
        -3.025_846_9e9 / t3 + 2.107_037_9e6 / t2 + 0.222_634_7e3 / t + 0.240_390
    };

    let (x2, x3) = (x * x, x * x * x);
    let y = if t <= 2_222.0 {
        -1.106_381_4 * x3 - 1.348_110_20 * x2 + 2.185_558_32 * x - 0.202_196_83
    } else if t <= 4_000.0 {
        -0.954_947_6 * x3 - 1.374_185_93 * x2 + 2.091_370_15 * x - 0.167_488_67
    } else {
        3.081_758_0 * x3 - 5.873_386_70 * x2 + 3.751_129_97 * x - 0.370_014_83
    };

    (x, y)
}

/// Estimates the correlated color temperature of an xy chromaticity.
///
/// Uses McCamy's cubic approximation; the result is clamped to the range
/// supported by [`kelvin_to_xy`].
pub(crate) fn xy_to_kelvin(x: f64, y: f64) -> f64 {
    let denominator = 0.1858 - y;
    if denominator.abs() < f64::EPSILON {
        return MAX_KELVIN;
    }
    let n = (x - 0.3320) / denominator;
    let cct = 449.0 * n.powi(3) + 3_525.0 * n.powi(2) + 6_823.3 * n + 5_520.33;
    if cct.is_finite() {
        cct.clamp(MIN_KELVIN, MAX_KELVIN)
    } else {
        MAX_KELVIN
    }
}

/// Converts an xy chromaticity to hue (degrees) and saturation (percent).
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn xy_to_hue_saturation(x: f64, y: f64) -> (f64, f64) {
    let y = y.max(MIN_Y);
    let yxy: Yxy = Yxy::new(x as f32, y as f32, 1.0);
    let xyz: Xyz = Xyz::from_color_unclamped(yxy);
    let linear: LinSrgb = LinSrgb::from_color_unclamped(xyz);

    let peak = linear.red.max(linear.green).max(linear.blue);
    if !peak.is_finite() || peak <= 0.0 {
        return (0.0, 0.0);
    }
    let normalized = LinSrgb::new(
        (linear.red / peak).clamp(0.0, 1.0),
        (linear.green / peak).clamp(0.0, 1.0),
        (linear.blue / peak).clamp(0.0, 1.0),
    );

    let encoded: Srgb = Srgb::from_linear(normalized);
    let hsv: Hsv = Hsv::from_color(encoded);

    let hue = f64::from(hsv.hue.into_positive_degrees()) % 360.0;
    let saturation = f64::from(hsv.saturation) * 100.0;
    (hue, saturation.clamp(0.0, 100.0))
}

/// Converts hue (degrees) and saturation (percent) to an xy chromaticity.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn hue_saturation_to_xy(hue: f64, saturation: f64) -> (f64, f64) {
    let hsv: Hsv = Hsv::new(hue as f32, (saturation / 100.0) as f32, 1.0);
    let encoded: Srgb = Srgb::from_color(hsv);
    let linear: LinSrgb = encoded.into_linear();
    let xyz: Xyz = Xyz::from_color_unclamped(linear);
    let yxy: Yxy = Yxy::from_color_unclamped(xyz);

    (
        f64::from(yxy.x).clamp(0.0, 1.0),
        f64::from(yxy.y).clamp(0.0, 1.0),
    )
}
