// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Numeric helpers shared by the command builders and the report handler.
//!
//! Zigbee transitions are expressed in tenths of a second ("ticks") and
//! levels use an 8-bit scale where 254 is the brightest settable value.

use std::time::Duration;

/// Highest level accepted by `moveToLevel`.
pub const MAX_LEVEL: u8 = 254;

/// Converts a transition duration to protocol ticks (tenths of a second).
///
/// Partial ticks are dropped and durations longer than `u16::MAX` ticks
/// saturate.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use zigbee_light::units::to_protocol_ticks;
///
/// assert_eq!(to_protocol_ticks(Duration::from_millis(400)), 4);
/// assert_eq!(to_protocol_ticks(Duration::from_millis(99)), 0);
/// ```
#[must_use]
pub fn to_protocol_ticks(duration: Duration) -> u16 {
    u16::try_from(duration.as_millis() / 100).unwrap_or(u16::MAX)
}

/// Clamps `value` into `[lo, hi]`.
///
/// `lo <= hi` is the caller's responsibility.
#[must_use]
pub fn clamp<T: PartialOrd>(value: T, lo: T, hi: T) -> T {
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Converts a brightness percentage to a `moveToLevel` level.
///
/// 100% maps to 254 rather than 255.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percent_to_level(percent: u8) -> u8 {
    let scaled = f64::from(percent) / 100.0 * 255.0;
    clamp(scaled, 0.0, f64::from(MAX_LEVEL)) as u8
}

/// Converts a reported `currentLevel` (0-255) to a brightness percentage.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn level_to_percent(level: u8) -> u8 {
    (f64::from(level) / 255.0 * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_floor_partial_tenths() {
        assert_eq!(to_protocol_ticks(Duration::ZERO), 0);
        assert_eq!(to_protocol_ticks(Duration::from_millis(400)), 4);
        assert_eq!(to_protocol_ticks(Duration::from_millis(1_050)), 10);
        assert_eq!(to_protocol_ticks(Duration::from_secs(2)), 20);
    }

    #[test]
    fn ticks_saturate() {
        assert_eq!(to_protocol_ticks(Duration::from_secs(1_000_000)), u16::MAX);
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(-3, 0, 10), 0);
        assert_eq!(clamp(42, 0, 10), 10);
        assert!((clamp(1.5_f64, 0.0, 1.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn full_brightness_is_level_254() {
        assert_eq!(percent_to_level(100), 254);
        assert_eq!(percent_to_level(0), 0);
        assert_eq!(percent_to_level(50), 127);
    }

    #[test]
    fn reported_level_rescales_to_percent() {
        assert_eq!(level_to_percent(128), 50);
        assert_eq!(level_to_percent(255), 100);
        assert_eq!(level_to_percent(254), 100);
        assert_eq!(level_to_percent(0), 0);
    }
}
