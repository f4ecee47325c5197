// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Brightness percentage and brightness adjustment requests.

use std::fmt;

use crate::error::ValueError;
use crate::units;

/// Brightness level as a percentage (0-100).
///
/// # Examples
///
/// ```
/// use zigbee_light::types::Brightness;
///
/// let half = Brightness::new(50).unwrap();
/// assert_eq!(half.value(), 50);
/// assert_eq!(half.to_level(), 127);
///
/// assert!(Brightness::new(101).is_err());
/// assert_eq!(Brightness::clamped(180), Brightness::MAX);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct Brightness(u8);

impl Brightness {
    /// Minimum brightness (0%).
    pub const MIN: Self = Self(0);

    /// Maximum brightness (100%).
    pub const MAX: Self = Self(100);

    /// Creates a new brightness value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: u16::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a brightness value, clamping to 100.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    /// Creates a brightness value from a reported `currentLevel` (0-255).
    #[must_use]
    pub fn from_level(level: u8) -> Self {
        Self::clamped(units::level_to_percent(level))
    }

    /// Returns the brightness percentage.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the `moveToLevel` level for this brightness.
    #[must_use]
    pub fn to_level(&self) -> u8 {
        units::percent_to_level(self.0)
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// A brightness request: absolute, or relative to the current level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrightnessChange {
    /// Set an absolute percentage (values above 100 are clamped).
    Set(u8),
    /// Raise by a number of percentage points.
    Increase(u8),
    /// Lower by a number of percentage points.
    Decrease(u8),
}

impl BrightnessChange {
    /// Resolves the request against the current brightness.
    ///
    /// The result is always within 0-100.
    ///
    /// # Examples
    ///
    /// ```
    /// use zigbee_light::types::{Brightness, BrightnessChange};
    ///
    /// let current = Brightness::new(90).unwrap();
    /// assert_eq!(BrightnessChange::Increase(20).resolve(current), Brightness::MAX);
    /// assert_eq!(BrightnessChange::Decrease(95).resolve(current), Brightness::MIN);
    /// ```
    #[must_use]
    pub fn resolve(self, current: Brightness) -> Brightness {
        match self {
            Self::Set(value) => Brightness::clamped(value),
            Self::Increase(delta) => Brightness::clamped(current.0.saturating_add(delta)),
            Self::Decrease(delta) => Brightness::clamped(current.0.saturating_sub(delta)),
        }
    }
}
