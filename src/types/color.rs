// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color values in the representations a Zigbee color cluster understands.
//!
//! A [`Color`] always holds exactly one representation. Converting returns a
//! new value; converting to the representation a value already has is the
//! identity.

use std::fmt;

use crate::error::ValueError;

use super::colorimetry;

/// Lowest Kelvin value produced by a conversion.
const MIN_CONVERTED_KELVIN: f64 = 1_000.0;

/// Highest Kelvin value produced by a conversion.
const MAX_CONVERTED_KELVIN: f64 = 40_000.0;

/// Color temperature in mireds (1 000 000 / Kelvin).
///
/// # Examples
///
/// ```
/// use zigbee_light::types::Mired;
///
/// let warm = Mired::new(370).unwrap();
/// assert_eq!(Mired::from_kelvin(warm.kelvin()).unwrap(), warm);
///
/// assert_eq!(Mired::from_kelvin(4000.0).unwrap().value(), 250);
/// assert!(Mired::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct Mired(u16);

impl Mired {
    /// Creates a mired value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` for zero, which has no Kelvin
    /// equivalent.
    pub fn new(value: u16) -> Result<Self, ValueError> {
        if value == 0 {
            return Err(ValueError::OutOfRange {
                min: 1,
                max: u16::MAX,
                actual: 0,
            });
        }
        Ok(Self(value))
    }

    /// Creates a mired value from a constant known to be non-zero.
    pub(crate) const fn new_unchecked(value: u16) -> Self {
        Self(value)
    }

    /// Creates a mired value from a temperature in Kelvin, rounding to the
    /// nearest mired.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the result does not fit in
    /// 1-65535 mired.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_kelvin(kelvin: f64) -> Result<Self, ValueError> {
        let mired = (1_000_000.0 / kelvin).round();
        if !mired.is_finite() || mired < 1.0 || mired > f64::from(u16::MAX) {
            return Err(ValueError::OutOfRange {
                min: 1,
                max: u16::MAX,
                actual: kelvin.clamp(0.0, f64::from(u16::MAX)) as u16,
            });
        }
        Ok(Self(mired as u16))
    }

    /// Converts a Kelvin value produced by a color conversion, keeping it in
    /// a plausible range so it always maps to a valid mired value.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from_converted_kelvin(kelvin: f64) -> Self {
        let kelvin = kelvin.clamp(MIN_CONVERTED_KELVIN, MAX_CONVERTED_KELVIN);
        Self((1_000_000.0 / kelvin).round() as u16)
    }

    /// Returns the value in mireds.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Returns the temperature in Kelvin.
    #[must_use]
    pub fn kelvin(&self) -> f64 {
        1_000_000.0 / f64::from(self.0)
    }

    /// Clamps into `[min, max]`, inclusive.
    #[must_use]
    pub fn clamp_to(self, min: Self, max: Self) -> Self {
        crate::units::clamp(self, min, max)
    }
}

impl fmt::Display for Mired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mired", self.0)
    }
}

/// CIE 1931 chromaticity coordinates.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Chromaticity {
    x: f64,
    y: f64,
}

impl Chromaticity {
    /// Creates chromaticity coordinates.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidChromaticity` if either coordinate is
    /// outside [0, 1].
    pub fn new(x: f64, y: f64) -> Result<Self, ValueError> {
        for coordinate in [x, y] {
            if !(0.0..=1.0).contains(&coordinate) {
                return Err(ValueError::InvalidChromaticity(coordinate));
            }
        }
        Ok(Self { x, y })
    }

    /// Returns the x coordinate.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }
}

/// Hue and saturation, with the hue resolution the light should use.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct HueSaturation {
    hue: f64,
    saturation: f64,
    enhanced: bool,
}

impl HueSaturation {
    /// Creates a hue/saturation color using 8-bit hue.
    ///
    /// # Arguments
    ///
    /// * `hue` - Hue angle in degrees (0-360)
    /// * `saturation` - Saturation percentage (0-100)
    ///
    /// # Errors
    ///
    /// Returns error if either value is outside its range.
    pub fn new(hue: f64, saturation: f64) -> Result<Self, ValueError> {
        if !(0.0..=360.0).contains(&hue) {
            return Err(ValueError::InvalidHue(hue));
        }
        if !(0.0..=100.0).contains(&saturation) {
            return Err(ValueError::InvalidSaturation(saturation));
        }
        Ok(Self {
            hue,
            saturation,
            enhanced: false,
        })
    }

    /// Returns the same color flagged for 16-bit (enhanced) hue or not.
    #[must_use]
    pub const fn with_enhanced(self, enhanced: bool) -> Self {
        Self { enhanced, ..self }
    }

    /// Returns the hue in degrees.
    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.hue
    }

    /// Returns the saturation percentage.
    #[must_use]
    pub const fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Returns `true` if the enhanced (16-bit) hue should be used.
    #[must_use]
    pub const fn is_enhanced(&self) -> bool {
        self.enhanced
    }
}

/// The representation a [`Color`] is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Color temperature.
    Temperature,
    /// CIE xy chromaticity.
    Xy,
    /// Hue and saturation.
    HueSaturation,
}

/// A light color in one of the supported representations.
///
/// # Examples
///
/// ```
/// use zigbee_light::types::Color;
///
/// let warm = Color::mired(370).unwrap();
/// assert!(warm.is_temperature());
///
/// let xy = warm.to_xy();
/// assert!(xy.is_xy());
///
/// // Converting to the current representation is the identity
/// assert_eq!(xy.to_xy(), xy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// White at a color temperature.
    Temperature(Mired),
    /// CIE 1931 xy chromaticity.
    Xy(Chromaticity),
    /// Hue and saturation.
    HueSaturation(HueSaturation),
}

impl Color {
    /// Creates a temperature color from mireds.
    ///
    /// # Errors
    ///
    /// Returns error if `mired` is zero.
    pub fn mired(mired: u16) -> Result<Self, ValueError> {
        Mired::new(mired).map(Self::Temperature)
    }

    /// Creates a temperature color from Kelvin.
    ///
    /// # Errors
    ///
    /// Returns error if the temperature does not map to a valid mired value.
    pub fn kelvin(kelvin: f64) -> Result<Self, ValueError> {
        Mired::from_kelvin(kelvin).map(Self::Temperature)
    }

    /// Creates an xy color.
    ///
    /// # Errors
    ///
    /// Returns error if a coordinate is outside [0, 1].
    pub fn xy(x: f64, y: f64) -> Result<Self, ValueError> {
        Chromaticity::new(x, y).map(Self::Xy)
    }

    /// Creates a hue/saturation color.
    ///
    /// # Errors
    ///
    /// Returns error if hue or saturation is out of range.
    pub fn hue_saturation(hue: f64, saturation: f64) -> Result<Self, ValueError> {
        HueSaturation::new(hue, saturation).map(Self::HueSaturation)
    }

    /// Returns the representation this color is in.
    #[must_use]
    pub const fn mode(&self) -> ColorMode {
        match self {
            Self::Temperature(_) => ColorMode::Temperature,
            Self::Xy(_) => ColorMode::Xy,
            Self::HueSaturation(_) => ColorMode::HueSaturation,
        }
    }

    /// Returns `true` for a temperature color.
    #[must_use]
    pub const fn is_temperature(&self) -> bool {
        matches!(self, Self::Temperature(_))
    }

    /// Returns `true` for an xy color.
    #[must_use]
    pub const fn is_xy(&self) -> bool {
        matches!(self, Self::Xy(_))
    }

    /// Returns `true` for a hue/saturation color.
    #[must_use]
    pub const fn is_hue_saturation(&self) -> bool {
        matches!(self, Self::HueSaturation(_))
    }

    /// Converts to a color temperature.
    ///
    /// Non-white colors map to the closest point on the Planckian locus.
    #[must_use]
    pub fn to_temperature(&self) -> Self {
        match self {
            Self::Temperature(_) => *self,
            Self::Xy(xy) => Self::Temperature(Mired::from_converted_kelvin(
                colorimetry::xy_to_kelvin(xy.x, xy.y),
            )),
            Self::HueSaturation(_) => self.to_xy().to_temperature(),
        }
    }

    /// Converts to xy chromaticity.
    #[must_use]
    pub fn to_xy(&self) -> Self {
        let (x, y) = match self {
            Self::Xy(_) => return *self,
            Self::Temperature(mired) => colorimetry::kelvin_to_xy(mired.kelvin()),
            Self::HueSaturation(hs) => colorimetry::hue_saturation_to_xy(hs.hue, hs.saturation),
        };
        Self::Xy(Chromaticity {
            x: x.clamp(0.0, 1.0),
            y: y.clamp(0.0, 1.0),
        })
    }

    /// Converts to hue/saturation, flagged for enhanced hue when requested.
    ///
    /// A hue/saturation value only has its `enhanced` flag updated.
    #[must_use]
    pub fn to_hue_saturation(&self, enhanced: bool) -> Self {
        let (hue, saturation) = match self {
            Self::HueSaturation(hs) => return Self::HueSaturation(hs.with_enhanced(enhanced)),
            Self::Xy(xy) => colorimetry::xy_to_hue_saturation(xy.x, xy.y),
            Self::Temperature(_) => return self.to_xy().to_hue_saturation(enhanced),
        };
        Self::HueSaturation(HueSaturation {
            hue: hue.clamp(0.0, 360.0),
            saturation: saturation.clamp(0.0, 100.0),
            enhanced,
        })
    }
}

impl From<Mired> for Color {
    fn from(mired: Mired) -> Self {
        Self::Temperature(mired)
    }
}

impl From<Chromaticity> for Color {
    fn from(xy: Chromaticity) -> Self {
        Self::Xy(xy)
    }
}

impl From<HueSaturation> for Color {
    fn from(hs: HueSaturation) -> Self {
        Self::HueSaturation(hs)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature(mired) => write!(f, "{mired}"),
            Self::Xy(xy) => write!(f, "xy({:.4}, {:.4})", xy.x, xy.y),
            Self::HueSaturation(hs) => {
                write!(f, "hs({:.1}°, {:.1}%)", hs.hue, hs.saturation)
            }
        }
    }
}
