// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color capability detection and static capability advertisement.
//!
//! Color lights report a `colorCapabilities` bitset, but plenty of them
//! misreport it. The [`CapabilityProfile`] combines the bitset with the
//! optional attributes the light actually exposes to guess what it really
//! supports. The profile is computed once when the light is adopted and is
//! never updated afterwards.
//!
//! # Manual Configuration
//!
//! Profiles can also be built by hand with [`CapabilityProfileBuilder`].

use std::fmt;

use serde::Deserialize;

use crate::types::Mired;

/// Coolest temperature assumed when the light reports no physical range.
pub const DEFAULT_MIN_MIRED: u16 = 154;

/// Warmest temperature assumed when the light reports no physical range.
pub const DEFAULT_MAX_MIRED: u16 = 500;

/// The `colorCapabilities` bitset of the color control cluster.
///
/// # Examples
///
/// ```
/// use zigbee_light::ColorCapabilities;
///
/// let caps = ColorCapabilities::HUE_SATURATION | ColorCapabilities::XY;
/// assert!(caps.contains(ColorCapabilities::XY));
/// assert!(!caps.contains(ColorCapabilities::COLOR_TEMPERATURE));
/// assert_eq!(caps.bits(), 0b1001);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ColorCapabilities(u16);

impl ColorCapabilities {
    /// Bit 0: hue and saturation.
    pub const HUE_SATURATION: Self = Self(1 << 0);
    /// Bit 1: enhanced (16-bit) hue.
    pub const ENHANCED_HUE: Self = Self(1 << 1);
    /// Bit 2: color loop.
    pub const COLOR_LOOP: Self = Self(1 << 2);
    /// Bit 3: CIE xy.
    pub const XY: Self = Self(1 << 3);
    /// Bit 4: color temperature.
    pub const COLOR_TEMPERATURE: Self = Self(1 << 4);

    /// Creates a bitset from its raw value.
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn bits(&self) -> u16 {
        self.0
    }

    /// Returns `true` if every bit of `other` is set.
    #[must_use]
    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for ColorCapabilities {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Optional color control attributes that refine the capability bitset.
///
/// Field names follow the attribute names used in discovery data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorAttributes {
    /// Number of color primaries the light can drive.
    pub num_primaries: Option<u8>,
    /// Current x chromaticity; present on lights that track xy.
    pub current_x: Option<u16>,
    /// Coolest supported temperature in mireds.
    pub color_temp_physical_min: Option<u16>,
    /// Warmest supported temperature in mireds.
    pub color_temp_physical_max: Option<u16>,
}

/// What a color light can actually render.
///
/// # Examples
///
/// ```
/// use zigbee_light::{CapabilityProfile, ColorAttributes, ColorCapabilities};
///
/// let profile = CapabilityProfile::derive(
///     ColorCapabilities::COLOR_TEMPERATURE,
///     &ColorAttributes::default(),
/// );
/// assert!(profile.supports_temperature());
/// assert!(!profile.supports_xy());
/// assert_eq!(profile.temperature_range().0.value(), 154);
/// assert_eq!(profile.temperature_range().1.value(), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
// Independent feature flags reported by the hardware.
#[allow(clippy::struct_excessive_bools)]
pub struct CapabilityProfile {
    supports_temperature: bool,
    supports_xy: bool,
    supports_hue: bool,
    supports_enhanced_hue: bool,
    temperature_range: (Mired, Mired),
}

impl CapabilityProfile {
    /// Derives the profile from the capability bitset and attributes.
    ///
    /// - temperature: bit 4, or a physical minimum temperature is reported
    /// - xy: (bit 3, or `currentX` is reported) and at least one primary
    /// - hue: bit 0 or bit 1
    /// - enhanced hue: bit 1
    /// - temperature range: the reported physical range, falling back to
    ///   154-500 mired (the Philips Hue range)
    #[must_use]
    pub fn derive(bits: ColorCapabilities, attributes: &ColorAttributes) -> Self {
        let supports_temperature = bits.contains(ColorCapabilities::COLOR_TEMPERATURE)
            || attributes.color_temp_physical_min.is_some();

        let supports_xy = (bits.contains(ColorCapabilities::XY) || attributes.current_x.is_some())
            && attributes.num_primaries.is_some_and(|n| n > 0);

        let supports_hue = bits.contains(ColorCapabilities::HUE_SATURATION)
            || bits.contains(ColorCapabilities::ENHANCED_HUE);

        Self {
            supports_temperature,
            supports_xy,
            supports_hue,
            supports_enhanced_hue: bits.contains(ColorCapabilities::ENHANCED_HUE),
            temperature_range: (
                reported_or(attributes.color_temp_physical_min, DEFAULT_MIN_MIRED),
                reported_or(attributes.color_temp_physical_max, DEFAULT_MAX_MIRED),
            ),
        }
    }

    /// A profile with no color support at all.
    #[must_use]
    pub fn none() -> Self {
        CapabilityProfileBuilder::new().build()
    }

    /// Starts building a profile by hand.
    #[must_use]
    pub fn builder() -> CapabilityProfileBuilder {
        CapabilityProfileBuilder::new()
    }

    /// Returns `true` if color temperature commands are supported.
    #[must_use]
    pub const fn supports_temperature(&self) -> bool {
        self.supports_temperature
    }

    /// Returns `true` if xy commands are supported.
    #[must_use]
    pub const fn supports_xy(&self) -> bool {
        self.supports_xy
    }

    /// Returns `true` if hue/saturation commands are supported.
    #[must_use]
    pub const fn supports_hue(&self) -> bool {
        self.supports_hue
    }

    /// Returns `true` if 16-bit hue commands are supported.
    #[must_use]
    pub const fn supports_enhanced_hue(&self) -> bool {
        self.supports_enhanced_hue
    }

    /// Returns the settable temperature range as `(coolest, warmest)`.
    #[must_use]
    pub const fn temperature_range(&self) -> (Mired, Mired) {
        self.temperature_range
    }

    /// Returns `true` if any color mode is usable.
    #[must_use]
    pub const fn has_color(&self) -> bool {
        self.supports_temperature || self.supports_xy || self.supports_hue
    }

    /// Returns `true` if arbitrary colors (not only whites) can be rendered.
    #[must_use]
    pub const fn has_full_color(&self) -> bool {
        self.supports_xy || self.supports_hue
    }
}

impl Default for CapabilityProfile {
    fn default() -> Self {
        Self::none()
    }
}

/// Uses a reported temperature bound unless it is missing or zero.
fn reported_or(reported: Option<u16>, fallback: u16) -> Mired {
    reported
        .and_then(|value| Mired::new(value).ok())
        .unwrap_or(Mired::new_unchecked(fallback))
}

/// Builder for hand-made capability profiles.
#[derive(Debug)]
pub struct CapabilityProfileBuilder {
    inner: CapabilityProfile,
}

impl Default for CapabilityProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CapabilityProfileBuilder {
    /// Creates a builder with no color support and the default range.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: CapabilityProfile {
                supports_temperature: false,
                supports_xy: false,
                supports_hue: false,
                supports_enhanced_hue: false,
                temperature_range: (
                    reported_or(None, DEFAULT_MIN_MIRED),
                    reported_or(None, DEFAULT_MAX_MIRED),
                ),
            },
        }
    }

    /// Enables color temperature support.
    #[must_use]
    pub fn with_temperature(mut self) -> Self {
        self.inner.supports_temperature = true;
        self
    }

    /// Enables xy support.
    #[must_use]
    pub fn with_xy(mut self) -> Self {
        self.inner.supports_xy = true;
        self
    }

    /// Enables hue/saturation support.
    #[must_use]
    pub fn with_hue(mut self) -> Self {
        self.inner.supports_hue = true;
        self
    }

    /// Enables enhanced hue support (implies hue/saturation).
    #[must_use]
    pub fn with_enhanced_hue(mut self) -> Self {
        self.inner.supports_hue = true;
        self.inner.supports_enhanced_hue = true;
        self
    }

    /// Sets the temperature range.
    #[must_use]
    pub fn temperature_range(mut self, min: Mired, max: Mired) -> Self {
        self.inner.temperature_range = (min, max);
        self
    }

    /// Builds the profile.
    #[must_use]
    pub fn build(self) -> CapabilityProfile {
        self.inner
    }
}

/// A capability advertised to the hosting environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Brightness can be set.
    Dimmable,
    /// White color temperature can be set.
    ColorTemperature,
    /// Arbitrary colors can be set.
    ColorFull,
}

impl Capability {
    /// Returns the advertised name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dimmable => "dimmable",
            Self::ColorTemperature => "color:temperature",
            Self::ColorFull => "color:full",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of a light, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    capabilities: Vec<Capability>,
}

impl Metadata {
    /// Device types every light advertises.
    pub const TYPES: &'static [&'static str] = &["light"];

    /// Builds the advertisement for a light.
    #[must_use]
    pub fn new(dimmable: bool, profile: &CapabilityProfile) -> Self {
        let mut capabilities = Vec::with_capacity(3);
        if dimmable {
            capabilities.push(Capability::Dimmable);
        }
        if profile.has_color() {
            if profile.supports_temperature() {
                capabilities.push(Capability::ColorTemperature);
            }
            if profile.has_full_color() {
                capabilities.push(Capability::ColorFull);
            }
        }
        Self { capabilities }
    }

    /// Returns the advertised device types.
    #[must_use]
    pub fn types(&self) -> &'static [&'static str] {
        Self::TYPES
    }

    /// Returns the advertised capabilities.
    #[must_use]
    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    /// Returns `true` if `capability` is advertised.
    #[must_use]
    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}

/// The shape of a light, decided once when it is adopted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightKind {
    /// On/off only.
    Basic,
    /// On/off and brightness.
    Dimmable,
    /// On/off and color.
    Color,
    /// On/off, brightness and color.
    DimmableColor,
}

impl LightKind {
    /// Picks the variant for a light.
    #[must_use]
    pub const fn new(dimmable: bool, profile: &CapabilityProfile) -> Self {
        match (dimmable, profile.has_color()) {
            (false, false) => Self::Basic,
            (true, false) => Self::Dimmable,
            (false, true) => Self::Color,
            (true, true) => Self::DimmableColor,
        }
    }

    /// Returns `true` if brightness can be controlled.
    #[must_use]
    pub const fn is_dimmable(&self) -> bool {
        matches!(self, Self::Dimmable | Self::DimmableColor)
    }

    /// Returns `true` if color can be controlled.
    #[must_use]
    pub const fn has_color(&self) -> bool {
        matches!(self, Self::Color | Self::DimmableColor)
    }
}
