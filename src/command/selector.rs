// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color mode selection.
//!
//! Lights expose different subsets of temperature, xy and hue/saturation
//! control. [`select`] picks the representation the light understands and
//! builds the matching command.
//!
//! Priority:
//!
//! 1. A temperature request goes out as temperature if supported, else as
//!    xy, else as hue/saturation.
//! 2. Any other request goes out as xy if supported, else as
//!    hue/saturation, else as temperature.
//!
//! Temperatures are always clamped into the light's mired range.

use std::time::Duration;

use crate::capabilities::CapabilityProfile;
use crate::error::{Error, Result};
use crate::types::Color;

use super::ActuationPlan;

/// Picks the color representation for `profile` and builds its command.
///
/// The plan's effect carries the color as it will be stored, i.e. after
/// conversion and clamping.
///
/// # Errors
///
/// Returns `Error::MissingColor` if `requested` is `None`, and
/// `Error::Unsupported` if the light has no color capability.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use zigbee_light::capabilities::CapabilityProfile;
/// use zigbee_light::command::selector;
/// use zigbee_light::types::Color;
///
/// let profile = CapabilityProfile::builder().with_xy().with_hue().build();
/// let red = Color::hue_saturation(0.0, 100.0).unwrap();
///
/// // xy wins over hue/saturation
/// let plan = selector::select(Some(&red), &profile, Duration::from_millis(400)).unwrap();
/// assert_eq!(plan.command(), "moveToColor");
/// ```
pub fn select(
    requested: Option<&Color>,
    profile: &CapabilityProfile,
    transition: Duration,
) -> Result<ActuationPlan> {
    let requested = requested.ok_or(Error::MissingColor)?;
    let target = negotiate(requested, profile)?;

    tracing::trace!(
        requested = %requested,
        selected = %target,
        "Selected color representation"
    );

    Ok(ActuationPlan::move_to(target, transition))
}

/// Converts `requested` into the representation the light should receive.
fn negotiate(requested: &Color, profile: &CapabilityProfile) -> Result<Color> {
    if !profile.has_color() {
        return Err(Error::Unsupported);
    }

    let enhanced = profile.supports_enhanced_hue();

    if requested.is_temperature() {
        return Ok(if profile.supports_temperature() {
            clamp_temperature(*requested, profile)
        } else if profile.supports_xy() {
            requested.to_xy()
        } else {
            requested.to_hue_saturation(enhanced)
        });
    }

    if profile.supports_xy() {
        Ok(requested.to_xy())
    } else if profile.supports_hue() {
        Ok(requested.to_hue_saturation(enhanced))
    } else if profile.supports_temperature() {
        Ok(clamp_temperature(requested.to_temperature(), profile))
    } else {
        Err(Error::Unsupported)
    }
}

fn clamp_temperature(color: Color, profile: &CapabilityProfile) -> Color {
    match color {
        Color::Temperature(mired) => {
            let (min, max) = profile.temperature_range();
            Color::Temperature(mired.clamp_to(min, max))
        }
        other => other,
    }
}
