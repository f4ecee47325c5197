// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Builders for power, level and color commands.

use std::time::Duration;

use crate::protocol::{Cluster, Parameters};
use crate::state::StateChange;
use crate::types::{Brightness, Chromaticity, Color, HueSaturation, Mired};
use crate::units;

use super::ActuationPlan;

/// Name of the transition time parameter.
pub(super) const TRANSITION: &str = "transtime";

/// Full scale of a hue or saturation byte.
const BYTE_SCALE: f64 = 255.0;

/// Full scale of a 16-bit hue or chromaticity coordinate.
const WORD_SCALE: f64 = 65_536.0;

/// Scales `value` of `range` onto `full_scale`, rounding down.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale(value: f64, range: f64, full_scale: f64) -> u32 {
    (value / range * full_scale).floor().max(0.0) as u32
}

fn with_transition(transition: Duration, parameters: &[(&'static str, u32)]) -> Parameters {
    let mut map: Parameters = parameters.iter().copied().collect();
    map.insert(TRANSITION, u32::from(units::to_protocol_ticks(transition)));
    map
}

impl ActuationPlan {
    /// Switches the light on or off.
    ///
    /// Power commands carry no parameters.
    #[must_use]
    pub fn power(on: bool) -> Self {
        let command = if on { "on" } else { "off" };
        Self::new(
            Cluster::OnOff,
            command,
            Parameters::new(),
            StateChange::Power(on),
        )
    }

    /// Moves the level to `brightness` over `transition`.
    #[must_use]
    pub fn move_to_level(brightness: Brightness, transition: Duration) -> Self {
        Self::new(
            Cluster::LevelControl,
            "moveToLevel",
            with_transition(transition, &[("level", u32::from(brightness.to_level()))]),
            StateChange::Brightness(brightness),
        )
    }

    /// Moves the color temperature to `mired` over `transition`.
    #[must_use]
    pub fn move_to_color_temp(mired: Mired, transition: Duration) -> Self {
        Self::new(
            Cluster::ColorControl,
            "moveToColorTemp",
            with_transition(transition, &[("colortemp", u32::from(mired.value()))]),
            StateChange::Color(Color::Temperature(mired)),
        )
    }

    /// Moves the color to an xy chromaticity over `transition`.
    #[must_use]
    pub fn move_to_color(xy: Chromaticity, transition: Duration) -> Self {
        Self::new(
            Cluster::ColorControl,
            "moveToColor",
            with_transition(
                transition,
                &[
                    ("colorx", scale(xy.x(), 1.0, WORD_SCALE)),
                    ("colory", scale(xy.y(), 1.0, WORD_SCALE)),
                ],
            ),
            StateChange::Color(Color::Xy(xy)),
        )
    }

    /// Moves hue and saturation over `transition`.
    ///
    /// Uses the enhanced (16-bit hue) command when `hs` is flagged enhanced.
    #[must_use]
    pub fn move_to_hue_and_saturation(hs: HueSaturation, transition: Duration) -> Self {
        let saturation = scale(hs.saturation(), 100.0, BYTE_SCALE);
        let (command, hue) = if hs.is_enhanced() {
            (
                "enhancedMoveToHueAndSaturation",
                ("enhancehue", scale(hs.hue(), 360.0, WORD_SCALE)),
            )
        } else {
            (
                "moveToHueAndSaturation",
                ("hue", scale(hs.hue(), 360.0, BYTE_SCALE)),
            )
        };

        Self::new(
            Cluster::ColorControl,
            command,
            with_transition(transition, &[hue, ("saturation", saturation)]),
            StateChange::Color(Color::HueSaturation(hs)),
        )
    }

    /// Builds the command that moves to `color` in its own representation.
    #[must_use]
    pub fn move_to(color: Color, transition: Duration) -> Self {
        match color {
            Color::Temperature(mired) => Self::move_to_color_temp(mired, transition),
            Color::Xy(xy) => Self::move_to_color(xy, transition),
            Color::HueSaturation(hs) => Self::move_to_hue_and_saturation(hs, transition),
        }
    }
}
