// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Confirmed changes to a light's state.
//!
//! A [`StateChange`] is produced either by a command the actuator accepted
//! or by an attribute report, and is applied to a [`LightState`] only once
//! it is known to hold on the device.

use crate::types::{Brightness, Color};

use super::LightState;

/// A single confirmed change to a light's state.
///
/// # Examples
///
/// ```
/// use zigbee_light::state::{LightState, StateChange};
/// use zigbee_light::types::Brightness;
///
/// let mut state = LightState::default();
///
/// // Apply returns true if the state actually changed
/// assert!(StateChange::Brightness(Brightness::MAX).apply_to(&mut state));
/// assert!(!StateChange::Brightness(Brightness::MAX).apply_to(&mut state));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StateChange {
    /// The light was switched on or off.
    Power(bool),
    /// The brightness changed.
    Brightness(Brightness),
    /// The color changed.
    Color(Color),
}

impl StateChange {
    /// Applies this change to `state`.
    ///
    /// Returns `true` if the state was modified.
    pub fn apply_to(&self, state: &mut LightState) -> bool {
        match *self {
            Self::Power(on) => {
                if state.power() == on {
                    return false;
                }
                state.set_power(on);
            }
            Self::Brightness(brightness) => {
                if state.brightness() == Some(brightness) {
                    return false;
                }
                state.set_brightness(brightness);
            }
            Self::Color(color) => {
                if state.color() == Some(color) {
                    return false;
                }
                state.set_color(color);
            }
        }
        true
    }

    /// Returns the color carried by a color change.
    #[must_use]
    pub const fn color(&self) -> Option<Color> {
        match self {
            Self::Color(color) => Some(*color),
            _ => None,
        }
    }

    /// Returns the brightness carried by a brightness change.
    #[must_use]
    pub const fn brightness(&self) -> Option<Brightness> {
        match self {
            Self::Brightness(brightness) => Some(*brightness),
            _ => None,
        }
    }
}
