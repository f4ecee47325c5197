// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Last known state of a light.

use serde::Serialize;

use crate::types::{Brightness, Color};

/// Last known state of a light.
///
/// `brightness` is absent on lights without level control and `color` is
/// absent until a color has been confirmed.
///
/// # Examples
///
/// ```
/// use zigbee_light::state::LightState;
/// use zigbee_light::types::Brightness;
///
/// let mut state = LightState::default();
/// assert!(!state.power());
///
/// state.set_power(true);
/// state.set_brightness(Brightness::new(40).unwrap());
///
/// assert!(state.power());
/// assert_eq!(state.brightness().map(|b| b.value()), Some(40));
/// assert!(state.color().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LightState {
    power: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    brightness: Option<Brightness>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<Color>,
}

impl LightState {
    /// Creates a state with the given power and no brightness or color.
    #[must_use]
    pub fn new(power: bool) -> Self {
        Self {
            power,
            ..Self::default()
        }
    }

    /// Sets the initial brightness.
    #[must_use]
    pub fn with_brightness(mut self, brightness: Brightness) -> Self {
        self.brightness = Some(brightness);
        self
    }

    /// Sets the initial color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Returns whether the light is on.
    #[must_use]
    pub const fn power(&self) -> bool {
        self.power
    }

    /// Returns the brightness, if the light is dimmable.
    #[must_use]
    pub const fn brightness(&self) -> Option<Brightness> {
        self.brightness
    }

    /// Returns the last confirmed color.
    #[must_use]
    pub const fn color(&self) -> Option<Color> {
        self.color
    }

    /// Sets the power state.
    pub fn set_power(&mut self, on: bool) {
        self.power = on;
    }

    /// Sets the brightness.
    pub fn set_brightness(&mut self, brightness: Brightness) {
        self.brightness = Some(brightness);
    }

    /// Forgets the brightness.
    pub fn clear_brightness(&mut self) {
        self.brightness = None;
    }

    /// Sets the last confirmed color.
    pub fn set_color(&mut self, color: Color) {
        self.color = Some(color);
    }

    /// Forgets the color.
    pub fn clear_color(&mut self) {
        self.color = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mired;

    #[test]
    fn default_is_off_and_empty() {
        let state = LightState::default();
        assert!(!state.power());
        assert!(state.brightness().is_none());
        assert!(state.color().is_none());
    }

    #[test]
    fn serializes_only_known_fields() {
        let state = LightState::new(true);
        assert_eq!(serde_json::to_string(&state).unwrap(), r#"{"power":true}"#);

        let state = state
            .with_brightness(Brightness::new(60).unwrap())
            .with_color(Mired::new(370).unwrap().into());
        assert_eq!(
            serde_json::to_string(&state).unwrap(),
            r#"{"power":true,"brightness":60,"color":{"temperature":370}}"#
        );
    }

    #[test]
    fn clearing_removes_values() {
        let mut state = LightState::new(false).with_brightness(Brightness::MAX);
        state.clear_brightness();
        state.clear_color();
        assert_eq!(state, LightState::new(false));
    }
}
