// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Endpoint descriptions produced by Zigbee device inspection.
//!
//! Inspecting a device yields one [`EndpointProfile`] per endpoint: its
//! device type code and the clusters it implements, with the attribute
//! values read at inspection time. An endpoint is a light when its device
//! type is one of [`LIGHT_DEVICE_TYPES`].
//!
//! # Examples
//!
//! ```
//! use zigbee_light::discovery::DeviceDescription;
//!
//! let json = r#"{
//!     "endpoints": [
//!         { "id": 1, "deviceId": 81, "clusters": {} },
//!         {
//!             "id": 11,
//!             "deviceId": 258,
//!             "clusters": {
//!                 "genOnOff": { "attributes": { "onOff": 1 } },
//!                 "genLevelCtrl": { "attributes": { "currentLevel": 254 } },
//!                 "lightingColorCtrl": {
//!                     "colorCapabilities": 31,
//!                     "attributes": { "numPrimaries": 3, "colorTempPhysicalMin": 153 }
//!                 }
//!             }
//!         }
//!     ]
//! }"#;
//!
//! let device: DeviceDescription = serde_json::from_str(json).unwrap();
//! let lights: Vec<_> = device.lights().collect();
//!
//! assert_eq!(lights.len(), 1);
//! assert_eq!(lights[0].id.value(), 11);
//! assert!(lights[0].is_dimmable());
//! assert!(lights[0].capability_profile().supports_xy());
//! ```

use serde::Deserialize;

use crate::capabilities::{CapabilityProfile, ColorAttributes, ColorCapabilities};
use crate::protocol::EndpointId;
use crate::state::LightState;
use crate::types::Brightness;

/// Device type codes of light endpoints.
///
/// 256 is an on/off light, 257 a dimmable light, 258 a color dimmable light.
pub const LIGHT_DEVICE_TYPES: [u16; 3] = [256, 257, 258];

/// Returns `true` if `device_id` is a light device type.
#[must_use]
pub fn is_light_device_type(device_id: u16) -> bool {
    LIGHT_DEVICE_TYPES.contains(&device_id)
}

/// Everything inspection found on a device.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeviceDescription {
    /// The device's endpoints.
    #[serde(default)]
    pub endpoints: Vec<EndpointProfile>,
}

impl DeviceDescription {
    /// Iterates over the endpoints that are lights.
    pub fn lights(&self) -> impl Iterator<Item = &EndpointProfile> {
        self.endpoints.iter().filter(|endpoint| endpoint.is_light())
    }
}

/// A single endpoint as seen at inspection time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointProfile {
    /// The endpoint address.
    pub id: EndpointId,
    /// The Zigbee device type code.
    pub device_id: u16,
    /// The clusters implemented by the endpoint.
    #[serde(default)]
    pub clusters: Clusters,
}

impl EndpointProfile {
    /// Returns `true` if the device type is a light.
    #[must_use]
    pub fn is_light(&self) -> bool {
        is_light_device_type(self.device_id)
    }

    /// Returns `true` if the endpoint has level control.
    #[must_use]
    pub fn is_dimmable(&self) -> bool {
        self.clusters.gen_level_ctrl.is_some()
    }

    /// Derives what the endpoint can do with color.
    ///
    /// Endpoints without a color control cluster get an empty profile.
    #[must_use]
    pub fn capability_profile(&self) -> CapabilityProfile {
        self.clusters
            .lighting_color_ctrl
            .as_ref()
            .map_or_else(CapabilityProfile::none, |color| {
                CapabilityProfile::derive(color.color_capabilities, &color.attributes)
            })
    }

    /// Builds the state observed at inspection time.
    ///
    /// Power is on iff `onOff` was 1. Dimmable endpoints start with their
    /// `currentLevel` rescaled to a percentage, or 0 if it was not read.
    /// Color is unknown until one is set or confirmed.
    #[must_use]
    pub fn initial_state(&self) -> LightState {
        let power = self
            .clusters
            .gen_on_off
            .as_ref()
            .is_some_and(|cluster| cluster.attributes.is_on());

        let state = LightState::new(power);
        match &self.clusters.gen_level_ctrl {
            Some(level) => state.with_brightness(Brightness::from_level(
                level.attributes.current_level.unwrap_or(0),
            )),
            None => state,
        }
    }
}

/// The clusters relevant to light control.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clusters {
    /// On/off cluster.
    pub gen_on_off: Option<OnOffCluster>,
    /// Level control cluster.
    pub gen_level_ctrl: Option<LevelCluster>,
    /// Color control cluster.
    pub lighting_color_ctrl: Option<ColorCluster>,
}

/// `genOnOff` as read at inspection time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OnOffCluster {
    /// Attribute values.
    #[serde(default)]
    pub attributes: OnOffAttributes,
}

/// `genOnOff` attributes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnOffAttributes {
    /// The raw attribute; any shape the device reported is accepted.
    pub on_off: Option<serde_json::Value>,
}

impl OnOffAttributes {
    /// Returns `true` iff `onOff` is the number 1.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.on_off.as_ref().and_then(serde_json::Value::as_u64) == Some(1)
    }
}

/// `genLevelCtrl` as read at inspection time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LevelCluster {
    /// Attribute values.
    #[serde(default)]
    pub attributes: LevelAttributes,
}

/// `genLevelCtrl` attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelAttributes {
    /// Current level, 0-255.
    pub current_level: Option<u8>,
}

/// `lightingColorCtrl` as read at inspection time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorCluster {
    /// The advertised capability bitset.
    #[serde(default)]
    pub color_capabilities: ColorCapabilities,
    /// Attribute values.
    #[serde(default)]
    pub attributes: ColorAttributes,
}
