// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Unsolicited attribute reports from Zigbee devices.
//!
//! Devices push attribute changes on their own, e.g. when a wall switch
//! toggles a bulb. Only two attributes matter for light state:
//!
//! | Cluster | Attribute | Effect |
//! |---------|-----------|--------|
//! | `genOnOff` | `onOff` | power is on iff the value is 1 |
//! | `genLevelCtrl` | `currentLevel` | brightness = round(level / 255 * 100) |
//!
//! Everything else is ignored.
//!
//! # Examples
//!
//! ```
//! use zigbee_light::state::StateChange;
//! use zigbee_light::telemetry::AttributeReport;
//!
//! let report: AttributeReport = serde_json::from_str(
//!     r#"{"endpoint":11,"cluster":"genLevelCtrl","attribute":"currentLevel","newValue":128}"#,
//! ).unwrap();
//!
//! let change = report.to_state_change().unwrap();
//! assert_eq!(change.brightness().map(|b| b.value()), Some(50));
//! ```

use serde::Deserialize;

use crate::protocol::{Cluster, EndpointId};
use crate::state::StateChange;
use crate::types::Brightness;

const ON_OFF: &str = "onOff";
const CURRENT_LEVEL: &str = "currentLevel";

/// An attribute value pushed by a device.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeReport {
    /// Endpoint the attribute belongs to.
    pub endpoint: EndpointId,
    /// Cluster name, e.g. `"genOnOff"`.
    pub cluster: String,
    /// Attribute name, e.g. `"onOff"`.
    pub attribute: String,
    /// The new attribute value as decoded by the transport.
    pub new_value: serde_json::Value,
}

impl AttributeReport {
    /// Creates a report.
    #[must_use]
    pub fn new(
        endpoint: EndpointId,
        cluster: impl Into<String>,
        attribute: impl Into<String>,
        new_value: impl Into<serde_json::Value>,
    ) -> Self {
        Self {
            endpoint,
            cluster: cluster.into(),
            attribute: attribute.into(),
            new_value: new_value.into(),
        }
    }

    /// Translates the report into a state change.
    ///
    /// Returns `None` for attributes that do not affect light state and for
    /// values of the wrong shape.
    #[must_use]
    pub fn to_state_change(&self) -> Option<StateChange> {
        match (Cluster::from_name(&self.cluster)?, self.attribute.as_str()) {
            (Cluster::OnOff, ON_OFF) => Some(StateChange::Power(self.new_value.as_u64() == Some(1))),
            (Cluster::LevelControl, CURRENT_LEVEL) => {
                let Some(level) = self.new_value.as_u64() else {
                    tracing::warn!(
                        endpoint = %self.endpoint,
                        value = %self.new_value,
                        "Ignoring non-numeric currentLevel"
                    );
                    return None;
                };
                let level = u8::try_from(level).unwrap_or(u8::MAX);
                Some(StateChange::Brightness(Brightness::from_level(level)))
            }
            _ => None,
        }
    }
}
