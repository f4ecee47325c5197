// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The boundary between light control and the Zigbee stack.
//!
//! The library never talks to a radio itself. Commands are handed to an
//! [`Actuator`], which delivers them and reports whether the device accepted
//! them. Retrying and timeouts belong to the actuator.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::ActuationError;

/// Command parameters by protocol name, already scaled to wire units.
pub type Parameters = BTreeMap<&'static str, u32>;

/// Address of an endpoint on a Zigbee device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct EndpointId(u8);

impl EndpointId {
    /// Creates an endpoint ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Returns the raw endpoint number.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for EndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zigbee clusters used for light control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cluster {
    /// On/off switching (`genOnOff`).
    OnOff,
    /// Level control (`genLevelCtrl`).
    LevelControl,
    /// Color control (`lightingColorCtrl`).
    ColorControl,
}

impl Cluster {
    /// Returns the cluster name used by the Zigbee stack.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OnOff => "genOnOff",
            Self::LevelControl => "genLevelCtrl",
            Self::ColorControl => "lightingColorCtrl",
        }
    }

    /// Looks a cluster up by name; unknown clusters give `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "genOnOff" => Some(Self::OnOff),
            "genLevelCtrl" => Some(Self::LevelControl),
            "lightingColorCtrl" => Some(Self::ColorControl),
            _ => None,
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivers cluster commands to a device.
#[allow(async_fn_in_trait)]
pub trait Actuator {
    /// Sends `command` on `cluster` of `endpoint` and waits for the outcome.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The target endpoint
    /// * `cluster` - The cluster the command belongs to
    /// * `command` - The command name, e.g. `"moveToLevel"`
    /// * `parameters` - Scaled command parameters, e.g. `level`, `transtime`
    ///
    /// # Errors
    ///
    /// Returns `ActuationError` if the command was rejected or could not be
    /// delivered.
    async fn invoke(
        &self,
        endpoint: EndpointId,
        cluster: Cluster,
        command: &str,
        parameters: &Parameters,
    ) -> Result<(), ActuationError>;
}

impl<A: Actuator> Actuator for Arc<A> {
    async fn invoke(
        &self,
        endpoint: EndpointId,
        cluster: Cluster,
        command: &str,
        parameters: &Parameters,
    ) -> Result<(), ActuationError> {
        (**self).invoke(endpoint, cluster, command, parameters).await
    }
}
