// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zigbee cluster commands for light control.
//!
//! An [`ActuationPlan`] is everything needed to change one aspect of a
//! light: the cluster command to send, its scaled parameters and the
//! [`StateChange`] that holds once the device accepts it.
//!
//! # Available Commands
//!
//! | Cluster | Command | Parameters |
//! |---------|---------|------------|
//! | `genOnOff` | `on`, `off` | none |
//! | `genLevelCtrl` | `moveToLevel` | `level`, `transtime` |
//! | `lightingColorCtrl` | `moveToColorTemp` | `colortemp`, `transtime` |
//! | `lightingColorCtrl` | `moveToColor` | `colorx`, `colory`, `transtime` |
//! | `lightingColorCtrl` | `moveToHueAndSaturation` | `hue`, `saturation`, `transtime` |
//! | `lightingColorCtrl` | `enhancedMoveToHueAndSaturation` | `enhancehue`, `saturation`, `transtime` |
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//!
//! use zigbee_light::command::ActuationPlan;
//! use zigbee_light::protocol::Cluster;
//! use zigbee_light::types::Brightness;
//!
//! let plan = ActuationPlan::move_to_level(Brightness::new(50).unwrap(), Duration::from_millis(400));
//!
//! assert_eq!(plan.cluster(), Cluster::LevelControl);
//! assert_eq!(plan.command(), "moveToLevel");
//! assert_eq!(plan.parameters()["level"], 127);
//! assert_eq!(plan.parameters()["transtime"], 4);
//! ```

mod light;
pub mod selector;

use std::fmt;

use crate::protocol::{Cluster, Parameters};
use crate::state::StateChange;

/// A cluster command together with its effect on light state.
#[derive(Debug, Clone, PartialEq)]
pub struct ActuationPlan {
    cluster: Cluster,
    command: &'static str,
    parameters: Parameters,
    effect: StateChange,
}

impl ActuationPlan {
    fn new(
        cluster: Cluster,
        command: &'static str,
        parameters: Parameters,
        effect: StateChange,
    ) -> Self {
        Self {
            cluster,
            command,
            parameters,
            effect,
        }
    }

    /// Returns the cluster the command belongs to.
    #[must_use]
    pub const fn cluster(&self) -> Cluster {
        self.cluster
    }

    /// Returns the command name.
    #[must_use]
    pub const fn command(&self) -> &'static str {
        self.command
    }

    /// Returns the scaled command parameters.
    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Returns the transition time in protocol ticks, if the command has one.
    #[must_use]
    pub fn transition_ticks(&self) -> Option<u16> {
        self.parameters
            .get(light::TRANSITION)
            .and_then(|ticks| u16::try_from(*ticks).ok())
    }

    /// Returns the state change that holds once the command succeeds.
    #[must_use]
    pub const fn effect(&self) -> &StateChange {
        &self.effect
    }
}

impl fmt::Display for ActuationPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.cluster, self.command)?;
        for (name, value) in &self.parameters {
            write!(f, " {name}={value}")?;
        }
        Ok(())
    }
}
