// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `zigbee_light` - Capability-aware control of Zigbee lights.
//!
//! This library models a single Zigbee light endpoint: it works out what
//! the hardware can render, turns on/off, brightness and color requests into
//! the cluster commands the light understands, and keeps a canonical state
//! that emits change events only when something actually changed.
//!
//! The radio is not part of this crate. Commands are delivered through an
//! [`Actuator`](protocol::Actuator) you provide, and attribute reports are
//! fed in as [`AttributeReport`](telemetry::AttributeReport)s.
//!
//! # Supported Features
//!
//! - **Power control**: `genOnOff` on/off
//! - **Dimming**: absolute and relative brightness via `genLevelCtrl`
//! - **Color**: temperature, CIE xy and (enhanced) hue/saturation via
//!   `lightingColorCtrl`, converting between them as the light requires
//! - **Events**: synchronous callbacks and a broadcast channel
//!
//! # Quick Start
//!
//! ```ignore
//! use zigbee_light::discovery::DeviceDescription;
//! use zigbee_light::subscription::Subscribable;
//! use zigbee_light::{Color, Light, LightConfig};
//!
//! # async fn example(actuator: impl zigbee_light::protocol::Actuator, json: &str)
//! #     -> Result<(), Box<dyn std::error::Error>> {
//! let description: DeviceDescription = serde_json::from_str(json)?;
//! let endpoint = description.lights().next().ok_or("no light")?;
//!
//! let light = Light::adopt(actuator, endpoint, LightConfig::default())?;
//!
//! light.on_color_changed(|color| println!("color: {color:?}"));
//!
//! light.turn_on().await?;
//! light.set_brightness(75, None).await?;
//!
//! // Sent as xy, hue/saturation or temperature depending on the bulb
//! light.set_color(Color::kelvin(2_700.0)?, None).await?;
//! # Ok(())
//! # }
//! ```

pub mod capabilities;
pub mod command;
pub mod config;
mod device;
pub mod discovery;
pub mod error;
pub mod event;
pub mod protocol;
pub mod state;
pub mod subscription;
pub mod telemetry;
pub mod types;
pub mod units;

pub use capabilities::{
    Capability, CapabilityProfile, CapabilityProfileBuilder, ColorAttributes, ColorCapabilities,
    LightKind, Metadata,
};
pub use config::LightConfig;
pub use device::{ControllerPhase, Light};
pub use error::{ActuationError, Error, Result, ValueError};
pub use event::LightEvent;
pub use protocol::{Actuator, Cluster, EndpointId};
pub use state::LightState;
pub use subscription::{Subscribable, SubscriptionId};
pub use telemetry::AttributeReport;
pub use types::{Brightness, BrightnessChange, Chromaticity, Color, HueSaturation, Mired};
