// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `zigbee_light` library.
//!
//! Every failure is scoped to the single command that produced it. None of
//! them are retried here and none of them leave a partial state behind.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A color command was issued without a color.
    #[error("a color is required")]
    MissingColor,

    /// The light exposes no color mode usable for the request.
    #[error("light does not support any known color mode")]
    Unsupported,

    /// A brightness command was issued to a light without level control.
    #[error("light is not dimmable")]
    NotDimmable,

    /// The endpoint's device type is not one of the light device types.
    #[error("device type {device_id} is not a light")]
    NotALight {
        /// The device type code reported by the endpoint.
        device_id: u16,
    },

    /// The actuator rejected or failed to deliver the command.
    #[error("actuation failed: {0}")]
    Actuation(#[from] ActuationError),

    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// A chromaticity coordinate is outside [0, 1] or not finite.
    #[error("chromaticity coordinate {0} is out of range [0, 1]")]
    InvalidChromaticity(f64),

    /// A hue value is outside [0, 360] or not finite.
    #[error("hue value {0} is out of range [0, 360]")]
    InvalidHue(f64),

    /// A saturation value is outside [0, 100] or not finite.
    #[error("saturation value {0} is out of range [0, 100]")]
    InvalidSaturation(f64),
}

/// Failure reported by an [`Actuator`](crate::protocol::Actuator).
#[derive(Debug, Error)]
pub enum ActuationError {
    /// The device answered with a failure status.
    #[error("command rejected: {0}")]
    Rejected(String),

    /// The command was not acknowledged in time.
    #[error("command timed out after {0} ms")]
    Timeout(u64),

    /// The transport failed; the underlying cause is kept as the source.
    #[error("transport failure")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
