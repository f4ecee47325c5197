// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-light configuration.

use std::time::Duration;

/// Transition used when a command does not name one (matches the Hue API).
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(400);

/// Default number of events buffered per broadcast receiver.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Configuration for a [`Light`](crate::Light).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use zigbee_light::LightConfig;
///
/// let config = LightConfig::default()
///     .with_default_transition(Duration::from_secs(1))
///     .with_event_capacity(64);
///
/// assert_eq!(config.default_transition, Duration::from_secs(1));
/// assert_eq!(config.event_capacity, 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightConfig {
    /// Transition applied to brightness and color commands without one.
    pub default_transition: Duration,
    /// Events buffered per [`subscribe`](crate::Light::subscribe) receiver.
    pub event_capacity: usize,
}

impl LightConfig {
    /// Sets the default transition.
    #[must_use]
    pub fn with_default_transition(mut self, transition: Duration) -> Self {
        self.default_transition = transition;
        self
    }

    /// Sets the broadcast buffer size.
    #[must_use]
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    /// Returns `transition`, or the default when `None`.
    #[must_use]
    pub fn transition_or_default(&self, transition: Option<Duration>) -> Duration {
        transition.unwrap_or(self.default_transition)
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            default_transition: DEFAULT_TRANSITION,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}
