// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light event types.

use serde::Serialize;

use crate::state::{Facet, LightState, StateUpdate};
use crate::types::{Brightness, Color};

/// A change notification for one facet of a light's state.
///
/// Brightness and color events carry `None` when the value became unknown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "value")]
pub enum LightEvent {
    /// The state as a whole changed; carries the new snapshot.
    #[serde(rename = "state")]
    State(LightState),
    /// The light was switched on or off.
    #[serde(rename = "power")]
    Power(bool),
    /// The brightness changed.
    #[serde(rename = "light:brightness")]
    Brightness(Option<Brightness>),
    /// The color changed.
    #[serde(rename = "light:color")]
    Color(Option<Color>),
}

impl LightEvent {
    /// Returns the facet this event reports on.
    #[must_use]
    pub const fn facet(&self) -> Facet {
        match self {
            Self::State(_) => Facet::State,
            Self::Power(_) => Facet::Power,
            Self::Brightness(_) => Facet::Brightness,
            Self::Color(_) => Facet::Color,
        }
    }

    /// Returns the event name, e.g. `"light:brightness"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.facet().event_name()
    }

    /// Builds the events for an update, `state` first.
    ///
    /// An unchanged update yields no events.
    #[must_use]
    pub fn from_update(update: &StateUpdate) -> Vec<Self> {
        let state = update.state();
        update
            .changed()
            .iter()
            .map(|facet| match facet {
                Facet::State => Self::State(state.clone()),
                Facet::Power => Self::Power(state.power()),
                Facet::Brightness => Self::Brightness(state.brightness()),
                Facet::Color => Self::Color(state.color()),
            })
            .collect()
    }
}
