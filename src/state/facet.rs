// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Named parts of a light's state that can change independently.

use std::fmt;

use super::LightState;

/// A named part of a light's state.
///
/// [`Facet::State`] stands for the state as a whole and accompanies every
/// other facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    /// The state as a whole.
    State,
    /// Power on/off.
    Power,
    /// Brightness.
    Brightness,
    /// Color.
    Color,
}

impl Facet {
    /// All facets, in notification order.
    pub const ALL: [Self; 4] = [Self::State, Self::Power, Self::Brightness, Self::Color];

    /// Returns the event name for this facet.
    #[must_use]
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::State => "state",
            Self::Power => "power",
            Self::Brightness => "light:brightness",
            Self::Color => "light:color",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::State => 1 << 0,
            Self::Power => 1 << 1,
            Self::Brightness => 1 << 2,
            Self::Color => 1 << 3,
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_name())
    }
}

/// A set of changed facets.
///
/// # Examples
///
/// ```
/// use zigbee_light::state::{Facet, Facets, LightState};
///
/// let before = LightState::new(false);
/// let after = LightState::new(true);
///
/// let changed = Facets::between(&before, &after);
/// assert_eq!(changed.iter().collect::<Vec<_>>(), [Facet::State, Facet::Power]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Facets(u8);

impl Facets {
    /// The empty set.
    pub const NONE: Self = Self(0);

    /// Computes which facets differ between two states.
    ///
    /// [`Facet::State`] is included whenever anything else is.
    #[must_use]
    pub fn between(old: &LightState, new: &LightState) -> Self {
        let mut facets = Self::NONE;
        if old.power() != new.power() {
            facets.insert(Facet::Power);
        }
        if old.brightness() != new.brightness() {
            facets.insert(Facet::Brightness);
        }
        if old.color() != new.color() {
            facets.insert(Facet::Color);
        }
        if !facets.is_empty() {
            facets.insert(Facet::State);
        }
        facets
    }

    fn insert(&mut self, facet: Facet) {
        self.0 |= facet.bit();
    }

    /// Returns `true` if `facet` is in the set.
    #[must_use]
    pub const fn contains(&self, facet: Facet) -> bool {
        self.0 & facet.bit() != 0
    }

    /// Returns `true` if nothing changed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns the number of facets in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates over the facets in notification order.
    pub fn iter(&self) -> impl Iterator<Item = Facet> + '_ {
        Facet::ALL.into_iter().filter(|facet| self.contains(*facet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Brightness, Color};

    #[test]
    fn identical_states_change_nothing() {
        let state = LightState::new(true).with_brightness(Brightness::MAX);
        let facets = Facets::between(&state, &state.clone());
        assert!(facets.is_empty());
        assert_eq!(facets.len(), 0);
        assert!(!facets.contains(Facet::State));
    }

    #[test]
    fn every_facet_brings_state_along() {
        let before = LightState::new(false);
        let after = LightState::new(true)
            .with_brightness(Brightness::new(10).unwrap())
            .with_color(Color::mired(300).unwrap());

        let facets = Facets::between(&before, &after);
        assert_eq!(facets.len(), 4);
        assert_eq!(facets.iter().collect::<Vec<_>>(), Facet::ALL);
    }

    #[test]
    fn presence_change_counts() {
        let before = LightState::new(false).with_brightness(Brightness::MIN);
        let mut after = before.clone();
        after.clear_brightness();

        let facets = Facets::between(&before, &after);
        assert!(facets.contains(Facet::Brightness));
        assert!(!facets.contains(Facet::Power));
    }

    #[test]
    fn event_names() {
        assert_eq!(Facet::State.event_name(), "state");
        assert_eq!(Facet::Power.to_string(), "power");
        assert_eq!(Facet::Brightness.event_name(), "light:brightness");
        assert_eq!(Facet::Color.event_name(), "light:color");
    }
}
