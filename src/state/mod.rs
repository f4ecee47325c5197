// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light state tracking.
//!
//! [`LightState`] is the last known state of a light. [`StateChange`] is a
//! single confirmed change, either from a successful command or from an
//! attribute report. [`StateStore`] serializes updates and tells the caller
//! which [`Facet`]s actually changed.
//!
//! # Examples
//!
//! ```
//! use zigbee_light::state::{Facet, LightState, StateChange, StateStore};
//!
//! let store = StateStore::new(LightState::default());
//!
//! let update = store.apply(|state| {
//!     StateChange::Power(true).apply_to(state);
//! });
//! assert!(update.changed().contains(Facet::Power));
//! assert!(update.changed().contains(Facet::State));
//!
//! // Applying the same change again changes nothing
//! let update = store.apply(|state| {
//!     StateChange::Power(true).apply_to(state);
//! });
//! assert!(update.changed().is_empty());
//! ```

mod facet;
mod light_state;
mod state_change;
mod store;

pub use facet::{Facet, Facets};
pub use light_state::LightState;
pub use state_change::StateChange;
pub use store::{StateStore, StateUpdate};
