// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Events emitted when a light's state changes.
//!
//! Every confirmed state transition produces one [`LightEvent`] per changed
//! [`Facet`](crate::state::Facet). Events are delivered synchronously to
//! registered callbacks (see [`subscription`](crate::subscription)) and
//! broadcast on an [`EventBus`] for async consumers.
//!
//! # Examples
//!
//! ```
//! use zigbee_light::event::{EventBus, LightEvent};
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! bus.publish(LightEvent::Power(true));
//! assert_eq!(rx.try_recv().unwrap().name(), "power");
//! ```

mod event_bus;
mod light_event;

pub use event_bus::EventBus;
pub use light_event::LightEvent;
