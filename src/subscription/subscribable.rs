// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Trait for types that deliver light events to callbacks.

use crate::event::LightEvent;
use crate::state::LightState;
use crate::subscription::SubscriptionId;
use crate::types::{Brightness, Color};

/// Callback registration for light events.
///
/// Callbacks are invoked synchronously after each confirmed state
/// transition, once per changed facet, and only when that facet actually
/// changed.
///
/// # Examples
///
/// ```ignore
/// use zigbee_light::subscription::Subscribable;
///
/// let id = light.on_brightness_changed(|brightness| {
///     println!("Brightness is now {brightness:?}");
/// });
///
/// light.unsubscribe(id);
/// ```
pub trait Subscribable {
    /// Subscribes to full-state snapshots (`state` events).
    fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&LightState) + Send + Sync + 'static;

    /// Subscribes to `power` events.
    fn on_power_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(bool) + Send + Sync + 'static;

    /// Subscribes to `light:brightness` events.
    fn on_brightness_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Option<Brightness>) + Send + Sync + 'static;

    /// Subscribes to `light:color` events.
    fn on_color_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Option<Color>) + Send + Sync + 'static;

    /// Subscribes to every event.
    fn on_event<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&LightEvent) + Send + Sync + 'static;

    /// Removes a subscription.
    ///
    /// Returns `true` if the subscription was found and removed.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
