// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback storage and dispatch for light events.
//!
//! - [`SubscriptionId`] - Handle returned on registration, used to unsubscribe
//! - [`CallbackRegistry`] - Stores callbacks and dispatches [`LightEvent`]s

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::event::LightEvent;
use crate::state::LightState;
use crate::types::{Brightness, Color};

/// Identifies a registered callback.
///
/// IDs are unique for the lifetime of a registry and increase with
/// registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Returns the raw ID value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

type StateCallback = Arc<dyn Fn(&LightState) + Send + Sync>;
type PowerCallback = Arc<dyn Fn(bool) + Send + Sync>;
type BrightnessCallback = Arc<dyn Fn(Option<Brightness>) + Send + Sync>;
type ColorCallback = Arc<dyn Fn(Option<Color>) + Send + Sync>;
type EventCallback = Arc<dyn Fn(&LightEvent) + Send + Sync>;

#[derive(Clone)]
enum Listener {
    State(StateCallback),
    Power(PowerCallback),
    Brightness(BrightnessCallback),
    Color(ColorCallback),
    Any(EventCallback),
}

impl Listener {
    fn notify(&self, event: &LightEvent) {
        match (self, event) {
            (Self::Any(callback), _) => callback(event),
            (Self::State(callback), LightEvent::State(state)) => callback(state),
            (Self::Power(callback), LightEvent::Power(on)) => callback(*on),
            (Self::Brightness(callback), LightEvent::Brightness(brightness)) => {
                callback(*brightness);
            }
            (Self::Color(callback), LightEvent::Color(color)) => callback(*color),
            _ => {}
        }
    }
}

/// Registry of light event callbacks.
///
/// Callbacks run synchronously on the thread that confirmed the state
/// change, in registration order. They may register or unsubscribe other
/// callbacks, read the light's state, and apply reports to the same light
/// while being dispatched.
pub struct CallbackRegistry {
    next_id: AtomicU64,
    listeners: RwLock<BTreeMap<SubscriptionId, Listener>>,
}

impl CallbackRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            listeners: RwLock::new(BTreeMap::new()),
        }
    }

    fn register(&self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.write().insert(id, listener);
        id
    }

    /// Registers a callback receiving the full state after every change.
    pub fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&LightState) + Send + Sync + 'static,
    {
        self.register(Listener::State(Arc::new(callback)))
    }

    /// Registers a callback for power changes.
    pub fn on_power_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.register(Listener::Power(Arc::new(callback)))
    }

    /// Registers a callback for brightness changes.
    pub fn on_brightness_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Option<Brightness>) + Send + Sync + 'static,
    {
        self.register(Listener::Brightness(Arc::new(callback)))
    }

    /// Registers a callback for color changes.
    pub fn on_color_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Option<Color>) + Send + Sync + 'static,
    {
        self.register(Listener::Color(Arc::new(callback)))
    }

    /// Registers a callback receiving every event.
    pub fn on_event<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&LightEvent) + Send + Sync + 'static,
    {
        self.register(Listener::Any(Arc::new(callback)))
    }

    /// Removes a callback.
    ///
    /// Returns `true` if the subscription existed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.write().remove(&id).is_some()
    }

    /// Removes every callback.
    pub fn clear(&self) {
        self.listeners.write().clear();
    }

    /// Delivers `event` to every matching callback.
    pub fn dispatch(&self, event: &LightEvent) {
        // Snapshot so callbacks can touch the registry without deadlocking.
        let listeners: Vec<Listener> = self.listeners.read().values().cloned().collect();
        for listener in &listeners {
            listener.notify(event);
        }
    }

    /// Returns the number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.listeners.read().len()
    }

    /// Returns `true` if no callbacks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.read().is_empty()
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("callback_count", &self.callback_count())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicU32;

    use parking_lot::Mutex;

    use super::*;

    #[test]
    fn subscription_ids_increase() {
        let registry = CallbackRegistry::new();
        let first = registry.on_power_changed(|_| {});
        let second = registry.on_power_changed(|_| {});
        assert!(second > first);
        assert_eq!(first.to_string(), format!("Sub({})", first.value()));
    }

    #[test]
    fn power_callback_only_sees_power() {
        let registry = CallbackRegistry::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        registry.on_power_changed(move |on| sink.lock().push(on));

        registry.dispatch(&LightEvent::Power(true));
        registry.dispatch(&LightEvent::Brightness(Some(Brightness::MAX)));
        registry.dispatch(&LightEvent::Power(false));

        assert_eq!(*seen.lock(), vec![true, false]);
    }

    #[test]
    fn event_callback_sees_everything() {
        let registry = CallbackRegistry::new();
        let names = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&names);

        registry.on_event(move |event| sink.lock().push(event.name()));

        registry.dispatch(&LightEvent::State(LightState::new(true)));
        registry.dispatch(&LightEvent::Power(true));
        registry.dispatch(&LightEvent::Color(None));

        assert_eq!(*names.lock(), vec!["state", "power", "light:color"]);
    }

    #[test]
    fn callbacks_run_in_registration_order() {
        let registry = CallbackRegistry::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for tag in 0..3 {
            let order = Arc::clone(&order);
            registry.on_state_changed(move |_| order.lock().push(tag));
        }

        registry.dispatch(&LightEvent::State(LightState::default()));
        assert_eq!(*order.lock(), vec![0, 1, 2]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let registry = CallbackRegistry::new();
        let counter = Arc::new(AtomicU32::new(0));
        let count = Arc::clone(&counter);

        let id = registry.on_brightness_changed(move |_| {
            count.fetch_add(1, Ordering::SeqCst);
        });

        registry.dispatch(&LightEvent::Brightness(None));
        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
        registry.dispatch(&LightEvent::Brightness(None));

        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn callback_may_unsubscribe_during_dispatch() {
        let registry = Arc::new(CallbackRegistry::new());
        let handle = Arc::clone(&registry);
        let own_id = Arc::new(Mutex::new(None));
        let id_slot = Arc::clone(&own_id);

        let id = registry.on_color_changed(move |_| {
            if let Some(id) = *id_slot.lock() {
                handle.unsubscribe(id);
            }
        });
        *own_id.lock() = Some(id);

        registry.dispatch(&LightEvent::Color(None));
        assert!(registry.is_empty());
    }

    #[test]
    fn clear_removes_all() {
        let registry = CallbackRegistry::new();
        registry.on_power_changed(|_| {});
        registry.on_event(|_| {});
        assert_eq!(registry.callback_count(), 2);

        registry.clear();
        assert!(registry.is_empty());
    }
}
