// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Broadcast channel for light events.

use tokio::sync::broadcast;

use super::LightEvent;
use crate::config::DEFAULT_EVENT_CAPACITY;

/// Broadcasts [`LightEvent`]s to any number of async receivers.
///
/// Receivers that fall more than the channel capacity behind lose the
/// oldest events and get `RecvError::Lagged` on their next receive.
/// Publishing never blocks and never fails.
///
/// # Examples
///
/// ```
/// use zigbee_light::event::{EventBus, LightEvent};
///
/// let bus = EventBus::with_capacity(16);
/// let mut first = bus.subscribe();
/// let mut second = bus.subscribe();
///
/// assert_eq!(bus.publish(LightEvent::Power(true)), 2);
/// assert_eq!(first.try_recv().unwrap(), LightEvent::Power(true));
/// assert_eq!(second.try_recv().unwrap(), LightEvent::Power(true));
/// ```
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<LightEvent>,
}

impl EventBus {
    /// Creates a bus with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }

    /// Creates a bus buffering up to `capacity` events per receiver.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Returns a receiver for events published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<LightEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of live receivers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Publishes an event and returns how many receivers got it.
    ///
    /// Without receivers the event is dropped and 0 is returned.
    pub fn publish(&self, event: LightEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
