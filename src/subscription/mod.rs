// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback subscriptions for light state changes.
//!
//! - [`SubscriptionId`] - Returned on registration, used to unsubscribe
//! - [`CallbackRegistry`] - Stores callbacks and dispatches events
//! - [`Subscribable`] - Trait implemented by [`Light`](crate::Light)
//!
//! For async consumers, [`Light::subscribe`](crate::Light::subscribe) returns
//! a broadcast receiver carrying the same events.

mod callback;
mod subscribable;

pub use callback::{CallbackRegistry, SubscriptionId};
pub use subscribable::Subscribable;
