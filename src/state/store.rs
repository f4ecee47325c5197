// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serialized state updates with change detection.

use parking_lot::{ReentrantMutex, RwLock};

use super::{Facets, LightState};

/// Result of applying a mutation to a [`StateStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct StateUpdate {
    state: LightState,
    changed: Facets,
}

impl StateUpdate {
    /// Returns the state after the mutation.
    #[must_use]
    pub fn state(&self) -> &LightState {
        &self.state
    }

    /// Returns the facets that changed.
    #[must_use]
    pub const fn changed(&self) -> Facets {
        self.changed
    }

    /// Returns `true` if the mutation changed nothing.
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        self.changed.is_empty()
    }
}

/// Holds a light's state and applies mutations one at a time.
///
/// A mutation runs against a copy of the current state. The copy replaces
/// the stored state only if it differs, so readers never observe a half
/// applied update.
///
/// Updates and their notifications are serialized: an update on another
/// thread waits until the previous update's observers have returned. An
/// observer may itself apply an update on the same store; that update is
/// committed and notified before the outer notification continues.
#[derive(Debug, Default)]
pub struct StateStore {
    current: RwLock<LightState>,
    order: ReentrantMutex<()>,
}

impl StateStore {
    /// Creates a store holding `initial`.
    #[must_use]
    pub fn new(initial: LightState) -> Self {
        Self {
            current: RwLock::new(initial),
            order: ReentrantMutex::new(()),
        }
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> LightState {
        self.current.read().clone()
    }

    /// Applies `mutator` and reports which facets changed.
    pub fn apply<F>(&self, mutator: F) -> StateUpdate
    where
        F: FnOnce(&mut LightState),
    {
        self.apply_and_notify(mutator, |_| {})
    }

    /// Applies `mutator` and, if anything changed, calls `notify` before
    /// updates from other threads may start.
    ///
    /// Observers therefore see updates in the order they were applied. The
    /// state lock is released before `notify` runs, so `notify` may read
    /// the store and apply further updates from the same thread.
    pub fn apply_and_notify<F, N>(&self, mutator: F, notify: N) -> StateUpdate
    where
        F: FnOnce(&mut LightState),
        N: FnOnce(&StateUpdate),
    {
        let _order = self.order.lock();

        let update = {
            let mut current = self.current.write();
            let mut next = current.clone();
            mutator(&mut next);
            let changed = Facets::between(&current, &next);
            if !changed.is_empty() {
                *current = next.clone();
            }
            StateUpdate {
                state: next,
                changed,
            }
        };

        if !update.is_unchanged() {
            notify(&update);
        }
        update
    }
}
