// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command lifecycle tracking.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Whether a light is waiting on the actuator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerPhase {
    /// No command is in flight.
    Idle,
    /// At least one command is waiting for the actuator.
    Actuating,
}

/// Counts commands in flight; one guard per command.
#[derive(Debug, Default)]
pub(super) struct InFlight(AtomicUsize);

impl InFlight {
    pub(super) fn enter(&self) -> InFlightGuard<'_> {
        self.0.fetch_add(1, Ordering::SeqCst);
        InFlightGuard(&self.0)
    }

    pub(super) fn phase(&self) -> ControllerPhase {
        if self.0.load(Ordering::SeqCst) == 0 {
            ControllerPhase::Idle
        } else {
            ControllerPhase::Actuating
        }
    }
}

/// Leaves the actuating phase when dropped, including on cancellation.
pub(super) struct InFlightGuard<'a>(&'a AtomicUsize);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_follows_guards() {
        let in_flight = InFlight::default();
        assert_eq!(in_flight.phase(), ControllerPhase::Idle);

        let first = in_flight.enter();
        let second = in_flight.enter();
        assert_eq!(in_flight.phase(), ControllerPhase::Actuating);

        drop(first);
        assert_eq!(in_flight.phase(), ControllerPhase::Actuating);
        drop(second);
        assert_eq!(in_flight.phase(), ControllerPhase::Idle);
    }
}
