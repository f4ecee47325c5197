// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light controller.
//!
//! A [`Light`] owns the state of one light endpoint. Commands are turned
//! into cluster commands, handed to the [`Actuator`] and, once accepted,
//! committed to state. Attribute reports go through the same state store,
//! so a report arriving while a command is in flight is never lost.
//!
//! # Examples
//!
//! ```ignore
//! use zigbee_light::{Light, LightConfig};
//! use zigbee_light::discovery::DeviceDescription;
//! use zigbee_light::subscription::Subscribable;
//!
//! let description: DeviceDescription = serde_json::from_str(&inspection)?;
//! let endpoint = description.lights().next().unwrap();
//!
//! let light = Light::adopt(actuator, endpoint, LightConfig::default())?;
//! light.on_brightness_changed(|b| println!("brightness: {b:?}"));
//!
//! light.turn_on().await?;
//! light.increase_brightness(20, None).await?;
//! ```

mod phase;

pub use phase::ControllerPhase;

use std::time::Duration;

use tokio::sync::{broadcast, mpsc};

use crate::capabilities::{CapabilityProfile, LightKind, Metadata};
use crate::command::{ActuationPlan, selector};
use crate::config::LightConfig;
use crate::discovery::{DeviceDescription, EndpointProfile};
use crate::error::{Error, Result};
use crate::event::{EventBus, LightEvent};
use crate::protocol::{Actuator, EndpointId};
use crate::state::{LightState, StateChange, StateStore, StateUpdate};
use crate::subscription::{CallbackRegistry, Subscribable, SubscriptionId};
use crate::telemetry::AttributeReport;
use crate::types::{Brightness, BrightnessChange, Color};

use phase::InFlight;

/// A Zigbee light endpoint.
///
/// What the light can do is fixed at adoption: see [`Light::kind`] and
/// [`Light::metadata`]. Commands a light cannot perform fail with
/// [`Error::NotDimmable`] or [`Error::Unsupported`] without reaching the
/// actuator.
#[derive(Debug)]
pub struct Light<A: Actuator> {
    actuator: A,
    endpoint: EndpointId,
    kind: LightKind,
    profile: CapabilityProfile,
    metadata: Metadata,
    config: LightConfig,
    store: StateStore,
    callbacks: CallbackRegistry,
    events: EventBus,
    in_flight: InFlight,
}

impl<A: Actuator> Light<A> {
    /// Adopts a discovered endpoint as a light.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotALight` if the endpoint's device type is not a
    /// light device type.
    pub fn adopt(actuator: A, endpoint: &EndpointProfile, config: LightConfig) -> Result<Self> {
        if !endpoint.is_light() {
            return Err(Error::NotALight {
                device_id: endpoint.device_id,
            });
        }

        let profile = endpoint.capability_profile();
        let dimmable = endpoint.is_dimmable();
        let kind = LightKind::new(dimmable, &profile);
        let metadata = Metadata::new(dimmable, &profile);
        let light = Self {
            actuator,
            endpoint: endpoint.id,
            kind,
            profile,
            metadata,
            events: EventBus::with_capacity(config.event_capacity),
            config,
            store: StateStore::new(endpoint.initial_state()),
            callbacks: CallbackRegistry::new(),
            in_flight: InFlight::default(),
        };

        tracing::debug!(
            endpoint = %light.endpoint,
            kind = ?light.kind,
            capabilities = ?light.metadata.capabilities(),
            "Adopted light"
        );

        Ok(light)
    }

    /// Returns the endpoint this light controls.
    #[must_use]
    pub const fn endpoint(&self) -> EndpointId {
        self.endpoint
    }

    /// Returns the light's variant.
    #[must_use]
    pub const fn kind(&self) -> LightKind {
        self.kind
    }

    /// Returns the color capabilities.
    #[must_use]
    pub const fn profile(&self) -> &CapabilityProfile {
        &self.profile
    }

    /// Returns the advertised types and capabilities.
    #[must_use]
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &LightConfig {
        &self.config
    }

    /// Returns the actuator.
    #[must_use]
    pub const fn actuator(&self) -> &A {
        &self.actuator
    }

    /// Returns whether commands are in flight.
    #[must_use]
    pub fn phase(&self) -> ControllerPhase {
        self.in_flight.phase()
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> LightState {
        self.store.snapshot()
    }

    /// Returns whether the light is on.
    #[must_use]
    pub fn power(&self) -> bool {
        self.store.snapshot().power()
    }

    /// Returns the brightness, or `None` for lights without level control.
    #[must_use]
    pub fn brightness(&self) -> Option<Brightness> {
        self.store.snapshot().brightness()
    }

    /// Returns the last confirmed color.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.store.snapshot().color()
    }

    /// Returns a receiver for every event emitted from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<LightEvent> {
        self.events.subscribe()
    }

    // =========================================================================
    // Power
    // =========================================================================

    /// Switches the light on or off.
    ///
    /// # Errors
    ///
    /// Returns `Error::Actuation` if the actuator fails; state is unchanged.
    pub async fn set_power(&self, on: bool) -> Result<bool> {
        self.execute(ActuationPlan::power(on)).await?;
        Ok(on)
    }

    /// Switches the light on.
    ///
    /// # Errors
    ///
    /// See [`Light::set_power`].
    pub async fn turn_on(&self) -> Result<bool> {
        self.set_power(true).await
    }

    /// Switches the light off.
    ///
    /// # Errors
    ///
    /// See [`Light::set_power`].
    pub async fn turn_off(&self) -> Result<bool> {
        self.set_power(false).await
    }

    // =========================================================================
    // Brightness
    // =========================================================================

    /// Moves to `percent` brightness; values above 100 are clamped.
    ///
    /// Uses the configured default transition when `transition` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotDimmable` for lights without level control and
    /// `Error::Actuation` if the actuator fails.
    pub async fn set_brightness(
        &self,
        percent: u8,
        transition: Option<Duration>,
    ) -> Result<Brightness> {
        self.ensure_dimmable()?;

        let target = Brightness::clamped(percent);
        let transition = self.config.transition_or_default(transition);
        self.execute(ActuationPlan::move_to_level(target, transition))
            .await?;
        Ok(target)
    }

    /// Applies an absolute or relative brightness change.
    ///
    /// Relative changes are resolved against the current brightness and
    /// clamped into 0-100 before the command is sent.
    ///
    /// # Errors
    ///
    /// See [`Light::set_brightness`].
    pub async fn change_brightness(
        &self,
        change: BrightnessChange,
        transition: Option<Duration>,
    ) -> Result<Brightness> {
        self.ensure_dimmable()?;

        let current = self.brightness().unwrap_or(Brightness::MIN);
        let target = change.resolve(current);
        tracing::trace!(
            endpoint = %self.endpoint,
            ?change,
            %current,
            %target,
            "Resolved brightness change"
        );
        self.set_brightness(target.value(), transition).await
    }

    /// Raises brightness by `delta` percentage points.
    ///
    /// # Errors
    ///
    /// See [`Light::set_brightness`].
    pub async fn increase_brightness(
        &self,
        delta: u8,
        transition: Option<Duration>,
    ) -> Result<Brightness> {
        self.change_brightness(BrightnessChange::Increase(delta), transition)
            .await
    }

    /// Lowers brightness by `delta` percentage points.
    ///
    /// # Errors
    ///
    /// See [`Light::set_brightness`].
    pub async fn decrease_brightness(
        &self,
        delta: u8,
        transition: Option<Duration>,
    ) -> Result<Brightness> {
        self.change_brightness(BrightnessChange::Decrease(delta), transition)
            .await
    }

    // =========================================================================
    // Color
    // =========================================================================

    /// Changes the color.
    ///
    /// The color is converted to a representation the light supports (see
    /// [`selector::select`]). The converted color is what gets stored and
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingColor` if `color` is `None`,
    /// `Error::Unsupported` if the light has no color support and
    /// `Error::Actuation` if the actuator fails.
    pub async fn set_color(
        &self,
        color: impl Into<Option<Color>>,
        transition: Option<Duration>,
    ) -> Result<Color> {
        let requested = color.into();
        let transition = self.config.transition_or_default(transition);
        let plan = selector::select(requested.as_ref(), &self.profile, transition)?;
        let applied = plan.effect().color().ok_or(Error::Unsupported)?;

        self.execute(plan).await?;
        Ok(applied)
    }

    // =========================================================================
    // Attribute reports
    // =========================================================================

    /// Applies an attribute report.
    ///
    /// Reports for other endpoints, for attributes that do not affect light
    /// state, and level reports on lights without level control are
    /// ignored and return `None`.
    pub fn handle_report(&self, report: &AttributeReport) -> Option<StateUpdate> {
        if report.endpoint != self.endpoint {
            return None;
        }

        let Some(change) = report.to_state_change() else {
            tracing::trace!(
                endpoint = %self.endpoint,
                cluster = %report.cluster,
                attribute = %report.attribute,
                "Ignoring attribute report"
            );
            return None;
        };

        if matches!(change, StateChange::Brightness(_)) && !self.kind.is_dimmable() {
            tracing::trace!(endpoint = %self.endpoint, "Ignoring level report on non-dimmable light");
            return None;
        }

        tracing::debug!(endpoint = %self.endpoint, ?change, "Applying attribute report");
        Some(self.commit(&change))
    }

    /// Applies reports from `reports` until the channel closes.
    pub async fn run_reports(&self, mut reports: mpsc::Receiver<AttributeReport>) {
        while let Some(report) = reports.recv().await {
            self.handle_report(&report);
        }
        tracing::debug!(endpoint = %self.endpoint, "Report channel closed");
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn ensure_dimmable(&self) -> Result<()> {
        if self.kind.is_dimmable() {
            Ok(())
        } else {
            Err(Error::NotDimmable)
        }
    }

    /// Sends `plan` and commits its effect once the actuator accepts it.
    async fn execute(&self, plan: ActuationPlan) -> Result<StateUpdate> {
        let _actuating = self.in_flight.enter();

        tracing::debug!(endpoint = %self.endpoint, command = %plan, "Sending command");

        if let Err(e) = self
            .actuator
            .invoke(self.endpoint, plan.cluster(), plan.command(), plan.parameters())
            .await
        {
            tracing::warn!(
                endpoint = %self.endpoint,
                command = plan.command(),
                error = %e,
                "Command failed, state unchanged"
            );
            return Err(e.into());
        }

        Ok(self.commit(plan.effect()))
    }

    fn commit(&self, change: &StateChange) -> StateUpdate {
        self.store.apply_and_notify(
            |state| {
                change.apply_to(state);
            },
            |update| self.emit(update),
        )
    }

    fn emit(&self, update: &StateUpdate) {
        for event in LightEvent::from_update(update) {
            self.callbacks.dispatch(&event);
            self.events.publish(event);
        }
    }
}

impl<A: Actuator + Clone> Light<A> {
    /// Adopts every light endpoint of a device, sharing one actuator.
    #[must_use]
    pub fn adopt_all(actuator: &A, device: &DeviceDescription, config: &LightConfig) -> Vec<Self> {
        device
            .lights()
            .filter_map(|endpoint| Self::adopt(actuator.clone(), endpoint, config.clone()).ok())
            .collect()
    }
}

impl<A: Actuator> Subscribable for Light<A> {
    fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&LightState) + Send + Sync + 'static,
    {
        self.callbacks.on_state_changed(callback)
    }

    fn on_power_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.callbacks.on_power_changed(callback)
    }

    fn on_brightness_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Option<Brightness>) + Send + Sync + 'static,
    {
        self.callbacks.on_brightness_changed(callback)
    }

    fn on_color_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Option<Color>) + Send + Sync + 'static,
    {
        self.callbacks.on_color_changed(callback)
    }

    fn on_event<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&LightEvent) + Send + Sync + 'static,
    {
        self.callbacks.on_event(callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.callbacks.unsubscribe(id)
    }
}
