// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared fixtures: a recording actuator and sample endpoints.

#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::Notify;
use zigbee_light::discovery::EndpointProfile;
use zigbee_light::protocol::{Actuator, Cluster, EndpointId, Parameters};
use zigbee_light::{ActuationError, Light, LightConfig};

/// One recorded actuator call.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub endpoint: EndpointId,
    pub cluster: Cluster,
    pub command: String,
    pub parameters: Parameters,
}

impl Call {
    pub fn param(&self, name: &str) -> u32 {
        self.parameters[name]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accept,
    Reject,
    TransportFailure,
}

/// Records every call and answers with a configurable outcome.
///
/// When gated, each call waits for [`MockActuator::release`] before it
/// completes. When gated per call, call `n` waits for
/// [`MockActuator::release_call`] with index `n`.
#[derive(Debug)]
pub struct MockActuator {
    calls: Mutex<Vec<Call>>,
    outcome: Mutex<Outcome>,
    gate: Option<Arc<Notify>>,
    call_gates: Option<Mutex<Vec<Arc<Notify>>>>,
}

impl MockActuator {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            outcome: Mutex::new(Outcome::Accept),
            gate: None,
            call_gates: None,
        }
    }

    pub fn gated_per_call() -> Self {
        Self {
            call_gates: Some(Mutex::new(Vec::new())),
            ..Self::new()
        }
    }

    pub fn gated() -> Self {
        Self {
            gate: Some(Arc::new(Notify::new())),
            ..Self::new()
        }
    }

    pub fn failing(outcome: Outcome) -> Self {
        let actuator = Self::new();
        actuator.set_outcome(outcome);
        actuator
    }

    pub fn set_outcome(&self, outcome: Outcome) {
        *self.outcome.lock() = outcome;
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn release_call(&self, index: usize) {
        if let Some(gates) = &self.call_gates {
            gates.lock()[index].notify_one();
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn last_call(&self) -> Call {
        self.calls.lock().last().cloned().expect("no actuator call")
    }
}

impl Actuator for MockActuator {
    async fn invoke(
        &self,
        endpoint: EndpointId,
        cluster: Cluster,
        command: &str,
        parameters: &Parameters,
    ) -> Result<(), ActuationError> {
        self.calls.lock().push(Call {
            endpoint,
            cluster,
            command: command.to_string(),
            parameters: parameters.clone(),
        });

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let own_gate = self.call_gates.as_ref().map(|gates| {
            let gate = Arc::new(Notify::new());
            gates.lock().push(Arc::clone(&gate));
            gate
        });
        if let Some(gate) = own_gate {
            gate.notified().await;
        }

        let outcome = *self.outcome.lock();
        match outcome {
            Outcome::Accept => Ok(()),
            Outcome::Reject => Err(ActuationError::Rejected("INVALID_VALUE".to_string())),
            Outcome::TransportFailure => Err(ActuationError::Transport(Box::new(
                std::io::Error::new(std::io::ErrorKind::TimedOut, "coordinator unreachable"),
            ))),
        }
    }
}

pub fn endpoint(json: &str) -> EndpointProfile {
    serde_json::from_str(json).expect("valid endpoint JSON")
}

/// Device type 256 with only `genOnOff`.
pub fn on_off_endpoint() -> EndpointProfile {
    endpoint(r#"{"id":1,"deviceId":256,"clusters":{"genOnOff":{"attributes":{"onOff":0}}}}"#)
}

/// Device type 257, currently off at 90%.
pub fn dimmable_endpoint() -> EndpointProfile {
    endpoint(
        r#"{"id":11,"deviceId":257,"clusters":{
            "genOnOff":{"attributes":{"onOff":0}},
            "genLevelCtrl":{"attributes":{"currentLevel":230}}
        }}"#,
    )
}

/// Device type 258 with hue/saturation only (bit 0).
pub fn hue_only_endpoint() -> EndpointProfile {
    endpoint(
        r#"{"id":11,"deviceId":258,"clusters":{
            "genOnOff":{"attributes":{"onOff":1}},
            "genLevelCtrl":{"attributes":{"currentLevel":254}},
            "lightingColorCtrl":{"colorCapabilities":1,"attributes":{}}
        }}"#,
    )
}

/// Device type 258 with every color mode and a 153-454 mired range.
pub fn full_color_endpoint() -> EndpointProfile {
    endpoint(
        r#"{"id":11,"deviceId":258,"clusters":{
            "genOnOff":{"attributes":{"onOff":1}},
            "genLevelCtrl":{"attributes":{"currentLevel":254}},
            "lightingColorCtrl":{
                "colorCapabilities":31,
                "attributes":{
                    "numPrimaries":3,
                    "currentX":24939,
                    "colorTempPhysicalMin":153,
                    "colorTempPhysicalMax":454
                }
            }
        }}"#,
    )
}

/// Device type 258 with color temperature only.
pub fn tunable_white_endpoint() -> EndpointProfile {
    endpoint(
        r#"{"id":11,"deviceId":258,"clusters":{
            "genOnOff":{"attributes":{"onOff":1}},
            "genLevelCtrl":{"attributes":{"currentLevel":127}},
            "lightingColorCtrl":{"colorCapabilities":16,"attributes":{}}
        }}"#,
    )
}

pub fn adopt(actuator: MockActuator, endpoint: &EndpointProfile) -> Light<MockActuator> {
    Light::adopt(actuator, endpoint, LightConfig::default()).expect("endpoint is a light")
}
