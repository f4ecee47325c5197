// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for light commands against a recording actuator.

mod common;

use std::error::Error as _;
use std::time::Duration;

use common::{
    MockActuator, Outcome, adopt, dimmable_endpoint, full_color_endpoint, hue_only_endpoint,
    on_off_endpoint, tunable_white_endpoint,
};
use zigbee_light::discovery::DeviceDescription;
use zigbee_light::protocol::Cluster;
use zigbee_light::{
    ActuationError, Brightness, BrightnessChange, Capability, Color, ControllerPhase, Error,
    Light, LightConfig, LightKind, LightState,
};

// ============================================================================
// Adoption
// ============================================================================

mod adoption {
    use super::*;

    #[test]
    fn kinds_and_metadata() {
        let cases = [
            (on_off_endpoint(), LightKind::Basic, vec![]),
            (dimmable_endpoint(), LightKind::Dimmable, vec!["dimmable"]),
            (hue_only_endpoint(), LightKind::DimmableColor, vec!["dimmable", "color:full"]),
            (
                tunable_white_endpoint(),
                LightKind::DimmableColor,
                vec!["dimmable", "color:temperature"],
            ),
            (
                full_color_endpoint(),
                LightKind::DimmableColor,
                vec!["dimmable", "color:temperature", "color:full"],
            ),
        ];

        for (endpoint, kind, capabilities) in cases {
            let light = adopt(MockActuator::new(), &endpoint);
            assert_eq!(light.kind(), kind);
            assert_eq!(light.metadata().types(), ["light"]);
            let names: Vec<_> = light
                .metadata()
                .capabilities()
                .iter()
                .map(Capability::as_str)
                .collect();
            assert_eq!(names, capabilities, "{kind:?}");
        }
    }

    #[test]
    fn initial_state_comes_from_attributes() {
        let light = adopt(MockActuator::new(), &dimmable_endpoint());
        assert_eq!(
            light.state(),
            LightState::new(false).with_brightness(Brightness::new(90).unwrap())
        );

        let light = adopt(MockActuator::new(), &on_off_endpoint());
        assert_eq!(light.state(), LightState::new(false));
        assert_eq!(light.brightness(), None);
        assert_eq!(light.color(), None);
    }

    #[test]
    fn adopt_all_takes_only_lights() {
        let device: DeviceDescription = serde_json::from_str(
            r#"{"endpoints":[
                {"id":1,"deviceId":256,"clusters":{"genOnOff":{"attributes":{"onOff":1}}}},
                {"id":2,"deviceId":1026},
                {"id":3,"deviceId":257,"clusters":{"genLevelCtrl":{}}}
            ]}"#,
        )
        .unwrap();

        let actuator = std::sync::Arc::new(MockActuator::new());
        let lights = Light::adopt_all(&actuator, &device, &LightConfig::default());

        let endpoints: Vec<u8> = lights.iter().map(|l| l.endpoint().value()).collect();
        assert_eq!(endpoints, vec![1, 3]);
        assert!(lights[0].power());
        assert_eq!(lights[1].kind(), LightKind::Dimmable);
    }
}

// ============================================================================
// Power
// ============================================================================

mod power {
    use super::*;

    #[tokio::test]
    async fn on_and_off_send_genonoff() {
        let light = adopt(MockActuator::new(), &on_off_endpoint());

        assert!(light.turn_on().await.unwrap());
        let call = light.actuator().last_call();
        assert_eq!(call.cluster, Cluster::OnOff);
        assert_eq!(call.command, "on");
        assert!(call.parameters.is_empty());
        assert_eq!(call.endpoint.value(), 1);
        assert!(light.power());

        assert!(!light.turn_off().await.unwrap());
        assert_eq!(light.actuator().last_call().command, "off");
        assert!(!light.power());
    }

    #[tokio::test]
    async fn repeated_command_still_reaches_device() {
        let light = adopt(MockActuator::new(), &on_off_endpoint());
        let mut events = light.subscribe();

        light.set_power(true).await.unwrap();
        light.set_power(true).await.unwrap();

        assert_eq!(light.actuator().calls().len(), 2);
        assert_eq!(events.try_recv().unwrap().name(), "state");
        assert_eq!(events.try_recv().unwrap().name(), "power");
        assert!(events.try_recv().is_err());
    }
}

// ============================================================================
// Brightness
// ============================================================================

mod brightness {
    use super::*;

    #[tokio::test]
    async fn set_uses_default_transition() {
        let light = adopt(MockActuator::new(), &dimmable_endpoint());

        let result = light.set_brightness(50, None).await.unwrap();
        assert_eq!(result.value(), 50);

        let call = light.actuator().last_call();
        assert_eq!(call.cluster, Cluster::LevelControl);
        assert_eq!(call.command, "moveToLevel");
        assert_eq!(call.param("level"), 127);
        assert_eq!(call.param("transtime"), 4);
        assert_eq!(light.brightness(), Some(result));
    }

    #[tokio::test]
    async fn explicit_and_configured_transitions() {
        let light = adopt(MockActuator::new(), &dimmable_endpoint());
        light
            .set_brightness(10, Some(Duration::from_millis(2_599)))
            .await
            .unwrap();
        assert_eq!(light.actuator().last_call().param("transtime"), 25);

        let config = LightConfig::default().with_default_transition(Duration::ZERO);
        let light = Light::adopt(MockActuator::new(), &dimmable_endpoint(), config).unwrap();
        light.set_brightness(10, None).await.unwrap();
        assert_eq!(light.actuator().last_call().param("transtime"), 0);
    }

    #[tokio::test]
    async fn values_above_full_are_clamped() {
        let light = adopt(MockActuator::new(), &dimmable_endpoint());
        let result = light.set_brightness(250, None).await.unwrap();
        assert_eq!(result, Brightness::MAX);
        assert_eq!(light.actuator().last_call().param("level"), 254);
    }

    #[tokio::test]
    async fn increase_from_ninety_clamps_to_full() {
        let light = adopt(MockActuator::new(), &dimmable_endpoint());
        assert_eq!(light.brightness().unwrap().value(), 90);

        let result = light.increase_brightness(20, None).await.unwrap();

        assert_eq!(result, Brightness::MAX);
        assert_eq!(light.actuator().last_call().param("level"), 254);
        assert_eq!(light.brightness(), Some(Brightness::MAX));
    }

    #[tokio::test]
    async fn decrease_below_zero_clamps() {
        let light = adopt(MockActuator::new(), &dimmable_endpoint());
        let result = light.decrease_brightness(200, None).await.unwrap();
        assert_eq!(result, Brightness::MIN);
        assert_eq!(light.actuator().last_call().param("level"), 0);
    }

    #[tokio::test]
    async fn change_brightness_accepts_all_shapes() {
        let light = adopt(MockActuator::new(), &dimmable_endpoint());

        let set = light
            .change_brightness(BrightnessChange::Set(40), None)
            .await
            .unwrap();
        assert_eq!(set.value(), 40);

        let up = light
            .change_brightness(BrightnessChange::Increase(15), None)
            .await
            .unwrap();
        assert_eq!(up.value(), 55);

        let down = light
            .change_brightness(BrightnessChange::Decrease(5), None)
            .await
            .unwrap();
        assert_eq!(down.value(), 50);
    }

    #[tokio::test]
    async fn on_off_light_is_not_dimmable() {
        let light = adopt(MockActuator::new(), &on_off_endpoint());

        assert!(matches!(
            light.set_brightness(50, None).await,
            Err(Error::NotDimmable)
        ));
        assert!(matches!(
            light.increase_brightness(10, None).await,
            Err(Error::NotDimmable)
        ));
        assert!(light.actuator().calls().is_empty());
    }
}

// ============================================================================
// Color
// ============================================================================

mod color {
    use super::*;

    #[tokio::test]
    async fn missing_color_is_rejected() {
        let light = adopt(MockActuator::new(), &full_color_endpoint());
        let err = light.set_color(None, None).await.unwrap_err();
        assert!(matches!(err, Error::MissingColor));
        assert!(light.actuator().calls().is_empty());
    }

    #[tokio::test]
    async fn colorless_light_is_unsupported() {
        let light = adopt(MockActuator::new(), &dimmable_endpoint());
        let err = light
            .set_color(Color::kelvin(2_700.0).unwrap(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Unsupported));
    }

    #[tokio::test]
    async fn hue_only_light_gets_temperature_as_hue_saturation() {
        let light = adopt(MockActuator::new(), &hue_only_endpoint());

        let applied = light
            .set_color(Color::mired(300).unwrap(), None)
            .await
            .unwrap();

        assert!(applied.is_hue_saturation());
        let call = light.actuator().last_call();
        assert_eq!(call.cluster, Cluster::ColorControl);
        assert_eq!(call.command, "moveToHueAndSaturation");
        assert!(call.param("hue") <= 255);
        assert!(call.param("saturation") <= 255);
        assert_eq!(call.param("transtime"), 4);
        assert_eq!(light.color(), Some(applied));
    }

    #[tokio::test]
    async fn full_color_light_prefers_temperature_for_white() {
        let light = adopt(MockActuator::new(), &full_color_endpoint());

        let applied = light
            .set_color(Color::mired(370).unwrap(), None)
            .await
            .unwrap();

        assert_eq!(applied, Color::mired(370).unwrap());
        let call = light.actuator().last_call();
        assert_eq!(call.command, "moveToColorTemp");
        assert_eq!(call.param("colortemp"), 370);
    }

    #[tokio::test]
    async fn full_color_light_prefers_xy_for_colors() {
        let light = adopt(MockActuator::new(), &full_color_endpoint());

        let applied = light
            .set_color(Color::hue_saturation(120.0, 100.0).unwrap(), None)
            .await
            .unwrap();

        assert!(applied.is_xy());
        let call = light.actuator().last_call();
        assert_eq!(call.command, "moveToColor");
        assert!(call.param("colorx") < 65_536);
        assert!(call.param("colory") < 65_536);
    }

    #[tokio::test]
    async fn temperature_is_clamped_to_reported_range() {
        let light = adopt(MockActuator::new(), &full_color_endpoint());

        let cold = light
            .set_color(Color::kelvin(10_000.0).unwrap(), None)
            .await
            .unwrap();
        assert_eq!(cold, Color::mired(153).unwrap());
        assert_eq!(light.actuator().last_call().param("colortemp"), 153);

        let warm = light
            .set_color(Color::mired(600).unwrap(), None)
            .await
            .unwrap();
        assert_eq!(warm, Color::mired(454).unwrap());
    }

    #[tokio::test]
    async fn tunable_white_renders_colors_as_temperature() {
        let light = adopt(MockActuator::new(), &tunable_white_endpoint());

        let applied = light
            .set_color(Color::xy(0.4599, 0.4106).unwrap(), Some(Duration::from_secs(1)))
            .await
            .unwrap();

        assert!(applied.is_temperature());
        let call = light.actuator().last_call();
        assert_eq!(call.command, "moveToColorTemp");
        assert_eq!(call.param("transtime"), 10);
        // Warm white near 2700 K, inside the default 154-500 range
        let mired = call.param("colortemp");
        assert!((360..=380).contains(&mired), "mired = {mired}");
    }

    #[tokio::test]
    async fn color_event_carries_applied_color() {
        let light = adopt(MockActuator::new(), &full_color_endpoint());
        let mut events = light.subscribe();

        let applied = light
            .set_color(Color::mired(250).unwrap(), None)
            .await
            .unwrap();

        assert_eq!(events.try_recv().unwrap().name(), "state");
        assert_eq!(
            events.try_recv().unwrap(),
            zigbee_light::LightEvent::Color(Some(applied))
        );
    }
}

// ============================================================================
// Failures
// ============================================================================

mod failures {
    use super::*;

    #[tokio::test]
    async fn rejected_command_changes_nothing() {
        let light = adopt(MockActuator::failing(Outcome::Reject), &full_color_endpoint());
        let before = light.state();
        let mut events = light.subscribe();

        let err = light.set_brightness(10, None).await.unwrap_err();
        assert!(matches!(err, Error::Actuation(ActuationError::Rejected(_))));

        let err = light
            .set_color(Color::mired(300).unwrap(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Actuation(_)));

        assert_eq!(light.state(), before);
        assert!(events.try_recv().is_err());
        assert_eq!(light.phase(), ControllerPhase::Idle);
    }

    #[tokio::test]
    async fn transport_cause_is_preserved() {
        let light = adopt(
            MockActuator::failing(Outcome::TransportFailure),
            &on_off_endpoint(),
        );

        let err = light.turn_on().await.unwrap_err();
        let actuation = err.source().expect("actuation error");
        let cause = actuation.source().expect("transport cause");
        assert_eq!(cause.to_string(), "coordinator unreachable");
        assert!(!light.power());
    }

    #[tokio::test]
    async fn light_recovers_after_failure() {
        let light = adopt(MockActuator::failing(Outcome::Reject), &on_off_endpoint());
        assert!(light.turn_on().await.is_err());

        light.actuator().set_outcome(Outcome::Accept);
        assert!(light.turn_on().await.unwrap());
        assert!(light.power());
    }
}
