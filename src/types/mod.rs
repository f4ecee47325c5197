// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for light control.
//!
//! Each type checks its range at construction time.
//!
//! # Types
//!
//! - [`Brightness`] - Brightness level (0-100%)
//! - [`BrightnessChange`] - Absolute or relative brightness request
//! - [`Color`] - A color as temperature, xy or hue/saturation
//! - [`Mired`] - Color temperature in mireds
//! - [`Chromaticity`] - CIE 1931 xy coordinates
//! - [`HueSaturation`] - Hue (0-360) and saturation (0-100)

mod brightness;
mod color;
mod colorimetry;

pub use brightness::{Brightness, BrightnessChange};
pub use color::{Chromaticity, Color, ColorMode, HueSaturation, Mired};
