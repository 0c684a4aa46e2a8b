// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{constants, Measurement, PhysicalQuantity, UnitOfMeasure};

/// Altitude unit with _m_ as SI unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AltitudeUnit {
    Feet,
    Meters,
}

impl UnitOfMeasure<f64> for AltitudeUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Length
    }

    fn si() -> Self {
        Self::Meters
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Feet => "ft",
            Self::Meters => "m",
        }
    }

    fn from_si(value: f64, to: &Self) -> f64 {
        match to {
            Self::Meters => value,
            Self::Feet => value / constants::FEET_IN_METER,
        }
    }

    fn to_si(&self, value: &f64) -> f64 {
        match self {
            Self::Meters => *value,
            Self::Feet => value * constants::FEET_IN_METER,
        }
    }
}

/// Altitude above mean sea level (MSL).
///
/// Airport and runway elevations, the cruising altitude and the altitudes of
/// approach waypoints are all altitudes. Plans are computed in feet and keep
/// full precision; only display names are rounded.
pub type Altitude = Measurement<f64, AltitudeUnit>;

impl Altitude {
    /// Creates an altitude in feet above MSL.
    pub fn ft(value: f64) -> Self {
        Self {
            value,
            unit: AltitudeUnit::Feet,
        }
    }

    /// Creates an altitude in meters above MSL.
    pub fn m(value: f64) -> Self {
        Self {
            value,
            unit: AltitudeUnit::Meters,
        }
    }

    /// Returns the value in feet.
    pub fn to_ft(&self) -> f64 {
        *self.convert_to(AltitudeUnit::Feet).value()
    }

    /// Returns the altitude in feet rounded to the nearest hundred.
    ///
    /// Halves round up, towards positive infinity, so `-150` becomes `-100`.
    pub fn rounded_hundreds_ft(&self) -> i64 {
        ((self.to_ft() / 100.0 + 0.5).floor() * 100.0) as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_hundred() {
        assert_eq!(Altitude::ft(3550.0).rounded_hundreds_ft(), 3600);
        assert_eq!(Altitude::ft(549.0).rounded_hundreds_ft(), 500);
        assert_eq!(Altitude::ft(26000.0).rounded_hundreds_ft(), 26000);
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(Altitude::ft(-150.0).rounded_hundreds_ft(), -100);
        assert_eq!(Altitude::ft(-151.0).rounded_hundreds_ft(), -200);
        assert_eq!(Altitude::ft(-50.0).rounded_hundreds_ft(), 0);
        assert_eq!(Altitude::ft(150.0).rounded_hundreds_ft(), 200);
    }

    #[test]
    fn meters_to_feet() {
        assert!((Altitude::m(304.8).to_ft() - 1000.0).abs() < 1e-9);
    }
}
