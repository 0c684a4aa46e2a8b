// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
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

/// Length unit with _m_ as SI unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LengthUnit {
    Meters,
    NauticalMiles,
    Feet,
}

impl UnitOfMeasure<f64> for LengthUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Length
    }

    fn si() -> Self {
        Self::Meters
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::NauticalMiles => "NM",
            Self::Feet => "ft",
        }
    }

    fn from_si(value: f64, to: &Self) -> f64 {
        match to {
            Self::Meters => value,
            Self::NauticalMiles => value / constants::NAUTICAL_MILE_IN_METER,
            Self::Feet => value / constants::FEET_IN_METER,
        }
    }

    fn to_si(&self, value: &f64) -> f64 {
        match self {
            Self::Meters => *value,
            Self::NauticalMiles => value * constants::NAUTICAL_MILE_IN_METER,
            Self::Feet => value * constants::FEET_IN_METER,
        }
    }
}

/// A horizontal distance, e.g. a leg length or a runway length.
pub type Length = Measurement<f64, LengthUnit>;

impl Length {
    pub fn m(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Meters,
        }
    }

    pub fn nm(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::NauticalMiles,
        }
    }

    pub fn ft(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Feet,
        }
    }

    /// Returns the value in nautical miles.
    pub fn to_nm(&self) -> f64 {
        *self.convert_to(LengthUnit::NauticalMiles).value()
    }

    pub fn abs(&self) -> Self {
        Self {
            value: self.value.abs(),
            unit: self.unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nautical_mile_in_meters() {
        assert_eq!(Length::nm(1.0).to_si(), 1852.0);
        assert_eq!(Length::m(3704.0).to_nm(), 2.0);
    }

    #[test]
    fn runway_length_in_feet() {
        let rwy = Length::m(3048.0).convert_to(LengthUnit::Feet);
        assert!((rwy.value() - 10000.0).abs() < 1e-6);
    }
}
