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

use super::{Measurement, PhysicalQuantity, UnitOfMeasure};

/// Angle unit with _rad_ as SI unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AngleUnit {
    /// Degrees clockwise from true north in the range `[0, 360)`.
    TrueNorth,
    Radians,
}

impl UnitOfMeasure<f64> for AngleUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Angle
    }

    fn si() -> Self {
        Self::Radians
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::TrueNorth => "°",
            Self::Radians => "rad",
        }
    }

    fn from_si(value: f64, to: &Self) -> f64 {
        match to {
            Self::TrueNorth => value.to_degrees(),
            Self::Radians => value,
        }
    }

    fn to_si(&self, value: &f64) -> f64 {
        match self {
            Self::TrueNorth => value.to_radians(),
            Self::Radians => *value,
        }
    }

    fn normalize(&self, value: f64) -> f64 {
        match self {
            Self::TrueNorth => value.rem_euclid(360.0),
            Self::Radians => value.rem_euclid(std::f64::consts::TAU),
        }
    }
}

/// A direction such as a bearing or a runway heading.
///
/// Angles wrap around, so `Angle::t(370.0)` is the same direction as
/// `Angle::t(10.0)` and subtracting two bearings never leaves the circle.
pub type Angle = Measurement<f64, AngleUnit>;

impl Angle {
    /// Creates a true bearing in degrees.
    pub fn t(value: f64) -> Self {
        Self::new(value, AngleUnit::TrueNorth)
    }

    /// Returns the value in degrees from true north.
    pub fn degrees(&self) -> f64 {
        *self.convert_to(AngleUnit::TrueNorth).value()
    }

    /// Returns the signed deviation of this angle from `reference` in degrees.
    ///
    /// The deviation is in the range `(-180, 180]` and positive when this
    /// angle lies clockwise of the reference.
    pub fn deviation_from(&self, reference: &Angle) -> f64 {
        let diff = (self.degrees() - reference.degrees()).rem_euclid(360.0);
        if diff > 180.0 {
            diff - 360.0
        } else {
            diff
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_around_north() {
        assert_eq!(*Angle::t(370.0).value(), 10.0);
        assert_eq!(*Angle::t(-30.0).value(), 330.0);
        assert_eq!(*(Angle::t(350.0) + Angle::t(20.0)).value(), 10.0);
    }

    #[test]
    fn deviation_across_north() {
        assert_eq!(Angle::t(10.0).deviation_from(&Angle::t(350.0)), 20.0);
        assert_eq!(Angle::t(350.0).deviation_from(&Angle::t(10.0)), -20.0);
        assert_eq!(Angle::t(180.0).deviation_from(&Angle::t(0.0)), 180.0);
    }
}
