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

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geom::Coordinate;
use crate::measurements::{Altitude, Length};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WaypointKind {
    /// The point at which the descent from cruise begins.
    TopOfDescent,
    /// A fix on the extended centreline.
    Approach,
    /// The threshold of the landing runway end.
    Threshold,
    /// The opposite end of the landing runway.
    RunwayEnd,
}

/// A named, altitude-tagged point of an approach plan.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Waypoint {
    name: String,
    coordinate: Coordinate,
    altitude: Altitude,
    kind: WaypointKind,
    distance: Option<Length>,
}

impl Waypoint {
    /// Creates a waypoint named after its altitude rounded to the nearest
    /// 100 ft, e.g. `2100ft`.
    pub(crate) fn new(
        coordinate: Coordinate,
        altitude: Altitude,
        kind: WaypointKind,
        distance: Option<Length>,
    ) -> Self {
        let name = match kind {
            WaypointKind::TopOfDescent => format!("D{}ft", altitude.rounded_hundreds_ft()),
            _ => format!("{}ft", altitude.rounded_hundreds_ft()),
        };

        Self {
            name,
            coordinate,
            altitude,
            kind,
            distance,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    /// The altitude at which the waypoint is crossed, not rounded.
    pub fn altitude(&self) -> &Altitude {
        &self.altitude
    }

    pub fn kind(&self) -> WaypointKind {
        self.kind
    }

    /// The distance to the threshold along the extended centreline.
    ///
    /// Points off the centreline, that is the top of descent and the opposite
    /// runway end, have no distance.
    pub fn distance(&self) -> Option<&Length> {
        self.distance.as_ref()
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.coordinate)
    }
}
