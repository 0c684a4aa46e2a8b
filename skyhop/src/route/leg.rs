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
use std::sync::Arc;

use crate::measurements::{Angle, Length, LengthUnit};
use crate::nd::Airport;

/// A direct leg between two airports of a route.
#[derive(Clone, PartialEq, Debug)]
pub struct Leg {
    from: Arc<Airport>,
    to: Arc<Airport>,
    bearing: Angle,
    dist: Length,
}

impl Leg {
    pub fn new(from: Arc<Airport>, to: Arc<Airport>) -> Self {
        let from_coord = from.coordinate();
        let to_coord = to.coordinate();

        let bearing = from_coord.bearing(&to_coord);
        let dist = from_coord
            .dist(&to_coord)
            .convert_to(LengthUnit::NauticalMiles);

        Self {
            from,
            to,
            bearing,
            dist,
        }
    }

    /// The airport from which the leg starts.
    pub fn from(&self) -> &Arc<Airport> {
        &self.from
    }

    /// The airport to which the leg is going.
    pub fn to(&self) -> &Arc<Airport> {
        &self.to
    }

    /// The initial true bearing of the great circle between both airports.
    pub fn bearing(&self) -> &Angle {
        &self.bearing
    }

    /// The distance between the leg's two airports in nautical miles.
    pub fn dist(&self) -> &Length {
        &self.dist
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} {:03.0}° {:.1}",
            self.from.ident(),
            self.to.ident(),
            self.bearing.degrees(),
            self.dist
        )
    }
}
