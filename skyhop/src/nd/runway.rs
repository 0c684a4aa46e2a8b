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
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::Point;

use crate::error::Error;
use crate::geom::Coordinate;
use crate::measurements::{Altitude, Angle, Length};

/// One of the two physical ends of a runway.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RunwayEndKind {
    Primary,
    Secondary,
}

impl RunwayEndKind {
    pub fn opposite(&self) -> Self {
        match self {
            Self::Primary => Self::Secondary,
            Self::Secondary => Self::Primary,
        }
    }
}

impl FromStr for RunwayEndKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            _ => Err(Error::InvalidRunwayEnd(s.to_string())),
        }
    }
}

impl fmt::Display for RunwayEndKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Secondary => write!(f, "secondary"),
        }
    }
}

/// A runway threshold.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunwayEnd {
    /// The designator as painted on the runway, e.g. `09L`.
    pub designator: String,
    pub coordinate: Point<f64>,
    /// The elevation of the threshold relative to the airport elevation.
    pub elevation: Altitude,
    pub heading: Angle,
}

impl RunwayEnd {
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate.into()
    }
}

/// A runway with its two ends.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Runway {
    pub id: u32,
    /// The ID of the airport the runway belongs to.
    pub airport_id: u32,
    pub length: Length,
    pub primary: RunwayEnd,
    pub secondary: RunwayEnd,
}

impl Runway {
    /// Returns the end of the `kind`.
    pub fn end(&self, kind: RunwayEndKind) -> &RunwayEnd {
        match kind {
            RunwayEndKind::Primary => &self.primary,
            RunwayEndKind::Secondary => &self.secondary,
        }
    }

    /// Returns the designator of both ends, e.g. `09L/27R`.
    pub fn designator(&self) -> String {
        format!("{}/{}", self.primary.designator, self.secondary.designator)
    }
}

impl fmt::Display for Runway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RWY {} ({:.0})", self.designator(), self.length)
    }
}
