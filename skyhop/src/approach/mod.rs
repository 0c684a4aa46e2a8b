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

//! Approach plans into a runway.
//!
//! The [`ApproachPlanner`] places waypoints on the extended centreline of the
//! landing runway at the requested distances, each at the altitude of a 3°
//! glide path, and inserts a top of descent between the departure airport and
//! the first waypoint when the descent from cruise fits.

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::measurements::Altitude;
use crate::nd::{Airport, Runway, RunwayEndKind};

mod planner;
mod waypoint;

pub use planner::*;
pub use waypoint::{Waypoint, WaypointKind};

/// The input of the [`ApproachPlanner`].
#[derive(Clone, PartialEq, Debug)]
pub struct ApproachRequest {
    departure: Arc<Airport>,
    destination: Arc<Airport>,
    runway: Runway,
    end: RunwayEndKind,
    cruising_altitude: Altitude,
    distances: Vec<f64>,
}

impl ApproachRequest {
    /// Creates a request to land on the `end` of the `runway` at the
    /// `destination`.
    ///
    /// The `distances` to the threshold in nautical miles define where the
    /// approach waypoints are placed. The request is validated when planned.
    pub fn new(
        departure: Arc<Airport>,
        destination: Arc<Airport>,
        runway: Runway,
        end: RunwayEndKind,
        cruising_altitude: Altitude,
        distances: Vec<f64>,
    ) -> Self {
        Self {
            departure,
            destination,
            runway,
            end,
            cruising_altitude,
            distances,
        }
    }

    pub fn departure(&self) -> &Arc<Airport> {
        &self.departure
    }

    pub fn destination(&self) -> &Arc<Airport> {
        &self.destination
    }

    pub fn runway(&self) -> &Runway {
        &self.runway
    }

    pub fn end(&self) -> RunwayEndKind {
        self.end
    }

    pub fn cruising_altitude(&self) -> Altitude {
        self.cruising_altitude
    }

    pub fn distances(&self) -> &[f64] {
        &self.distances
    }
}

/// The waypoints from the top of descent down to the runway.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ApproachPlan {
    departure: String,
    destination: String,
    cruising_altitude: Altitude,
    waypoints: Vec<Waypoint>,
}

impl ApproachPlan {
    /// The ident of the departure airport.
    pub fn departure(&self) -> &str {
        &self.departure
    }

    /// The ident of the destination airport.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// The altitude the top of descent was computed for, or the requested
    /// altitude if the plan has no top of descent.
    pub fn cruising_altitude(&self) -> Altitude {
        self.cruising_altitude
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn top_of_descent(&self) -> Option<&Waypoint> {
        self.waypoints
            .first()
            .filter(|wp| wp.kind() == WaypointKind::TopOfDescent)
    }
}
