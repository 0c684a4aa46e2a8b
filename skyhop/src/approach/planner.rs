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

use log::{debug, info, warn};

use super::{ApproachPlan, ApproachRequest, Waypoint, WaypointKind};
use crate::error::{Error, Result};
use crate::fc;
use crate::geom::Coordinate;
use crate::measurements::{Altitude, AltitudeUnit, Length};

/// Cruising altitude tried when the descent from the requested altitude does
/// not fit between departure and approach.
pub const FALLBACK_CRUISE: Altitude = Altitude {
    value: 8000.0,
    unit: AltitudeUnit::Feet,
};

/// Builds approach plans.
///
/// # Examples
///
/// ```
/// # use std::sync::Arc;
/// # use skyhop::coord;
/// # use skyhop::approach::{ApproachPlanner, ApproachRequest};
/// # use skyhop::measurements::{Altitude, Angle, Length};
/// # use skyhop::nd::{Airport, Runway, RunwayEnd, RunwayEndKind};
/// let eddh = Arc::new(Airport::new(1, "EDDH", "Hamburg", coord!(53.6304, 9.98823)));
/// let edhl = Arc::new(Airport::new(2, "EDHL", "Luebeck", coord!(53.8054, 10.7192)));
///
/// let rwy = Runway {
///     id: 7,
///     airport_id: 2,
///     length: Length::ft(6890.0),
///     primary: RunwayEnd {
///         designator: "07".to_string(),
///         coordinate: coord!(53.8024, 10.6982),
///         elevation: Altitude::ft(53.0),
///         heading: Angle::t(67.0),
///     },
///     secondary: RunwayEnd {
///         designator: "25".to_string(),
///         coordinate: coord!(53.8104, 10.7282),
///         elevation: Altitude::ft(46.0),
///         heading: Angle::t(247.0),
///     },
/// };
///
/// let request = ApproachRequest::new(
///     eddh,
///     edhl,
///     rwy,
///     RunwayEndKind::Primary,
///     Altitude::ft(3000.0),
///     vec![8.0, 5.0],
/// );
///
/// let plan = ApproachPlanner::new().plan(&request).unwrap();
/// let names: Vec<&str> = plan.waypoints().iter().map(|wp| wp.name()).collect();
///
/// assert_eq!(names, vec!["D3000ft", "2500ft", "1600ft", "100ft", "100ft"]);
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ApproachPlanner {
    fallback_cruise: Altitude,
}

impl Default for ApproachPlanner {
    fn default() -> Self {
        Self {
            fallback_cruise: FALLBACK_CRUISE,
        }
    }
}

impl ApproachPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the [`FALLBACK_CRUISE`] altitude.
    pub fn with_fallback_cruise(mut self, altitude: Altitude) -> Self {
        self.fallback_cruise = altitude;
        self
    }

    /// Plans the approach of the `request`.
    ///
    /// # Errors
    ///
    /// Fails if the cruising altitude is not positive, a distance is negative
    /// or the runway is not located at the destination.
    pub fn plan(&self, request: &ApproachRequest) -> Result<ApproachPlan> {
        let cruise = request.cruising_altitude();
        if !cruise.is_finite() || cruise.to_ft() <= 0.0 {
            warn!("rejecting approach with cruising altitude {cruise}");
            return Err(Error::InvalidAltitude);
        }

        if request
            .distances()
            .iter()
            .any(|d| !d.is_finite() || *d < 0.0)
        {
            warn!("rejecting approach distances {:?}", request.distances());
            return Err(Error::InvalidWaypointDistances);
        }

        let runway = request.runway();
        let destination = request.destination();
        if runway.airport_id != destination.id() {
            return Err(Error::InvalidRequest(format!(
                "Runway {} is not located at {}",
                runway.designator(),
                destination.ident()
            )));
        }

        let threshold = runway.end(request.end());
        let opposite = runway.end(request.end().opposite());

        info!(
            "planning approach from {} to {} runway {}",
            request.departure().ident(),
            destination.ident(),
            threshold.designator
        );

        // end elevations are relative to the airport
        let runway_altitude = destination.elevation() + threshold.elevation;
        let threshold_coord = threshold.coordinate();
        // extends the centreline beyond the threshold against the landing direction
        let outbound = opposite.coordinate().bearing(&threshold_coord);

        let mut waypoints: Vec<Waypoint> = approach_distances(request.distances())
            .into_iter()
            .map(|d| {
                let dist = Length::nm(d);
                let kind = if d == 0.0 {
                    WaypointKind::Threshold
                } else {
                    WaypointKind::Approach
                };

                Waypoint::new(
                    threshold_coord.destination(&outbound, &dist),
                    fc::glide_path_altitude(dist, runway_altitude),
                    kind,
                    Some(dist),
                )
            })
            .collect();

        waypoints.push(Waypoint::new(
            opposite.coordinate(),
            fc::glide_path_altitude(Length::nm(0.0), runway_altitude),
            WaypointKind::RunwayEnd,
            None,
        ));

        let departure = request.departure().coordinate();
        let first = &waypoints[0];

        let tod = [cruise, self.fallback_cruise]
            .into_iter()
            .find_map(|alt| top_of_descent(&departure, first, alt).map(|tod| (alt, tod)));

        let cruising_altitude = match tod {
            Some((alt, tod)) => {
                debug!("top of descent {} for {alt:.0}", tod.coordinate());
                waypoints.insert(0, tod);
                alt
            }
            None => {
                debug!("no top of descent fits before {}", first.name());
                cruise
            }
        };

        info!("planned approach with {} waypoints", waypoints.len());

        Ok(ApproachPlan {
            departure: request.departure().ident().to_string(),
            destination: destination.ident().to_string(),
            cruising_altitude,
            waypoints,
        })
    }
}

/// Returns the distances sorted from the farthest to the threshold, without
/// duplicates and ending at the threshold.
fn approach_distances(distances: &[f64]) -> Vec<f64> {
    let mut distances = distances.to_vec();
    distances.sort_by(|a, b| b.total_cmp(a));
    distances.dedup();

    if distances.last() != Some(&0.0) {
        distances.push(0.0);
    }

    distances
}

/// Returns the top of descent from the `cruise` altitude to the `first`
/// waypoint, placed on the way back to the departure.
///
/// No top of descent exists if there is nothing to descend or the descent
/// would have to start before the departure.
fn top_of_descent(departure: &Coordinate, first: &Waypoint, cruise: Altitude) -> Option<Waypoint> {
    let descend = fc::descent_distance(cruise, *first.altitude());
    let available = first.coordinate().dist(departure);

    if descend.to_nm() <= 0.0 || available <= descend {
        return None;
    }

    let bearing = first.coordinate().bearing(departure);

    Some(Waypoint::new(
        first.coordinate().destination(&bearing, &descend),
        cruise,
        WaypointKind::TopOfDescent,
        None,
    ))
}
