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

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::INVALID_BODY;
use crate::error::{Error, Result};
use crate::nd::Airport;

/// The body of a random route request.
///
/// Every field is optional so that incomplete requests can be reported
/// instead of failing to deserialize.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct RouteRequestBody {
    /// Ident or free-text query of the origin.
    pub from: Option<String>,
    /// Ident or free-text query of the destination.
    pub to: Option<String>,
    /// Minimum leg distance in nautical miles.
    pub min_distance: Option<f64>,
    /// Maximum leg distance in nautical miles.
    pub max_distance: Option<f64>,
    /// Minimum length of the longest runway in feet.
    pub runway_min_length: Option<f64>,
    /// Maximum deviation from the course to the destination in degrees.
    pub angle: Option<f64>,
    /// One of `all`, `approach` or `ils`.
    pub approach_type: Option<String>,
    pub include_military: Option<bool>,
}

/// The body of a flight plan request.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FlightPlanRequestBody {
    pub departure_airport_ident: Option<String>,
    pub destination_runway_id: Option<u32>,
    /// Either `primary` or `secondary`.
    pub destination_runway_type: Option<String>,
    /// Cruising altitude in feet.
    pub cruising_alt: Option<f64>,
    /// Distances of the approach waypoints to the threshold in nautical miles.
    pub waypoints: Option<Vec<f64>>,
}

/// The result of resolving a list of airport codes.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Lookup {
    pub found_airports: Vec<Arc<Airport>>,
    pub not_found_airports: Vec<String>,
}

/// Returns the error for a request body that could not be read because of
/// the malformed `field`, if known.
pub fn malformed_body(field: Option<&str>) -> Error {
    match field {
        Some("waypoints") => Error::InvalidWaypointDistances,
        _ => Error::InvalidRequest(INVALID_BODY.to_string()),
    }
}

/// Parses comma separated waypoint distances as entered in the plan options,
/// e.g. `8, 5`.
pub fn parse_distances(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .ok()
                .filter(|d| d.is_finite() && *d >= 0.0)
                .ok_or(Error::InvalidWaypointDistances)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_waypoint_distances() {
        assert_eq!(parse_distances("8, 5"), Ok(vec![8.0, 5.0]));
        assert_eq!(parse_distances("12.5"), Ok(vec![12.5]));
        assert_eq!(parse_distances("8, ,5"), Err(Error::InvalidWaypointDistances));
        assert_eq!(parse_distances("8, -5"), Err(Error::InvalidWaypointDistances));
        assert_eq!(parse_distances("eight"), Err(Error::InvalidWaypointDistances));
    }

    #[test]
    fn malformed_waypoints_are_invalid_distances() {
        assert_eq!(
            malformed_body(Some("waypoints")),
            Error::InvalidWaypointDistances
        );

        let err = malformed_body(Some("cruisingAlt"));
        assert_eq!(err.to_string(), "Invalid request body!");
        assert_eq!(err.status_code(), 500);
        assert_eq!(malformed_body(None), err);
    }
}
