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

//! Request handling over an airport index.
//!
//! The [`Dispatcher`] answers the requests of the route planning front end:
//! it validates the request bodies, resolves airports and runways, and runs
//! the [`RouteGenerator`] or the [`ApproachPlanner`]. Transport is left to
//! the caller; errors carry an HTTP status through [`Error::status_code`].

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use rand::Rng;

use crate::approach::{ApproachPlanner, ApproachRequest};
use crate::error::{Error, Result};
use crate::geom::Rect;
use crate::measurements::{Altitude, Length};
use crate::nd::{Airport, AirportIndex, ApproachPolicy, Runway, RunwayEndKind};
use crate::pln::PlanRenderer;
use crate::route::{self, Route, RouteGenerator, RouteRequest};

mod body;

pub use body::*;

/// Cruising altitude of a flight plan request that doesn't specify one.
pub const DEFAULT_CRUISING_ALT_FT: f64 = 26000.0;

/// Approach waypoint distances of a flight plan request that doesn't
/// specify them.
pub const DEFAULT_WAYPOINT_DISTANCES: [f64; 2] = [8.0, 5.0];

const INVALID_BODY: &str = "Invalid request body!";

/// Answers route and flight plan requests.
#[derive(Clone, Debug)]
pub struct Dispatcher<I> {
    index: I,
    planner: ApproachPlanner,
    timeout: Option<Duration>,
}

impl<I: AirportIndex> Dispatcher<I> {
    pub fn new(index: I) -> Self {
        Self {
            index,
            planner: ApproachPlanner::new(),
            timeout: None,
        }
    }

    /// Limits the time spent generating a single route.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_planner(mut self, planner: ApproachPlanner) -> Self {
        self.planner = planner;
        self
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    /// Resolves an airport by its ident, ignoring case, or else by the best
    /// free-text match.
    pub fn resolve_airport(&self, query: &str) -> Result<Arc<Airport>> {
        if let Some(arpt) = self.index.find_by_ident(&query.to_uppercase())? {
            return Ok(arpt);
        }

        self.index
            .find_by_text(query)?
            .into_iter()
            .next()
            .ok_or_else(|| Error::NotFound(format!("'{query}' airport")))
    }

    /// Generates a random route for the request `body`.
    ///
    /// # Errors
    ///
    /// Incomplete bodies, limits out of range and unresolved airports fail
    /// with [`Error::InvalidRequest`].
    pub fn generate_random_route<R: Rng + ?Sized>(
        &self,
        body: &RouteRequestBody,
        rng: &mut R,
    ) -> Result<Route> {
        let (from, to, min, max, runway_min_length, angle, approach_type) = match body {
            RouteRequestBody {
                from: Some(from),
                to: Some(to),
                min_distance: Some(min),
                max_distance: Some(max),
                runway_min_length: Some(rwy),
                angle: Some(angle),
                approach_type: Some(approach_type),
                ..
            } if !from.is_empty()
                && !to.is_empty()
                && is_given(*min)
                && is_given(*max)
                && is_given(*rwy)
                && !approach_type.is_empty() =>
            {
                (from, to, *min, *max, *rwy, *angle, approach_type)
            }
            _ => {
                warn!("rejecting incomplete route request {body:?}");
                return Err(Error::InvalidRequest(INVALID_BODY.to_string()));
            }
        };

        let min_distance = Length::nm(min);
        let max_distance = Length::nm(max);
        route::check_limits(min_distance, max_distance, angle)?;

        let policy: ApproachPolicy = approach_type.parse()?;
        let origin = self.resolve_for_route(from)?;
        let destination = self.resolve_for_route(to)?;

        let request = RouteRequest::builder(origin, destination)
            .min_distance(min_distance)
            .max_distance(max_distance)
            .angle(angle)
            .min_runway_length(Length::ft(runway_min_length))
            .approach(policy)
            .include_military(body.include_military.unwrap_or(false))
            .build()?;

        let mut generator = RouteGenerator::new(&self.index);
        if let Some(timeout) = self.timeout {
            generator = generator.with_timeout(timeout);
        }

        generator.generate(&request, rng)
    }

    /// Plans the approach of the request `body` and returns the `.pln` text.
    ///
    /// # Errors
    ///
    /// Unknown runways and airports fail with [`Error::NotFound`]. An invalid
    /// runway end, cruising altitude or waypoint distance fails with the
    /// respective error.
    pub fn flight_plan(&self, body: &FlightPlanRequestBody) -> Result<String> {
        let end: RunwayEndKind = body
            .destination_runway_type
            .as_deref()
            .unwrap_or_default()
            .parse()?;

        let (Some(runway_id), Some(departure_ident)) =
            (body.destination_runway_id, body.departure_airport_ident.as_deref())
        else {
            warn!("rejecting incomplete flight plan request {body:?}");
            return Err(Error::InvalidRequest(INVALID_BODY.to_string()));
        };

        let runway = self
            .index
            .runway(runway_id)?
            .ok_or_else(|| Error::NotFound(format!("Runway with id '{runway_id}'")))?;

        let departure = self
            .index
            .find_by_ident(departure_ident)?
            .ok_or_else(|| Error::NotFound(format!("Airport with ident '{departure_ident}'")))?;

        let destination = self
            .index
            .find_by_id(runway.airport_id)?
            .ok_or_else(|| Error::NotFound("Airport for destination runway".to_string()))?;

        let distances = body
            .waypoints
            .clone()
            .unwrap_or_else(|| DEFAULT_WAYPOINT_DISTANCES.to_vec());
        let cruise = Altitude::ft(body.cruising_alt.unwrap_or(DEFAULT_CRUISING_ALT_FT));

        debug!(
            "flight plan from {} to runway {} of {}",
            departure.ident(),
            runway.designator(),
            destination.ident()
        );

        let request = ApproachRequest::new(departure, destination, runway, end, cruise, distances);
        let plan = self.planner.plan(&request)?;

        Ok(PlanRenderer::render(&plan))
    }

    /// Resolves the comma separated airport `codes`.
    ///
    /// Codes that can't be resolved are returned separately.
    pub fn lookup(&self, codes: &str) -> Result<Lookup> {
        if codes.trim().is_empty() {
            return Err(Error::InvalidRequest("'codes' parameter missing!".to_string()));
        }

        let mut lookup = Lookup::default();

        for code in codes.split(',').map(str::trim) {
            match self.resolve_airport(code) {
                Ok(arpt) => lookup.found_airports.push(arpt),
                Err(Error::NotFound(_)) => lookup.not_found_airports.push(code.to_string()),
                Err(e) => return Err(e),
            }
        }

        info!(
            "looked up {} airports, {} not found",
            lookup.found_airports.len(),
            lookup.not_found_airports.len()
        );

        Ok(lookup)
    }

    /// Returns the runways of the airport with the `ident`.
    pub fn runways(&self, ident: &str) -> Result<Vec<Runway>> {
        let arpt = self
            .index
            .find_by_ident(ident)?
            .ok_or_else(|| Error::NotFound(format!("Airport with ident '{ident}'")))?;

        self.index.runways(arpt.id())
    }

    /// Returns the airports within the map `bounds` that satisfy the
    /// approach `policy`.
    pub fn airports_in_bounds(
        &self,
        bounds: &Rect,
        policy: ApproachPolicy,
    ) -> Result<Vec<Arc<Airport>>> {
        self.index.within_bounds(bounds, policy)
    }

    fn resolve_for_route(&self, query: &str) -> Result<Arc<Airport>> {
        self.resolve_airport(query).map_err(|e| match e {
            Error::NotFound(_) => Error::InvalidRequest(format!("'{query}' airport not found")),
            e => e,
        })
    }
}

/// Returns `true` if a numeric field holds a usable value.
///
/// A zero counts as missing, as submitted by an empty form field.
fn is_given(value: f64) -> bool {
    !value.is_nan() && value != 0.0
}
