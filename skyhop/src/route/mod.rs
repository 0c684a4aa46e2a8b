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

//! Random multi-leg routes between two airports.
//!
//! A [`RouteRequest`] describes the origin, the destination and the
//! constraints of every leg. The [`RouteGenerator`] walks from the origin
//! towards the destination by randomly picking the next airport among those
//! in reach and roughly ahead.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use log::warn;

use crate::error::{Error, Result};
use crate::measurements::{Length, LengthUnit};
use crate::nd::{Airport, AirportFilter, ApproachPolicy};

mod generator;
mod leg;

pub use generator::*;
pub use leg::Leg;

/// Minimum distance of a leg the generator accepts.
pub const MIN_LEG_DISTANCE_NM: f64 = 5.0;

/// An ordered list of airports from the origin to the destination.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Route {
    airports: Vec<Arc<Airport>>,
}

impl Route {
    /// Creates a route that visits the `airports` in order.
    pub fn new(airports: Vec<Arc<Airport>>) -> Self {
        Self { airports }
    }

    pub fn airports(&self) -> &[Arc<Airport>] {
        &self.airports
    }

    pub fn origin(&self) -> Option<&Arc<Airport>> {
        self.airports.first()
    }

    pub fn destination(&self) -> Option<&Arc<Airport>> {
        self.airports.last()
    }

    /// Returns the number of airports on the route.
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Returns the legs between consecutive airports.
    pub fn legs(&self) -> Vec<Leg> {
        self.airports
            .windows(2)
            .map(|pair| Leg::new(Arc::clone(&pair[0]), Arc::clone(&pair[1])))
            .collect()
    }

    /// Returns the sum of all leg distances in nautical miles.
    pub fn total_distance(&self) -> Length {
        self.legs()
            .iter()
            .map(|leg| *leg.dist())
            .sum::<Length>()
            .convert_to(LengthUnit::NauticalMiles)
    }

    /// Returns the idents of the airports in order.
    pub fn idents(&self) -> Vec<&str> {
        self.airports.iter().map(|arpt| arpt.ident()).collect()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.idents().join(" "))
    }
}

/// The origin, destination and leg constraints of a route.
#[derive(Clone, PartialEq, Debug)]
pub struct RouteRequest {
    origin: Arc<Airport>,
    destination: Arc<Airport>,
    min_distance: Length,
    max_distance: Length,
    angle: f64,
    filter: AirportFilter,
}

impl RouteRequest {
    /// Creates a request with the default airport filter.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidRequest`] if the minimum distance is below
    /// 5 NM, the maximum is not above the minimum or the angle is not within
    /// 0° and 360°.
    pub fn new(
        origin: Arc<Airport>,
        destination: Arc<Airport>,
        min_distance: Length,
        max_distance: Length,
        angle: f64,
    ) -> Result<Self> {
        Self::builder(origin, destination)
            .min_distance(min_distance)
            .max_distance(max_distance)
            .angle(angle)
            .build()
    }

    /// Returns a builder preset with the defaults of the route form.
    pub fn builder(origin: Arc<Airport>, destination: Arc<Airport>) -> RouteRequestBuilder {
        RouteRequestBuilder::new(origin, destination)
    }

    pub fn origin(&self) -> &Arc<Airport> {
        &self.origin
    }

    pub fn destination(&self) -> &Arc<Airport> {
        &self.destination
    }

    pub fn min_distance(&self) -> Length {
        self.min_distance
    }

    pub fn max_distance(&self) -> Length {
        self.max_distance
    }

    /// The maximum deviation in degrees from the course to the destination.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn filter(&self) -> &AirportFilter {
        &self.filter
    }
}

/// Builds a [`RouteRequest`].
///
/// ```
/// # use std::sync::Arc;
/// # use skyhop::coord;
/// # use skyhop::measurements::Length;
/// # use skyhop::nd::Airport;
/// # use skyhop::route::RouteRequest;
/// let eddh = Arc::new(Airport::new(1, "EDDH", "Hamburg", coord!(53.6304, 9.98823)));
/// let eddm = Arc::new(Airport::new(2, "EDDM", "Munich", coord!(48.3538, 11.7861)));
///
/// let request = RouteRequest::builder(eddh, eddm)
///     .max_distance(Length::nm(150.0))
///     .angle(30.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.min_distance(), Length::nm(50.0));
/// ```
#[derive(Clone, Debug)]
pub struct RouteRequestBuilder {
    origin: Arc<Airport>,
    destination: Arc<Airport>,
    min_distance: Length,
    max_distance: Length,
    angle: f64,
    min_runway_length: Length,
    approach: ApproachPolicy,
    include_military: bool,
}

impl RouteRequestBuilder {
    pub fn new(origin: Arc<Airport>, destination: Arc<Airport>) -> Self {
        Self {
            origin,
            destination,
            min_distance: Length::nm(50.0),
            max_distance: Length::nm(250.0),
            angle: 45.0,
            min_runway_length: Length::ft(1001.0),
            approach: ApproachPolicy::All,
            include_military: false,
        }
    }

    pub fn min_distance(mut self, min_distance: Length) -> Self {
        self.min_distance = min_distance;
        self
    }

    pub fn max_distance(mut self, max_distance: Length) -> Self {
        self.max_distance = max_distance;
        self
    }

    pub fn angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn min_runway_length(mut self, length: Length) -> Self {
        self.min_runway_length = length;
        self
    }

    pub fn approach(mut self, policy: ApproachPolicy) -> Self {
        self.approach = policy;
        self
    }

    pub fn include_military(mut self, include: bool) -> Self {
        self.include_military = include;
        self
    }

    pub fn build(self) -> Result<RouteRequest> {
        check_limits(self.min_distance, self.max_distance, self.angle)?;

        Ok(RouteRequest {
            origin: self.origin,
            destination: self.destination,
            min_distance: self.min_distance.convert_to(LengthUnit::NauticalMiles),
            max_distance: self.max_distance.convert_to(LengthUnit::NauticalMiles),
            angle: self.angle,
            filter: AirportFilter {
                min_runway_length: self.min_runway_length,
                approach: self.approach,
                include_military: self.include_military,
            },
        })
    }
}

/// Checks the leg distances and the bearing deviation of a route request.
pub(crate) fn check_limits(min_distance: Length, max_distance: Length, angle: f64) -> Result<()> {
    let min_nm = min_distance.to_nm();
    let max_nm = max_distance.to_nm();

    let reason = if !min_nm.is_finite() || min_nm < MIN_LEG_DISTANCE_NM {
        "`minDistance` must be larger than 5"
    } else if !max_nm.is_finite() || max_nm <= min_nm {
        "`maxDistance` must be larger than `minDistance`"
    } else if !(0.0..=360.0).contains(&angle) {
        "`angle` must be between 0 and 360"
    } else {
        return Ok(());
    };

    warn!("rejecting route request: {reason}");
    Err(Error::InvalidRequest(reason.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airports() -> (Arc<Airport>, Arc<Airport>) {
        (
            Arc::new(Airport::new(1, "EDDH", "Hamburg", coord!(53.6304, 9.98823))),
            Arc::new(Airport::new(2, "EDDM", "Munich", coord!(48.3538, 11.7861))),
        )
    }

    #[test]
    fn rejects_short_legs() {
        let (eddh, eddm) = airports();
        let err = RouteRequest::new(eddh, eddm, Length::nm(4.0), Length::nm(100.0), 45.0);
        assert_eq!(
            err,
            Err(Error::InvalidRequest(
                "`minDistance` must be larger than 5".to_string()
            ))
        );
    }

    #[test]
    fn rejects_max_not_above_min() {
        let (eddh, eddm) = airports();
        let err = RouteRequest::new(eddh, eddm, Length::nm(50.0), Length::nm(50.0), 45.0);
        assert_eq!(
            err,
            Err(Error::InvalidRequest(
                "`maxDistance` must be larger than `minDistance`".to_string()
            ))
        );
    }

    #[test]
    fn rejects_angle_out_of_range() {
        let (eddh, eddm) = airports();
        for angle in [-1.0, 360.5, f64::NAN] {
            let err = RouteRequest::new(
                Arc::clone(&eddh),
                Arc::clone(&eddm),
                Length::nm(50.0),
                Length::nm(250.0),
                angle,
            );
            assert_eq!(
                err,
                Err(Error::InvalidRequest(
                    "`angle` must be between 0 and 360".to_string()
                ))
            );
        }
    }

    #[test]
    fn accepts_boundary_values() {
        let (eddh, eddm) = airports();
        let request = RouteRequest::new(eddh, eddm, Length::nm(5.0), Length::nm(5.1), 360.0);
        assert!(request.is_ok());
    }

    #[test]
    fn builder_defaults() {
        let (eddh, eddm) = airports();
        let request = RouteRequest::builder(eddh, eddm).build().unwrap();

        assert_eq!(request.min_distance(), Length::nm(50.0));
        assert_eq!(request.max_distance(), Length::nm(250.0));
        assert_eq!(request.angle(), 45.0);
        assert_eq!(request.filter().min_runway_length, Length::ft(1001.0));
        assert_eq!(request.filter().approach, ApproachPolicy::All);
        assert!(!request.filter().include_military);
    }

    #[test]
    fn route_legs_and_total() {
        //  EDDH ---28 NM--- EDHL
        //    \
        //     ~8 NM
        //      EDHI
        let eddh = Arc::new(Airport::new(1, "EDDH", "Hamburg", coord!(53.6304, 9.98823)));
        let edhl = Arc::new(Airport::new(2, "EDHL", "Luebeck", coord!(53.8054, 10.7192)));
        let edhi = Arc::new(Airport::new(3, "EDHI", "Finkenwerder", coord!(53.5353, 9.83553)));

        let route = Route::new(vec![edhi, eddh, edhl]);

        assert_eq!(route.idents(), vec!["EDHI", "EDDH", "EDHL"]);
        assert_eq!(route.to_string(), "EDHI EDDH EDHL");

        let legs = route.legs();
        assert_eq!(legs.len(), 2);

        let expected = *legs[0].dist() + *legs[1].dist();
        assert!((route.total_distance().to_nm() - expected.to_nm()).abs() < 1e-9);
        assert_eq!(*route.total_distance().unit(), LengthUnit::NauticalMiles);
    }

    #[test]
    fn empty_route_has_no_legs() {
        let route = Route::default();
        assert!(route.legs().is_empty());
        assert_eq!(route.total_distance().to_nm(), 0.0);
        assert!(route.origin().is_none());
    }
}
