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

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info, trace, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use super::{Route, RouteRequest};
use crate::error::{Error, Result};
use crate::measurements::Length;
use crate::nd::{Airport, AirportIndex};

/// Number of airports after which the destination is appended directly.
pub const ROUTE_LIMIT: usize = 49;

/// Number of widened searches before giving up on an intermediate airport.
pub const MAX_RETRIES: u32 = 60;

/// Growth of the outer search radius per retry.
pub const RETRY_STEP_NM: f64 = 50.0;

/// Smallest bearing tolerance used once the search is widened.
pub const RETRY_MIN_ANGLE: f64 = 75.0;

/// Generates random routes over an airport index.
///
/// Starting at the origin, the generator repeatedly picks a random airport
/// among those within the leg distances whose bearing points roughly towards
/// the destination. Once the destination is within reach of a single leg, or
/// the route holds [`ROUTE_LIMIT`] airports, the destination is appended.
///
/// # Examples
///
/// ```
/// # use std::sync::Arc;
/// # use rand::SeedableRng;
/// # use rand::rngs::StdRng;
/// # use skyhop::coord;
/// # use skyhop::measurements::Length;
/// # use skyhop::nd::{Airport, AirportData};
/// # use skyhop::route::{RouteGenerator, RouteRequest};
/// let mut builder = AirportData::builder();
/// builder
///     .add_airport(Airport::new(1, "EDDH", "Hamburg", coord!(53.6304, 9.98823)))
///     .add_airport(Airport::new(2, "EDHL", "Luebeck", coord!(53.8054, 10.7192)));
/// let nd = builder.build();
///
/// let eddh = Arc::new(Airport::new(1, "EDDH", "Hamburg", coord!(53.6304, 9.98823)));
/// let edhl = Arc::new(Airport::new(2, "EDHL", "Luebeck", coord!(53.8054, 10.7192)));
/// let request = RouteRequest::new(eddh, edhl, Length::nm(10.0), Length::nm(50.0), 45.0).unwrap();
///
/// let route = RouteGenerator::new(&nd)
///     .generate(&request, &mut StdRng::seed_from_u64(1))
///     .unwrap();
///
/// assert_eq!(route.idents(), vec!["EDDH", "EDHL"]);
/// ```
#[derive(Clone, Debug)]
pub struct RouteGenerator<I> {
    index: I,
    deadline: Option<Instant>,
    timeout: Option<Duration>,
}

impl<I: AirportIndex> RouteGenerator<I> {
    pub fn new(index: I) -> Self {
        Self {
            index,
            deadline: None,
            timeout: None,
        }
    }

    /// Fails the generation with [`Error::DeadlineExceeded`] once the
    /// `deadline` has passed.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Like [`with_deadline`](Self::with_deadline) but relative to the start
    /// of each generation.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Generates a route for the `request`, picking airports with the `rng`.
    ///
    /// # Errors
    ///
    /// Propagates failures of the index and returns
    /// [`Error::DeadlineExceeded`] if a deadline is set and has passed. No
    /// partial route is returned in either case.
    pub fn generate<R: Rng + ?Sized>(&self, request: &RouteRequest, rng: &mut R) -> Result<Route> {
        let origin = request.origin();
        let destination = request.destination();

        info!(
            "generating route from {} to {}",
            origin.ident(),
            destination.ident()
        );

        let mut route = vec![Arc::clone(origin)];

        if origin.id() == destination.id() {
            debug!("origin is the destination");
            return Ok(Route::new(route));
        }

        let deadline = self
            .deadline
            .or_else(|| self.timeout.map(|timeout| Instant::now() + timeout));

        let mut visited: HashSet<u32> = HashSet::from([origin.id()]);
        let mut last = Arc::clone(origin);

        loop {
            if let Some(deadline) = deadline {
                if Instant::now() >= deadline {
                    warn!(
                        "route from {} to {} exceeded its deadline after {} airports",
                        origin.ident(),
                        destination.ident(),
                        route.len()
                    );
                    return Err(Error::DeadlineExceeded);
                }
            }

            let remaining = last.coordinate().dist(&destination.coordinate());

            if remaining <= request.max_distance() || route.len() >= ROUTE_LIMIT {
                if last.id() != destination.id() {
                    route.push(Arc::clone(destination));
                }
                break;
            }

            match self.next_hop(&last, request, remaining, &visited, rng)? {
                Some(next) => {
                    debug!("next airport {} after {}", next.ident(), last.ident());
                    visited.insert(next.id());
                    route.push(Arc::clone(&next));
                    last = next;
                }
                None => {
                    debug!(
                        "search exhausted at {}, continuing direct to {}",
                        last.ident(),
                        destination.ident()
                    );
                    route.push(Arc::clone(destination));
                    break;
                }
            }
        }

        let route = Route::new(route);
        info!("generated route {} ({:.0})", route, route.total_distance());

        Ok(route)
    }

    /// Picks the airport following `last`, widening the search while nothing
    /// is found.
    fn next_hop<R: Rng + ?Sized>(
        &self,
        last: &Airport,
        request: &RouteRequest,
        remaining: Length,
        visited: &HashSet<u32>,
        rng: &mut R,
    ) -> Result<Option<Arc<Airport>>> {
        let mut candidates = self.candidates(
            last,
            request,
            request.max_distance(),
            request.angle(),
            visited,
        )?;

        let mut retry = 0;
        while candidates.is_empty() && retry < MAX_RETRIES {
            retry += 1;

            let radius = request.max_distance() + Length::nm(RETRY_STEP_NM * retry as f64);
            if radius > remaining {
                debug!(
                    "widened radius {:.0} exceeds remaining {:.0}",
                    radius,
                    remaining.convert_to(*radius.unit())
                );
                break;
            }

            debug!("retry {retry}: widening search around {} to {:.0}", last.ident(), radius);
            candidates = self.candidates(
                last,
                request,
                radius,
                request.angle().max(RETRY_MIN_ANGLE),
                visited,
            )?;
        }

        Ok(candidates.choose(rng).cloned())
    }

    /// Returns the unvisited airports within `radius` of `last` that lie
    /// within `tolerance` degrees of the course to the destination.
    fn candidates(
        &self,
        last: &Airport,
        request: &RouteRequest,
        radius: Length,
        tolerance: f64,
        visited: &HashSet<u32>,
    ) -> Result<Vec<Arc<Airport>>> {
        let from = last.coordinate();
        let target = from.bearing(&request.destination().coordinate());

        let found = self.index.find_within_annulus(
            last,
            request.min_distance(),
            radius,
            request.filter(),
        )?;

        let candidates: Vec<Arc<Airport>> = found
            .into_iter()
            .filter(|arpt| !visited.contains(&arpt.id()))
            .filter(|arpt| {
                from.bearing(&arpt.coordinate())
                    .deviation_from(&target)
                    .abs()
                    <= tolerance
            })
            .collect();

        trace!(
            "{} candidates around {} within {:.0} and {tolerance}°",
            candidates.len(),
            last.ident(),
            radius
        );

        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::geom::Rect;
    use crate::measurements::constants::NAUTICAL_MILES_PER_DEGREE;
    use crate::nd::{AirportData, AirportFilter, ApproachPolicy, Runway};

    fn airport(id: u32, ident: &str, lat: f64, lon: f64) -> Airport {
        Airport::new(id, ident, ident, coord!(lat, lon)).with_longest_runway(Length::ft(8000.0))
    }

    /// Returns the longitude on the equator `nm` east of the prime meridian.
    fn east(nm: f64) -> f64 {
        nm / NAUTICAL_MILES_PER_DEGREE
    }

    fn index(airports: Vec<Airport>) -> AirportData {
        let mut builder = AirportData::builder();
        for arpt in airports {
            builder.add_airport(arpt);
        }
        builder.build()
    }

    fn request(nd: &AirportData, from: &str, to: &str, min: f64, max: f64) -> RouteRequest {
        let origin = nd.find_by_ident(from).unwrap().unwrap();
        let destination = nd.find_by_ident(to).unwrap().unwrap();
        RouteRequest::new(origin, destination, Length::nm(min), Length::nm(max), 45.0).unwrap()
    }

    #[test]
    fn walks_along_chain_of_airports() {
        //  A ---150--- P1 ---150--- P2 ---150--- P3 ---150--- B
        //  each leg between 50 and 250 NM leaves one candidate ahead
        let nd = index(vec![
            airport(1, "A", 0.0, 0.0),
            airport(2, "P1", 0.0, east(150.0)),
            airport(3, "P2", 0.0, east(300.0)),
            airport(4, "P3", 0.0, east(450.0)),
            airport(5, "B", 0.0, east(600.0)),
        ]);

        let request = request(&nd, "A", "B", 50.0, 250.0);
        let route = RouteGenerator::new(&nd)
            .generate(&request, &mut StdRng::seed_from_u64(7))
            .unwrap();

        assert_eq!(route.idents(), vec!["A", "P1", "P2", "P3", "B"]);
        for leg in route.legs() {
            assert!(leg.dist().to_nm() >= 50.0 && leg.dist().to_nm() <= 250.0);
        }
    }

    #[test]
    fn same_origin_and_destination() {
        let nd = index(vec![airport(1, "A", 0.0, 0.0), airport(2, "P1", 0.0, 1.0)]);

        let request = request(&nd, "A", "A", 50.0, 250.0);
        let route = RouteGenerator::new(&nd)
            .generate(&request, &mut StdRng::seed_from_u64(1))
            .unwrap();

        assert_eq!(route.idents(), vec!["A"]);
    }

    #[test]
    fn goes_direct_when_nothing_is_in_reach() {
        //  X (far north, off course)
        //
        //  A --------------------------- B   600 NM, nothing in between
        let nd = index(vec![
            airport(1, "A", 0.0, 0.0),
            airport(2, "B", 0.0, east(600.0)),
            airport(3, "X", 8.0, 0.0),
        ]);

        let request = request(&nd, "A", "B", 50.0, 250.0);
        let route = RouteGenerator::new(&nd)
            .generate(&request, &mut StdRng::seed_from_u64(1))
            .unwrap();

        assert_eq!(route.idents(), vec!["A", "B"]);
    }

    #[test]
    fn widens_radius_beyond_max_distance() {
        //  A ---280--- X ------------------------- B   1200 NM
        //  X is beyond 250 NM and found on the first retry
        let nd = index(vec![
            airport(1, "A", 0.0, 0.0),
            airport(2, "X", 0.0, east(280.0)),
            airport(3, "B", 0.0, east(1200.0)),
        ]);

        let request = request(&nd, "A", "B", 50.0, 250.0);
        let route = RouteGenerator::new(&nd)
            .generate(&request, &mut StdRng::seed_from_u64(1))
            .unwrap();

        assert_eq!(route.idents(), vec!["A", "X", "B"]);
    }

    #[test]
    fn widens_bearing_tolerance_on_retry() {
        //        Y      60° off course, outside the 45° cone
        //       /
        //  A --------------------------- B
        let y = crate::geom::Coordinate::new(0.0, 0.0)
            .destination(&crate::measurements::Angle::t(30.0), &Length::nm(150.0));

        let nd = index(vec![
            airport(1, "A", 0.0, 0.0),
            airport(2, "B", 0.0, east(600.0)),
            airport(3, "Y", y.latitude, y.longitude),
        ]);

        let request = request(&nd, "A", "B", 50.0, 250.0);
        let route = RouteGenerator::new(&nd)
            .generate(&request, &mut StdRng::seed_from_u64(1))
            .unwrap();

        assert_eq!(route.idents(), vec!["A", "Y", "B"]);
    }

    #[test]
    fn route_is_capped() {
        // 100 airports 60 NM apart, each leg may only be 50 to 70 NM long
        let chain: Vec<Airport> = (0..=100)
            .map(|i| airport(i + 1, &format!("P{i}"), 0.0, east(60.0 * i as f64)))
            .collect();
        let nd = index(chain);

        let request = request(&nd, "P0", "P100", 50.0, 70.0);
        let route = RouteGenerator::new(&nd)
            .generate(&request, &mut StdRng::seed_from_u64(1))
            .unwrap();

        assert_eq!(route.len(), ROUTE_LIMIT + 1);
        assert_eq!(route.destination().unwrap().ident(), "P100");
        assert_eq!(route.airports()[ROUTE_LIMIT - 1].ident(), "P48");
    }

    #[test]
    fn no_airport_is_visited_twice() {
        // a dense grid around the course
        let mut airports = vec![airport(1, "A", 0.0, 0.0), airport(2, "B", 0.0, 10.0)];
        let mut id = 3;
        for lat in -3..=3 {
            for lon in 1..10 {
                airports.push(airport(id, &format!("G{id}"), lat as f64, lon as f64));
                id += 1;
            }
        }
        let nd = index(airports);

        for seed in 0..20 {
            let request = request(&nd, "A", "B", 50.0, 150.0);
            let route = RouteGenerator::new(&nd)
                .generate(&request, &mut StdRng::seed_from_u64(seed))
                .unwrap();

            let ids: HashSet<u32> = route.airports().iter().map(|a| a.id()).collect();
            assert_eq!(ids.len(), route.len());
            assert_eq!(route.origin().unwrap().ident(), "A");
            assert_eq!(route.destination().unwrap().ident(), "B");
        }
    }

    #[test]
    fn deadline_aborts_generation() {
        let nd = index(vec![
            airport(1, "A", 0.0, 0.0),
            airport(2, "B", 0.0, east(600.0)),
        ]);

        let request = request(&nd, "A", "B", 50.0, 250.0);
        let result = RouteGenerator::new(&nd)
            .with_timeout(Duration::ZERO)
            .generate(&request, &mut StdRng::seed_from_u64(1));

        assert_eq!(result, Err(Error::DeadlineExceeded));
    }

    /// Counts the annulus queries answered by the wrapped index.
    struct CountingIndex {
        inner: AirportData,
        annulus_queries: Cell<usize>,
    }

    impl AirportIndex for CountingIndex {
        fn find_by_ident(&self, ident: &str) -> Result<Option<Arc<Airport>>> {
            self.inner.find_by_ident(ident)
        }

        fn find_by_text(&self, query: &str) -> Result<Vec<Arc<Airport>>> {
            self.inner.find_by_text(query)
        }

        fn find_within_annulus(
            &self,
            center: &Airport,
            min: Length,
            max: Length,
            filter: &AirportFilter,
        ) -> Result<Vec<Arc<Airport>>> {
            self.annulus_queries.set(self.annulus_queries.get() + 1);
            self.inner.find_within_annulus(center, min, max, filter)
        }

        fn find_by_id(&self, id: u32) -> Result<Option<Arc<Airport>>> {
            self.inner.find_by_id(id)
        }

        fn runway(&self, id: u32) -> Result<Option<Runway>> {
            self.inner.runway(id)
        }

        fn runways(&self, airport_id: u32) -> Result<Vec<Runway>> {
            self.inner.runways(airport_id)
        }

        fn within_bounds(&self, bounds: &Rect, policy: ApproachPolicy) -> Result<Vec<Arc<Airport>>> {
            self.inner.within_bounds(bounds, policy)
        }
    }

    #[test]
    fn goes_direct_after_all_retries() {
        //   A ----------------- 3200 NM ----------------- B
        //   the widest search reaches 50 + 60 * 50 = 3050 NM
        let nd = index(vec![
            airport(1, "A", 0.0, 0.0),
            airport(2, "B", 0.0, east(3200.0)),
        ]);
        let request = request(&nd, "A", "B", 10.0, 50.0);

        let counting = CountingIndex {
            inner: nd,
            annulus_queries: Cell::new(0),
        };

        let route = RouteGenerator::new(&counting)
            .generate(&request, &mut StdRng::seed_from_u64(1))
            .unwrap();

        assert_eq!(route.idents(), vec!["A", "B"]);
        assert_eq!(counting.annulus_queries.get(), 1 + MAX_RETRIES as usize);
    }

    struct OfflineIndex;

    impl AirportIndex for OfflineIndex {
        fn find_by_ident(&self, _: &str) -> Result<Option<Arc<Airport>>> {
            Err(Error::Index("offline".to_string()))
        }

        fn find_by_text(&self, _: &str) -> Result<Vec<Arc<Airport>>> {
            Err(Error::Index("offline".to_string()))
        }

        fn find_within_annulus(
            &self,
            _: &Airport,
            _: Length,
            _: Length,
            _: &AirportFilter,
        ) -> Result<Vec<Arc<Airport>>> {
            Err(Error::Index("offline".to_string()))
        }

        fn find_by_id(&self, _: u32) -> Result<Option<Arc<Airport>>> {
            Err(Error::Index("offline".to_string()))
        }

        fn runway(&self, _: u32) -> Result<Option<Runway>> {
            Err(Error::Index("offline".to_string()))
        }

        fn runways(&self, _: u32) -> Result<Vec<Runway>> {
            Err(Error::Index("offline".to_string()))
        }

        fn within_bounds(&self, _: &Rect, _: ApproachPolicy) -> Result<Vec<Arc<Airport>>> {
            Err(Error::Index("offline".to_string()))
        }
    }

    #[test]
    fn index_failure_is_propagated() {
        let origin = Arc::new(airport(1, "A", 0.0, 0.0));
        let destination = Arc::new(airport(2, "B", 0.0, east(600.0)));
        let request =
            RouteRequest::new(origin, destination, Length::nm(50.0), Length::nm(250.0), 45.0)
                .unwrap();

        let result = RouteGenerator::new(OfflineIndex).generate(&request, &mut StdRng::seed_from_u64(1));

        assert_eq!(result, Err(Error::Index("offline".to_string())));
    }
}
