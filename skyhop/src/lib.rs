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

//! Random cross-country routes and approach plans for flight simulators.
//!
//! The crate generates multi-leg routes between two airports where every leg
//! stays within a distance band and heads roughly towards the destination.
//! For the last leg it builds an approach plan into a runway of the
//! destination and writes it as a `.pln` flight plan file.
//!
//! # Generating a route
//!
//! ```
//! use std::sync::Arc;
//!
//! use rand::SeedableRng;
//! use skyhop::prelude::*;
//!
//! let mut builder = AirportData::builder();
//! builder
//!     .add_airport(Airport::new(1, "EDDH", "Hamburg", coord!(53.6304, 9.98823)))
//!     .add_airport(Airport::new(2, "EDHL", "Luebeck", coord!(53.8054, 10.7192)));
//! let data = builder.build();
//!
//! let origin = data.find_by_ident("EDDH")?.expect("EDDH exists");
//! let destination = data.find_by_ident("EDHL")?.expect("EDHL exists");
//!
//! let request = RouteRequest::builder(origin, destination)
//!     .min_distance(Length::nm(10.0))
//!     .max_distance(Length::nm(50.0))
//!     .min_runway_length(Length::ft(0.0))
//!     .build()?;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let route = RouteGenerator::new(&data).generate(&request, &mut rng)?;
//!
//! assert_eq!(route.to_string(), "EDDH EDHL");
//! # Ok::<(), skyhop::Error>(())
//! ```
//!
//! # Features
//!
//! - `serde` derives serialization of airports, runways, routes and plans.
//! - `geojson` exports routes as GeoJSON features for map display.

#[macro_use]
mod macros;

pub mod approach;
pub mod dispatch;
mod error;
pub mod fc;
#[cfg(feature = "geojson")]
mod geojson;
pub mod geom;
pub mod measurements;
pub mod nd;
pub mod pln;
pub mod route;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::approach::{
        ApproachPlan, ApproachPlanner, ApproachRequest, Waypoint, WaypointKind,
    };
    pub use crate::dispatch::{Dispatcher, FlightPlanRequestBody, Lookup, RouteRequestBody};
    pub use crate::geom::{Coordinate, Point, Rect};
    pub use crate::measurements::{Altitude, Angle, Length};
    pub use crate::nd::{
        Airport, AirportData, AirportFilter, AirportIndex, ApproachPolicy, Runway, RunwayEnd,
        RunwayEndKind,
    };
    pub use crate::pln::PlanRenderer;
    pub use crate::route::{Leg, Route, RouteGenerator, RouteRequest};
    pub use crate::{bounds, coord};
    pub use crate::{Error, Result};
}
