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

use geo::{Distance, Haversine, Point, Rect};
use rstar::primitives::GeomWithData;
use rstar::{RTree, AABB};

use super::Airport;
use crate::measurements::constants::NAUTICAL_MILES_PER_DEGREE;
use crate::measurements::Length;

/// Spatial index over the airport positions.
#[derive(Clone, Debug, Default)]
pub struct AirportTree {
    tree: RTree<GeomWithData<Point<f64>, Arc<Airport>>>,
}

impl AirportTree {
    /// Creates an index from an iterator of airports.
    pub fn new<'a>(airports: impl Iterator<Item = &'a Arc<Airport>>) -> Self {
        let entries = airports
            .map(|airport| GeomWithData::new(airport.coordinate, Arc::clone(airport)))
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Returns airports whose great-circle distance from `center` lies within
    /// `inner` and `outer`, both inclusive.
    ///
    /// The R-tree is queried with the envelopes that bound the outer circle.
    /// Candidates are then filtered by their actual haversine distance.
    pub fn within_annulus(
        &self,
        center: &Point<f64>,
        inner: Length,
        outer: Length,
    ) -> Vec<&Arc<Airport>> {
        let center = *center;
        let inner_m = inner.to_si();
        let outer_m = outer.to_si();

        envelopes(&center, outer)
            .iter()
            .flat_map(|envelope| self.tree.locate_in_envelope_intersecting(envelope))
            .filter(|entry| {
                let d = Haversine.distance(center, *entry.geom());
                d >= inner_m && d <= outer_m
            })
            .map(|entry| &entry.data)
            .collect()
    }

    /// Returns airports located within the rectangle.
    pub fn within_rect(&self, rect: &Rect<f64>) -> impl Iterator<Item = &Arc<Airport>> {
        let envelope = AABB::from_corners(
            Point::new(rect.min().x, rect.min().y),
            Point::new(rect.max().x, rect.max().y),
        );

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| &entry.data)
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

/// Returns the lon/lat boxes that cover the circle of `radius` around the
/// `center`.
///
/// Circles that enclose a pole cover all longitudes. Boxes that cross the
/// antimeridian are split in two.
fn envelopes(center: &Point<f64>, radius: Length) -> Vec<AABB<Point<f64>>> {
    // small margin so that points on the circle are never cut off
    let radius_deg = radius.to_nm() / NAUTICAL_MILES_PER_DEGREE * 1.0001;
    let (lon, lat) = (center.x(), center.y());

    let south = (lat - radius_deg).max(-90.0);
    let north = (lat + radius_deg).min(90.0);

    if lat.abs() + radius_deg >= 90.0 {
        return vec![AABB::from_corners(
            Point::new(-180.0, south),
            Point::new(180.0, north),
        )];
    }

    // widest longitude extent of a spherical cap
    let ratio = radius_deg.to_radians().sin() / lat.to_radians().cos();
    let lon_expansion = if ratio >= 1.0 {
        180.0
    } else {
        ratio.asin().to_degrees()
    };

    if lon_expansion >= 180.0 {
        return vec![AABB::from_corners(
            Point::new(-180.0, south),
            Point::new(180.0, north),
        )];
    }

    let west = lon - lon_expansion;
    let east = lon + lon_expansion;

    if west < -180.0 {
        vec![
            AABB::from_corners(Point::new(-180.0, south), Point::new(east, north)),
            AABB::from_corners(Point::new(west + 360.0, south), Point::new(180.0, north)),
        ]
    } else if east > 180.0 {
        vec![
            AABB::from_corners(Point::new(west, south), Point::new(180.0, north)),
            AABB::from_corners(Point::new(-180.0, south), Point::new(east - 360.0, north)),
        ]
    } else {
        vec![AABB::from_corners(
            Point::new(west, south),
            Point::new(east, north),
        )]
    }
}
