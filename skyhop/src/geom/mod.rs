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

//! Great-circle geometry.
//!
//! Distances, bearings and destinations are computed on the mean earth sphere
//! with the haversine formulas of the [`geo`] crate.

mod coordinate;

pub use coordinate::Coordinate;

/// A position with the longitude as `x` and the latitude as `y`.
pub type Point = geo::Point<f64>;

/// A window on the map, e.g. the visible area of a chart.
pub type Rect = geo::Rect<f64>;
