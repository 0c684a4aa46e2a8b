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

/// Creates a [`geo::Point<f64>`] from latitude and longitude.
///
/// ```
/// use skyhop::coord;
///
/// // Hamburg
/// let eddh = coord!(53.6304, 9.98823);
/// assert_eq!(eddh.x(), 9.98823);
/// ```
///
/// Note: This macro accepts (latitude, longitude) but internally creates
/// the geo::Point with (longitude, latitude) to match geo's coordinate order.
#[macro_export]
macro_rules! coord {
    ($latitude:expr, $longitude:expr) => {
        geo::Point::new($longitude, $latitude)
    };
}

/// Creates a [`Rect`] from the south-west and north-east corner given as
/// (latitude, longitude).
///
/// [`Rect`]: crate::geom::Rect
#[macro_export]
macro_rules! bounds {
    (($south:expr, $west:expr), ($north:expr, $east:expr) $(,)?) => {
        geo::Rect::new(
            geo::Coord { x: $west, y: $south },
            geo::Coord { x: $east, y: $north },
        )
    };
}
