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

use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::{Bearing, Destination, Distance, Haversine};

use crate::fc;
use crate::measurements::{Angle, Length};

/// Coordinate value.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    /// Latitude in the range from -90° (south) to 90° (north).
    pub latitude: f64,

    /// Longitude in the range from -180° (west) to 180° (east).
    pub longitude: f64,
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Point::new(c.longitude, c.latitude)
    }
}

impl From<geo::Point<f64>> for Coordinate {
    fn from(p: geo::Point<f64>) -> Self {
        Self {
            latitude: p.y(),
            longitude: p.x(),
        }
    }
}

impl Coordinate {
    /// Creates a new coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the initial bearing of the great circle from this point to the
    /// `other`.
    pub fn bearing(&self, other: &Coordinate) -> Angle {
        Angle::t(Haversine.bearing((*self).into(), (*other).into()))
    }

    /// Returns the great-circle distance from this point to the `other`.
    pub fn dist(&self, other: &Coordinate) -> Length {
        Length::m(Haversine.distance((*self).into(), (*other).into()))
    }

    /// Returns the point reached after travelling `dist` along the great
    /// circle that leaves this point with the initial `bearing`.
    pub fn destination(&self, bearing: &Angle, dist: &Length) -> Coordinate {
        let p = Haversine.destination((*self).into(), bearing.degrees(), dist.to_si());
        Self {
            latitude: p.y(),
            // keep the longitude within [-180, 180) after crossing the antimeridian
            longitude: (p.x() + 180.0).rem_euclid(360.0) - 180.0,
        }
    }
}

/// Formats the coordinate as hemisphere-prefixed degrees, minutes and seconds.
///
/// The latitude comes first and both components are separated by a comma,
/// e.g. `N51° 15' 0.00",W0° 30' 0.00"`.
impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (lat_d, lat_m, lat_s) = fc::decimal_to_dms(self.latitude);
        let (lon_d, lon_m, lon_s) = fc::decimal_to_dms(self.longitude);

        let lat_hemisphere = if self.latitude >= 0.0 { 'N' } else { 'S' };
        let lon_hemisphere = if self.longitude >= 0.0 { 'E' } else { 'W' };

        write!(
            f,
            "{lat_hemisphere}{lat_d}° {lat_m}' {lat_s:.2}\",{lon_hemisphere}{lon_d}° {lon_m}' {lon_s:.2}\""
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Hamburg (EDDH) and Luebeck (EDHL) are about 28 NM apart on a course of
    // roughly 68° true.
    const EDDH: Coordinate = Coordinate {
        latitude: 53.63040,
        longitude: 9.98823,
    };
    const EDHL: Coordinate = Coordinate {
        latitude: 53.80540,
        longitude: 10.71920,
    };

    #[test]
    fn bearing() {
        assert_eq!(EDDH.bearing(&EDHL).degrees().round(), 68.0);
    }

    #[test]
    fn dist() {
        assert_eq!(EDDH.dist(&EDHL).to_nm().round(), 28.0);
    }

    #[test]
    fn bearing_westbound_is_positive() {
        let west = Coordinate::new(0.0, -1.0);
        let origin = Coordinate::new(0.0, 0.0);
        assert!((origin.bearing(&west).degrees() - 270.0).abs() < 1e-6);
    }

    #[test]
    fn destination_due_north() {
        // one degree of latitude is about 60 NM
        let origin = Coordinate::new(0.0, 0.0);
        let north = origin.destination(&Angle::t(0.0), &Length::nm(60.0));
        assert!((north.latitude - 0.9993).abs() < 0.001);
        assert!(north.longitude.abs() < 1e-9);
    }

    #[test]
    fn dms_display() {
        let c = Coordinate::new(51.25, -0.5);
        assert_eq!(c.to_string(), "N51° 15' 0.00\",W0° 30' 0.00\"");
    }

    #[test]
    fn dms_display_southern_eastern() {
        let c = Coordinate::new(-33.9461, 151.1772);
        assert_eq!(c.to_string(), "S33° 56' 45.96\",E151° 10' 37.92\"");
    }
}
