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

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::Point;

use crate::geom::Coordinate;
use crate::measurements::{Altitude, Length};

/// An airport of the dataset.
///
/// Airports are loaded once and shared read-only between all requests.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Airport {
    pub(crate) id: u32,
    pub(crate) ident: String,
    pub(crate) name: String,
    pub(crate) city: Option<String>,
    pub(crate) coordinate: Point<f64>,
    pub(crate) elevation: Altitude,
    pub(crate) longest_runway: Length,
    pub(crate) country_code: Option<String>,
    pub(crate) country_name: Option<String>,
    pub(crate) approaches: Option<Vec<String>>,
    pub(crate) military: bool,
}

impl Airport {
    /// Creates a civil airport at sea level without runways or approaches.
    pub fn new(id: u32, ident: &str, name: &str, coordinate: Point<f64>) -> Self {
        Self {
            id,
            ident: ident.to_string(),
            name: name.to_string(),
            city: None,
            coordinate,
            elevation: Altitude::ft(0.0),
            longest_runway: Length::ft(0.0),
            country_code: None,
            country_name: None,
            approaches: None,
            military: false,
        }
    }

    pub fn with_city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }

    pub fn with_elevation(mut self, elevation: Altitude) -> Self {
        self.elevation = elevation;
        self
    }

    pub fn with_longest_runway(mut self, length: Length) -> Self {
        self.longest_runway = length;
        self
    }

    pub fn with_country(mut self, code: &str, name: &str) -> Self {
        self.country_code = Some(code.to_string());
        self.country_name = Some(name.to_string());
        self
    }

    /// Sets the published approach types, e.g. `["ILS", "RNAV"]`.
    pub fn with_approaches(mut self, approaches: &[&str]) -> Self {
        self.approaches = Some(approaches.iter().map(|a| a.to_string()).collect());
        self
    }

    pub fn with_military(mut self, military: bool) -> Self {
        self.military = military;
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// The ICAO-like identifier, e.g. `EDDH`.
    pub fn ident(&self) -> &str {
        &self.ident
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn point(&self) -> Point<f64> {
        self.coordinate
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate.into()
    }

    pub fn elevation(&self) -> Altitude {
        self.elevation
    }

    pub fn longest_runway(&self) -> Length {
        self.longest_runway
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    pub fn country_name(&self) -> Option<&str> {
        self.country_name.as_deref()
    }

    /// The published approach types.
    pub fn approaches(&self) -> &[String] {
        self.approaches.as_deref().unwrap_or_default()
    }

    /// Returns `true` if an approach of the `kind` is published, ignoring case.
    pub fn has_approach(&self, kind: &str) -> bool {
        self.approaches()
            .iter()
            .any(|approach| approach.eq_ignore_ascii_case(kind))
    }

    pub fn is_military(&self) -> bool {
        self.military
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.ident, self.name)
    }
}
