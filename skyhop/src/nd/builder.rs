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

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, warn};

use super::index::AirportTree;
use super::*;

/// Collects airports and runways into [`AirportData`].
#[derive(Default)]
pub struct AirportDataBuilder {
    airports: HashMap<String, Airport>,
    runways: Vec<Runway>,
}

impl AirportDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an airport. An airport with the same ident replaces the previous.
    pub fn add_airport(&mut self, airport: Airport) -> &mut Self {
        let ident = airport.ident().to_uppercase();
        if self.airports.insert(ident, airport).is_some() {
            warn!("duplicate airport ident, keeping the last one");
        }
        self
    }

    pub fn add_runway(&mut self, runway: Runway) -> &mut Self {
        self.runways.push(runway);
        self
    }

    pub fn build(self) -> AirportData {
        let mut airports = self.airports;

        // the longest runway of an airport is at least as long as its runways
        let mut longest: HashMap<u32, Length> = HashMap::new();
        for rwy in &self.runways {
            longest
                .entry(rwy.airport_id)
                .and_modify(|l| {
                    if rwy.length > *l {
                        *l = rwy.length;
                    }
                })
                .or_insert(rwy.length);
        }

        for arpt in airports.values_mut() {
            if let Some(length) = longest.get(&arpt.id) {
                if *length > arpt.longest_runway {
                    arpt.longest_runway = *length;
                }
            }
        }

        let mut airports: Vec<Arc<Airport>> = airports.into_values().map(Arc::new).collect();
        airports.sort_by_key(|arpt| arpt.id);

        let by_ident = airports
            .iter()
            .map(|arpt| (arpt.ident().to_uppercase(), Arc::clone(arpt)))
            .collect();
        let by_id = airports
            .iter()
            .map(|arpt| (arpt.id, Arc::clone(arpt)))
            .collect();

        let mut runways_by_airport: HashMap<u32, Vec<u32>> = HashMap::new();
        let mut runways = HashMap::new();
        for rwy in self.runways {
            runways_by_airport
                .entry(rwy.airport_id)
                .or_default()
                .push(rwy.id);
            runways.insert(rwy.id, rwy);
        }

        let tree = AirportTree::new(airports.iter());

        debug!(
            "built airport data with {} airports and {} runways",
            airports.len(),
            runways.len()
        );

        AirportData {
            airports,
            by_ident,
            by_id,
            runways,
            runways_by_airport,
            tree,
        }
    }
}
