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

//! Airport data.
//!
//! The route generator and the approach planner read airports and runways
//! through the [`AirportIndex`] trait. [`AirportData`] is the in-memory
//! implementation backed by an R-tree.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geom::Rect;
use crate::measurements::Length;

mod airport;
mod builder;
mod index;
mod runway;

pub use airport::Airport;
pub use builder::AirportDataBuilder;
pub use index::AirportTree;
pub use runway::*;

/// The kind of published approach a candidate airport must offer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ApproachPolicy {
    /// Any airport qualifies.
    #[default]
    All,
    /// The airport has at least one published approach.
    Approach,
    /// The airport has an ILS approach.
    Ils,
}

impl ApproachPolicy {
    pub fn admits(&self, airport: &Airport) -> bool {
        match self {
            Self::All => true,
            Self::Approach => !airport.approaches().is_empty(),
            Self::Ils => airport.has_approach("ILS"),
        }
    }
}

impl FromStr for ApproachPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(Self::All),
            "approach" => Ok(Self::Approach),
            "ils" => Ok(Self::Ils),
            _ => Err(Error::InvalidRequest(format!(
                "`approachType` must be one of 'all', 'approach' or 'ils', not '{s}'"
            ))),
        }
    }
}

impl fmt::Display for ApproachPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Approach => write!(f, "approach"),
            Self::Ils => write!(f, "ils"),
        }
    }
}

/// The conditions a candidate airport must satisfy.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct AirportFilter {
    /// Minimum length of the longest runway.
    pub min_runway_length: Length,
    pub approach: ApproachPolicy,
    pub include_military: bool,
}

impl Default for AirportFilter {
    fn default() -> Self {
        Self {
            min_runway_length: Length::ft(0.0),
            approach: ApproachPolicy::All,
            include_military: true,
        }
    }
}

impl AirportFilter {
    pub fn admits(&self, airport: &Airport) -> bool {
        airport.longest_runway() >= self.min_runway_length
            && self.approach.admits(airport)
            && (self.include_military || !airport.is_military())
    }
}

/// Read access to airports and runways.
///
/// Implementations may be backed by a database, hence every query can fail
/// with [`Error::Index`].
pub trait AirportIndex {
    /// Returns the airport with the ident, ignoring case.
    fn find_by_ident(&self, ident: &str) -> Result<Option<Arc<Airport>>>;

    /// Returns airports matching a free-text query on ident, name and city,
    /// best match first.
    fn find_by_text(&self, query: &str) -> Result<Vec<Arc<Airport>>>;

    /// Returns the airports whose distance from `center` lies within `min`
    /// and `max` and that pass the `filter`. The center itself is never
    /// returned.
    fn find_within_annulus(
        &self,
        center: &Airport,
        min: Length,
        max: Length,
        filter: &AirportFilter,
    ) -> Result<Vec<Arc<Airport>>>;

    fn find_by_id(&self, id: u32) -> Result<Option<Arc<Airport>>>;

    fn runway(&self, id: u32) -> Result<Option<Runway>>;

    /// Returns the runways of an airport.
    fn runways(&self, airport_id: u32) -> Result<Vec<Runway>>;

    /// Returns airports within the bounds that satisfy the approach policy.
    fn within_bounds(&self, bounds: &Rect, policy: ApproachPolicy) -> Result<Vec<Arc<Airport>>>;
}

impl<T: AirportIndex + ?Sized> AirportIndex for &T {
    fn find_by_ident(&self, ident: &str) -> Result<Option<Arc<Airport>>> {
        (**self).find_by_ident(ident)
    }

    fn find_by_text(&self, query: &str) -> Result<Vec<Arc<Airport>>> {
        (**self).find_by_text(query)
    }

    fn find_within_annulus(
        &self,
        center: &Airport,
        min: Length,
        max: Length,
        filter: &AirportFilter,
    ) -> Result<Vec<Arc<Airport>>> {
        (**self).find_within_annulus(center, min, max, filter)
    }

    fn find_by_id(&self, id: u32) -> Result<Option<Arc<Airport>>> {
        (**self).find_by_id(id)
    }

    fn runway(&self, id: u32) -> Result<Option<Runway>> {
        (**self).runway(id)
    }

    fn runways(&self, airport_id: u32) -> Result<Vec<Runway>> {
        (**self).runways(airport_id)
    }

    fn within_bounds(&self, bounds: &Rect, policy: ApproachPolicy) -> Result<Vec<Arc<Airport>>> {
        (**self).within_bounds(bounds, policy)
    }
}

/// Airports and runways held in memory.
#[derive(Clone, Debug, Default)]
pub struct AirportData {
    airports: Vec<Arc<Airport>>,
    by_ident: HashMap<String, Arc<Airport>>,
    by_id: HashMap<u32, Arc<Airport>>,
    runways: HashMap<u32, Runway>,
    runways_by_airport: HashMap<u32, Vec<u32>>,
    tree: AirportTree,
}

impl AirportData {
    pub fn builder() -> AirportDataBuilder {
        AirportDataBuilder::new()
    }

    /// Returns all airports ordered by their ID.
    pub fn airports(&self) -> impl Iterator<Item = &Arc<Airport>> {
        self.airports.iter()
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

impl AirportIndex for AirportData {
    fn find_by_ident(&self, ident: &str) -> Result<Option<Arc<Airport>>> {
        Ok(self.by_ident.get(&ident.to_uppercase()).cloned())
    }

    fn find_by_text(&self, query: &str) -> Result<Vec<Arc<Airport>>> {
        let terms: Vec<String> = query
            .split_whitespace()
            .map(|term| term.to_lowercase())
            .collect();

        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let mut found: Vec<Arc<Airport>> = self
            .airports
            .iter()
            .filter(|arpt| {
                let haystack = format!(
                    "{} {} {}",
                    arpt.ident(),
                    arpt.name(),
                    arpt.city().unwrap_or_default()
                )
                .to_lowercase();
                terms.iter().all(|term| haystack.contains(term.as_str()))
            })
            .cloned()
            .collect();

        // larger airports are more likely what the user is looking for
        found.sort_by(|a, b| {
            b.longest_runway()
                .partial_cmp(&a.longest_runway())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.ident().cmp(b.ident()))
        });

        Ok(found)
    }

    fn find_within_annulus(
        &self,
        center: &Airport,
        min: Length,
        max: Length,
        filter: &AirportFilter,
    ) -> Result<Vec<Arc<Airport>>> {
        Ok(self
            .tree
            .within_annulus(&center.point(), min, max)
            .into_iter()
            .filter(|arpt| arpt.id() != center.id() && filter.admits(arpt))
            .cloned()
            .collect())
    }

    fn find_by_id(&self, id: u32) -> Result<Option<Arc<Airport>>> {
        Ok(self.by_id.get(&id).cloned())
    }

    fn runway(&self, id: u32) -> Result<Option<Runway>> {
        Ok(self.runways.get(&id).cloned())
    }

    fn runways(&self, airport_id: u32) -> Result<Vec<Runway>> {
        Ok(self
            .runways_by_airport
            .get(&airport_id)
            .into_iter()
            .flatten()
            .filter_map(|id| self.runways.get(id))
            .cloned()
            .collect())
    }

    fn within_bounds(&self, bounds: &Rect, policy: ApproachPolicy) -> Result<Vec<Arc<Airport>>> {
        Ok(self
            .tree
            .within_rect(bounds)
            .filter(|arpt| policy.admits(arpt))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_data() -> AirportData {
        let mut builder = AirportData::builder();
        builder
            .add_airport(
                Airport::new(1, "EDDH", "Hamburg", coord!(53.6304, 9.98823))
                    .with_city("Hamburg")
                    .with_longest_runway(Length::ft(12028.0))
                    .with_approaches(&["ILS", "RNAV"]),
            )
            .add_airport(
                Airport::new(2, "EDHL", "Luebeck Blankensee", coord!(53.8054, 10.7192))
                    .with_city("Luebeck")
                    .with_longest_runway(Length::ft(6890.0))
                    .with_approaches(&["RNAV"]),
            )
            .add_airport(
                Airport::new(3, "EDHI", "Hamburg Finkenwerder", coord!(53.5353, 9.83553))
                    .with_city("Hamburg")
                    .with_longest_runway(Length::ft(10433.0)),
            )
            .add_airport(
                Airport::new(4, "ETNH", "Hohn", coord!(54.3122, 9.53817))
                    .with_longest_runway(Length::ft(8000.0))
                    .with_military(true),
            );
        builder.build()
    }

    #[test]
    fn find_by_ident_ignores_case() {
        let nd = test_data();
        assert_eq!(nd.find_by_ident("edhl").unwrap().unwrap().id(), 2);
        assert!(nd.find_by_ident("XXXX").unwrap().is_none());
    }

    #[test]
    fn text_search_orders_by_runway_length() {
        let nd = test_data();
        let found = nd.find_by_text("hamburg").unwrap();
        let idents: Vec<&str> = found.iter().map(|a| a.ident()).collect();
        assert_eq!(idents, vec!["EDDH", "EDHI"]);

        assert!(nd.find_by_text("  ").unwrap().is_empty());
    }

    #[test]
    fn annulus_applies_filter_and_skips_center() {
        let nd = test_data();
        let eddh = nd.find_by_ident("EDDH").unwrap().unwrap();

        let filter = AirportFilter::default();
        let found = nd
            .find_within_annulus(&eddh, Length::nm(0.0), Length::nm(100.0), &filter)
            .unwrap();
        assert_eq!(found.len(), 3);

        let filter = AirportFilter {
            min_runway_length: Length::ft(7000.0),
            approach: ApproachPolicy::All,
            include_military: false,
        };
        let found = nd
            .find_within_annulus(&eddh, Length::nm(0.0), Length::nm(100.0), &filter)
            .unwrap();
        let idents: Vec<&str> = found.iter().map(|a| a.ident()).collect();
        assert_eq!(idents, vec!["EDHI"]);
    }

    #[test]
    fn approach_policy() {
        let nd = test_data();
        let bounds = bounds!((53.0, 9.0), (55.0, 11.0));

        assert_eq!(nd.within_bounds(&bounds, ApproachPolicy::All).unwrap().len(), 4);
        assert_eq!(
            nd.within_bounds(&bounds, ApproachPolicy::Approach)
                .unwrap()
                .len(),
            2
        );

        let ils = nd.within_bounds(&bounds, ApproachPolicy::Ils).unwrap();
        assert_eq!(ils.len(), 1);
        assert_eq!(ils[0].ident(), "EDDH");
    }

    #[test]
    fn parse_approach_policy() {
        assert_eq!("ils".parse::<ApproachPolicy>(), Ok(ApproachPolicy::Ils));
        assert!("vor".parse::<ApproachPolicy>().is_err());
    }
}
