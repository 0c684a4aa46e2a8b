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

use std::error;
use std::fmt;

/// Errors raised while generating routes or building approach plans.
#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// The request is missing fields or has values out of range.
    InvalidRequest(String),

    /// An airport or runway could not be resolved.
    NotFound(String),

    /// The runway end is neither `primary` nor `secondary`.
    InvalidRunwayEnd(String),

    /// The cruising altitude is not a finite positive number.
    InvalidAltitude,

    /// A waypoint distance is not a finite, non-negative number.
    InvalidWaypointDistances,

    /// The airport index failed to answer a query.
    Index(String),

    /// The route search ran past its deadline.
    DeadlineExceeded,
}

impl Error {
    /// Returns the HTTP status code a request handler should answer with.
    ///
    /// Unresolved identifiers are reported as `404`, everything else as `500`.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            _ => 500,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRequest(reason) => write!(f, "{reason}"),
            Self::NotFound(what) => write!(f, "{what} not found"),
            Self::InvalidRunwayEnd(end) => write!(
                f,
                "Runway end must be either 'primary' or 'secondary', not '{end}'."
            ),
            Self::InvalidAltitude => write!(f, "cruising altitude must be a positive number"),
            Self::InvalidWaypointDistances => {
                write!(f, "waypoint distances must be non-negative numbers")
            }
            Self::Index(reason) => write!(f, "airport index failure: {reason}"),
            Self::DeadlineExceeded => write!(f, "route generation exceeded its deadline"),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(Error::NotFound("Runway with id '7'".to_string()).status_code(), 404);
        assert_eq!(Error::InvalidAltitude.status_code(), 500);
        assert_eq!(Error::Index("offline".to_string()).status_code(), 500);
    }

    #[test]
    fn runway_end_message() {
        assert_eq!(
            Error::InvalidRunwayEnd("left".to_string()).to_string(),
            "Runway end must be either 'primary' or 'secondary', not 'left'."
        );
    }
}
