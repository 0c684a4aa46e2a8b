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

use geo::BoundingRect;
use geojson::{Feature, GeoJson, Geometry, Value};

use super::rect_to_bbox;
use crate::route::Route;

impl Route {
    /// Returns the route as GeoJSON feature with a line string through all
    /// airports.
    ///
    /// The feature's properties hold the airport `idents` and the
    /// `distance` in nautical miles.
    #[cfg_attr(docsrs, doc(cfg(feature = "geojson")))]
    pub fn to_geojson(&self) -> GeoJson {
        let coords: Vec<geo::Coord<f64>> = self
            .airports()
            .iter()
            .map(|arpt| arpt.point().into())
            .collect();

        let line = geo::LineString::from(coords);

        let mut feature = Feature {
            bbox: line.bounding_rect().map(rect_to_bbox),
            geometry: Some(Geometry::new(Value::from(&line))),
            id: None,
            properties: None,
            foreign_members: None,
        };

        feature.set_property("idents", self.idents());
        feature.set_property("distance", self.total_distance().to_nm());

        GeoJson::Feature(feature)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::nd::Airport;

    #[test]
    fn route_as_line_string() {
        let route = Route::new(vec![
            Arc::new(Airport::new(1, "EDDH", "Hamburg", coord!(53.6304, 9.98823))),
            Arc::new(Airport::new(2, "EDHL", "Luebeck", coord!(53.8054, 10.7192))),
        ]);

        let GeoJson::Feature(feature) = route.to_geojson() else {
            panic!("route should be a feature");
        };

        assert_eq!(feature.bbox, Some(vec![9.98823, 53.6304, 10.7192, 53.8054]));

        let Some(Value::LineString(line)) = feature.geometry.map(|g| g.value) else {
            panic!("route should be a line string");
        };
        assert_eq!(line, vec![vec![9.98823, 53.6304], vec![10.7192, 53.8054]]);

        assert_eq!(
            feature.properties.and_then(|p| p.get("idents").cloned()),
            Some(geojson::JsonValue::from(vec!["EDDH", "EDHL"]))
        );
    }
}
