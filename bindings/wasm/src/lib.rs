// SPDX-License-Identifier: Apache-2.0
// Copyright 2025, 2026 Joe Pearson
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

use log::{Level, LevelFilter, Log, Metadata, Record};
use serde::Deserialize;
use skyhop::dispatch::{malformed_body, parse_distances};
use skyhop::prelude::*;
use std::result::Result;
use wasm_bindgen::prelude::*;

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let msg = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
}

/// Sets the level up to which messages are written to the console, e.g.
/// `"debug"`.
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsError> {
    let filter: LevelFilter = level
        .parse()
        .map_err(|_| JsError::new(&format!("invalid log level: {level}")))?;
    log::set_max_level(filter);
    Ok(())
}

/// Parses waypoint distances like `"8, 5"` into an array of numbers.
#[wasm_bindgen(js_name = parseDistances)]
pub fn parse_distances_js(s: &str) -> Result<Vec<f64>, JsError> {
    parse_distances(s).map_err(to_js_error)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AirportRecord {
    id: u32,
    ident: String,
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    elevation_ft: f64,
    #[serde(default)]
    country_code: Option<String>,
    #[serde(default)]
    country_name: Option<String>,
    #[serde(default)]
    approaches: Vec<String>,
    #[serde(default)]
    military: bool,
}

impl From<AirportRecord> for Airport {
    fn from(record: AirportRecord) -> Self {
        let approaches: Vec<&str> = record.approaches.iter().map(String::as_str).collect();

        let mut arpt = Airport::new(
            record.id,
            &record.ident,
            &record.name,
            coord!(record.latitude, record.longitude),
        )
        .with_elevation(Altitude::ft(record.elevation_ft))
        .with_approaches(&approaches)
        .with_military(record.military);

        if let Some(city) = &record.city {
            arpt = arpt.with_city(city);
        }

        if let (Some(code), Some(name)) = (&record.country_code, &record.country_name) {
            arpt = arpt.with_country(code, name);
        }

        arpt
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RunwayEndRecord {
    designator: String,
    latitude: f64,
    longitude: f64,
    /// Relative to the airport elevation.
    #[serde(default)]
    elevation_ft: f64,
    heading: f64,
}

impl From<RunwayEndRecord> for RunwayEnd {
    fn from(record: RunwayEndRecord) -> Self {
        Self {
            designator: record.designator,
            coordinate: coord!(record.latitude, record.longitude),
            elevation: Altitude::ft(record.elevation_ft),
            heading: Angle::t(record.heading),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RunwayRecord {
    id: u32,
    airport_id: u32,
    length_ft: f64,
    primary: RunwayEndRecord,
    secondary: RunwayEndRecord,
}

impl From<RunwayRecord> for Runway {
    fn from(record: RunwayRecord) -> Self {
        Self {
            id: record.id,
            airport_id: record.airport_id,
            length: Length::ft(record.length_ft),
            primary: record.primary.into(),
            secondary: record.secondary.into(),
        }
    }
}

/// The only field of a flight plan body that is checked on its own when the
/// body can't be read.
#[derive(Deserialize)]
#[allow(dead_code)]
struct WaypointsField {
    #[serde(default)]
    waypoints: Option<Vec<f64>>,
}

fn route_body(body: JsValue) -> Result<RouteRequestBody, JsError> {
    serde_wasm_bindgen::from_value(body).map_err(|_| to_js_error(malformed_body(None)))
}

fn flight_plan_body(body: JsValue) -> Result<FlightPlanRequestBody, JsError> {
    serde_wasm_bindgen::from_value(body.clone()).map_err(|_| {
        let field = serde_wasm_bindgen::from_value::<WaypointsField>(body)
            .is_err()
            .then_some("waypoints");
        to_js_error(malformed_body(field))
    })
}

/// Airports and runways loaded into the browser.
#[wasm_bindgen(js_name = AirportDatabase)]
pub struct JsAirportDatabase {
    inner: Dispatcher<AirportData>,
}

#[wasm_bindgen(js_class = AirportDatabase)]
impl JsAirportDatabase {
    /// Loads arrays of airport and runway records.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(airports: JsValue, runways: JsValue) -> Result<Self, JsError> {
        let airports: Vec<AirportRecord> = serde_wasm_bindgen::from_value(airports)?;
        let runways: Vec<RunwayRecord> = serde_wasm_bindgen::from_value(runways)?;

        let mut builder = AirportData::builder();
        for record in airports {
            builder.add_airport(record.into());
        }
        for record in runways {
            builder.add_runway(record.into());
        }

        Ok(Self {
            inner: Dispatcher::new(builder.build()),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.index().len()
    }

    /// Generates a random route and returns its airports.
    #[wasm_bindgen(js_name = generateRandomRoute)]
    pub fn generate_random_route(&self, body: JsValue) -> Result<JsValue, JsError> {
        let route = self.route(body)?;
        Ok(serde_wasm_bindgen::to_value(&route)?)
    }

    /// Generates a random route and returns it as GeoJSON text.
    #[wasm_bindgen(js_name = generateRandomRouteGeoJson)]
    pub fn generate_random_route_geojson(&self, body: JsValue) -> Result<String, JsError> {
        let route = self.route(body)?;
        Ok(route.to_geojson().to_string())
    }

    /// Returns the `.pln` text of an approach plan.
    #[wasm_bindgen(js_name = flightPlan)]
    pub fn flight_plan(&self, body: JsValue) -> Result<String, JsError> {
        let body = flight_plan_body(body)?;
        self.inner.flight_plan(&body).map_err(to_js_error)
    }

    /// Resolves comma separated airport codes.
    pub fn lookup(&self, codes: &str) -> Result<JsValue, JsError> {
        let lookup = self.inner.lookup(codes).map_err(to_js_error)?;
        Ok(serde_wasm_bindgen::to_value(&lookup)?)
    }

    pub fn runways(&self, ident: &str) -> Result<JsValue, JsError> {
        let runways = self.inner.runways(ident).map_err(to_js_error)?;
        Ok(serde_wasm_bindgen::to_value(&runways)?)
    }

    /// Returns the airports in the map window, e.g. the visible chart area.
    #[wasm_bindgen(js_name = airportsInBounds)]
    pub fn airports_in_bounds(
        &self,
        south: f64,
        west: f64,
        north: f64,
        east: f64,
        approach_type: &str,
    ) -> Result<JsValue, JsError> {
        let policy: ApproachPolicy = approach_type.parse().map_err(to_js_error)?;
        let airports = self
            .inner
            .airports_in_bounds(&bounds!((south, west), (north, east)), policy)
            .map_err(to_js_error)?;
        Ok(serde_wasm_bindgen::to_value(&airports)?)
    }
}

impl JsAirportDatabase {
    fn route(&self, body: JsValue) -> Result<Route, JsError> {
        let body = route_body(body)?;
        self.inner
            .generate_random_route(&body, &mut rand::thread_rng())
            .map_err(to_js_error)
    }
}

fn to_js_error(e: Error) -> JsError {
    JsError::new(&format!("{} ({})", e, e.status_code()))
}
