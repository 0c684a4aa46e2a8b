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

//! Flight simulator plan files.
//!
//! Approach plans are written as `.pln` files in the AceXML format read by
//! Microsoft flight simulators. Every waypoint becomes a user waypoint whose
//! world position carries the latitude and longitude in degrees, minutes and
//! seconds followed by the altitude in feet.

use std::fmt;

use crate::approach::{ApproachPlan, Waypoint};
use crate::measurements::Altitude;

/// Renders [`ApproachPlan`]s.
pub struct PlanRenderer;

impl PlanRenderer {
    /// Returns the `.pln` text of the plan.
    pub fn render(plan: &ApproachPlan) -> String {
        render(
            plan.waypoints(),
            plan.departure(),
            plan.destination(),
            plan.cruising_altitude(),
        )
    }
}

/// Returns the `.pln` text flying the `waypoints` from the departure to the
/// destination airport.
pub fn render(
    waypoints: &[Waypoint],
    departure_ident: &str,
    destination_ident: &str,
    cruising_altitude: Altitude,
) -> String {
    Document {
        waypoints,
        departure: departure_ident,
        destination: destination_ident,
        cruising_altitude,
    }
    .to_string()
}

/// Formats an altitude as sign, five integer digits and two decimals, e.g.
/// `+03550.00`.
pub fn format_altitude(altitude: &Altitude) -> String {
    let ft = altitude.to_ft();
    let sign = if ft < 0.0 { '-' } else { '+' };
    format!("{sign}{:08.2}", ft.abs())
}

struct Document<'a> {
    waypoints: &'a [Waypoint],
    departure: &'a str,
    destination: &'a str,
    cruising_altitude: Altitude,
}

impl fmt::Display for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let departure = escape(self.departure);
        let destination = escape(self.destination);
        let cruise = self.cruising_altitude.rounded_hundreds_ft();
        let route_type = if cruise > 18000 { "HighAlt" } else { "LowAlt" };

        writeln!(f, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(f)?;
        writeln!(f, r#"<SimBase.Document Type="AceXML" version="1,0">"#)?;
        writeln!(f, "    <Descr>AceXML Document</Descr>")?;
        writeln!(f, "    <FlightPlan.FlightPlan>")?;
        writeln!(f, "        <Title>{departure} to {destination}</Title>")?;
        writeln!(f, "        <FPType>IFR</FPType>")?;
        writeln!(f, "        <RouteType>{route_type}</RouteType>")?;
        writeln!(f, "        <CruisingAlt>{cruise}</CruisingAlt>")?;
        writeln!(f, "        <DepartureID>{departure}</DepartureID>")?;
        writeln!(f, "        <DestinationID>{destination}</DestinationID>")?;
        writeln!(f, "        <Descr>{departure}, {destination}</Descr>")?;

        for wp in self.waypoints {
            writeln!(f, r#"        <ATCWaypoint id="{}">"#, escape(wp.name()))?;
            writeln!(f, "            <ATCWaypointType>User</ATCWaypointType>")?;
            writeln!(
                f,
                "            <WorldPosition>{},{}</WorldPosition>",
                wp.coordinate(),
                format_altitude(wp.altitude())
            )?;
            writeln!(f, "        </ATCWaypoint>")?;
        }

        writeln!(f, "    </FlightPlan.FlightPlan>")?;
        writeln!(f, "</SimBase.Document>")
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
