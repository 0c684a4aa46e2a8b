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

use skyhop::prelude::*;

//   KJFK .... TOD ---- 10NM -- 5NM - 2NM - 04R ===== 22L
fn boston() -> AirportData {
    let mut builder = AirportData::builder();

    builder
        .add_airport(Airport::new(1, "KJFK", "John F Kennedy Intl", coord!(40.6398, -73.7789)))
        .add_airport(
            Airport::new(2, "KBOS", "General Edward Lawrence Logan Intl", coord!(42.3629, -71.0064))
                .with_city("Boston")
                .with_approaches(&["ILS", "RNAV"]),
        )
        .add_runway(Runway {
            id: 21,
            airport_id: 2,
            length: Length::ft(10005.0),
            primary: RunwayEnd {
                designator: "04R".to_string(),
                coordinate: coord!(42.3500, -71.0150),
                elevation: Altitude::ft(20.0),
                heading: Angle::t(35.0),
            },
            secondary: RunwayEnd {
                designator: "22L".to_string(),
                coordinate: coord!(42.3760, -70.9990),
                elevation: Altitude::ft(19.0),
                heading: Angle::t(215.0),
            },
        });

    builder.build()
}

fn request(data: &AirportData, end: RunwayEndKind) -> ApproachRequest {
    let departure = data.find_by_ident("KJFK").unwrap().unwrap();
    let destination = data.find_by_ident("KBOS").unwrap().unwrap();
    let runway = data.runway(21).unwrap().unwrap();

    ApproachRequest::new(
        departure,
        destination,
        runway,
        end,
        Altitude::ft(12000.0),
        vec![2.0, 10.0, 5.0],
    )
}

#[test]
fn plans_approach_from_cruise() {
    let data = boston();
    let plan = ApproachPlanner::new()
        .plan(&request(&data, RunwayEndKind::Primary))
        .unwrap();

    let names: Vec<&str> = plan.waypoints().iter().map(|wp| wp.name()).collect();
    assert_eq!(
        names,
        vec!["D12000ft", "3100ft", "1600ft", "700ft", "100ft", "100ft"]
    );

    let tod = plan.top_of_descent().unwrap();
    assert_eq!(tod.altitude().to_ft(), 12000.0);
    assert_eq!(plan.cruising_altitude().to_ft(), 12000.0);
}

#[test]
fn waypoints_lie_at_their_distance_to_the_threshold() {
    let data = boston();
    let runway = data.runway(21).unwrap().unwrap();
    let threshold = runway.primary.coordinate();

    let plan = ApproachPlanner::new()
        .plan(&request(&data, RunwayEndKind::Primary))
        .unwrap();

    for wp in plan.waypoints() {
        if let Some(distance) = wp.distance() {
            let actual = wp.coordinate().dist(&threshold).to_nm();
            assert!((actual - distance.to_nm()).abs() < 0.01, "{wp}");
        }
    }

    let end = plan.waypoints().last().unwrap();
    assert_eq!(end.kind(), WaypointKind::RunwayEnd);
    assert!(end.coordinate().dist(&runway.secondary.coordinate()).to_nm() < 0.01);
}

#[test]
fn altitudes_descend_towards_the_threshold() {
    let data = boston();
    let plan = ApproachPlanner::new()
        .plan(&request(&data, RunwayEndKind::Secondary))
        .unwrap();

    let threshold = plan
        .waypoints()
        .iter()
        .position(|wp| wp.kind() == WaypointKind::Threshold)
        .unwrap();

    for pair in plan.waypoints()[..=threshold].windows(2) {
        assert!(pair[0].altitude().to_ft() > pair[1].altitude().to_ft());
    }
}

#[test]
fn renders_dispatched_flight_plan() {
    let dispatcher = Dispatcher::new(boston());

    let body = FlightPlanRequestBody {
        departure_airport_ident: Some("kjfk".to_string()),
        destination_runway_id: Some(21),
        destination_runway_type: Some("primary".to_string()),
        cruising_alt: Some(12000.0),
        waypoints: Some(vec![10.0, 5.0, 2.0]),
    };

    let pln = dispatcher.flight_plan(&body).unwrap();

    assert!(pln.contains("<Title>KJFK to KBOS</Title>"));
    assert!(pln.contains("<CruisingAlt>12000</CruisingAlt>"));
    assert!(pln.contains(r#"<ATCWaypoint id="D12000ft">"#));
    assert!(pln.contains(",+03070.00</WorldPosition>"));
    assert_eq!(pln.matches("<ATCWaypointType>User</ATCWaypointType>").count(), 6);
}
