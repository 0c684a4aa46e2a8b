// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Joe Pearson
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

pub const FEET_IN_METER: f64 = 0.3048;
pub const NAUTICAL_MILE_IN_METER: f64 = 1852.0;
/// Mean earth radius used by the great-circle (haversine) formulas.
pub const EARTH_RADIUS_IN_METER: f64 = 6_371_008.8;
/// Length of one degree of arc on the mean earth sphere.
pub const NAUTICAL_MILES_PER_DEGREE: f64 =
    EARTH_RADIUS_IN_METER * std::f64::consts::PI / 180.0 / NAUTICAL_MILE_IN_METER;
