// SPDX-License-Identifier: Apache-2.0
// Copyright 2024 Joe Pearson
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

//! Flight Computer.

use crate::measurements::{Altitude, Length};

/// Height gained per nautical mile on a 3° glide path.
///
/// tan(3°) × 6076 ft ≈ 318 ft, rounded down to the rule of thumb used by
/// pilots.
pub const GLIDE_PATH_FT_PER_NM: f64 = 300.0;

/// Height above the runway at which the threshold is crossed.
pub const THRESHOLD_CROSSING_HEIGHT_FT: f64 = 50.0;

/// Splits the magnitude of a decimal angle into degrees, minutes and seconds.
///
/// Degrees and minutes are truncated, the seconds keep the remainder. The
/// sign is dropped; callers print it as hemisphere letter.
pub fn decimal_to_dms(value: f64) -> (u32, u32, f64) {
    let absolute = value.abs();
    let degrees = absolute.floor();
    let minutes = ((absolute - degrees) * 60.0).floor();
    let seconds = ((absolute - degrees) * 60.0 - minutes) * 60.0;

    (degrees as u32, minutes as u32, seconds)
}

/// Returns the altitude on a 3° glide path `distance` before the threshold.
pub fn glide_path_altitude(distance: Length, runway_altitude: Altitude) -> Altitude {
    Altitude::ft(
        distance.to_nm() * GLIDE_PATH_FT_PER_NM
            + runway_altitude.to_ft()
            + THRESHOLD_CROSSING_HEIGHT_FT,
    )
}

/// Returns the distance needed to descend from `from` to `to` on a 3° path.
///
/// The distance is negative if `to` is above `from`.
pub fn descent_distance(from: Altitude, to: Altitude) -> Length {
    Length::nm((from.to_ft() - to.to_ft()) / 100.0 / 3.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dms_of_half_degree() {
        assert_eq!(decimal_to_dms(-0.5), (0, 30, 0.0));
        assert_eq!(decimal_to_dms(51.25), (51, 15, 0.0));
    }

    #[test]
    fn dms_keeps_the_remainder_in_seconds() {
        let (d, m, s) = decimal_to_dms(53.6304);
        assert_eq!((d, m), (53, 37));
        assert!((s - 49.44).abs() < 1e-6);
    }

    #[test]
    fn glide_path_at_five_miles() {
        // 5 NM out from a runway at 500 ft: 1500 ft above + 50 ft crossing height
        let alt = glide_path_altitude(Length::nm(5.0), Altitude::ft(500.0));
        assert_eq!(alt.to_ft(), 2050.0);
    }

    #[test]
    fn descent_from_cruise() {
        // FL260 down to 2050 ft takes about 80 NM
        let dist = descent_distance(Altitude::ft(26000.0), Altitude::ft(2050.0));
        assert!((dist.to_nm() - 79.833).abs() < 0.001);
    }
}
