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

//! Measurements with units.
//!
//! Every physical value used by the route generator and the approach planner
//! is a [`Measurement`] that carries its unit. Values are converted through
//! the SI unit of their [`PhysicalQuantity`], so a [`Length`] in nautical
//! miles can be added to one in meters.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod altitude;
mod angle;
pub mod constants;
mod length;

pub use altitude::*;
pub use angle::*;
pub use length::*;

/// The physical quantity measured by a unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PhysicalQuantity {
    Angle,
    Length,
}

/// A unit in which a value of type `T` is measured.
pub trait UnitOfMeasure<T>: Copy + PartialEq {
    fn quantity() -> PhysicalQuantity;

    /// The SI unit of the quantity.
    fn si() -> Self;

    fn symbol(&self) -> &'static str;

    /// Converts the SI `value` into the unit `to`.
    fn from_si(value: T, to: &Self) -> T;

    /// Converts the `value` measured in this unit into SI.
    fn to_si(&self, value: &T) -> T;

    /// Brings a value into the unit's valid range.
    fn normalize(&self, value: T) -> T {
        value
    }
}

/// A value measured in a unit.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement<T, U> {
    pub(crate) value: T,
    pub(crate) unit: U,
}

impl<U> Measurement<f64, U>
where
    U: UnitOfMeasure<f64>,
{
    pub fn new(value: f64, unit: U) -> Self {
        Self {
            value: unit.normalize(value),
            unit,
        }
    }

    pub fn value(&self) -> &f64 {
        &self.value
    }

    pub fn unit(&self) -> &U {
        &self.unit
    }

    /// Creates the measurement from an SI `value`, expressed in `unit`.
    pub fn from_si(value: f64, unit: U) -> Self {
        Self::new(U::from_si(value, &unit), unit)
    }

    pub fn to_si(&self) -> f64 {
        self.unit.to_si(&self.value)
    }

    /// Returns the same measurement expressed in the unit `to`.
    pub fn convert_to(&self, to: U) -> Self {
        if self.unit == to {
            *self
        } else {
            Self::from_si(self.to_si(), to)
        }
    }

    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}

impl<U> PartialEq for Measurement<f64, U>
where
    U: UnitOfMeasure<f64>,
{
    fn eq(&self, other: &Self) -> bool {
        self.to_si() == other.to_si()
    }
}

impl<U> PartialOrd for Measurement<f64, U>
where
    U: UnitOfMeasure<f64>,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_si().partial_cmp(&other.to_si())
    }
}

impl<U> Add for Measurement<f64, U>
where
    U: UnitOfMeasure<f64>,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.value + *rhs.convert_to(self.unit).value(), self.unit)
    }
}

impl<U> Sub for Measurement<f64, U>
where
    U: UnitOfMeasure<f64>,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.value - *rhs.convert_to(self.unit).value(), self.unit)
    }
}

impl<U> Mul<f64> for Measurement<f64, U>
where
    U: UnitOfMeasure<f64>,
{
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.value * rhs, self.unit)
    }
}

impl<U> Div<f64> for Measurement<f64, U>
where
    U: UnitOfMeasure<f64>,
{
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.value / rhs, self.unit)
    }
}

/// The ratio of two measurements of the same quantity.
impl<U> Div for Measurement<f64, U>
where
    U: UnitOfMeasure<f64>,
{
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.to_si() / rhs.to_si()
    }
}

impl<U> Neg for Measurement<f64, U>
where
    U: UnitOfMeasure<f64>,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.value, self.unit)
    }
}

impl<U> Sum for Measurement<f64, U>
where
    U: UnitOfMeasure<f64>,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(0.0, U::si()), |acc, m| acc + m)
    }
}

impl<U> fmt::Display for Measurement<f64, U>
where
    U: UnitOfMeasure<f64>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.precision$} {}", self.value, self.unit.symbol()),
            None => write!(f, "{} {}", self.value, self.unit.symbol()),
        }
    }
}
