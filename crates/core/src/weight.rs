//! Mass measured in grams.

use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A weight in grams.
///
/// Same integer convention as [`Money`](crate::Money): grams keep catalog
/// weights and shipping arithmetic exact. `Display` renders kilograms with
/// trailing zeros trimmed (`12.5 kg`, `10 kg`).
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Weight(u64);

impl Weight {
    pub const ZERO: Weight = Weight(0);

    pub const fn from_grams(grams: u64) -> Self {
        Self(grams)
    }

    pub const fn grams(self) -> u64 {
        self.0
    }
}

impl Add for Weight {
    type Output = Weight;

    fn add(self, rhs: Weight) -> Weight {
        Weight(self.0 + rhs.0)
    }
}

impl AddAssign for Weight {
    fn add_assign(&mut self, rhs: Weight) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Weight {
    type Output = Weight;

    fn mul(self, quantity: u32) -> Weight {
        Weight(self.0 * u64::from(quantity))
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Weight {
        iter.fold(Weight::ZERO, Add::add)
    }
}

impl core::fmt::Display for Weight {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let kilos = self.0 / 1_000;
        let rem = self.0 % 1_000;
        if rem == 0 {
            write!(f, "{kilos} kg")
        } else {
            let frac = format!("{rem:03}");
            write!(f, "{kilos}.{} kg", frac.trim_end_matches('0'))
        }
    }
}

impl ValueObject for Weight {}
