//! Monetary amounts.

use core::iter::Sum;
use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Non-negative amount in the smallest currency unit (e.g. cents, or whole
/// francs for FCFA).
///
/// Arithmetic saturates at `u64::MAX` rather than wrapping.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Price of `quantity` units at this unit price.
    pub const fn times(self, quantity: u64) -> Self {
        Self(self.0.saturating_mul(quantity))
    }

    pub const fn saturating_add(self, other: Money) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}
