//! Chip amounts.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign};

use crate::error::MoneyError;

/// A non-negative amount of chips, in the smallest chip denomination.
///
/// Amounts can never go below zero: subtraction is only available through
/// [`Money::checked_sub`], which reports an underflow instead of wrapping.
///
/// `+` overflows like `u64` addition. A [`Table`](crate::Table) never holds
/// more chips in total than fit in a `u64`, so sums over the chips of one
/// table or round cannot overflow; use [`Money::checked_add`] for anything
/// else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(u64);

impl Money {
    /// Zero chips.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from a raw chip count.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Returns the raw chip count.
    #[must_use]
    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Returns whether the amount is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Adds two amounts, returning `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Self(sum)),
            None => None,
        }
    }

    /// Subtracts `other`, returning `None` if the result would be negative.
    #[must_use]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(rest) => Some(Self(rest)),
            None => None,
        }
    }

    /// Subtracts `other`, flooring at zero.
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Money {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<u64> for Money {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl TryFrom<i64> for Money {
    type Error = MoneyError;

    fn try_from(amount: i64) -> Result<Self, Self::Error> {
        u64::try_from(amount)
            .map(Self)
            .map_err(|_| MoneyError::Negative)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
