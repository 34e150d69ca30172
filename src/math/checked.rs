//! Checked arithmetic for [`Amount`].
//!
//! The [`CheckedArithmetic`] trait turns `Option`-returning checked
//! operations into [`Result<Self, AmmError>`](crate::error::AmmError) with
//! a specific variant per failure mode, so call sites can propagate with
//! `?` instead of matching on `None`.
//!
//! Products of two amounts are taken in [`U256`], which holds any
//! `u128 × u128` exactly; only a quotient that does not fit back into
//! `u128` is an overflow.
//!
//! # Examples
//!
//! ```
//! use hydra_dex::domain::Amount;
//! use hydra_dex::math::{mul_div_floor, CheckedArithmetic};
//!
//! let sum = Amount::new(100).safe_add(&Amount::new(200));
//! assert_eq!(sum, Ok(Amount::new(300)));
//!
//! // floor(7 * 5 / 3) = 11
//! assert_eq!(mul_div_floor(Amount::new(7), Amount::new(5), Amount::new(3)), Ok(Amount::new(11)));
//! ```

use alloy_primitives::U256;

use crate::domain::Amount;
use crate::error::AmmError;

/// Fallible arithmetic that reports *why* it failed.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result exceeds `u128`.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result exceeds `u128`.
    fn safe_mul(&self, other: &Self) -> Result<Self, AmmError>;

    /// Floor division.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `other` is zero.
    fn safe_div_floor(&self, other: &Self) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_mul(other)
            .ok_or(AmmError::Overflow("amount multiplication overflow"))
    }

    #[inline]
    fn safe_div_floor(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_div_floor(other).ok_or(AmmError::DivisionByZero)
    }
}

/// Returns the exact product `a × b`.
#[must_use]
pub fn widening_mul(a: Amount, b: Amount) -> U256 {
    // u128 × u128 < 2^256
    U256::from(a.get()).wrapping_mul(U256::from(b.get()))
}

/// Computes `floor(a × b / c)` with a 256-bit intermediate product.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `c` is zero.
/// - [`AmmError::Overflow`] if the quotient exceeds `u128`.
pub fn mul_div_floor(a: Amount, b: Amount, c: Amount) -> Result<Amount, AmmError> {
    if c.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    let quotient = widening_mul(a, b)
        .checked_div(U256::from(c.get()))
        .ok_or(AmmError::DivisionByZero)?;
    u128::try_from(quotient)
        .map(Amount::new)
        .map_err(|_| AmmError::Overflow("mul_div quotient overflow"))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn add_ok_and_overflow() {
        assert_eq!(Amount::new(1).safe_add(&Amount::new(2)), Ok(Amount::new(3)));
        let Err(AmmError::Overflow(_)) = Amount::MAX.safe_add(&Amount::new(1)) else {
            panic!("expected Overflow");
        };
    }

    #[test]
    fn sub_ok_and_underflow() {
        assert_eq!(Amount::new(3).safe_sub(&Amount::new(2)), Ok(Amount::new(1)));
        let Err(AmmError::Underflow(_)) = Amount::new(1).safe_sub(&Amount::new(2)) else {
            panic!("expected Underflow");
        };
    }

    #[test]
    fn mul_ok_and_overflow() {
        assert_eq!(Amount::new(6).safe_mul(&Amount::new(7)), Ok(Amount::new(42)));
        let Err(AmmError::Overflow(_)) = Amount::MAX.safe_mul(&Amount::new(2)) else {
            panic!("expected Overflow");
        };
    }

    #[test]
    fn div_floor_and_zero() {
        assert_eq!(
            Amount::new(10).safe_div_floor(&Amount::new(4)),
            Ok(Amount::new(2))
        );
        assert_eq!(
            Amount::new(10).safe_div_floor(&Amount::ZERO),
            Err(AmmError::DivisionByZero)
        );
    }

    #[test]
    fn mul_div_truncates() {
        // 1e8 * 1e8 / (1e8 + 1e4) = 99_990_000.99.. -> 99_990_000
        let e8 = Amount::new(100_000_000);
        let post = Amount::new(100_010_000);
        assert_eq!(mul_div_floor(e8, e8, post), Ok(Amount::new(99_990_000)));
    }

    #[test]
    fn mul_div_keeps_wide_products() {
        // (1e24 * 1e24) / (1e24 + 1e22) does not fit u128 until divided
        let e24 = Amount::new(1_000_000_000_000_000_000_000_000);
        let post = Amount::new(1_010_000_000_000_000_000_000_000);
        let Ok(q) = mul_div_floor(e24, e24, post) else {
            panic!("expected Ok");
        };
        assert_eq!(q, Amount::new(990_099_009_900_990_099_009_900));
    }

    #[test]
    fn mul_div_quotient_overflow() {
        let Err(AmmError::Overflow(_)) = mul_div_floor(Amount::MAX, Amount::new(2), Amount::new(1)) else {
            panic!("expected Overflow");
        };
    }

    #[test]
    fn widening_mul_is_exact() {
        let max = U256::from(u128::MAX);
        assert_eq!(widening_mul(Amount::MAX, Amount::MAX), max * max);
    }

    #[test]
    fn mul_div_zero_divisor_checked_first() {
        assert_eq!(
            mul_div_floor(Amount::MAX, Amount::MAX, Amount::ZERO),
            Err(AmmError::DivisionByZero)
        );
    }
}
