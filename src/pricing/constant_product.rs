//! Constant-product pricing (`x · y = k`) without fees.
//!
//! # Swap Algorithm (X → Y)
//!
//! 1. `k = pre_x × pre_y`, exact in 256 bits
//! 2. `post_x = pre_x + amount_in`
//! 3. `post_y = floor(k / post_x)`
//! 4. `amount_out = pre_y − post_y`
//!
//! Because step 3 truncates, `post_x × post_y ≤ k`: the invariant drifts
//! down by less than `post_x` per swap and is never corrected.
//!
//! # Draining
//!
//! `amount_out` is always at least 1 and at most `pre_y`.  It equals
//! `pre_y` exactly when `k < post_x`, i.e. an input so large that the
//! quotient floors to zero; the counter-asset is then fully drained and
//! every later swap out of it fails with [`AmmError::ZeroPoolLiquidity`].

use tracing::debug;

use crate::domain::Amount;
use crate::error::AmmError;
use crate::math::{mul_div_floor, widening_mul, CheckedArithmetic, U256};

/// The result of pricing an exact-in swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quote {
    amount_out: Amount,
    reserve_in_after: Amount,
    reserve_out_after: Amount,
    k_before: U256,
}

impl Quote {
    /// Returns the amount the trader receives.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the input-side reserve after the swap.
    pub const fn reserve_in_after(&self) -> Amount {
        self.reserve_in_after
    }

    /// Returns the output-side reserve after the swap.
    pub const fn reserve_out_after(&self) -> Amount {
        self.reserve_out_after
    }

    /// Returns `pre_x × pre_y`.
    pub const fn k_before(&self) -> U256 {
        self.k_before
    }

    /// Returns `post_x × post_y`.  Never exceeds [`k_before`](Self::k_before).
    #[must_use]
    pub fn k_after(&self) -> U256 {
        widening_mul(self.reserve_in_after, self.reserve_out_after)
    }
}

/// Stateless constant-product price engine.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::Amount;
/// use hydra_dex::pricing::ConstantProduct;
///
/// let quote = ConstantProduct::quote_exact_in(
///     Amount::new(100_000_000),
///     Amount::new(100_000_000),
///     Amount::new(10_000),
/// ).expect("funded pool");
///
/// assert_eq!(quote.amount_out(), Amount::new(10_000));
/// assert_eq!(quote.reserve_in_after(), Amount::new(100_010_000));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstantProduct;

impl ConstantProduct {
    /// Returns the invariant `x × y`, exact for any pair of reserves.
    #[must_use]
    pub fn invariant(x: Amount, y: Amount) -> U256 {
        widening_mul(x, y)
    }

    /// Prices a swap of `amount_in` into a pool holding `reserve_in` of
    /// the input asset and `reserve_out` of the output asset.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`] if `amount_in` is zero.
    /// - [`AmmError::ZeroPoolLiquidity`] if either reserve is zero.
    /// - [`AmmError::Overflow`] if `reserve_in + amount_in` exceeds `u128`.
    pub fn quote_exact_in(
        reserve_in: Amount,
        reserve_out: Amount,
        amount_in: Amount,
    ) -> Result<Quote, AmmError> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidQuantity("swap amount must be positive"));
        }
        if reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(AmmError::ZeroPoolLiquidity);
        }

        let k_before = Self::invariant(reserve_in, reserve_out);
        let reserve_in_after = reserve_in
            .checked_add(&amount_in)
            .ok_or(AmmError::Overflow("input reserve overflow"))?;
        let reserve_out_after = mul_div_floor(reserve_in, reserve_out, reserve_in_after)?;
        let amount_out = reserve_out.safe_sub(&reserve_out_after)?;

        debug!(
            %reserve_in,
            %reserve_out,
            %amount_in,
            %amount_out,
            "constant-product quote"
        );

        Ok(Quote {
            amount_out,
            reserve_in_after,
            reserve_out_after,
            k_before,
        })
    }
}
