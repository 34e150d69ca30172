//! Outcome of a committed swap.

use super::{Address, Amount};
use crate::error::AmmError;
use crate::math::U256;

/// What a swap moved, and the invariant on either side of it.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0`.
/// - `asset_in != asset_out`.
///
/// `k_after` is usually a little below `k_before` because the pricing
/// engine floors the post-swap reserve; the two are never reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapOutcome {
    asset_in: Address,
    asset_out: Address,
    amount_in: Amount,
    amount_out: Amount,
    k_before: U256,
    k_after: U256,
}

impl SwapOutcome {
    /// Creates a new outcome with validated invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`] if either amount is zero.
    /// - [`AmmError::InvalidAsset`] if both assets are the same.
    pub fn new(
        asset_in: Address,
        asset_out: Address,
        amount_in: Amount,
        amount_out: Amount,
        k_before: U256,
        k_after: U256,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidQuantity("amount_in must be positive"));
        }
        if amount_out.is_zero() {
            return Err(AmmError::InvalidQuantity("amount_out must be positive"));
        }
        if asset_in == asset_out {
            return Err(AmmError::InvalidAsset("swap must change asset"));
        }
        Ok(Self {
            asset_in,
            asset_out,
            amount_in,
            amount_out,
            k_before,
            k_after,
        })
    }

    /// Returns the asset the trader sold.
    #[must_use]
    pub const fn asset_in(&self) -> Address {
        self.asset_in
    }

    /// Returns the asset the trader received.
    #[must_use]
    pub const fn asset_out(&self) -> Address {
        self.asset_out
    }

    /// Returns the amount sold.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the amount received.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns `x · y` before the swap.
    pub const fn k_before(&self) -> U256 {
        self.k_before
    }

    /// Returns `x · y` after the swap.
    pub const fn k_after(&self) -> U256 {
        self.k_after
    }

    /// Returns `|k_after − k_before|`.
    #[must_use]
    pub fn k_drift(&self) -> U256 {
        if self.k_after >= self.k_before {
            self.k_after - self.k_before
        } else {
            self.k_before - self.k_after
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn addr(b: u8) -> Address {
        Address::repeat_byte(b)
    }

    #[test]
    fn valid_outcome() {
        let Ok(o) = SwapOutcome::new(
            addr(1),
            addr(2),
            Amount::new(10),
            Amount::new(9),
            U256::from(100u8),
            U256::from(110u8),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(o.asset_in(), addr(1));
        assert_eq!(o.asset_out(), addr(2));
        assert_eq!(o.amount_in(), Amount::new(10));
        assert_eq!(o.amount_out(), Amount::new(9));
        assert_eq!(o.k_drift(), U256::from(10u8));
    }

    #[test]
    fn drift_is_absolute() {
        let Ok(o) = SwapOutcome::new(
            addr(1),
            addr(2),
            Amount::new(1),
            Amount::new(1),
            U256::from(50u8),
            U256::from(45u8),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(o.k_drift(), U256::from(5u8));
    }

    #[test]
    fn rejects_zero_amounts() {
        let zero_in = SwapOutcome::new(addr(1), addr(2), Amount::ZERO, Amount::new(1), U256::ZERO, U256::ZERO);
        assert_eq!(
            zero_in,
            Err(AmmError::InvalidQuantity("amount_in must be positive"))
        );
        let zero_out = SwapOutcome::new(addr(1), addr(2), Amount::new(1), Amount::ZERO, U256::ZERO, U256::ZERO);
        assert_eq!(
            zero_out,
            Err(AmmError::InvalidQuantity("amount_out must be positive"))
        );
    }

    #[test]
    fn rejects_same_asset() {
        let result = SwapOutcome::new(addr(1), addr(1), Amount::new(1), Amount::new(1), U256::ZERO, U256::ZERO);
        assert!(matches!(result, Err(AmmError::InvalidAsset(_))));
    }
}
