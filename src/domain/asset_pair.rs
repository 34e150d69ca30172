//! Canonically ordered pair of distinct assets.

use super::{Address, Asset};
use crate::error::AmmError;

/// Which of the two pair members an asset is.
///
/// Resolved once per operation so that later bookkeeping can index the
/// pool's balances without re-checking membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The member with the lower address.
    First,
    /// The member with the higher address.
    Second,
}

impl Side {
    /// Returns the opposite side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// Two distinct assets, sorted by address.
///
/// The canonical ordering guarantees `first().address() < second().address()`,
/// so `(A, B)` and `(B, A)` produce the same pair and therefore the same
/// [`PairKey`](super::PairKey).
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::{Address, Asset, AssetPair, Decimals, Symbol};
///
/// let usdc = Asset::new(Address::repeat_byte(1), Symbol::new("USDC").expect("ok"), Decimals::new(6).expect("ok"));
/// let hd   = Asset::new(Address::repeat_byte(2), Symbol::new("HD").expect("ok"), Decimals::new(18).expect("ok"));
///
/// let pair = AssetPair::new(hd, usdc).expect("distinct assets");
/// assert_eq!(pair.first(), usdc);
/// assert_eq!(pair.second(), hd);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetPair {
    first: Asset,
    second: Asset,
}

impl AssetPair {
    /// Creates a canonically ordered pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if both assets share an address.
    pub fn new(asset1: Asset, asset2: Asset) -> Result<Self, AmmError> {
        if asset1.address() == asset2.address() {
            return Err(AmmError::InvalidAsset(
                "pool requires two distinct assets",
            ));
        }

        let (first, second) = if asset1.address() < asset2.address() {
            (asset1, asset2)
        } else {
            (asset2, asset1)
        };

        Ok(Self { first, second })
    }

    /// Returns the member with the lower address.
    #[must_use]
    pub const fn first(&self) -> Asset {
        self.first
    }

    /// Returns the member with the higher address.
    #[must_use]
    pub const fn second(&self) -> Asset {
        self.second
    }

    /// Returns the asset on `side`.
    #[must_use]
    pub const fn get(&self, side: Side) -> Asset {
        match side {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }

    /// Resolves which side `address` is on.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if `address` is not in the pair.
    pub fn side_of(&self, address: &Address) -> Result<Side, AmmError> {
        if *address == self.first.address() {
            Ok(Side::First)
        } else if *address == self.second.address() {
            Ok(Side::Second)
        } else {
            Err(AmmError::InvalidAsset("asset is not part of this pool"))
        }
    }
}
