//! A registered trading pair.

use crate::domain::{Address, Asset, AssetPair, PairKey, Side};
use crate::error::AmmError;

/// Metadata of one pool.
///
/// Pools are only ever created open and there is no close operation, so
/// [`is_open`](Self::is_open) is `true` for every pool a registry
/// returns.  Balances are not stored here: the
/// [`LiquidityLedger`](crate::ledger::LiquidityLedger) is their single
/// source of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    key: PairKey,
    pair: AssetPair,
    is_open: bool,
    operations: u64,
}

impl Pool {
    /// Creates an open pool with no recorded operations.
    #[must_use]
    pub const fn new(key: PairKey, pair: AssetPair) -> Self {
        Self {
            key,
            pair,
            is_open: true,
            operations: 0,
        }
    }

    /// Returns the key the pool is registered under.
    #[must_use]
    pub const fn key(&self) -> &PairKey {
        &self.key
    }

    /// Returns the pool's asset pair.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Returns whether the pool accepts operations.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Returns how many liquidity and swap operations have been committed.
    #[must_use]
    pub const fn operations(&self) -> u64 {
        self.operations
    }

    /// Resolves which side of the pair `address` is on.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if `address` is not one of the
    /// pool's assets.
    pub fn side_of(&self, address: &Address) -> Result<Side, AmmError> {
        self.pair.side_of(address)
    }

    /// Returns the pool asset at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if `address` is not one of the
    /// pool's assets.
    pub fn asset(&self, address: &Address) -> Result<Asset, AmmError> {
        self.side_of(address).map(|side| self.asset_on(side))
    }

    /// Returns the asset on `side`.
    #[must_use]
    pub const fn asset_on(&self, side: Side) -> Asset {
        self.pair.get(side)
    }

    pub(crate) fn record_operation(&mut self) {
        self.operations = self.operations.saturating_add(1);
    }
}
