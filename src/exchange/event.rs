//! Journal entries for committed operations.

use core::fmt;

use crate::domain::{Address, Amount, AssetPair, PairKey};

/// A committed state change.
///
/// Only successful operations are journaled, in commit order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeEvent {
    /// A pool was registered.
    PoolCreated {
        /// Key of the new pool.
        key: PairKey,
        /// Its canonically ordered assets.
        pair: AssetPair,
    },
    /// A provider deposited liquidity.
    LiquidityAdded {
        /// Pool key.
        key: PairKey,
        /// Depositing account.
        provider: Address,
        /// Deposited asset.
        asset: Address,
        /// Deposited amount.
        amount: Amount,
    },
    /// A provider withdrew liquidity.
    LiquidityRemoved {
        /// Pool key.
        key: PairKey,
        /// Withdrawing account.
        provider: Address,
        /// Withdrawn asset.
        asset: Address,
        /// Withdrawn amount.
        amount: Amount,
    },
    /// A trader swapped one pool asset for the other.
    Swapped {
        /// Pool key.
        key: PairKey,
        /// Trading account.
        trader: Address,
        /// Asset sold.
        asset_in: Address,
        /// Amount sold.
        amount_in: Amount,
        /// Asset bought.
        asset_out: Address,
        /// Amount bought.
        amount_out: Amount,
    },
}

impl ExchangeEvent {
    /// Returns the key of the pool the event belongs to.
    #[must_use]
    pub const fn key(&self) -> &PairKey {
        match self {
            Self::PoolCreated { key, .. }
            | Self::LiquidityAdded { key, .. }
            | Self::LiquidityRemoved { key, .. }
            | Self::Swapped { key, .. } => key,
        }
    }
}

impl fmt::Display for ExchangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PoolCreated { key, .. } => write!(f, "PoolCreated({key})"),
            Self::LiquidityAdded {
                key,
                provider,
                asset,
                amount,
            } => write!(f, "LiquidityAdded({key}, {provider}, {amount} of {asset})"),
            Self::LiquidityRemoved {
                key,
                provider,
                asset,
                amount,
            } => write!(f, "LiquidityRemoved({key}, {provider}, {amount} of {asset})"),
            Self::Swapped {
                key,
                trader,
                asset_in,
                amount_in,
                asset_out,
                amount_out,
            } => write!(
                f,
                "Swapped({key}, {trader}, {amount_in} of {asset_in} for {amount_out} of {asset_out})"
            ),
        }
    }
}
