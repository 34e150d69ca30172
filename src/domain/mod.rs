//! Fundamental domain value types used throughout the exchange.
//!
//! This module contains the value types that model the exchange domain:
//! addresses, assets, amounts, asset pairs, pool keys, and swap outcomes.
//! All types use newtypes with validated constructors to enforce invariants.

mod address;
mod amount;
mod asset;
mod asset_pair;
mod decimals;
mod pair_key;
mod swap_outcome;
mod symbol;

pub use address::Address;
pub use amount::Amount;
pub use asset::Asset;
pub use asset_pair::{AssetPair, Side};
pub use decimals::Decimals;
pub use pair_key::{PairKey, DEFAULT_SEPARATOR};
pub use swap_outcome::SwapOutcome;
pub use symbol::{Symbol, MAX_SYMBOL_LEN};
