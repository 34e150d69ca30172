//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use hydra_dex::prelude::*;
//! ```

pub use crate::assets::InMemoryBank;
pub use crate::config::ExchangeConfig;
pub use crate::domain::{Address, Amount, Asset, AssetPair, Decimals, PairKey, SwapOutcome, Symbol};
pub use crate::error::{AmmError, Result, TransferError};
pub use crate::exchange::{Exchange, ExchangeEvent, SharedExchange};
pub use crate::math::{CheckedArithmetic, U256};
pub use crate::traits::AssetBank;
