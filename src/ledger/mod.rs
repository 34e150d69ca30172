//! Liquidity accounting.

mod liquidity_ledger;

pub use liquidity_ledger::{LiquidityLedger, Posting};
