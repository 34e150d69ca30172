//! In-memory asset hosting.
//!
//! [`InMemoryBank`] is the reference [`AssetBank`](crate::traits::AssetBank):
//! a map of [`Erc20Token`]s that reproduces OpenZeppelin ERC20 behaviour
//! and revert strings.  Tests, demos, and simulations run the exchange
//! against it.

pub mod erc20;
mod in_memory;

pub use erc20::Erc20Token;
pub use in_memory::{InMemoryBank, UNKNOWN_ASSET};
