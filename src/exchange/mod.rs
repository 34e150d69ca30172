//! The exchange orchestrator.
//!
//! [`Exchange`] ties the [`PoolRegistry`](crate::registry::PoolRegistry),
//! the [`LiquidityLedger`](crate::ledger::LiquidityLedger), the
//! [`ConstantProduct`](crate::pricing::ConstantProduct) engine, and an
//! [`AssetBank`](crate::traits::AssetBank) together.  [`SharedExchange`]
//! shares one across threads.

#[allow(clippy::module_inception)]
mod exchange;
mod event;
mod shared;

pub use event::ExchangeEvent;
pub use exchange::Exchange;
pub use shared::SharedExchange;
