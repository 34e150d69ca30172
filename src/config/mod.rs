//! Exchange configuration.
//!
//! [`ExchangeConfig`] carries the parameters an
//! [`Exchange`](crate::exchange::Exchange) is built with: the custody
//! account, the pool-key separator, and whether to journal events.

mod exchange_config;

pub use exchange_config::ExchangeConfig;
