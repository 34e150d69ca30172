//! Pool registration and lookup.

mod pool;
mod pool_registry;

pub use pool::Pool;
pub use pool_registry::PoolRegistry;
