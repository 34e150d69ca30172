//! The set of registered pools.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::Pool;
use crate::domain::{AssetPair, PairKey, DEFAULT_SEPARATOR};
use crate::error::AmmError;

/// Pools indexed by their [`PairKey`].
///
/// The registry is the single gate that turns an unregistered key into
/// [`AmmError::PoolClosed`]; every keyed operation goes through
/// [`get_pool`](Self::get_pool) or [`get_pool_mut`](Self::get_pool_mut).
///
/// The key is the identity of a pool.  Two different pairs whose symbols
/// render the same key cannot both be registered.
#[derive(Debug, Clone)]
pub struct PoolRegistry {
    pools: HashMap<PairKey, Pool>,
    separator: char,
}

impl PoolRegistry {
    /// Creates an empty registry that joins symbols with `separator`.
    #[must_use]
    pub fn new(separator: char) -> Self {
        Self {
            pools: HashMap::new(),
            separator,
        }
    }

    /// Returns the separator keys are rendered with.
    #[must_use]
    pub const fn separator(&self) -> char {
        self.separator
    }

    /// Returns the key `pair` is (or would be) registered under.
    #[must_use]
    pub fn key_for(&self, pair: &AssetPair) -> PairKey {
        PairKey::from_pair(pair, self.separator)
    }

    /// Registers a new open pool for `pair` and returns its key.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolAlreadyExists`] if a pool is registered
    /// under the same key.
    pub fn create_pool(&mut self, pair: AssetPair) -> Result<PairKey, AmmError> {
        let key = self.key_for(&pair);
        if self.pools.contains_key(&key) {
            warn!(%key, "pool already exists");
            return Err(AmmError::PoolAlreadyExists);
        }
        debug!(%key, first = %pair.first().address(), second = %pair.second().address(), "pool registered");
        self.pools.insert(key.clone(), Pool::new(key.clone(), pair));
        Ok(key)
    }

    /// Returns `true` if a pool is registered under `key`.
    #[must_use]
    pub fn is_pool_open(&self, key: &str) -> bool {
        self.pools.get(key).is_some_and(Pool::is_open)
    }

    /// Returns the pool registered under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolClosed`] if no pool is registered under `key`.
    pub fn get_pool(&self, key: &str) -> Result<&Pool, AmmError> {
        self.pools
            .get(key)
            .filter(|pool| pool.is_open())
            .ok_or(AmmError::PoolClosed)
    }

    /// Mutable variant of [`get_pool`](Self::get_pool).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolClosed`] if no pool is registered under `key`.
    pub fn get_pool_mut(&mut self, key: &str) -> Result<&mut Pool, AmmError> {
        self.pools
            .get_mut(key)
            .filter(|pool| pool.is_open())
            .ok_or(AmmError::PoolClosed)
    }

    /// Returns the number of registered pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Returns `true` if no pool is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Returns every registered key in ascending order.
    #[must_use]
    pub fn keys(&self) -> Vec<&PairKey> {
        let mut keys: Vec<&PairKey> = self.pools.keys().collect();
        keys.sort_unstable();
        keys
    }
}

impl Default for PoolRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}
