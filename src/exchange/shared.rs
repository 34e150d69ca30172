//! A thread-safe handle to an [`Exchange`].

use std::sync::Arc;

use parking_lot::Mutex;

use super::Exchange;
use crate::domain::{Address, Amount, PairKey, SwapOutcome};
use crate::error::Result;
use crate::traits::AssetBank;

/// An [`Exchange`] behind one global lock.
///
/// Every operation takes the lock for its full duration, so concurrent
/// callers are linearized and the prices a swap reads cannot change
/// before its balances are written.  Cloning shares the same exchange.
///
/// # Examples
///
/// ```
/// use hydra_dex::assets::InMemoryBank;
/// use hydra_dex::config::ExchangeConfig;
/// use hydra_dex::domain::Address;
/// use hydra_dex::exchange::{Exchange, SharedExchange};
///
/// let cfg = ExchangeConfig::new(Address::repeat_byte(0xee)).expect("config");
/// let shared = SharedExchange::new(Exchange::new(cfg, InMemoryBank::new()).expect("dex"));
///
/// let handle = shared.clone();
/// std::thread::spawn(move || assert!(!handle.is_pool_open("USDC/HD")))
///     .join()
///     .expect("thread");
/// ```
#[derive(Debug)]
pub struct SharedExchange<B> {
    inner: Arc<Mutex<Exchange<B>>>,
}

impl<B> Clone for SharedExchange<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B: AssetBank> SharedExchange<B> {
    /// Wraps `exchange` for sharing.
    #[must_use]
    pub fn new(exchange: Exchange<B>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(exchange)),
        }
    }

    /// Runs `f` with shared access under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&Exchange<B>) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Runs `f` with exclusive access under the lock.
    ///
    /// Everything `f` does is one transaction as seen by other handles.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Exchange<B>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// See [`Exchange::create_pool`].
    ///
    /// # Errors
    ///
    /// Same as [`Exchange::create_pool`].
    pub fn create_pool(&self, asset_a: &Address, asset_b: &Address) -> Result<PairKey> {
        self.inner.lock().create_pool(asset_a, asset_b)
    }

    /// See [`Exchange::add_liquidity`].
    ///
    /// # Errors
    ///
    /// Same as [`Exchange::add_liquidity`].
    pub fn add_liquidity(
        &self,
        caller: &Address,
        key: &str,
        asset: &Address,
        amount: Amount,
    ) -> Result<()> {
        self.inner.lock().add_liquidity(caller, key, asset, amount)
    }

    /// See [`Exchange::remove_liquidity`].
    ///
    /// # Errors
    ///
    /// Same as [`Exchange::remove_liquidity`].
    pub fn remove_liquidity(
        &self,
        caller: &Address,
        key: &str,
        asset: &Address,
        amount: Amount,
    ) -> Result<()> {
        self.inner.lock().remove_liquidity(caller, key, asset, amount)
    }

    /// See [`Exchange::swap`].
    ///
    /// # Errors
    ///
    /// Same as [`Exchange::swap`].
    pub fn swap(
        &self,
        caller: &Address,
        key: &str,
        asset_in: &Address,
        amount_in: Amount,
    ) -> Result<SwapOutcome> {
        self.inner.lock().swap(caller, key, asset_in, amount_in)
    }

    /// See [`Exchange::quote_swap`].
    ///
    /// # Errors
    ///
    /// Same as [`Exchange::quote_swap`].
    pub fn quote_swap(&self, key: &str, asset_in: &Address, amount_in: Amount) -> Result<Amount> {
        self.inner.lock().quote_swap(key, asset_in, amount_in)
    }

    /// See [`Exchange::is_pool_open`].
    #[must_use]
    pub fn is_pool_open(&self, key: &str) -> bool {
        self.inner.lock().is_pool_open(key)
    }

    /// See [`Exchange::total_pool_balance`].
    ///
    /// # Errors
    ///
    /// Same as [`Exchange::total_pool_balance`].
    pub fn total_pool_balance(&self, key: &str, asset: &Address) -> Result<Amount> {
        self.inner.lock().total_pool_balance(key, asset)
    }

    /// See [`Exchange::user_pool_balance`].
    ///
    /// # Errors
    ///
    /// Same as [`Exchange::user_pool_balance`].
    pub fn user_pool_balance(&self, key: &str, user: &Address, asset: &Address) -> Result<Amount> {
        self.inner.lock().user_pool_balance(key, user, asset)
    }
}
