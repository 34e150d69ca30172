//! The exchange: pools, liquidity, and swaps over an [`AssetBank`].
//!
//! # Operation Order
//!
//! Every mutating operation validates and plans its ledger postings first,
//! moves tokens second, and commits last:
//!
//! | Operation | Checks | Transfers | Commit |
//! |---|---|---|---|
//! | `add_liquidity` | pool, asset, amount, overflow | caller → custody | credit |
//! | `remove_liquidity` | pool, asset, amount, user funds, pool funds | custody → caller | debit |
//! | `swap` | pool, asset, amount, zero liquidity | caller → custody, custody → caller | pool-only credit and debit |
//!
//! A failure at any step leaves the ledger, the registry, and the event
//! journal untouched.  If the outgoing leg of a swap is refused after the
//! incoming leg succeeded, the incoming tokens are returned to the caller
//! before the error is surfaced.  If that return is refused too the swap
//! fails [`AmmError::StrandedSwapInput`] and custody is left holding the
//! input over the ledger total.
//!
//! An unknown key fails [`AmmError::PoolClosed`] before the asset or the
//! amount is looked at.

use tracing::{debug, error, info, warn};

use super::ExchangeEvent;
use crate::config::ExchangeConfig;
use crate::domain::{Address, Amount, AssetPair, PairKey, Side, SwapOutcome};
use crate::error::{AmmError, Result};
use crate::ledger::LiquidityLedger;
use crate::pricing::ConstantProduct;
use crate::registry::{Pool, PoolRegistry};
use crate::traits::AssetBank;

/// An AMM exchange holding every pool's liquidity in one custody account.
///
/// The exchange owns its registry, ledger, and asset bank outright; `&mut
/// self` on every mutating operation serializes them.  Wrap it in a
/// [`SharedExchange`](super::SharedExchange) to share across threads.
///
/// # Examples
///
/// ```
/// use hydra_dex::assets::InMemoryBank;
/// use hydra_dex::config::ExchangeConfig;
/// use hydra_dex::domain::{Address, Amount, Asset, Decimals, Symbol};
/// use hydra_dex::exchange::Exchange;
/// use hydra_dex::traits::AssetBank;
///
/// let custody = Address::repeat_byte(0xee);
/// let alice = Address::repeat_byte(0xa1);
/// let usdc = Asset::new(Address::repeat_byte(1), Symbol::new("USDC").expect("ok"), Decimals::new(6).expect("ok"));
/// let hd = Asset::new(Address::repeat_byte(2), Symbol::new("HD").expect("ok"), Decimals::new(18).expect("ok"));
///
/// let mut bank = InMemoryBank::new();
/// for asset in [usdc, hd] {
///     bank.deploy(asset, &alice, Amount::new(1_000_000)).expect("deploy");
///     bank.approve(&asset.address(), &alice, &custody, Amount::MAX).expect("approve");
/// }
///
/// let mut dex = Exchange::new(ExchangeConfig::new(custody).expect("config"), bank).expect("dex");
/// let key = dex.create_pool(&usdc.address(), &hd.address()).expect("new pair");
/// dex.add_liquidity(&alice, key.as_str(), &usdc.address(), Amount::new(10_000)).expect("add");
/// dex.add_liquidity(&alice, key.as_str(), &hd.address(), Amount::new(10_000)).expect("add");
///
/// let out = dex.swap(&alice, "USDC/HD", &usdc.address(), Amount::new(100)).expect("swap");
/// assert_eq!(out.amount_out(), Amount::new(100));
/// ```
#[derive(Debug)]
pub struct Exchange<B> {
    config: ExchangeConfig,
    registry: PoolRegistry,
    ledger: LiquidityLedger,
    bank: B,
    events: Vec<ExchangeEvent>,
}

impl<B: AssetBank> Exchange<B> {
    /// Creates an exchange with no pools.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`ExchangeConfig::validate`].
    pub fn new(config: ExchangeConfig, bank: B) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            registry: PoolRegistry::new(config.key_separator()),
            ledger: LiquidityLedger::new(),
            bank,
            events: Vec::new(),
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    /// Returns the custody account.
    #[must_use]
    pub const fn custody(&self) -> Address {
        self.config.custody()
    }

    // -- pools ---------------------------------------------------------------

    /// Registers a pool for the unordered pair `{asset_a, asset_b}`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if either asset is unknown to the bank
    ///   or both are the same.
    /// - [`AmmError::PoolAlreadyExists`] if the pair's key is taken.
    pub fn create_pool(&mut self, asset_a: &Address, asset_b: &Address) -> Result<PairKey> {
        let result = self.try_create_pool(asset_a, asset_b);
        if let Err(err) = &result {
            warn!(%asset_a, %asset_b, %err, "create_pool rejected");
        }
        result
    }

    fn try_create_pool(&mut self, asset_a: &Address, asset_b: &Address) -> Result<PairKey> {
        let a = self
            .bank
            .asset(asset_a)
            .ok_or(AmmError::InvalidAsset("asset unknown to the bank"))?;
        let b = self
            .bank
            .asset(asset_b)
            .ok_or(AmmError::InvalidAsset("asset unknown to the bank"))?;
        let pair = AssetPair::new(a, b)?;
        let key = self.registry.create_pool(pair)?;

        info!(%key, "pool created");
        self.record(ExchangeEvent::PoolCreated {
            key: key.clone(),
            pair,
        });
        Ok(key)
    }

    /// Returns `true` if a pool is registered under `key`.
    #[must_use]
    pub fn is_pool_open(&self, key: &str) -> bool {
        self.registry.is_pool_open(key)
    }

    /// Returns the pool registered under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolClosed`] if no pool is registered under `key`.
    pub fn pool(&self, key: &str) -> Result<&Pool> {
        self.registry.get_pool(key)
    }

    /// Returns every registered key in ascending order.
    #[must_use]
    pub fn pool_keys(&self) -> Vec<&PairKey> {
        self.registry.keys()
    }

    /// Returns the pool's totals as `(first, second)` in pair order.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolClosed`] if no pool is registered under `key`.
    pub fn reserves(&self, key: &str) -> Result<(Amount, Amount)> {
        let pool = self.registry.get_pool(key)?;
        let first = pool.asset_on(Side::First).address();
        let second = pool.asset_on(Side::Second).address();
        Ok((
            self.ledger.total_balance(key, &first),
            self.ledger.total_balance(key, &second),
        ))
    }

    /// Returns the pool's total of `asset`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolClosed`] if no pool is registered under `key`.
    /// - [`AmmError::InvalidAsset`] if `asset` is not one of its assets.
    pub fn total_pool_balance(&self, key: &str, asset: &Address) -> Result<Amount> {
        self.registry.get_pool(key)?.asset(asset)?;
        Ok(self.ledger.total_balance(key, asset))
    }

    /// Returns `user`'s position of `asset` in the pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolClosed`] if no pool is registered under `key`.
    /// - [`AmmError::InvalidAsset`] if `asset` is not one of its assets.
    pub fn user_pool_balance(&self, key: &str, user: &Address, asset: &Address) -> Result<Amount> {
        self.registry.get_pool(key)?.asset(asset)?;
        Ok(self.ledger.user_balance(key, user, asset))
    }

    /// Returns the ledger for audits.
    #[must_use]
    pub const fn ledger(&self) -> &LiquidityLedger {
        &self.ledger
    }

    // -- liquidity -----------------------------------------------------------

    /// Deposits `amount` of `asset` from `caller` into the pool.
    ///
    /// The caller must have approved the custody account for at least
    /// `amount`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolClosed`] / [`AmmError::InvalidAsset`] for an
    ///   unknown pool or foreign asset.
    /// - [`AmmError::InvalidQuantity`] if `amount` is zero.
    /// - [`AmmError::AssetTransferFailure`] carrying the bank's reason if
    ///   the pull is refused.
    pub fn add_liquidity(
        &mut self,
        caller: &Address,
        key: &str,
        asset: &Address,
        amount: Amount,
    ) -> Result<()> {
        let result = self.try_add_liquidity(caller, key, asset, amount);
        if let Err(err) = &result {
            warn!(%key, %caller, %asset, %amount, %err, "add_liquidity rejected");
        }
        result
    }

    fn try_add_liquidity(
        &mut self,
        caller: &Address,
        key: &str,
        asset: &Address,
        amount: Amount,
    ) -> Result<()> {
        let pool = self.registry.get_pool(key)?;
        pool.asset(asset)?;
        if amount.is_zero() {
            return Err(AmmError::InvalidQuantity("liquidity amount must be positive"));
        }
        let pool_key = pool.key().clone();

        let posting = self.ledger.plan_credit(&pool_key, caller, asset, amount)?;
        let custody = self.custody();
        self.bank
            .transfer_from(asset, &custody, caller, &custody, amount)?;

        self.ledger.apply(posting);
        self.registry.get_pool_mut(key)?.record_operation();
        info!(key = %pool_key, provider = %caller, %asset, %amount, "liquidity added");
        self.record(ExchangeEvent::LiquidityAdded {
            key: pool_key,
            provider: *caller,
            asset: *asset,
            amount,
        });
        Ok(())
    }

    /// Withdraws `amount` of `asset` from `caller`'s position to `caller`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolClosed`] / [`AmmError::InvalidAsset`] for an
    ///   unknown pool or foreign asset.
    /// - [`AmmError::InvalidQuantity`] if `amount` is zero.
    /// - [`AmmError::InsufficientUserFunds`], then
    ///   [`AmmError::InsufficientPoolFunds`], before any transfer.
    /// - [`AmmError::AssetTransferFailure`] if the bank refuses the push.
    pub fn remove_liquidity(
        &mut self,
        caller: &Address,
        key: &str,
        asset: &Address,
        amount: Amount,
    ) -> Result<()> {
        let result = self.try_remove_liquidity(caller, key, asset, amount);
        if let Err(err) = &result {
            warn!(%key, %caller, %asset, %amount, %err, "remove_liquidity rejected");
        }
        result
    }

    fn try_remove_liquidity(
        &mut self,
        caller: &Address,
        key: &str,
        asset: &Address,
        amount: Amount,
    ) -> Result<()> {
        let pool = self.registry.get_pool(key)?;
        pool.asset(asset)?;
        if amount.is_zero() {
            return Err(AmmError::InvalidQuantity("liquidity amount must be positive"));
        }
        let pool_key = pool.key().clone();

        let posting = self.ledger.plan_debit(&pool_key, caller, asset, amount)?;
        let custody = self.custody();
        self.bank.transfer(asset, &custody, caller, amount)?;

        self.ledger.apply(posting);
        self.registry.get_pool_mut(key)?.record_operation();
        info!(key = %pool_key, provider = %caller, %asset, %amount, "liquidity removed");
        self.record(ExchangeEvent::LiquidityRemoved {
            key: pool_key,
            provider: *caller,
            asset: *asset,
            amount,
        });
        Ok(())
    }

    // -- swaps ---------------------------------------------------------------

    /// Previews the output of swapping `amount_in` of `asset_in`.
    ///
    /// # Errors
    ///
    /// Same as [`swap`](Self::swap) except transfer failures.
    pub fn quote_swap(&self, key: &str, asset_in: &Address, amount_in: Amount) -> Result<Amount> {
        let asset_out = self.resolve_output(key, asset_in, amount_in)?;
        let quote = ConstantProduct::quote_exact_in(
            self.ledger.total_balance(key, asset_in),
            self.ledger.total_balance(key, &asset_out),
            amount_in,
        )?;
        Ok(quote.amount_out())
    }

    /// Sells `amount_in` of `asset_in` for the pool's other asset.
    ///
    /// The caller must have approved the custody account for at least
    /// `amount_in`.  Neither side's provider positions change.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolClosed`] / [`AmmError::InvalidAsset`] for an
    ///   unknown pool or foreign asset.
    /// - [`AmmError::InvalidQuantity`] if `amount_in` is zero.
    /// - [`AmmError::ZeroPoolLiquidity`] if either pool total is zero,
    ///   before any transfer.
    /// - [`AmmError::AssetTransferFailure`] if the bank refuses either leg
    ///   and nothing is left in custody.
    /// - [`AmmError::StrandedSwapInput`] if the payout is refused and the
    ///   pulled input cannot be returned.  Custody then holds `amount_in`
    ///   of `asset_in` that no pool total accounts for.
    pub fn swap(
        &mut self,
        caller: &Address,
        key: &str,
        asset_in: &Address,
        amount_in: Amount,
    ) -> Result<SwapOutcome> {
        let result = self.try_swap(caller, key, asset_in, amount_in);
        if let Err(err) = &result {
            warn!(%key, %caller, %asset_in, %amount_in, %err, "swap rejected");
        }
        result
    }

    fn try_swap(
        &mut self,
        caller: &Address,
        key: &str,
        asset_in: &Address,
        amount_in: Amount,
    ) -> Result<SwapOutcome> {
        let asset_out = self.resolve_output(key, asset_in, amount_in)?;
        let pool_key = self.registry.get_pool(key)?.key().clone();

        let quote = ConstantProduct::quote_exact_in(
            self.ledger.total_balance(key, asset_in),
            self.ledger.total_balance(key, &asset_out),
            amount_in,
        )?;
        let amount_out = quote.amount_out();
        let credit_in = self
            .ledger
            .plan_credit_pool_only(&pool_key, asset_in, amount_in)?;
        let debit_out = self
            .ledger
            .plan_debit_pool_only(&pool_key, &asset_out, amount_out)?;
        let outcome = SwapOutcome::new(
            *asset_in,
            asset_out,
            amount_in,
            amount_out,
            quote.k_before(),
            quote.k_after(),
        )?;
        debug!(key = %pool_key, %amount_in, %amount_out, k_drift = %outcome.k_drift(), "swap priced");

        let custody = self.custody();
        self.bank
            .transfer_from(asset_in, &custody, caller, &custody, amount_in)?;
        if let Err(refused) = self.bank.transfer(&asset_out, &custody, caller, amount_out) {
            warn!(key = %pool_key, %caller, reason = %refused, "swap payout refused, returning input");
            if let Err(stuck) = self.bank.transfer(asset_in, &custody, caller, amount_in) {
                error!(key = %pool_key, %caller, %asset_in, %amount_in, reason = %stuck, "swap input stranded in custody");
                return Err(AmmError::StrandedSwapInput {
                    payout: refused,
                    refund: stuck,
                });
            }
            return Err(refused.into());
        }

        self.ledger.apply(credit_in);
        self.ledger.apply(debit_out);
        self.registry.get_pool_mut(key)?.record_operation();
        info!(key = %pool_key, trader = %caller, %amount_in, %amount_out, "swap executed");
        self.record(ExchangeEvent::Swapped {
            key: pool_key,
            trader: *caller,
            asset_in: *asset_in,
            amount_in,
            asset_out,
            amount_out,
        });
        Ok(outcome)
    }

    /// Checks pool, then asset, then amount, and returns the asset a swap
    /// of `asset_in` pays out.
    fn resolve_output(&self, key: &str, asset_in: &Address, amount_in: Amount) -> Result<Address> {
        let pool = self.registry.get_pool(key)?;
        let side_in = pool.side_of(asset_in)?;
        if amount_in.is_zero() {
            return Err(AmmError::InvalidQuantity("swap amount must be positive"));
        }
        Ok(pool.asset_on(side_in.opposite()).address())
    }

    // -- journal and bank ----------------------------------------------------

    /// Returns every journaled event in commit order.
    #[must_use]
    pub fn events(&self) -> &[ExchangeEvent] {
        &self.events
    }

    /// Removes and returns every journaled event.
    pub fn drain_events(&mut self) -> Vec<ExchangeEvent> {
        core::mem::take(&mut self.events)
    }

    /// Returns the asset bank.
    #[must_use]
    pub const fn assets(&self) -> &B {
        &self.bank
    }

    /// Returns the asset bank mutably, e.g. to mint or approve.
    pub fn assets_mut(&mut self) -> &mut B {
        &mut self.bank
    }

    /// Consumes the exchange, returning its bank.
    pub fn into_assets(self) -> B {
        self.bank
    }

    fn record(&mut self, event: ExchangeEvent) {
        if self.config.record_events() {
            self.events.push(event);
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::assets::erc20::EXCEEDS_BALANCE;
    use crate::assets::InMemoryBank;
    use crate::domain::{Asset, Decimals, Symbol};
    use crate::error::TransferError;

    const E8: u128 = 100_000_000;

    fn custody() -> Address {
        Address::repeat_byte(0xee)
    }

    fn alice() -> Address {
        Address::repeat_byte(0xa1)
    }

    fn asset(byte: u8, sym: &str) -> Asset {
        let (Ok(s), Ok(d)) = (Symbol::new(sym), Decimals::new(18)) else {
            panic!("valid metadata");
        };
        Asset::new(Address::repeat_byte(byte), s, d)
    }

    fn usdc() -> Address {
        Address::repeat_byte(1)
    }

    fn hd() -> Address {
        Address::repeat_byte(2)
    }

    fn dex() -> Exchange<InMemoryBank> {
        let mut bank = InMemoryBank::new();
        for a in [asset(1, "USDC"), asset(2, "HD")] {
            let Ok(()) = bank.deploy(a, &alice(), Amount::new(10 * E8)) else {
                panic!("deploy ok");
            };
            let Ok(()) = bank.approve(&a.address(), &alice(), &custody(), Amount::MAX) else {
                panic!("approve ok");
            };
        }
        let Ok(cfg) = ExchangeConfig::new(custody()) else {
            panic!("valid config");
        };
        let Ok(dex) = Exchange::new(cfg, bank) else {
            panic!("valid exchange");
        };
        dex
    }

    fn funded_dex() -> Exchange<InMemoryBank> {
        let mut dex = dex();
        let Ok(key) = dex.create_pool(&usdc(), &hd()) else {
            panic!("create ok");
        };
        for a in [usdc(), hd()] {
            let Ok(()) = dex.add_liquidity(&alice(), key.as_str(), &a, Amount::new(E8)) else {
                panic!("add ok");
            };
        }
        dex
    }

    #[test]
    fn create_pool_journals_and_rejects_duplicates() {
        let mut dex = dex();
        let Ok(key) = dex.create_pool(&hd(), &usdc()) else {
            panic!("create ok");
        };
        assert_eq!(key, "USDC/HD");
        assert!(dex.is_pool_open("USDC/HD"));
        assert_eq!(dex.create_pool(&usdc(), &hd()), Err(AmmError::PoolAlreadyExists));
        assert_eq!(dex.events().len(), 1);
        assert_eq!(dex.pool_keys().len(), 1);
    }

    #[test]
    fn create_pool_validates_assets() {
        let mut dex = dex();
        assert!(matches!(
            dex.create_pool(&usdc(), &usdc()),
            Err(AmmError::InvalidAsset(_))
        ));
        assert!(matches!(
            dex.create_pool(&usdc(), &Address::repeat_byte(9)),
            Err(AmmError::InvalidAsset(_))
        ));
        assert!(dex.pool_keys().is_empty());
    }

    #[test]
    fn add_liquidity_moves_tokens_into_custody() {
        let dex = funded_dex();
        assert_eq!(dex.total_pool_balance("USDC/HD", &usdc()), Ok(Amount::new(E8)));
        assert_eq!(
            dex.user_pool_balance("USDC/HD", &alice(), &usdc()),
            Ok(Amount::new(E8))
        );
        assert_eq!(dex.assets().balance_of(&usdc(), &custody()), Amount::new(E8));
        assert_eq!(dex.reserves("USDC/HD"), Ok((Amount::new(E8), Amount::new(E8))));
        let Ok(pool) = dex.pool("USDC/HD") else {
            panic!("pool registered");
        };
        assert_eq!(pool.operations(), 2);
    }

    #[test]
    fn failed_pull_changes_nothing() {
        let mut dex = funded_dex();
        let before = dex.ledger().clone();
        let result = dex.add_liquidity(&alice(), "USDC/HD", &usdc(), Amount::new(100 * E8));
        assert_eq!(
            result,
            Err(AmmError::AssetTransferFailure(TransferError::new(EXCEEDS_BALANCE)))
        );
        assert_eq!(dex.ledger(), &before);
        assert_eq!(dex.events().len(), 3);
    }

    #[test]
    fn swap_prices_from_pre_swap_totals() {
        let mut dex = funded_dex();
        let Ok(quoted) = dex.quote_swap("USDC/HD", &usdc(), Amount::new(10_000)) else {
            panic!("quote ok");
        };
        let Ok(outcome) = dex.swap(&alice(), "USDC/HD", &usdc(), Amount::new(10_000)) else {
            panic!("swap ok");
        };
        assert_eq!(outcome.amount_out(), quoted);
        assert_eq!(outcome.asset_out(), hd());
        assert_eq!(
            dex.reserves("USDC/HD"),
            Ok((Amount::new(E8 + 10_000), Amount::new(E8 - quoted.get())))
        );
        // positions are untouched by swaps
        assert_eq!(
            dex.user_pool_balance("USDC/HD", &alice(), &usdc()),
            Ok(Amount::new(E8))
        );
    }

    #[test]
    fn zero_amounts_rejected() {
        let mut dex = funded_dex();
        assert!(matches!(
            dex.add_liquidity(&alice(), "USDC/HD", &usdc(), Amount::ZERO),
            Err(AmmError::InvalidQuantity(_))
        ));
        assert!(matches!(
            dex.remove_liquidity(&alice(), "USDC/HD", &usdc(), Amount::ZERO),
            Err(AmmError::InvalidQuantity(_))
        ));
        assert!(matches!(
            dex.swap(&alice(), "USDC/HD", &usdc(), Amount::ZERO),
            Err(AmmError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn unknown_pool_and_foreign_asset() {
        let mut dex = funded_dex();
        assert_eq!(
            dex.swap(&alice(), "HD/USDC", &usdc(), Amount::new(1)),
            Err(AmmError::PoolClosed)
        );
        assert_eq!(dex.total_pool_balance("nope", &usdc()), Err(AmmError::PoolClosed));
        assert!(matches!(
            dex.swap(&alice(), "USDC/HD", &Address::repeat_byte(7), Amount::new(1)),
            Err(AmmError::InvalidAsset(_))
        ));
    }

    #[test]
    fn unknown_pool_wins_over_zero_amount() {
        let mut dex = funded_dex();
        assert_eq!(
            dex.add_liquidity(&alice(), "USD", &usdc(), Amount::ZERO),
            Err(AmmError::PoolClosed)
        );
        assert_eq!(
            dex.remove_liquidity(&alice(), "USD", &usdc(), Amount::ZERO),
            Err(AmmError::PoolClosed)
        );
        assert_eq!(
            dex.swap(&alice(), "USD", &usdc(), Amount::ZERO),
            Err(AmmError::PoolClosed)
        );
        assert_eq!(
            dex.quote_swap("USD", &usdc(), Amount::ZERO),
            Err(AmmError::PoolClosed)
        );
        assert!(matches!(
            dex.swap(&alice(), "USDC/HD", &Address::repeat_byte(7), Amount::ZERO),
            Err(AmmError::InvalidAsset(_))
        ));
        assert_eq!(dex.events().len(), 3);
    }

    /// Delegates to an [`InMemoryBank`] but refuses `transfer` of the
    /// listed assets.
    #[derive(Debug)]
    struct PausedBank {
        inner: InMemoryBank,
        paused: Vec<Address>,
    }

    impl AssetBank for PausedBank {
        fn asset(&self, asset: &Address) -> Option<Asset> {
            self.inner.asset(asset)
        }

        fn balance_of(&self, asset: &Address, account: &Address) -> Amount {
            self.inner.balance_of(asset, account)
        }

        fn allowance(&self, asset: &Address, owner: &Address, spender: &Address) -> Amount {
            self.inner.allowance(asset, owner, spender)
        }

        fn approve(
            &mut self,
            asset: &Address,
            owner: &Address,
            spender: &Address,
            amount: Amount,
        ) -> core::result::Result<(), TransferError> {
            self.inner.approve(asset, owner, spender, amount)
        }

        fn transfer(
            &mut self,
            asset: &Address,
            sender: &Address,
            to: &Address,
            amount: Amount,
        ) -> core::result::Result<(), TransferError> {
            if self.paused.contains(asset) {
                return Err(TransferError::new("token paused"));
            }
            self.inner.transfer(asset, sender, to, amount)
        }

        fn transfer_from(
            &mut self,
            asset: &Address,
            spender: &Address,
            from: &Address,
            to: &Address,
            amount: Amount,
        ) -> core::result::Result<(), TransferError> {
            self.inner.transfer_from(asset, spender, from, to, amount)
        }
    }

    fn paused_dex(paused: Vec<Address>) -> Exchange<PausedBank> {
        let Exchange {
            config,
            registry,
            ledger,
            bank,
            ..
        } = funded_dex();
        Exchange {
            config,
            registry,
            ledger,
            bank: PausedBank { inner: bank, paused },
            events: Vec::new(),
        }
    }

    #[test]
    fn refused_payout_returns_input() {
        let mut dex = paused_dex(vec![hd()]);
        let before = dex.ledger().clone();
        let held = dex.assets().balance_of(&usdc(), &alice());

        let result = dex.swap(&alice(), "USDC/HD", &usdc(), Amount::new(10_000));
        assert_eq!(
            result,
            Err(AmmError::AssetTransferFailure(TransferError::new("token paused")))
        );
        assert_eq!(dex.ledger(), &before);
        assert_eq!(dex.assets().balance_of(&usdc(), &alice()), held);
        assert_eq!(dex.assets().balance_of(&usdc(), &custody()), Amount::new(E8));
        assert!(dex.events().is_empty());
    }

    #[test]
    fn refused_refund_strands_input() {
        let mut dex = paused_dex(vec![usdc(), hd()]);
        let before = dex.ledger().clone();

        let result = dex.swap(&alice(), "USDC/HD", &usdc(), Amount::new(10_000));
        assert_eq!(
            result,
            Err(AmmError::StrandedSwapInput {
                payout: TransferError::new("token paused"),
                refund: TransferError::new("token paused"),
            })
        );
        assert_eq!(dex.ledger(), &before);
        // custody holds the input; the pool total does not
        assert_eq!(
            dex.assets().balance_of(&usdc(), &custody()),
            Amount::new(E8 + 10_000)
        );
        assert_eq!(dex.total_pool_balance("USDC/HD", &usdc()), Ok(Amount::new(E8)));
    }

    #[test]
    fn events_can_be_disabled_and_drained() {
        let mut dex = funded_dex();
        assert_eq!(dex.drain_events().len(), 3);
        assert!(dex.events().is_empty());

        let quiet = dex.into_assets();
        let Ok(cfg) = ExchangeConfig::new(custody()).map(|c| c.with_record_events(false)) else {
            panic!("valid config");
        };
        let Ok(mut dex) = Exchange::new(cfg, quiet) else {
            panic!("valid exchange");
        };
        let Ok(_) = dex.create_pool(&usdc(), &hd()) else {
            panic!("create ok");
        };
        assert!(dex.events().is_empty());
    }
}
