//! Per-pool asset totals and per-user positions.
//!
//! # Plan / Apply
//!
//! Every mutation is split in two:
//!
//! 1. **plan**: validate preconditions and compute the resulting balances
//!    as a [`Posting`].  Nothing changes.
//! 2. **apply**: commit a posting.  This cannot fail.
//!
//! An operation that also moves tokens plans its postings first, performs
//! its transfers, and applies the postings only once every transfer has
//! succeeded.  A posting records absolute balances, so it must be applied
//! before another posting on the same balance is planned.
//!
//! # Balances
//!
//! | Balance | Moved by |
//! |---|---|
//! | pool total | every posting |
//! | user position | [`plan_credit`](LiquidityLedger::plan_credit) / [`plan_debit`](LiquidityLedger::plan_debit) only |
//!
//! Swaps move pool totals only, so a pool's total may exceed the sum of
//! its positions (and fall below it on the side a swap drains).

use std::collections::HashMap;

use tracing::trace;

use crate::domain::{Address, Amount, PairKey};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct PoolBook {
    totals: HashMap<Address, Amount>,
    // (user, asset) -> position
    positions: HashMap<(Address, Address), Amount>,
}

/// A validated, not yet committed ledger mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a posting does nothing until applied"]
pub struct Posting {
    key: PairKey,
    asset: Address,
    total_after: Amount,
    position: Option<(Address, Amount)>,
}

impl Posting {
    /// Returns the pool the posting belongs to.
    pub const fn key(&self) -> &PairKey {
        &self.key
    }

    /// Returns the asset whose balances change.
    pub const fn asset(&self) -> Address {
        self.asset
    }

    /// Returns the pool total once applied.
    pub const fn total_after(&self) -> Amount {
        self.total_after
    }

    /// Returns the affected user and their position once applied, or
    /// `None` for a pool-only posting.
    pub const fn position_after(&self) -> Option<(Address, Amount)> {
        self.position
    }
}

/// Asset totals and user positions of every pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiquidityLedger {
    books: HashMap<PairKey, PoolBook>,
}

impl LiquidityLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the pool's total of `asset`, zero if never funded.
    #[must_use]
    pub fn total_balance(&self, key: &str, asset: &Address) -> Amount {
        self.books
            .get(key)
            .and_then(|book| book.totals.get(asset))
            .copied()
            .unwrap_or_default()
    }

    /// Returns `user`'s position of `asset` in the pool, zero if never funded.
    #[must_use]
    pub fn user_balance(&self, key: &str, user: &Address, asset: &Address) -> Amount {
        self.books
            .get(key)
            .and_then(|book| book.positions.get(&(*user, *asset)))
            .copied()
            .unwrap_or_default()
    }

    /// Returns every non-zero `(user, asset, amount)` position of the pool,
    /// ordered by user then asset.
    #[must_use]
    pub fn positions(&self, key: &str) -> Vec<(Address, Address, Amount)> {
        let mut out: Vec<(Address, Address, Amount)> = self
            .books
            .get(key)
            .map(|book| {
                book.positions
                    .iter()
                    .filter(|(_, amount)| !amount.is_zero())
                    .map(|(&(user, asset), &amount)| (user, asset, amount))
                    .collect()
            })
            .unwrap_or_default();
        out.sort_unstable();
        out
    }

    /// Returns the sum of every user's position of `asset` in the pool.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the sum exceeds `u128`.
    pub fn attributed_balance(&self, key: &str, asset: &Address) -> Result<Amount, AmmError> {
        let Some(book) = self.books.get(key) else {
            return Ok(Amount::ZERO);
        };
        book.positions
            .iter()
            .filter(|((_, a), _)| a == asset)
            .try_fold(Amount::ZERO, |acc, (_, amount)| acc.safe_add(amount))
    }

    /// Plans a deposit: raises both the pool total and `user`'s position.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if either balance would exceed `u128`.
    pub fn plan_credit(
        &self,
        key: &PairKey,
        user: &Address,
        asset: &Address,
        amount: Amount,
    ) -> Result<Posting, AmmError> {
        let total_after = self.total_balance(key.as_str(), asset).safe_add(&amount)?;
        let user_after = self
            .user_balance(key.as_str(), user, asset)
            .safe_add(&amount)?;
        Ok(Posting {
            key: key.clone(),
            asset: *asset,
            total_after,
            position: Some((*user, user_after)),
        })
    }

    /// Plans a withdrawal: lowers both the pool total and `user`'s position.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    ///
    /// 1. [`AmmError::InsufficientUserFunds`] if `user`'s position is below
    ///    `amount`.
    /// 2. [`AmmError::InsufficientPoolFunds`] if the pool total is below
    ///    `amount`.
    pub fn plan_debit(
        &self,
        key: &PairKey,
        user: &Address,
        asset: &Address,
        amount: Amount,
    ) -> Result<Posting, AmmError> {
        let user_after = self
            .user_balance(key.as_str(), user, asset)
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientUserFunds)?;
        let total_after = self
            .total_balance(key.as_str(), asset)
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientPoolFunds)?;
        Ok(Posting {
            key: key.clone(),
            asset: *asset,
            total_after,
            position: Some((*user, user_after)),
        })
    }

    /// Plans an increase of the pool total alone.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the total would exceed `u128`.
    pub fn plan_credit_pool_only(
        &self,
        key: &PairKey,
        asset: &Address,
        amount: Amount,
    ) -> Result<Posting, AmmError> {
        let total_after = self.total_balance(key.as_str(), asset).safe_add(&amount)?;
        Ok(Posting {
            key: key.clone(),
            asset: *asset,
            total_after,
            position: None,
        })
    }

    /// Plans a decrease of the pool total alone.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientPoolFunds`] if the total is below
    /// `amount`.
    pub fn plan_debit_pool_only(
        &self,
        key: &PairKey,
        asset: &Address,
        amount: Amount,
    ) -> Result<Posting, AmmError> {
        let total_after = self
            .total_balance(key.as_str(), asset)
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientPoolFunds)?;
        Ok(Posting {
            key: key.clone(),
            asset: *asset,
            total_after,
            position: None,
        })
    }

    /// Commits a planned posting.
    pub fn apply(&mut self, posting: Posting) {
        trace!(
            key = %posting.key,
            asset = %posting.asset,
            total = %posting.total_after,
            "ledger posting applied"
        );
        let book = self.books.entry(posting.key).or_default();
        book.totals.insert(posting.asset, posting.total_after);
        if let Some((user, amount)) = posting.position {
            if amount.is_zero() {
                book.positions.remove(&(user, posting.asset));
            } else {
                book.positions.insert((user, posting.asset), amount);
            }
        }
    }

    /// Plans and applies a deposit.
    ///
    /// # Errors
    ///
    /// See [`plan_credit`](Self::plan_credit).
    pub fn credit(
        &mut self,
        key: &PairKey,
        user: &Address,
        asset: &Address,
        amount: Amount,
    ) -> Result<(), AmmError> {
        let posting = self.plan_credit(key, user, asset, amount)?;
        self.apply(posting);
        Ok(())
    }

    /// Plans and applies a withdrawal.
    ///
    /// # Errors
    ///
    /// See [`plan_debit`](Self::plan_debit).
    pub fn debit(
        &mut self,
        key: &PairKey,
        user: &Address,
        asset: &Address,
        amount: Amount,
    ) -> Result<(), AmmError> {
        let posting = self.plan_debit(key, user, asset, amount)?;
        self.apply(posting);
        Ok(())
    }

    /// Plans and applies a pool-only increase.
    ///
    /// # Errors
    ///
    /// See [`plan_credit_pool_only`](Self::plan_credit_pool_only).
    pub fn credit_pool_only(
        &mut self,
        key: &PairKey,
        asset: &Address,
        amount: Amount,
    ) -> Result<(), AmmError> {
        let posting = self.plan_credit_pool_only(key, asset, amount)?;
        self.apply(posting);
        Ok(())
    }

    /// Plans and applies a pool-only decrease.
    ///
    /// # Errors
    ///
    /// See [`plan_debit_pool_only`](Self::plan_debit_pool_only).
    pub fn debit_pool_only(
        &mut self,
        key: &PairKey,
        asset: &Address,
        amount: Amount,
    ) -> Result<(), AmmError> {
        let posting = self.plan_debit_pool_only(key, asset, amount)?;
        self.apply(posting);
        Ok(())
    }
}
