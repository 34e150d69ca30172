//! A single in-memory ERC20 token.
//!
//! Mirrors the OpenZeppelin 4.x reference behaviour closely enough that
//! the exchange sees the same successes, failures, and revert strings as
//! it would against a deployed token:
//!
//! - `transfer_from` spends the allowance before moving the balance, so an
//!   under-approved call fails with [`INSUFFICIENT_ALLOWANCE`] even when the
//!   balance would also be short.
//! - An allowance of [`Amount::MAX`] is unlimited and never decremented.
//! - The zero address can neither send, receive, approve, nor be approved.
//! - A failing call changes nothing.

use std::collections::HashMap;

use crate::domain::{Address, Amount, Asset};
use crate::error::TransferError;

/// Revert string for a transfer larger than the sender's balance.
pub const EXCEEDS_BALANCE: &str = "ERC20: transfer amount exceeds balance";
/// Revert string for a `transfer_from` larger than the allowance.
pub const INSUFFICIENT_ALLOWANCE: &str = "ERC20: insufficient allowance";
/// Revert string for a transfer out of the zero address.
pub const TRANSFER_FROM_ZERO: &str = "ERC20: transfer from the zero address";
/// Revert string for a transfer into the zero address.
pub const TRANSFER_TO_ZERO: &str = "ERC20: transfer to the zero address";
/// Revert string for an approval by the zero address.
pub const APPROVE_FROM_ZERO: &str = "ERC20: approve from the zero address";
/// Revert string for an approval of the zero address.
pub const APPROVE_TO_ZERO: &str = "ERC20: approve to the zero address";
/// Revert string for minting to the zero address.
pub const MINT_TO_ZERO: &str = "ERC20: mint to the zero address";
/// Revert string for a mint that would overflow the total supply.
pub const SUPPLY_OVERFLOW: &str = "ERC20: total supply overflow";

/// Balances and allowances of one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Erc20Token {
    asset: Asset,
    total_supply: Amount,
    balances: HashMap<Address, Amount>,
    allowances: HashMap<(Address, Address), Amount>,
}

impl Erc20Token {
    /// Creates a token with zero supply.
    #[must_use]
    pub fn new(asset: Asset) -> Self {
        Self {
            asset,
            total_supply: Amount::ZERO,
            balances: HashMap::new(),
            allowances: HashMap::new(),
        }
    }

    /// Returns the token's metadata.
    #[must_use]
    pub const fn asset(&self) -> Asset {
        self.asset
    }

    /// Returns the total minted supply.
    pub const fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Returns `account`'s balance.
    pub fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or_default()
    }

    /// Returns `spender`'s allowance over `owner`'s tokens.
    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    /// Creates `amount` new tokens in `to`'s balance.
    ///
    /// # Errors
    ///
    /// Fails with [`MINT_TO_ZERO`] or [`SUPPLY_OVERFLOW`].
    pub fn mint(&mut self, to: &Address, amount: Amount) -> Result<(), TransferError> {
        if to.is_zero() {
            return Err(TransferError::new(MINT_TO_ZERO));
        }
        let supply = self
            .total_supply
            .checked_add(&amount)
            .ok_or_else(|| TransferError::new(SUPPLY_OVERFLOW))?;
        // balance <= supply, so this cannot overflow once supply did not
        let balance = self.balance_of(to).checked_add(&amount).unwrap_or(Amount::MAX);
        self.total_supply = supply;
        self.balances.insert(*to, balance);
        Ok(())
    }

    /// Sets `spender`'s allowance over `owner`'s tokens.
    ///
    /// # Errors
    ///
    /// Fails with [`APPROVE_FROM_ZERO`] or [`APPROVE_TO_ZERO`].
    pub fn approve(
        &mut self,
        owner: &Address,
        spender: &Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        if owner.is_zero() {
            return Err(TransferError::new(APPROVE_FROM_ZERO));
        }
        if spender.is_zero() {
            return Err(TransferError::new(APPROVE_TO_ZERO));
        }
        self.allowances.insert((*owner, *spender), amount);
        Ok(())
    }

    /// Moves `amount` from `sender` to `to`.
    ///
    /// # Errors
    ///
    /// Fails with [`TRANSFER_FROM_ZERO`], [`TRANSFER_TO_ZERO`], or
    /// [`EXCEEDS_BALANCE`].
    pub fn transfer(
        &mut self,
        sender: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let (sender_after, to_after) = self.plan_transfer(sender, to, amount)?;
        self.balances.insert(*sender, sender_after);
        self.balances.insert(*to, to_after);
        Ok(())
    }

    /// Moves `amount` from `from` to `to` on behalf of `spender`.
    ///
    /// # Errors
    ///
    /// Fails with [`INSUFFICIENT_ALLOWANCE`] first, then any error
    /// [`transfer`](Self::transfer) can produce.
    pub fn transfer_from(
        &mut self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let current = self.allowance(from, spender);
        let allowance_after = if current == Amount::MAX {
            Amount::MAX
        } else {
            current
                .checked_sub(&amount)
                .ok_or_else(|| TransferError::new(INSUFFICIENT_ALLOWANCE))?
        };
        let (from_after, to_after) = self.plan_transfer(from, to, amount)?;

        self.allowances.insert((*from, *spender), allowance_after);
        self.balances.insert(*from, from_after);
        self.balances.insert(*to, to_after);
        Ok(())
    }

    /// Validates a balance move and returns the resulting balances of
    /// `(from, to)` without applying them.
    fn plan_transfer(
        &self,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(Amount, Amount), TransferError> {
        if from.is_zero() {
            return Err(TransferError::new(TRANSFER_FROM_ZERO));
        }
        if to.is_zero() {
            return Err(TransferError::new(TRANSFER_TO_ZERO));
        }
        let from_after = self
            .balance_of(from)
            .checked_sub(&amount)
            .ok_or_else(|| TransferError::new(EXCEEDS_BALANCE))?;
        if from == to {
            return Ok((self.balance_of(from), self.balance_of(to)));
        }
        // Every balance is bounded by total_supply, so the sum fits.
        let to_after = self
            .balance_of(to)
            .checked_add(&amount)
            .ok_or_else(|| TransferError::new(SUPPLY_OVERFLOW))?;
        Ok((from_after, to_after))
    }
}
