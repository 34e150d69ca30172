//! The seam between the exchange and the assets it trades.
//!
//! The exchange never owns token balances.  Every movement of tokens goes
//! through an [`AssetBank`]: a host for any number of ERC20-like assets,
//! addressed by contract [`Address`].  Implementations decide what a
//! transfer actually is (an in-memory map, an RPC call, a VM host call);
//! the exchange only reacts to success or failure.
//!
//! # Failure Contract
//!
//! Any `Err(TransferError)` is a hard refusal: the enclosing exchange
//! operation aborts and surfaces the error verbatim.  A refused transfer
//! must not have moved any tokens.
//!
//! # Call Pattern
//!
//! ```text
//! add_liquidity    transfer_from(asset, spender = custody, from = caller, to = custody)
//! remove_liquidity transfer(asset, sender = custody, to = caller)
//! swap             transfer_from(asset_in, custody, caller, custody)
//!                  transfer(asset_out, custody, caller)
//! ```

use crate::domain::{Address, Amount, Asset};
use crate::error::TransferError;

/// A host of ERC20-like assets.
///
/// The `sender` / `spender` / `owner` arguments make the calling account
/// explicit; on a chain they are the transaction's `msg.sender`.
///
/// # Implementors
///
/// - [`InMemoryBank`](crate::assets::InMemoryBank): OpenZeppelin-compatible
///   ERC20 semantics for tests, demos, and simulation.
pub trait AssetBank {
    /// Returns the metadata of the asset deployed at `asset`, or `None`
    /// if no such asset exists.
    fn asset(&self, asset: &Address) -> Option<Asset>;

    /// Returns `account`'s balance of `asset` (zero for unknown assets).
    fn balance_of(&self, asset: &Address, account: &Address) -> Amount;

    /// Returns how much of `owner`'s `asset` `spender` may move.
    fn allowance(&self, asset: &Address, owner: &Address, spender: &Address) -> Amount;

    /// Sets `spender`'s allowance over `owner`'s `asset` to `amount`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] if the asset host refuses.
    fn approve(
        &mut self,
        asset: &Address,
        owner: &Address,
        spender: &Address,
        amount: Amount,
    ) -> Result<(), TransferError>;

    /// Moves `amount` of `asset` from `sender` to `to`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] if `sender`'s balance is insufficient or
    /// the asset host refuses for any other reason.
    fn transfer(
        &mut self,
        asset: &Address,
        sender: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), TransferError>;

    /// Moves `amount` of `asset` from `from` to `to`, spending `spender`'s
    /// allowance over `from`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] if the allowance or balance is
    /// insufficient or the asset host refuses for any other reason.
    fn transfer_from(
        &mut self,
        asset: &Address,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), TransferError>;
}
