//! An [`AssetBank`] backed by in-memory [`Erc20Token`]s.

use std::collections::HashMap;

use tracing::trace;

use super::Erc20Token;
use crate::domain::{Address, Amount, Asset};
use crate::error::{AmmError, TransferError};
use crate::traits::AssetBank;

/// Revert string for any call against an address with no token.
pub const UNKNOWN_ASSET: &str = "asset not deployed";

/// A host of any number of in-memory ERC20 tokens, keyed by address.
///
/// # Examples
///
/// ```
/// use hydra_dex::assets::InMemoryBank;
/// use hydra_dex::domain::{Address, Amount, Asset, Decimals, Symbol};
/// use hydra_dex::traits::AssetBank;
///
/// let mut bank = InMemoryBank::new();
/// let usdc = Asset::new(Address::repeat_byte(1), Symbol::new("USDC").expect("ok"), Decimals::new(6).expect("ok"));
/// let alice = Address::repeat_byte(0xa1);
///
/// bank.deploy(usdc, &alice, Amount::new(1_000)).expect("fresh address");
/// assert_eq!(bank.balance_of(&usdc.address(), &alice), Amount::new(1_000));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryBank {
    tokens: HashMap<Address, Erc20Token>,
}

impl InMemoryBank {
    /// Creates an empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deploys a token and mints `initial_supply` to `holder`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if `asset` is at the zero address or a
    ///   token is already deployed there.
    /// - [`AmmError::AssetTransferFailure`] if the initial mint is refused.
    pub fn deploy(
        &mut self,
        asset: Asset,
        holder: &Address,
        initial_supply: Amount,
    ) -> Result<(), AmmError> {
        let address = asset.address();
        if address.is_zero() {
            return Err(AmmError::InvalidAsset("asset cannot live at the zero address"));
        }
        if self.tokens.contains_key(&address) {
            return Err(AmmError::InvalidAsset("asset already deployed"));
        }
        let mut token = Erc20Token::new(asset);
        if !initial_supply.is_zero() {
            token.mint(holder, initial_supply)?;
        }
        trace!(asset = %address, symbol = %asset.symbol(), supply = %initial_supply, "token deployed");
        self.tokens.insert(address, token);
        Ok(())
    }

    /// Mints `amount` of `asset` to `to`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] if the asset is unknown or the mint is
    /// refused.
    pub fn mint(&mut self, asset: &Address, to: &Address, amount: Amount) -> Result<(), TransferError> {
        self.token_mut(asset)?.mint(to, amount)
    }

    /// Returns the token deployed at `asset`.
    #[must_use]
    pub fn token(&self, asset: &Address) -> Option<&Erc20Token> {
        self.tokens.get(asset)
    }

    /// Returns the number of deployed tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if no token is deployed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn token_mut(&mut self, asset: &Address) -> Result<&mut Erc20Token, TransferError> {
        self.tokens
            .get_mut(asset)
            .ok_or_else(|| TransferError::new(UNKNOWN_ASSET))
    }
}

impl AssetBank for InMemoryBank {
    fn asset(&self, asset: &Address) -> Option<Asset> {
        self.tokens.get(asset).map(Erc20Token::asset)
    }

    fn balance_of(&self, asset: &Address, account: &Address) -> Amount {
        self.tokens
            .get(asset)
            .map_or(Amount::ZERO, |t| t.balance_of(account))
    }

    fn allowance(&self, asset: &Address, owner: &Address, spender: &Address) -> Amount {
        self.tokens
            .get(asset)
            .map_or(Amount::ZERO, |t| t.allowance(owner, spender))
    }

    fn approve(
        &mut self,
        asset: &Address,
        owner: &Address,
        spender: &Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.token_mut(asset)?.approve(owner, spender, amount)
    }

    fn transfer(
        &mut self,
        asset: &Address,
        sender: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.token_mut(asset)?.transfer(sender, to, amount)?;
        trace!(%asset, from = %sender, %to, %amount, "transfer");
        Ok(())
    }

    fn transfer_from(
        &mut self,
        asset: &Address,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.token_mut(asset)?.transfer_from(spender, from, to, amount)?;
        trace!(%asset, %spender, %from, %to, %amount, "transfer_from");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::assets::erc20::{EXCEEDS_BALANCE, INSUFFICIENT_ALLOWANCE};
    use crate::domain::{Decimals, Symbol};

    fn asset(byte: u8, sym: &str, decimals: u8) -> Asset {
        let (Ok(s), Ok(d)) = (Symbol::new(sym), Decimals::new(decimals)) else {
            panic!("valid metadata");
        };
        Asset::new(Address::repeat_byte(byte), s, d)
    }

    fn alice() -> Address {
        Address::repeat_byte(0xa1)
    }

    fn bob() -> Address {
        Address::repeat_byte(0xb0)
    }

    fn bank_with_usdc() -> (InMemoryBank, Asset) {
        let usdc = asset(1, "USDC", 6);
        let mut bank = InMemoryBank::new();
        let Ok(()) = bank.deploy(usdc, &alice(), Amount::new(1_000)) else {
            panic!("deploy ok");
        };
        (bank, usdc)
    }

    #[test]
    fn deploy_exposes_metadata_and_supply() {
        let (bank, usdc) = bank_with_usdc();
        assert_eq!(bank.asset(&usdc.address()), Some(usdc));
        assert_eq!(bank.balance_of(&usdc.address(), &alice()), Amount::new(1_000));
        assert_eq!(bank.len(), 1);
        assert!(!bank.is_empty());
        let Some(token) = bank.token(&usdc.address()) else {
            panic!("token deployed");
        };
        assert_eq!(token.total_supply(), Amount::new(1_000));
    }

    #[test]
    fn deploy_rejects_duplicates_and_zero_address() {
        let (mut bank, usdc) = bank_with_usdc();
        assert_eq!(
            bank.deploy(usdc, &alice(), Amount::ZERO),
            Err(AmmError::InvalidAsset("asset already deployed"))
        );
        let Ok(sym) = Symbol::new("NIL") else {
            panic!("valid symbol");
        };
        let nil = Asset::new(Address::ZERO, sym, Decimals::ZERO);
        assert!(matches!(
            bank.deploy(nil, &alice(), Amount::ZERO),
            Err(AmmError::InvalidAsset(_))
        ));
    }

    #[test]
    fn unknown_asset_reads_zero_and_refuses_writes() {
        let bank_asset = Address::repeat_byte(0x77);
        let mut bank = InMemoryBank::new();
        assert_eq!(bank.asset(&bank_asset), None);
        assert_eq!(bank.balance_of(&bank_asset, &alice()), Amount::ZERO);
        assert_eq!(bank.allowance(&bank_asset, &alice(), &bob()), Amount::ZERO);
        assert_eq!(
            bank.transfer(&bank_asset, &alice(), &bob(), Amount::new(1)),
            Err(TransferError::new(UNKNOWN_ASSET))
        );
        assert_eq!(
            bank.mint(&bank_asset, &alice(), Amount::new(1)),
            Err(TransferError::new(UNKNOWN_ASSET))
        );
    }

    #[test]
    fn transfer_from_through_trait() {
        let (mut bank, usdc) = bank_with_usdc();
        let token = usdc.address();
        assert_eq!(
            bank.transfer_from(&token, &bob(), &alice(), &bob(), Amount::new(10)),
            Err(TransferError::new(INSUFFICIENT_ALLOWANCE))
        );
        let Ok(()) = bank.approve(&token, &alice(), &bob(), Amount::new(2_000)) else {
            panic!("approve ok");
        };
        assert_eq!(
            bank.transfer_from(&token, &bob(), &alice(), &bob(), Amount::new(1_500)),
            Err(TransferError::new(EXCEEDS_BALANCE))
        );
        let Ok(()) = bank.transfer_from(&token, &bob(), &alice(), &bob(), Amount::new(500)) else {
            panic!("transfer_from ok");
        };
        assert_eq!(bank.balance_of(&token, &bob()), Amount::new(500));
        assert_eq!(bank.allowance(&token, &alice(), &bob()), Amount::new(1_500));
    }

    #[test]
    fn mint_tops_up_existing_token() {
        let (mut bank, usdc) = bank_with_usdc();
        let Ok(()) = bank.mint(&usdc.address(), &bob(), Amount::new(5)) else {
            panic!("mint ok");
        };
        assert_eq!(bank.balance_of(&usdc.address(), &bob()), Amount::new(5));
    }
}
