//! Asset identity type.

use super::{Address, Decimals, Symbol};

/// A fungible asset as the exchange sees it.
///
/// The [`Address`] is the asset's identity; the symbol and decimals are
/// metadata reported by the asset contract and cached here when a pool is
/// created.  The core owns no mutable state for an asset.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::{Address, Asset, Decimals, Symbol};
///
/// let usdc = Asset::new(
///     Address::repeat_byte(1),
///     Symbol::new("USDC").expect("valid"),
///     Decimals::new(6).expect("valid"),
/// );
/// assert_eq!(usdc.symbol().as_str(), "USDC");
/// assert_eq!(usdc.to_raw_amount(2), 2_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Asset {
    address: Address,
    symbol: Symbol,
    decimals: Decimals,
}

impl Asset {
    /// Creates a new `Asset`.
    ///
    /// Construction is infallible because every component is validated at
    /// its own construction site.
    #[must_use]
    pub const fn new(address: Address, symbol: Symbol, decimals: Decimals) -> Self {
        Self {
            address,
            symbol,
            decimals,
        }
    }

    /// Returns the asset contract address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns the ticker symbol.
    #[must_use]
    pub const fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Returns the decimal precision.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Converts a whole number of tokens to raw units.
    #[must_use]
    pub const fn to_raw_amount(&self, whole: u64) -> u128 {
        self.decimals.scale_up(whole)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn asset(byte: u8, sym: &str, dec: u8) -> Asset {
        let (Ok(s), Ok(d)) = (Symbol::new(sym), Decimals::new(dec)) else {
            panic!("valid metadata");
        };
        Asset::new(Address::repeat_byte(byte), s, d)
    }

    #[test]
    fn accessors() {
        let hd = asset(2, "HD", 18);
        assert_eq!(hd.address(), Address::repeat_byte(2));
        assert_eq!(hd.symbol().as_str(), "HD");
        assert_eq!(hd.decimals().get(), 18);
    }

    #[test]
    fn raw_amount_uses_decimals() {
        assert_eq!(asset(1, "USDC", 6).to_raw_amount(3), 3_000_000);
    }

    #[test]
    fn equality_requires_all_fields() {
        assert_eq!(asset(1, "USDC", 6), asset(1, "USDC", 6));
        assert_ne!(asset(1, "USDC", 6), asset(1, "USDC", 8));
        assert_ne!(asset(1, "USDC", 6), asset(3, "USDC", 6));
    }
}
