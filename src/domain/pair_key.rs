//! Human-readable, order-independent pool identifier.

use core::borrow::Borrow;
use core::fmt;

use super::AssetPair;

/// The separator used when no other is configured.
pub const DEFAULT_SEPARATOR: char = '/';

/// The key a pool is registered and looked up under, e.g. `"USDC/HD"`.
///
/// Rendered as `<first symbol><separator><second symbol>` from a
/// canonically ordered [`AssetPair`], so both argument orders of
/// `create_pool` map to the same key.  Lookups accept plain `&str`
/// through [`Borrow`], which is how callers address pools.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::{Address, Asset, AssetPair, Decimals, PairKey, Symbol};
///
/// let usdc = Asset::new(Address::repeat_byte(1), Symbol::new("USDC").expect("ok"), Decimals::new(6).expect("ok"));
/// let hd   = Asset::new(Address::repeat_byte(2), Symbol::new("HD").expect("ok"), Decimals::new(18).expect("ok"));
///
/// let key = PairKey::from_pair(&AssetPair::new(hd, usdc).expect("distinct"), '/');
/// assert_eq!(key.as_str(), "USDC/HD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PairKey(String);

impl PairKey {
    /// Derives the canonical key of `pair`.
    #[must_use]
    pub fn from_pair(pair: &AssetPair, separator: char) -> Self {
        Self(format!(
            "{}{separator}{}",
            pair.first().symbol(),
            pair.second().symbol()
        ))
    }

    /// Returns the key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PairKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PairKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for PairKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PairKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
