//! Asset ticker symbol.

use core::fmt;
use core::str::FromStr;

use crate::error::AmmError;

/// Maximum symbol length in bytes.
pub const MAX_SYMBOL_LEN: usize = 16;

/// A validated ticker such as `USDC` or `HD`.
///
/// Symbols are 1..=16 ASCII alphanumeric characters.  They are stored
/// inline so the type stays `Copy`, which lets [`Asset`](super::Asset)
/// and [`AssetPair`](super::AssetPair) stay `Copy` too.  Symbols compose
/// the human-readable [`PairKey`](super::PairKey), which is why the
/// separator character can never appear in one.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::Symbol;
///
/// let usdc = Symbol::new("USDC").expect("valid symbol");
/// assert_eq!(usdc.as_str(), "USDC");
/// assert!(Symbol::new("US/DC").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    bytes: [u8; MAX_SYMBOL_LEN],
    len: u8,
}

impl Symbol {
    /// Creates a symbol after validating length and character set.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidSymbol`] if `text` is empty, longer than
    /// [`MAX_SYMBOL_LEN`], or contains a non-alphanumeric character.
    pub fn new(text: &str) -> Result<Self, AmmError> {
        if text.is_empty() {
            return Err(AmmError::InvalidSymbol("symbol must not be empty"));
        }
        if text.len() > MAX_SYMBOL_LEN {
            return Err(AmmError::InvalidSymbol("symbol longer than 16 characters"));
        }
        if !text.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(AmmError::InvalidSymbol(
                "symbol must be ASCII alphanumeric",
            ));
        }

        let mut bytes = [0u8; MAX_SYMBOL_LEN];
        bytes[..text.len()].copy_from_slice(text.as_bytes());
        #[allow(clippy::cast_possible_truncation)]
        let len = text.len() as u8;
        Ok(Self { bytes, len })
    }

    /// Returns the symbol text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII is ever stored, so the slice is always valid UTF-8.
        core::str::from_utf8(&self.bytes[..usize::from(self.len)]).unwrap_or_default()
    }

    /// Returns the symbol length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always `false`; a symbol is never empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl FromStr for Symbol {
    type Err = AmmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Symbol").field(&self.as_str()).finish()
    }
}
