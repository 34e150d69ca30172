//! 20-byte account and contract address.

use core::fmt;
use core::str::FromStr;

use crate::error::AmmError;

/// Length of an address in bytes.
const ADDRESS_LEN: usize = 20;

/// An EVM-style 20-byte address.
///
/// Identifies user accounts, asset contracts, and the exchange's own
/// custody account alike.  All 20-byte sequences are valid, so
/// construction from bytes is infallible; parsing from text accepts an
/// optional `0x` prefix followed by exactly 40 hex digits.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::Address;
///
/// let addr: Address = "0x0101010101010101010101010101010101010101".parse().expect("valid hex");
/// assert_eq!(addr, Address::repeat_byte(1));
/// assert_eq!(addr.to_string(), "0x0101010101010101010101010101010101010101");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// The all-zero address.
    ///
    /// Never a valid custody account; see
    /// [`ExchangeConfig::validate`](crate::config::ExchangeConfig::validate).
    pub const ZERO: Self = Self([0u8; ADDRESS_LEN]);

    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Creates an address with every byte set to `byte`.
    #[must_use]
    pub const fn repeat_byte(byte: u8) -> Self {
        Self([byte; ADDRESS_LEN])
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; ADDRESS_LEN] {
        self.0
    }

    /// Returns `true` for the all-zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = AmmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.len() != ADDRESS_LEN * 2 {
            return Err(AmmError::InvalidAddress("expected 40 hex digits"));
        }
        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| AmmError::InvalidAddress("non-hex character"))?;
        Ok(Self(bytes))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
