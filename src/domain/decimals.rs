//! Asset decimal places.

use super::Amount;
use crate::error::AmmError;

/// Maximum allowed decimal places (EVM standard).
const MAX_DECIMALS: u8 = 18;

/// The number of decimal places an asset reports.
///
/// Valid range is `0..=18`.  `Decimals` only matters at the edges of the
/// system (turning human-readable quantities into raw [`Amount`]s); the
/// ledger and the pricing engine work purely in raw units.
///
/// # Examples
///
/// ```
/// use hydra_dex::domain::{Amount, Decimals};
///
/// let d = Decimals::new(8).expect("8 is valid");
/// assert_eq!(d.scale_up(1), 100_000_000);
/// assert_eq!(d.parse_units("0.5"), Ok(Amount::new(50_000_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Eighteen decimal places, the ERC20 default.
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrecision`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, AmmError> {
        if value > MAX_DECIMALS {
            return Err(AmmError::InvalidPrecision("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Converts a whole number of tokens to raw units.
    ///
    /// Cannot overflow because `u64::MAX * 10^18 < u128::MAX`.
    #[must_use]
    pub const fn scale_up(&self, whole: u64) -> u128 {
        (whole as u128) * self.factor()
    }

    /// Parses a decimal string such as `"1.1"` into raw units.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidPrecision`] if the string is empty, contains
    ///   anything but digits and a single `.`, or has more fractional
    ///   digits than this precision allows.
    /// - [`AmmError::Overflow`] if the value does not fit in `u128`.
    pub fn parse_units(&self, text: &str) -> Result<Amount, AmmError> {
        let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(AmmError::InvalidPrecision("empty decimal string"));
        }
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) {
            return Err(AmmError::InvalidPrecision("malformed decimal string"));
        }
        if fraction.len() > usize::from(self.0) {
            return Err(AmmError::InvalidPrecision("too many fractional digits"));
        }

        let mut raw: u128 = 0;
        let padding = usize::from(self.0) - fraction.len();
        let digits = whole
            .bytes()
            .chain(fraction.bytes())
            .chain(core::iter::repeat(b'0').take(padding));
        for digit in digits {
            raw = raw
                .checked_mul(10)
                .and_then(|v| v.checked_add(u128::from(digit - b'0')))
                .ok_or(AmmError::Overflow("decimal string exceeds u128"))?;
        }
        Ok(Amount::new(raw))
    }

    /// Returns `10^decimals` as `u128`.
    #[must_use]
    const fn factor(&self) -> u128 {
        10u128.pow(self.0 as u32)
    }
}

impl TryFrom<u8> for Decimals {
    type Error = AmmError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Decimals> for u8 {
    fn from(value: Decimals) -> Self {
        value.0
    }
}
