//! Configuration for an [`Exchange`](crate::exchange::Exchange).

use crate::domain::{Address, DEFAULT_SEPARATOR};
use crate::error::AmmError;

/// Parameters fixed for the lifetime of an exchange.
///
/// | Field | Default | Meaning |
/// |---|---|---|
/// | `custody` | required | account holding every pooled token |
/// | `key_separator` | `'/'` | joins the two symbols of a pool key |
/// | `record_events` | `true` | keep an in-memory event journal |
///
/// # Validation
///
/// - `custody` must not be the zero address.
/// - `key_separator` must not be ASCII alphanumeric, otherwise a key
///   could not be split back into its symbols.
///
/// # Deserialization
///
/// With the `serde` feature enabled the config deserializes from a map
/// with `custody` required and the other fields optional.  Deserialized
/// values are validated before they are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawExchangeConfig"))]
pub struct ExchangeConfig {
    custody: Address,
    key_separator: char,
    record_events: bool,
}

impl ExchangeConfig {
    /// Creates a config with the default separator and event recording on.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `custody` is zero.
    pub fn new(custody: Address) -> Result<Self, AmmError> {
        let config = Self {
            custody,
            key_separator: DEFAULT_SEPARATOR,
            record_events: true,
        };
        config.validate()?;
        Ok(config)
    }

    /// Replaces the pool-key separator.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `separator` is ASCII
    /// alphanumeric.
    pub fn with_key_separator(mut self, separator: char) -> Result<Self, AmmError> {
        self.key_separator = separator;
        self.validate()?;
        Ok(self)
    }

    /// Turns the event journal on or off.
    #[must_use]
    pub const fn with_record_events(mut self, record: bool) -> Self {
        self.record_events = record;
        self
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] naming the first broken
    /// invariant.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.custody.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "custody must not be the zero address",
            ));
        }
        if self.key_separator.is_ascii_alphanumeric() {
            return Err(AmmError::InvalidConfiguration(
                "key separator must not be alphanumeric",
            ));
        }
        Ok(())
    }

    /// Returns the custody account.
    #[must_use]
    pub const fn custody(&self) -> Address {
        self.custody
    }

    /// Returns the pool-key separator.
    #[must_use]
    pub const fn key_separator(&self) -> char {
        self.key_separator
    }

    /// Returns whether successful operations are journaled.
    #[must_use]
    pub const fn record_events(&self) -> bool {
        self.record_events
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawExchangeConfig {
    custody: Address,
    #[serde(default = "default_separator")]
    key_separator: char,
    #[serde(default = "default_record_events")]
    record_events: bool,
}

#[cfg(feature = "serde")]
const fn default_separator() -> char {
    DEFAULT_SEPARATOR
}

#[cfg(feature = "serde")]
const fn default_record_events() -> bool {
    true
}

#[cfg(feature = "serde")]
impl TryFrom<RawExchangeConfig> for ExchangeConfig {
    type Error = AmmError;

    fn try_from(raw: RawExchangeConfig) -> Result<Self, Self::Error> {
        let config = Self {
            custody: raw.custody,
            key_separator: raw.key_separator,
            record_events: raw.record_events,
        };
        config.validate()?;
        Ok(config)
    }
}
