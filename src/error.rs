//! Unified error types for the Hydra DEX library.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type, ensuring a consistent error handling experience for consumers.
//! Failures reported by the external asset host are carried verbatim inside
//! [`AmmError::AssetTransferFailure`].

use core::fmt;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Every error an exchange operation can surface.
///
/// No variant is ever retried by the library and no operation that returns
/// an error leaves the ledger partially updated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmmError {
    /// The operation referenced a pool key with no registered pool.
    #[error("PoolClosed")]
    PoolClosed,

    /// A pool for this pair key has already been created.
    #[error("PoolAlreadyExists")]
    PoolAlreadyExists,

    /// A swap was attempted against a pool holding none of one asset.
    #[error("ZeroPoolLiquidity")]
    ZeroPoolLiquidity,

    /// A withdrawal exceeds the caller's recorded position.
    #[error("InsufficientUserFunds")]
    InsufficientUserFunds,

    /// A withdrawal exceeds what the pool currently holds.
    #[error("InsufficientPoolFunds")]
    InsufficientPoolFunds,

    /// The asset host refused a transfer.
    #[error("{0}")]
    AssetTransferFailure(#[from] TransferError),

    /// A swap's payout was refused and returning the pulled input was
    /// refused as well.
    ///
    /// The input is left in custody with no ledger entry, so custody holds
    /// `amount_in` more of the input asset than the pool total records.
    #[error("swap input stranded in custody: payout refused ({payout}), refund refused ({refund})")]
    StrandedSwapInput {
        /// Why the payout leg was refused.
        payout: TransferError,
        /// Why returning the input was refused.
        refund: TransferError,
    },

    /// The asset is unknown, duplicated, or not part of the pool.
    #[error("invalid asset: {0}")]
    InvalidAsset(&'static str),

    /// A quantity that must be positive was zero.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// An asset symbol failed validation.
    #[error("invalid symbol: {0}")]
    InvalidSymbol(&'static str),

    /// A decimal precision or decimal string failed validation.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// An address could not be parsed.
    #[error("invalid address: {0}")]
    InvalidAddress(&'static str),

    /// An [`ExchangeConfig`](crate::config::ExchangeConfig) failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// A refusal reported by an [`AssetBank`](crate::traits::AssetBank).
///
/// The exchange never inspects the reason; it is surfaced to the caller
/// exactly as the asset host produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransferError {
    reason: String,
}

impl TransferError {
    /// Creates a transfer error carrying the host's reason string.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Returns the host's reason string.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

impl std::error::Error for TransferError {}
