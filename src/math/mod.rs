//! Arithmetic utilities for ledger and pricing calculations.
//!
//! [`CheckedArithmetic`] gives [`Amount`](crate::domain::Amount) overflow-safe
//! operations that fail with a typed [`AmmError`](crate::error::AmmError),
//! and [`mul_div_floor`] is the truncating `a × b / c` the pricing engine
//! is built on.  Invariants are reported as [`U256`].

mod checked;

pub use alloy_primitives::U256;
pub use checked::{mul_div_floor, widening_mul, CheckedArithmetic};
