//! Core trait abstractions.
//!
//! This module defines [`AssetBank`], the only seam between the exchange
//! core and the external asset contracts it moves tokens through.

mod asset_bank;

pub use asset_bank::AssetBank;
