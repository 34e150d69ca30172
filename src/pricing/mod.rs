//! Swap pricing.

mod constant_product;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use constant_product::{ConstantProduct, Quote};
