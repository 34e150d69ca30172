//! # Hydra DEX
//!
//! Two-asset AMM exchange engine: register trading pairs, track per-user
//! liquidity, and swap at a constant-product price.
//!
//! The crate owns the accounting and pricing only.  Token balances live
//! behind the [`AssetBank`](traits::AssetBank) trait; the bundled
//! [`InMemoryBank`](assets::InMemoryBank) reproduces OpenZeppelin ERC20
//! behaviour for tests and simulation.
//!
//! Swaps carry no fee and do not credit any provider position.  Providers
//! withdraw exactly what they deposited, as long as the pool still holds
//! it.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize` / `Deserialize` for [`ExchangeConfig`](config::ExchangeConfig) and value types |
//!
//! # Quick Start
//!
//! ```rust
//! use hydra_dex::prelude::*;
//!
//! let custody = Address::repeat_byte(0xee);
//! let deployer = Address::repeat_byte(0xd0);
//!
//! // 1. Deploy two tokens and approve the exchange
//! let usdc = Asset::new(Address::repeat_byte(1), Symbol::new("USDC").expect("ok"), Decimals::new(6).expect("ok"));
//! let hd = Asset::new(Address::repeat_byte(2), Symbol::new("HD").expect("ok"), Decimals::new(18).expect("ok"));
//! let mut bank = InMemoryBank::new();
//! for asset in [usdc, hd] {
//!     bank.deploy(asset, &deployer, Amount::new(1_000_000_000)).expect("deploy");
//!     bank.approve(&asset.address(), &deployer, &custody, Amount::MAX).expect("approve");
//! }
//!
//! // 2. Create a pool and fund it
//! let mut dex = Exchange::new(ExchangeConfig::new(custody).expect("config"), bank).expect("dex");
//! let key = dex.create_pool(&hd.address(), &usdc.address()).expect("new pair");
//! assert_eq!(key, "USDC/HD");
//! dex.add_liquidity(&deployer, "USDC/HD", &usdc.address(), Amount::new(100_000_000)).expect("add");
//! dex.add_liquidity(&deployer, "USDC/HD", &hd.address(), Amount::new(100_000_000)).expect("add");
//!
//! // 3. Swap
//! let outcome = dex.swap(&deployer, "USDC/HD", &usdc.address(), Amount::new(10_000)).expect("swap");
//! assert_eq!(outcome.amount_out(), Amount::new(10_000));
//! assert_eq!(dex.total_pool_balance("USDC/HD", &usdc.address()), Ok(Amount::new(100_010_000)));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐
//! │ SharedExchange │  Arc<Mutex<_>>, one lock per operation
//! └───────┬────────┘
//!         ▼
//! ┌────────────────┐
//! │    Exchange    │  create_pool, add/remove_liquidity, swap
//! └──┬─────┬─────┬─┘
//!    │     │     │
//!    ▼     ▼     ▼
//! Registry Ledger Pricing        AssetBank (trait)
//! PairKey  plan → ConstantProduct   transfer / transfer_from
//! → Pool   apply  x · y = k         InMemoryBank + Erc20Token
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Address`](domain::Address), [`Amount`](domain::Amount), [`Asset`](domain::Asset), [`PairKey`](domain::PairKey), etc. |
//! | [`traits`] | The [`AssetBank`](traits::AssetBank) collaborator seam |
//! | [`assets`] | [`InMemoryBank`](assets::InMemoryBank) and [`Erc20Token`](assets::Erc20Token) |
//! | [`config`] | [`ExchangeConfig`](config::ExchangeConfig) |
//! | [`registry`] | [`PoolRegistry`](registry::PoolRegistry) and [`Pool`](registry::Pool) |
//! | [`ledger`] | [`LiquidityLedger`](ledger::LiquidityLedger) with plan / apply postings |
//! | [`pricing`] | [`ConstantProduct`](pricing::ConstantProduct) swap pricing |
//! | [`exchange`] | [`Exchange`](exchange::Exchange), [`SharedExchange`](exchange::SharedExchange), events |
//! | [`math`] | Checked arithmetic |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod assets;
pub mod config;
pub mod domain;
pub mod error;
pub mod exchange;
pub mod ledger;
pub mod math;
pub mod prelude;
pub mod pricing;
pub mod registry;
pub mod traits;
