//! USDC/HD exchange walkthrough.
//!
//! Deploys two in-memory tokens, opens a USDC/HD pool, funds it, trades
//! against it, and shows the withdrawal limits that follow from swaps not
//! crediting provider positions.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=hydra_dex=debug cargo run --example usdc_hd
//! ```

use hydra_dex::prelude::*;
use tracing_subscriber::EnvFilter;

const LIQUIDITY: u128 = 100_000_000;
const SWAP: u128 = 10_000;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== USDC/HD constant-product exchange ===\n");

    // ── 1. Deploy tokens ────────────────────────────────────────────────
    let custody: Address = "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee".parse()?;
    let deployer: Address = "0xd0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0d0".parse()?;
    let player: Address = "0xb1b1b1b1b1b1b1b1b1b1b1b1b1b1b1b1b1b1b1b1".parse()?;

    let usdc = Asset::new(Address::repeat_byte(0x01), Symbol::new("USDC")?, Decimals::new(6)?);
    let hd = Asset::new(Address::repeat_byte(0x02), Symbol::new("HD")?, Decimals::new(18)?);

    let mut bank = InMemoryBank::new();
    bank.deploy(usdc, &deployer, Amount::new(usdc.to_raw_amount(1_000_000)))?;
    bank.deploy(hd, &deployer, Amount::new(hd.to_raw_amount(1_000_000)))?;
    bank.transfer(&usdc.address(), &deployer, &player, Amount::new(SWAP))?;
    println!("USDC at {}, {} decimals", usdc.address(), usdc.decimals().get());
    println!("HD   at {}, {} decimals", hd.address(), hd.decimals().get());

    // ── 2. Open and fund the pool ───────────────────────────────────────
    let mut dex = Exchange::new(ExchangeConfig::new(custody)?, bank)?;
    let key = dex.create_pool(&hd.address(), &usdc.address())?;
    println!("\nPool {key} open: {}", dex.is_pool_open(key.as_str()));

    for asset in [usdc, hd] {
        dex.assets_mut()
            .approve(&asset.address(), &deployer, &custody, Amount::new(LIQUIDITY))?;
        dex.add_liquidity(&deployer, key.as_str(), &asset.address(), Amount::new(LIQUIDITY))?;
    }
    let (r_usdc, r_hd) = dex.reserves(key.as_str())?;
    println!("Reserves after deposits: {r_usdc} USDC / {r_hd} HD");

    // ── 3. Player swaps USDC for HD ─────────────────────────────────────
    let quoted = dex.quote_swap(key.as_str(), &usdc.address(), Amount::new(SWAP))?;
    println!("\nQuote: {SWAP} USDC -> {quoted} HD");

    dex.assets_mut()
        .approve(&usdc.address(), &player, &custody, Amount::new(SWAP))?;
    let outcome = dex.swap(&player, key.as_str(), &usdc.address(), Amount::new(SWAP))?;
    println!(
        "Swapped {} USDC for {} HD (k {} -> {}, drift {})",
        outcome.amount_in(),
        outcome.amount_out(),
        outcome.k_before(),
        outcome.k_after(),
        outcome.k_drift()
    );
    let (r_usdc, r_hd) = dex.reserves(key.as_str())?;
    println!("Reserves after swap: {r_usdc} USDC / {r_hd} HD");

    // ── 4. Withdrawal limits ────────────────────────────────────────────
    match dex.remove_liquidity(&deployer, key.as_str(), &hd.address(), Amount::new(LIQUIDITY)) {
        Ok(()) => println!("\nWithdrew full HD deposit"),
        Err(err) => println!("\nFull HD withdrawal refused: {err}"),
    }
    match dex.remove_liquidity(&player, key.as_str(), &usdc.address(), Amount::new(1)) {
        Ok(()) => println!("Player withdrew USDC"),
        Err(err) => println!("Player USDC withdrawal refused: {err}"),
    }
    dex.remove_liquidity(&deployer, key.as_str(), &usdc.address(), Amount::new(LIQUIDITY))?;
    println!(
        "Deployer withdrew its USDC; {} USDC from the swap stays in the pool",
        dex.total_pool_balance(key.as_str(), &usdc.address())?
    );

    // ── 5. Journal ──────────────────────────────────────────────────────
    println!("\nEvents:");
    for event in dex.drain_events() {
        println!("  {event}");
    }

    Ok(())
}
