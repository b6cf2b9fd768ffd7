//! Sandwich estimation example.
//!
//! Sizes a front-run against a 1 WETH buy with 1% tolerance on a
//! 100 WETH / 200 000 DAI pool, then replays front-run, victim and back-run.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=frontrun=debug,sandwich=debug cargo run --example sandwich
//! ```

use cpmm_sandwich::analysis::{FrontrunTarget, GasQuote, SandwichEstimator};
use cpmm_sandwich::config::PoolConfig;
use cpmm_sandwich::domain::{Amount, BasisPoints, SwapPath, UserPosition};
use cpmm_sandwich::pools::ConstantProductPool;
use cpmm_sandwich::traits::FromConfig;
use tracing_subscriber::EnvFilter;

const POOL: &str = r#"
token_a = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"
token_b = "0x6b175474e89094c44da98b954eedeac495271d0f"
base_asset = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"
reserve_a = "100_000000000000000000"
reserve_b = "200000_000000000000000000"
fee_tier = 30
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Constant Product Sandwich ===\n");

    // ── 1. Load the pool snapshot ──────────────────────────────────────
    let config = PoolConfig::from_toml_str(POOL)?;
    let pool = ConstantProductPool::from_config(&config)?;
    let path = SwapPath::new(config.token_a.clone(), config.token_b.clone())?;
    println!(
        "Pool:        {} / {}",
        pool.reserve_of(&config.token_a)?,
        pool.reserve_of(&config.token_b)?
    );
    println!("Spot price:  {}", pool.spot_price(&path)?);

    // ── 2. Declare the victim ──────────────────────────────────────────
    let victim = UserPosition::exact_input(
        &pool,
        Amount::from_units(1, 18),
        BasisPoints::from_percent(1),
        path.clone(),
    )?;
    println!("\n--- Victim: {} ---", victim.kind());
    println!("  Pays:        {}", victim.declared_in());
    println!("  Min out:     {}", victim.declared_out());
    let window = pool.unexpected_slippage(victim.declared_in(), victim.declared_out(), &path)?;
    println!("  Window:      {window}");

    // ── 3. Solve and simulate for both targets ─────────────────────────
    let gas = GasQuote::new(150_000, Amount::from_units(1, 9));
    for target in [FrontrunTarget::Full, FrontrunTarget::Unexpected] {
        let estimator =
            SandwichEstimator::new(Default::default(), target, BasisPoints::from_percent(1));
        println!("\n--- Target: {target:?} ---");
        match estimator.estimate(&pool, &victim, &gas) {
            Ok(outcome) => {
                println!(
                    "  Solver:      {:?} after {} steps",
                    outcome.solution.termination, outcome.solution.iterations
                );
                println!("  Front-run:   {}", outcome.frontrun);
                println!("  Victim:      {}", outcome.victim);
                println!("  Back-run:    {}", outcome.backrun);
                println!("  Gas fees:    {}", outcome.gas_fees);
                println!("  Profit:      {}", outcome.profit);
            }
            // The raw window leaves the victim no room for its own impact.
            Err(err) => println!("  Reverted:    {err}"),
        }
    }

    println!("\n=== Done ===");
    Ok(())
}
