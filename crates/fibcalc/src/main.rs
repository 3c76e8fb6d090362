//! fibcalc - memoized Fibonacci calculator

use anyhow::Result;
use fibmemo::FibCalculator;
use tracing::info;

/// Index computed and printed at startup
const TARGET_INDEX: i64 = 12;

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only the result line
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting fibcalc v{}", env!("CARGO_PKG_VERSION"));

    let calc = FibCalculator::new();
    let value = calc.fibonacci(TARGET_INDEX)?;

    info!(
        "Computed fibonacci({}) with {} cached entries",
        TARGET_INDEX,
        calc.cache_len()
    );

    println!("{}", value);
    Ok(())
}
