//! Staking farm smoke test
//!
//! Issues a single `initialize` call against the deployed staking farm
//! program and reports the outcome through the process exit code: 0 when the
//! call lands, 1 when anything in setup or submission fails. The signature
//! goes to stdout; everything else is tracing output.

use anyhow::{Context, Result};
use stakefarm_sdk::{workspace, FarmClient, Provider, Signature};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let outcome = tokio::runtime::Runtime::new()
        .context("failed to start runtime")
        .and_then(|rt| rt.block_on(run()));

    match outcome {
        Ok(signature) => {
            println!("Your transaction signature {signature}");
        }
        Err(e) => {
            eprintln!("{e:?}");
            std::process::exit(1);
        }
    }
}

async fn run() -> Result<Signature> {
    let provider =
        Provider::env().context("failed to configure provider from environment")?;
    info!(cluster = %provider.cluster, "provider configured");

    let client = FarmClient::new(&provider).context("failed to load wallet")?;
    let program = client
        .program(workspace::STAKING_FARM)
        .context("workspace lookup failed")?;
    info!(program = %program.id(), payer = %client.payer(), "resolved workspace program");

    client
        .ensure_deployed(&program)
        .context("program preflight failed")?;

    let balance = program.rpc().get_balance(&client.payer())?;
    info!("payer balance: {} SOL", balance as f64 / 1e9);

    client.initialize(&program).context("initialize call failed")
}
