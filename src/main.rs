// src/main.rs
use std::process;

use anyhow::Result;
use tracing::info;

use logstack_probe::config;
use logstack_probe::probe::{ProbeResult, ServiceProbe};

#[tokio::main]
async fn main() {
    // .env first so the CLI layer sees its environment defaults.
    dotenvy::dotenv().ok();

    // Diagnostics go to stderr; stdout carries exactly the one plugin line.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let result = run()
        .await
        .unwrap_or_else(|e| ProbeResult::unknown(format!("{e:#}")));

    println!("{result}");
    process::exit(result.severity.exit_code());
}

async fn run() -> Result<ProbeResult> {
    let config = config::load_config()?;

    info!(
        "Checking {} at {}:{}",
        config.service.label(),
        config.host,
        config.port
    );

    let probe = ServiceProbe::new(config)?;
    Ok(probe.run().await?)
}
