// src/config/mod.rs
mod models;

pub use models::*;

use anyhow::Result;
use clap::Parser;

/// Resolve configuration from CLI flags, environment variables and the
/// built-in per-service defaults. Environment lookups happen here, once;
/// the probe itself only sees the resolved value.
pub fn load_config() -> Result<ProbeConfig> {
    let config = Args::parse().resolve();
    config.validate()?;
    Ok(config)
}
