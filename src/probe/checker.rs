// src/probe/checker.rs
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ProbeConfig;
use crate::probe::{ProbeResult, ServiceKind};

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),

    #[error("invalid probe URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// One-shot health probe. Issues a single GET against the configured
/// service endpoint and folds every outcome into a [`ProbeResult`];
/// only setup problems surface as errors.
pub struct ServiceProbe {
    config: ProbeConfig,
    client: Client,
}

impl ServiceProbe {
    pub fn new(config: ProbeConfig) -> Result<Self, ProbeError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.ssl_ignore)
            .build()?;

        Ok(Self { config, client })
    }

    pub async fn run(&self) -> Result<ProbeResult, ProbeError> {
        let kind = self.config.service;
        let url = kind.endpoint(&self.config.host, self.config.port)?;

        debug!("Probing {} at {}", kind.label(), url);

        let response = self
            .client
            .get(url)
            .basic_auth(
                &self.config.credentials.user,
                Some(&self.config.credentials.password),
            )
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                warn!("Transport failure probing {}: {}", kind.label(), e);
                return Ok(ProbeResult::unknown(format!(
                    "Connection to {} failed: {}",
                    kind.label(),
                    e
                )));
            }
        };

        let status = response.status();
        debug!("{} answered HTTP {}", kind.label(), status.as_u16());

        if status == StatusCode::UNAUTHORIZED {
            return Ok(ProbeResult::unknown("Authentication failed (401)"));
        }
        if status != StatusCode::OK {
            return Ok(ProbeResult::critical(format!("HTTP {}", status.as_u16())));
        }

        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) => return Ok(ProbeResult::unknown(format!("Unexpected payload: {e}"))),
        };

        Ok(classify(kind, &body))
    }
}

/// Map a 200 body onto a severity. Pure so the per-service tables are
/// testable without a server.
pub fn classify(kind: ServiceKind, body: &Value) -> ProbeResult {
    match kind {
        ServiceKind::SearchEngine => classify_cluster_health(body),
        ServiceKind::Dashboard => classify_dashboard_status(body),
        ServiceKind::Shipper => classify_shipper_stats(body),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ClusterHealth {
    status: Value,
    number_of_nodes: Value,
}

/// green/yellow/red -> OK/WARNING/CRITICAL; anything else is UNKNOWN.
fn classify_cluster_health(body: &Value) -> ProbeResult {
    let health: ClusterHealth = match serde_json::from_value(body.clone()) {
        Ok(health) => health,
        Err(e) => return ProbeResult::unknown(format!("Unexpected payload: {e}")),
    };

    let nodes = health
        .number_of_nodes
        .as_i64()
        .map_or_else(|| "n/a".to_owned(), |n| n.to_string());

    match health.status.as_str() {
        Some("green") => ProbeResult::ok(format!("Cluster green ({nodes} nodes)")),
        Some("yellow") => ProbeResult::warning(format!("Cluster yellow ({nodes} nodes)")),
        Some("red") => ProbeResult::critical(format!("Cluster red ({nodes} nodes)")),
        Some(other) => ProbeResult::unknown(format!("Unexpected cluster status: {other}")),
        None => ProbeResult::unknown(format!("Unexpected cluster status: {}", health.status)),
    }
}

/// The overall-status object lives at `status.overall` on current releases
/// and at top-level `overall` on older ones; within it `state` superseded
/// `level`. Try both locations and both field names, in that order.
fn classify_dashboard_status(body: &Value) -> ProbeResult {
    let overall = body
        .get("status")
        .and_then(|status| status.get("overall"))
        .or_else(|| body.get("overall"));

    let state = overall.and_then(|overall| {
        overall
            .get("state")
            .and_then(Value::as_str)
            .filter(|state| !state.is_empty())
            .or_else(|| {
                overall
                    .get("level")
                    .and_then(Value::as_str)
                    .filter(|level| !level.is_empty())
            })
    });

    match state {
        Some(state @ ("available" | "green")) => {
            ProbeResult::ok(format!("Dashboard status: {state}"))
        }
        Some(state @ ("degraded" | "yellow")) => {
            ProbeResult::warning(format!("Dashboard status: {state}"))
        }
        Some(state @ ("unavailable" | "red")) => {
            ProbeResult::critical(format!("Dashboard status: {state}"))
        }
        Some(state) => ProbeResult::unknown(format!("Unexpected dashboard status: {state}")),
        None => ProbeResult::unknown("Unexpected dashboard status: null"),
    }
}

/// Any 200 from the shipper counts as OK; the pipeline count is informational.
fn classify_shipper_stats(body: &Value) -> ProbeResult {
    let count = body
        .get("pipelines")
        .and_then(Value::as_object)
        .map_or_else(|| "n/a".to_owned(), |pipelines| pipelines.len().to_string());

    ProbeResult::ok(format!("Shipper active, pipelines: {count}"))
}
