// src/config/models.rs
use std::time::Duration;

use clap::Parser;

use crate::probe::ServiceKind;

/// Every probe uses the same request deadline.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Command-line surface. Host and credentials fall back to environment
/// variables (readable from a `.env` file loaded at startup), the port falls
/// back to the checked service's well-known default.
#[derive(Parser, Debug)]
#[clap(version, about = "Health-check probe for a log/search stack")]
pub struct Args {
    /// Service to check.
    #[clap(short = 'c', long, value_enum)]
    pub check: ServiceKind,

    /// Host or endpoint of the service.
    #[clap(short = 'i', long, env = "LOGSTACK_HOST", default_value = "localhost")]
    pub host: String,

    /// Service port (default 9200/5601/9600 depending on --check).
    #[clap(short = 'p', long)]
    pub port: Option<u16>,

    /// Username for basic auth.
    #[clap(short = 'u', long, env = "LOGSTACK_USER")]
    pub user: Option<String>,

    /// Password for basic auth.
    #[clap(short = 'w', long, env = "LOGSTACK_PASS", hide_env_values = true)]
    pub password: Option<String>,

    /// Skip TLS certificate verification (self-signed certificates).
    #[clap(short = 'l', long)]
    pub ssl_ignore: bool,
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

/// Immutable probe configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub service: ServiceKind,
    pub host: String,
    pub port: u16,
    pub credentials: Credentials,
    pub ssl_ignore: bool,
    pub timeout: Duration,
}

impl Args {
    /// Fill in the per-service port default and the empty-credential
    /// fallback, producing the final configuration value.
    pub fn resolve(self) -> ProbeConfig {
        let port = self.port.unwrap_or_else(|| self.check.default_port());

        ProbeConfig {
            service: self.check,
            host: self.host,
            port,
            credentials: Credentials {
                user: self.user.unwrap_or_default(),
                password: self.password.unwrap_or_default(),
            },
            ssl_ignore: self.ssl_ignore,
            timeout: PROBE_TIMEOUT,
        }
    }
}

impl ProbeConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.host.trim().is_empty() {
            anyhow::bail!("host must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(check: ServiceKind) -> Args {
        Args {
            check,
            host: "localhost".to_owned(),
            port: None,
            user: None,
            password: None,
            ssl_ignore: false,
        }
    }

    #[test]
    fn port_defaults_follow_service_kind() {
        assert_eq!(args(ServiceKind::SearchEngine).resolve().port, 9200);
        assert_eq!(args(ServiceKind::Dashboard).resolve().port, 5601);
        assert_eq!(args(ServiceKind::Shipper).resolve().port, 9600);
    }

    #[test]
    fn explicit_port_wins_over_default() {
        let mut args = args(ServiceKind::Dashboard);
        args.port = Some(8443);
        assert_eq!(args.resolve().port, 8443);
    }

    #[test]
    fn absent_credentials_resolve_to_empty() {
        let config = args(ServiceKind::Shipper).resolve();
        assert_eq!(config.credentials.user, "");
        assert_eq!(config.credentials.password, "");
    }

    #[test]
    fn flags_parse_into_config() {
        let args = Args::try_parse_from([
            "check_logstack",
            "-c",
            "search-engine",
            "-i",
            "es.internal",
            "-p",
            "9201",
            "-u",
            "monitor",
            "-w",
            "secret",
            "-l",
        ])
        .unwrap();

        let config = args.resolve();
        assert_eq!(config.service, ServiceKind::SearchEngine);
        assert_eq!(config.host, "es.internal");
        assert_eq!(config.port, 9201);
        assert_eq!(config.credentials.user, "monitor");
        assert_eq!(config.credentials.password, "secret");
        assert!(config.ssl_ignore);
        assert_eq!(config.timeout, PROBE_TIMEOUT);
    }

    #[test]
    fn check_flag_is_required() {
        assert!(Args::try_parse_from(["check_logstack"]).is_err());
    }

    #[test]
    fn empty_host_fails_validation() {
        let mut args = args(ServiceKind::Dashboard);
        args.host = " ".to_owned();
        assert!(args.resolve().validate().is_err());
    }
}
