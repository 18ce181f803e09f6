// src/probe/service.rs
use clap::ValueEnum;
use url::Url;

/// The three services this probe knows how to check. Each kind carries its
/// fixed endpoint table: default port, URL scheme and status path.
///
/// The search engine is probed over HTTPS while the other two endpoints are
/// plain HTTP; that asymmetry matches how the services are deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ServiceKind {
    /// Distributed search/indexing cluster (`/_cluster/health`).
    SearchEngine,
    /// Visualization front-end (`/api/status`).
    Dashboard,
    /// Log-processing pipeline (`/_node/stats`).
    Shipper,
}

impl ServiceKind {
    pub fn default_port(self) -> u16 {
        match self {
            ServiceKind::SearchEngine => 9200,
            ServiceKind::Dashboard => 5601,
            ServiceKind::Shipper => 9600,
        }
    }

    pub fn scheme(self) -> &'static str {
        match self {
            ServiceKind::SearchEngine => "https",
            ServiceKind::Dashboard | ServiceKind::Shipper => "http",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            ServiceKind::SearchEngine => "/_cluster/health",
            ServiceKind::Dashboard => "/api/status",
            ServiceKind::Shipper => "/_node/stats",
        }
    }

    /// Label used in connection-failure messages.
    pub fn label(self) -> &'static str {
        match self {
            ServiceKind::SearchEngine => "search engine",
            ServiceKind::Dashboard => "dashboard",
            ServiceKind::Shipper => "shipper",
        }
    }

    pub fn endpoint(self, host: &str, port: u16) -> Result<Url, url::ParseError> {
        Url::parse(&format!("{}://{}:{}{}", self.scheme(), host, port, self.path()))
    }
}
