//! Wire DTOs for the intel API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the upstream API's camelCase payloads so serde
//! round-trips stay lossless. The API is external: fields the UI does
//! not render are omitted rather than guessed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The authenticated user as returned by the identity check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Role label shown under the display name (e.g. `"analyst"`).
    pub role: String,
    pub username: String,
    /// Avatar image path, if the user uploaded one.
    pub image: Option<String>,
}

/// Envelope of `GET /api/auth/me`: `{ "user": {...} }` or empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CurrentUserResponse {
    #[serde(default)]
    pub user: Option<User>,
}

/// Severity classification of an indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl SeverityLevel {
    /// All levels, most severe first. Drives filter dropdowns and charts.
    pub const ALL: [SeverityLevel; 5] = [
        SeverityLevel::Critical,
        SeverityLevel::High,
        SeverityLevel::Medium,
        SeverityLevel::Low,
        SeverityLevel::Info,
    ];

    /// Parse a lowercase wire value.
    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == raw)
    }

    /// Lowercase wire value, also used as a query-string filter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SeverityLevel::Critical => "critical",
            SeverityLevel::High => "high",
            SeverityLevel::Medium => "medium",
            SeverityLevel::Low => "low",
            SeverityLevel::Info => "info",
        }
    }
}

/// Kind of indicator of compromise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IocType {
    Ipv4,
    Domain,
    Url,
    Md5,
    Sha256,
    Email,
    Hostname,
    Yara,
    Cve,
}

impl IocType {
    /// All kinds, in dropdown order.
    pub const ALL: [IocType; 9] = [
        IocType::Ipv4,
        IocType::Domain,
        IocType::Url,
        IocType::Md5,
        IocType::Sha256,
        IocType::Email,
        IocType::Hostname,
        IocType::Yara,
        IocType::Cve,
    ];

    /// Parse a lowercase wire value.
    #[must_use]
    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw)
    }

    /// Lowercase wire value, also used as a query-string filter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            IocType::Ipv4 => "ipv4",
            IocType::Domain => "domain",
            IocType::Url => "url",
            IocType::Md5 => "md5",
            IocType::Sha256 => "sha256",
            IocType::Email => "email",
            IocType::Hostname => "hostname",
            IocType::Yara => "yara",
            IocType::Cve => "cve",
        }
    }
}

/// A single indicator of compromise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ioc {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: IocType,
    /// The raw indicator (IP, domain, hash, ...).
    pub value: String,
    pub severity: SeverityLevel,
    /// Analyst confidence, 0–100.
    pub confidence: u8,
    /// Feed or reporter the indicator came from.
    pub source: String,
    pub observed_count: i64,
    /// ISO 8601 timestamps.
    pub first_seen: String,
    pub last_seen: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Page of search results from `GET /api/iocs/search`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct IocSearchResponse {
    #[serde(default)]
    pub results: Vec<Ioc>,
    #[serde(default)]
    pub total: i64,
}

/// Indicator counts per severity level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    #[serde(default)]
    pub critical: i64,
    #[serde(default)]
    pub high: i64,
    #[serde(default)]
    pub medium: i64,
    #[serde(default)]
    pub low: i64,
    #[serde(default)]
    pub info: i64,
}

impl SeverityCounts {
    /// Counts paired with their levels, most severe first.
    #[must_use]
    pub fn entries(self) -> [(SeverityLevel, i64); 5] {
        [
            (SeverityLevel::Critical, self.critical),
            (SeverityLevel::High, self.high),
            (SeverityLevel::Medium, self.medium),
            (SeverityLevel::Low, self.low),
            (SeverityLevel::Info, self.info),
        ]
    }

    #[must_use]
    pub fn total(self) -> i64 {
        self.critical + self.high + self.medium + self.low + self.info
    }
}

/// Aggregated threat report from `GET /api/reports/summary`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// ISO 8601 timestamp the report was generated at.
    #[serde(default)]
    pub generated_at: String,
    #[serde(default)]
    pub total_iocs: i64,
    #[serde(default)]
    pub severity: SeverityCounts,
    /// Counts keyed by IOC type wire value.
    #[serde(default)]
    pub types: BTreeMap<String, i64>,
    /// Counts keyed by feed/source name.
    #[serde(default)]
    pub sources: BTreeMap<String, i64>,
    /// Highest-priority indicators, ranked by the upstream.
    #[serde(default)]
    pub top_threats: Vec<Ioc>,
}
