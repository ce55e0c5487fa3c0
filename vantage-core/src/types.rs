//! Shared types for the posture console.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The severity/priority axis shared by tasks and vulnerabilities.
/// Tasks call this field "priority", vulnerabilities "severity"; the
/// semantics are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity { Low, Medium, High, Critical }

impl Severity {
    /// Fixed sort ordinal: Critical=4, High=3, Medium=2, Low=1.
    /// Sorting on this axis is never alphabetical.
    pub fn ordinal(self) -> u8 {
        self as u8 + 1
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    pub fn from_label(label: &str) -> Option<Severity> {
        match label {
            "Critical" => Some(Severity::Critical),
            "High" => Some(Severity::High),
            "Medium" => Some(Severity::Medium),
            "Low" => Some(Severity::Low),
            _ => None,
        }
    }

    /// Ordinal for a raw label; unrecognized labels rank 0.
    pub fn ordinal_of(label: &str) -> u8 {
        Self::from_label(label).map_or(0, Severity::ordinal)
    }
}

/// Classification axis for findings, independent of severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingCategory { AppSec, OffSec, Remediation, Current }

impl FindingCategory {
    pub fn label(self) -> &'static str {
        match self {
            FindingCategory::AppSec => "appsec",
            FindingCategory::OffSec => "offsec",
            FindingCategory::Remediation => "remediation",
            FindingCategory::Current => "current",
        }
    }
}

/// The common projection both tasks and vulnerabilities are adapted into for
/// querying. Kind-specific fields are optional; absent means "not applicable
/// to this record kind".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindingRecord {
    /// Unique, stable identifier.
    pub id: String,
    /// Human-readable short code, e.g. "APP-001".
    pub key: String,
    pub title: String,
    pub category: FindingCategory,
    pub severity: Severity,
    /// Status label from the record kind's closed set. Terminal-ness is
    /// decided by a caller-supplied predicate, never hardcoded in the
    /// generic engines.
    pub status: String,
    /// ISO `YYYY-MM-DD`. Immutable once set.
    pub created_date: String,
    /// ISO date, always >= created_date.
    pub updated_date: String,
    /// Absent means the finding has no SLA.
    pub due_date: Option<String>,
    /// Scanner provenance (vulnerabilities only).
    pub source: Option<String>,
    /// CVSS base score (vulnerabilities only).
    pub cvss_score: Option<f64>,
    /// Affected asset, if known.
    pub asset: Option<String>,
    pub assignee: Option<String>,
    pub labels: Vec<String>,
}

/// Parse an ISO `YYYY-MM-DD` date.
///
/// Source data is trusted; anything unparseable yields `None`. Callers sort
/// `None` before all valid dates and generate no timeline events for it.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
