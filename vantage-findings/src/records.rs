//! Concrete finding record kinds and their projection into `FindingRecord`.
//!
//! Tasks and vulnerabilities keep their own closed status sets; the generic
//! engines only ever see the common shape plus a per-kind terminal-status
//! predicate.

use serde::{Deserialize, Serialize};
use vantage_core::{FindingCategory, FindingRecord, Severity};

// ── Task records ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus { ToDo, InProgress, InReview, Done, Blocked }

impl TaskStatus {
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::InReview => "In Review",
            TaskStatus::Done => "Done",
            TaskStatus::Blocked => "Blocked",
        }
    }

    pub fn from_label(label: &str) -> Option<TaskStatus> {
        match label {
            "To Do" => Some(TaskStatus::ToDo),
            "In Progress" => Some(TaskStatus::InProgress),
            "In Review" => Some(TaskStatus::InReview),
            "Done" => Some(TaskStatus::Done),
            "Blocked" => Some(TaskStatus::Blocked),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, TaskStatus::Done)
    }
}

/// Terminal-status predicate for task records, handed to the generic engines.
pub fn task_status_is_terminal(label: &str) -> bool {
    TaskStatus::from_label(label).is_some_and(TaskStatus::is_terminal)
}

/// A remediation task as tracked on the AppSec/OffSec task boards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub key: String,
    pub title: String,
    pub category: FindingCategory,
    /// Same ordinal axis as vulnerability severity; tasks name it priority.
    pub priority: Severity,
    pub status: TaskStatus,
    pub created_date: String,
    pub updated_date: String,
    pub due_date: Option<String>,
    pub assignee: Option<String>,
    pub labels: Vec<String>,
}

impl TaskRecord {
    pub fn to_finding(&self) -> FindingRecord {
        FindingRecord {
            id: self.id.clone(),
            key: self.key.clone(),
            title: self.title.clone(),
            category: self.category,
            severity: self.priority,
            status: self.status.label().to_string(),
            created_date: self.created_date.clone(),
            updated_date: self.updated_date.clone(),
            due_date: self.due_date.clone(),
            source: None,
            cvss_score: None,
            asset: None,
            assignee: self.assignee.clone(),
            labels: self.labels.clone(),
        }
    }
}

// ── Vulnerability records ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VulnStatus { Open, InProgress, Fixed, Accepted, FalsePositive }

impl VulnStatus {
    pub fn label(self) -> &'static str {
        match self {
            VulnStatus::Open => "Open",
            VulnStatus::InProgress => "In Progress",
            VulnStatus::Fixed => "Fixed",
            VulnStatus::Accepted => "Accepted",
            VulnStatus::FalsePositive => "False Positive",
        }
    }

    pub fn from_label(label: &str) -> Option<VulnStatus> {
        match label {
            "Open" => Some(VulnStatus::Open),
            "In Progress" => Some(VulnStatus::InProgress),
            "Fixed" => Some(VulnStatus::Fixed),
            "Accepted" => Some(VulnStatus::Accepted),
            "False Positive" => Some(VulnStatus::FalsePositive),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            VulnStatus::Fixed | VulnStatus::Accepted | VulnStatus::FalsePositive
        )
    }
}

/// Terminal-status predicate for vulnerability records.
pub fn vuln_status_is_terminal(label: &str) -> bool {
    VulnStatus::from_label(label).is_some_and(VulnStatus::is_terminal)
}

/// A tracked vulnerability as shown on the vulnerability dashboard tabs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VulnRecord {
    pub id: String,
    pub key: String,
    pub title: String,
    pub category: FindingCategory,
    pub severity: Severity,
    pub status: VulnStatus,
    pub cvss_score: f64,
    /// Scanner provenance, e.g. "SAST" or "pentest".
    pub source: String,
    pub asset: Option<String>,
    pub created_date: String,
    pub updated_date: String,
    pub due_date: Option<String>,
    pub assignee: Option<String>,
    pub labels: Vec<String>,
}

impl VulnRecord {
    pub fn to_finding(&self) -> FindingRecord {
        FindingRecord {
            id: self.id.clone(),
            key: self.key.clone(),
            title: self.title.clone(),
            category: self.category,
            severity: self.severity,
            status: self.status.label().to_string(),
            created_date: self.created_date.clone(),
            updated_date: self.updated_date.clone(),
            due_date: self.due_date.clone(),
            source: Some(self.source.clone()),
            cvss_score: Some(self.cvss_score),
            asset: self.asset.clone(),
            assignee: self.assignee.clone(),
            labels: self.labels.clone(),
        }
    }
}
