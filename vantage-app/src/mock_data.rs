//! Mock data source — stands in for the backend collaborator that feeds the
//! console. Dates are anchored to the given "today" so the calendar demo
//! always has something to show.

use chrono::{Duration, NaiveDate};
use vantage_assets::{AssetInfo, Environment, Project, SubProject, Tenant};
use vantage_core::{FindingCategory, Severity};
use vantage_findings::{TaskRecord, TaskStatus, VulnRecord, VulnStatus};

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn sample_vulns(today: NaiveDate) -> Vec<VulnRecord> {
    let vuln = |id: &str,
                key: &str,
                title: &str,
                severity: Severity,
                status: VulnStatus,
                cvss: f64,
                source: &str,
                created_offset: i64,
                due_offset: Option<i64>| VulnRecord {
        id: id.into(),
        key: key.into(),
        title: title.into(),
        category: FindingCategory::AppSec,
        severity,
        status,
        cvss_score: cvss,
        source: source.into(),
        asset: Some("storefront-api".into()),
        created_date: iso(today + Duration::days(created_offset)),
        updated_date: iso(today + Duration::days(created_offset / 2)),
        due_date: due_offset.map(|d| iso(today + Duration::days(d))),
        assignee: Some("rchen".into()),
        labels: vec!["web".into()],
    };

    vec![
        vuln("v1", "VULN-001", "SQL injection in login form", Severity::Critical, VulnStatus::Open, 9.8, "SAST", -20, Some(0)),
        vuln("v2", "VULN-002", "Stored XSS in comment field", Severity::High, VulnStatus::InProgress, 8.1, "DAST", -15, Some(3)),
        vuln("v3", "VULN-003", "Outdated TLS configuration", Severity::Medium, VulnStatus::Open, 5.3, "pentest", -12, Some(10)),
        vuln("v4", "VULN-004", "Verbose error pages", Severity::Low, VulnStatus::Open, 3.1, "DAST", -10, None),
        vuln("v5", "VULN-005", "Hardcoded API credential", Severity::Critical, VulnStatus::Fixed, 9.1, "SAST", -30, Some(-5)),
        vuln("v6", "VULN-006", "Missing rate limit on reset", Severity::High, VulnStatus::Open, 7.5, "pentest", -8, Some(5)),
        vuln("v7", "VULN-007", "Session fixation", Severity::Medium, VulnStatus::Accepted, 6.4, "pentest", -25, Some(-2)),
        vuln("v8", "VULN-008", "Directory listing enabled", Severity::Low, VulnStatus::FalsePositive, 2.7, "DAST", -18, None),
        vuln("v9", "VULN-009", "Weak password policy", Severity::Medium, VulnStatus::Open, 5.9, "SAST", -5, Some(14)),
        vuln("v10", "VULN-010", "Unpatched dependency CVE-2025-48110", Severity::High, VulnStatus::Open, 8.8, "SCA", -3, Some(7)),
        vuln("v11", "VULN-011", "CSRF token missing on delete", Severity::High, VulnStatus::InProgress, 7.1, "DAST", -40, Some(-10)),
        vuln("v12", "VULN-012", "Open redirect on logout", Severity::Low, VulnStatus::Open, 3.7, "DAST", -2, Some(20)),
    ]
}

pub fn sample_tasks(today: NaiveDate) -> Vec<TaskRecord> {
    let task = |id: &str,
                key: &str,
                title: &str,
                priority: Severity,
                status: TaskStatus,
                created_offset: i64,
                due_offset: Option<i64>| TaskRecord {
        id: id.into(),
        key: key.into(),
        title: title.into(),
        category: FindingCategory::Remediation,
        priority,
        status,
        created_date: iso(today + Duration::days(created_offset)),
        updated_date: iso(today + Duration::days(created_offset / 2)),
        due_date: due_offset.map(|d| iso(today + Duration::days(d))),
        assignee: Some("mfarid".into()),
        labels: vec![],
    };

    vec![
        task("t1", "REM-001", "Patch login form input handling", Severity::Critical, TaskStatus::InProgress, -14, Some(1)),
        task("t2", "REM-002", "Rotate leaked API credential", Severity::Critical, TaskStatus::Done, -28, Some(-20)),
        task("t3", "REM-003", "Upgrade TLS to 1.3 everywhere", Severity::Medium, TaskStatus::ToDo, -10, Some(12)),
        task("t4", "REM-004", "Add rate limiting middleware", Severity::High, TaskStatus::InReview, -7, Some(4)),
        task("t5", "REM-005", "Quarterly phishing training refresh", Severity::Low, TaskStatus::ToDo, -4, None),
        task("t6", "REM-006", "Dependency bump sprint", Severity::High, TaskStatus::Blocked, -21, Some(-1)),
    ]
}

pub fn sample_tenants() -> Vec<Tenant> {
    let info = |status: &str, risk: f64, vulns: u32| AssetInfo {
        status: status.into(),
        risk_score: risk,
        vulnerabilities_count: vulns,
    };

    vec![
        Tenant {
            id: "tn-acme".into(),
            name: "Acme Corp".into(),
            info: info("active", 7.4, 18),
            projects: vec![
                Project {
                    id: "pr-store".into(),
                    name: "Storefront".into(),
                    info: info("active", 8.1, 12),
                    sub_projects: vec![
                        SubProject {
                            id: "sp-checkout".into(),
                            name: "Checkout".into(),
                            info: info("active", 8.9, 7),
                            environments: vec![
                                Environment { id: "env-checkout-prod".into(), name: "production".into(), info: info("active", 8.9, 5) },
                                Environment { id: "env-checkout-stage".into(), name: "staging".into(), info: info("active", 4.2, 2) },
                            ],
                        },
                        SubProject {
                            id: "sp-catalog".into(),
                            name: "Catalog".into(),
                            info: info("active", 5.0, 5),
                            environments: vec![
                                Environment { id: "env-catalog-prod".into(), name: "production".into(), info: info("active", 5.0, 5) },
                            ],
                        },
                    ],
                },
                Project {
                    id: "pr-billing".into(),
                    name: "Billing".into(),
                    info: info("active", 3.6, 6),
                    sub_projects: vec![SubProject {
                        id: "sp-invoicing".into(),
                        name: "Invoicing".into(),
                        info: info("active", 3.6, 6),
                        environments: vec![
                            Environment { id: "env-invoicing-prod".into(), name: "production".into(), info: info("active", 3.6, 6) },
                        ],
                    }],
                },
            ],
        },
        Tenant {
            id: "tn-globex".into(),
            name: "Globex Industries".into(),
            info: info("onboarding", 2.1, 0),
            projects: vec![],
        },
    ]
}
