//! Posture summary reporting over a finding set.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use vantage_core::{parse_iso_date, FindingRecord, Severity};

/// Headline counts for the posture dashboard cards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostureSummary {
    pub total: usize,
    pub open: usize,
    pub terminal: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    /// Open findings whose due date has arrived or passed.
    pub overdue: usize,
    /// Open findings due within the warning window (exclusive of today).
    pub approaching: usize,
}

pub fn posture_summary(
    records: &[FindingRecord],
    today: NaiveDate,
    approaching_window_days: u32,
    is_terminal: &dyn Fn(&str) -> bool,
) -> PostureSummary {
    let mut summary = PostureSummary { total: records.len(), ..Default::default() };
    let horizon = today + chrono::Duration::days(approaching_window_days as i64);

    for record in records {
        match record.severity {
            Severity::Critical => summary.critical += 1,
            Severity::High => summary.high += 1,
            Severity::Medium => summary.medium += 1,
            Severity::Low => summary.low += 1,
        }

        if is_terminal(&record.status) {
            summary.terminal += 1;
            continue;
        }
        summary.open += 1;

        if let Some(due) = record.due_date.as_deref().and_then(parse_iso_date) {
            if due <= today {
                summary.overdue += 1;
            } else if due <= horizon {
                summary.approaching += 1;
            }
        }
    }
    summary
}

/// Still-open findings whose due date has arrived or passed. Logs a warning
/// when any are found, in the same shape the remediation sweep uses.
pub fn overdue_findings<'a>(
    records: &'a [FindingRecord],
    today: NaiveDate,
    is_terminal: &dyn Fn(&str) -> bool,
) -> Vec<&'a FindingRecord> {
    let overdue: Vec<&FindingRecord> = records
        .iter()
        .filter(|r| !is_terminal(&r.status))
        .filter(|r| {
            r.due_date
                .as_deref()
                .and_then(parse_iso_date)
                .is_some_and(|due| due <= today)
        })
        .collect();
    if !overdue.is_empty() {
        warn!(count = overdue.len(), "Overdue findings");
    }
    overdue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::vuln_status_is_terminal;
    use vantage_core::FindingCategory;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(id: &str, severity: Severity, status: &str, due: Option<&str>) -> FindingRecord {
        FindingRecord {
            id: id.into(),
            key: format!("VULN-{}", id),
            title: format!("Finding {}", id),
            category: FindingCategory::OffSec,
            severity,
            status: status.into(),
            created_date: "2026-01-01".into(),
            updated_date: "2026-01-02".into(),
            due_date: due.map(String::from),
            source: None,
            cvss_score: None,
            asset: None,
            assignee: None,
            labels: vec![],
        }
    }

    #[test]
    fn test_summary_counts() {
        let records = vec![
            record("1", Severity::Critical, "Open", Some("2026-01-10")),
            record("2", Severity::High, "Open", Some("2026-01-17")),
            record("3", Severity::Medium, "Fixed", Some("2026-01-10")),
            record("4", Severity::Low, "Open", None),
        ];
        let summary = posture_summary(&records, date(2026, 1, 15), 3, &vuln_status_is_terminal);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.open, 3);
        assert_eq!(summary.terminal, 1);
        assert_eq!(summary.critical, 1);
        assert_eq!(summary.high, 1);
        assert_eq!(summary.medium, 1);
        assert_eq!(summary.low, 1);
        // #1 is past due; #2 falls inside the 3-day window; #3 is terminal
        // and #4 has no SLA, so neither counts.
        assert_eq!(summary.overdue, 1);
        assert_eq!(summary.approaching, 1);
    }

    #[test]
    fn test_overdue_sweep() {
        let records = vec![
            record("1", Severity::High, "Open", Some("2026-01-10")),
            record("2", Severity::High, "Fixed", Some("2026-01-10")),
            record("3", Severity::High, "Open", Some("2026-02-01")),
            record("4", Severity::High, "Open", None),
        ];
        let overdue = overdue_findings(&records, date(2026, 1, 15), &vuln_status_is_terminal);
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].id, "1");
    }

    #[test]
    fn test_due_today_counts_as_overdue() {
        let records = vec![record("1", Severity::High, "Open", Some("2026-01-15"))];
        let overdue = overdue_findings(&records, date(2026, 1, 15), &vuln_status_is_terminal);
        assert_eq!(overdue.len(), 1);
    }
}
