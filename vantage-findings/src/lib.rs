//! # Vantage Findings — Query and SLA timeline engine
//!
//! The shared engine behind the AppSec and OffSec dashboard tabs: a
//! filter → sort → paginate pipeline over finding records, the calendar
//! classifier that buckets SLA lifecycle dates into a month grid, and the
//! posture summary report. Tasks and vulnerabilities project into the same
//! `FindingRecord` shape, so none of this is forked per tab.

pub mod query;
pub mod records;
pub mod summary;
pub mod timeline;

pub use query::{
    filter_findings, query_findings, FindingFilters, FindingsView, QueryResult, SortKey,
    SortOrder, FILTER_ALL,
};
pub use records::{
    task_status_is_terminal, vuln_status_is_terminal, TaskRecord, TaskStatus, VulnRecord,
    VulnStatus,
};
pub use summary::{overdue_findings, posture_summary, PostureSummary};
pub use timeline::{
    next_month, prev_month, CalendarDay, EventColor, SlaCalendar, SlaEvent, SlaEventKind,
};
