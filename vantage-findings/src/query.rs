//! Findings query engine — the filter → sort → paginate pipeline shared by
//! the task and vulnerability dashboard tabs.
//!
//! Everything here is a pure function of its inputs, safe to call on every
//! render. `FindingsView` is the one stateful piece: it owns the current
//! filter/sort/page selection and resets to page 1 whenever either changes,
//! so a stale out-of-range page is never served.

use std::cmp::Ordering;
use std::collections::HashMap;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use vantage_core::{parse_iso_date, FindingRecord, DEFAULT_PAGE_SIZE};

/// Sentinel filter value meaning "no constraint on this field".
pub const FILTER_ALL: &str = "all";

/// Conjunctive field filters. Fields outside the recognized set never
/// constrain anything; the sentinel value `"all"` disables a field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FindingFilters {
    fields: HashMap<String, String>,
}

impl FindingFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// A record is kept iff every non-"all" recognized filter matches.
    /// `month` is a `YYYY-MM` prefix match on the created date; everything
    /// else is exact string equality. `severity` and `priority` name the
    /// same ordinal axis.
    pub fn matches(&self, record: &FindingRecord) -> bool {
        self.fields.iter().all(|(field, value)| {
            if value == FILTER_ALL {
                return true;
            }
            match field.as_str() {
                "status" => record.status == *value,
                "severity" | "priority" => record.severity.label() == value,
                "month" => record.created_date.starts_with(value.as_str()),
                "source" => record.source.as_deref() == Some(value.as_str()),
                _ => true,
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey { Severity, Status, CreatedDate, UpdatedDate, DueDate, CvssScore }

impl SortKey {
    /// Parse a UI sort-key name. Unknown names yield `None`, which the
    /// engine treats as "leave input order untouched".
    pub fn from_name(name: &str) -> Option<SortKey> {
        let key = match name {
            "severity" | "priority" => SortKey::Severity,
            "status" => SortKey::Status,
            "createdDate" | "created_date" => SortKey::CreatedDate,
            "updatedDate" | "updated_date" => SortKey::UpdatedDate,
            "dueDate" | "due_date" => SortKey::DueDate,
            "cvssScore" | "cvss_score" => SortKey::CvssScore,
            _ => {
                debug!(name, "Unknown sort key, leaving input order untouched");
                return None;
            }
        };
        Some(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder { Asc, Desc }

/// Ascending comparison on a single sort key.
///
/// Severity uses the fixed ordinal map. Status compares label strings
/// lexicographically — the ordering the dashboards have always shown; do
/// not swap it for the severity ordinal. Date keys compare parsed dates;
/// unparseable dates sort before all valid ones.
fn compare(a: &FindingRecord, b: &FindingRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Severity => a.severity.ordinal().cmp(&b.severity.ordinal()),
        SortKey::Status => a.status.cmp(&b.status),
        SortKey::CreatedDate => parse_iso_date(&a.created_date).cmp(&parse_iso_date(&b.created_date)),
        SortKey::UpdatedDate => parse_iso_date(&a.updated_date).cmp(&parse_iso_date(&b.updated_date)),
        SortKey::DueDate => {
            let da = a.due_date.as_deref().and_then(parse_iso_date);
            let db = b.due_date.as_deref().and_then(parse_iso_date);
            da.cmp(&db)
        }
        SortKey::CvssScore => {
            let sa = a.cvss_score.unwrap_or(-1.0);
            let sb = b.cvss_score.unwrap_or(-1.0);
            sa.partial_cmp(&sb).unwrap_or(Ordering::Equal)
        }
    }
}

/// One page of query output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    pub items: Vec<FindingRecord>,
    /// Count after filtering, before pagination.
    pub total_count: usize,
    /// `ceil(total_count / page_size)`, minimum 0.
    pub total_pages: usize,
}

/// The pre-pagination filtered set, in input order. Feeds the SLA timeline.
pub fn filter_findings(records: &[FindingRecord], filters: &FindingFilters) -> Vec<FindingRecord> {
    records.iter().filter(|r| filters.matches(r)).cloned().collect()
}

/// Filter → sort → paginate.
///
/// The sort is stable in both directions: descending applies a reversed
/// comparator rather than reversing the sorted list, so equal keys keep
/// their relative input order either way. Pages are 1-indexed and NOT
/// clamped here — an out-of-range page yields empty `items`, and callers
/// are responsible for resetting to page 1 when filters or sort change.
pub fn query_findings(
    records: &[FindingRecord],
    filters: &FindingFilters,
    sort_key: Option<SortKey>,
    sort_order: SortOrder,
    page: usize,
    page_size: usize,
) -> QueryResult {
    let mut kept = filter_findings(records, filters);

    if let Some(key) = sort_key {
        match sort_order {
            SortOrder::Asc => kept.sort_by(|a, b| compare(a, b, key)),
            SortOrder::Desc => kept.sort_by(|a, b| compare(b, a, key)),
        }
    }

    let page_size = page_size.max(1);
    let total_count = kept.len();
    let total_pages = if total_count == 0 {
        0
    } else {
        (total_count + page_size - 1) / page_size
    };

    let start = page.saturating_sub(1).saturating_mul(page_size);
    let items = if start >= kept.len() {
        Vec::new()
    } else {
        kept[start..(start + page_size).min(kept.len())].to_vec()
    };

    QueryResult { items, total_count, total_pages }
}

#[derive(Debug, Clone)]
struct ViewState {
    filters: FindingFilters,
    sort_key: Option<SortKey>,
    sort_order: SortOrder,
    page: usize,
    page_size: usize,
}

/// Current filter/sort/page selection for one dashboard tab.
///
/// Changing any filter or sort parameter resets the page to 1 — required so
/// a page that was valid under the old filter set is never served against
/// the new one. Updates are atomic relative to the next query.
pub struct FindingsView {
    state: RwLock<ViewState>,
}

impl FindingsView {
    pub fn new(page_size: usize) -> Self {
        Self {
            state: RwLock::new(ViewState {
                filters: FindingFilters::new(),
                sort_key: None,
                sort_order: SortOrder::Desc,
                page: 1,
                page_size: page_size.max(1),
            }),
        }
    }

    pub fn set_filter(&self, field: impl Into<String>, value: impl Into<String>) {
        let mut state = self.state.write();
        state.filters.set(field, value);
        state.page = 1;
    }

    pub fn set_sort(&self, key: Option<SortKey>, order: SortOrder) {
        let mut state = self.state.write();
        state.sort_key = key;
        state.sort_order = order;
        state.page = 1;
    }

    pub fn set_page(&self, page: usize) {
        self.state.write().page = page.max(1);
    }

    pub fn page(&self) -> usize {
        self.state.read().page
    }

    pub fn query(&self, records: &[FindingRecord]) -> QueryResult {
        let state = self.state.read();
        query_findings(
            records,
            &state.filters,
            state.sort_key,
            state.sort_order,
            state.page,
            state.page_size,
        )
    }

    /// The filtered set ignoring pagination, for the timeline view.
    pub fn filtered(&self, records: &[FindingRecord]) -> Vec<FindingRecord> {
        filter_findings(records, &self.state.read().filters)
    }
}

impl Default for FindingsView {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
