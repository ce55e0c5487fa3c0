//! # Vantage Core — Shared types for the security-posture console
//!
//! Every console crate links against this library: the severity ordinal
//! axis, the `FindingRecord` projection both tasks and vulnerabilities are
//! adapted into, the typed TOML configuration, and the shared error type.

pub mod config;
pub mod error;
pub mod types;

pub use config::ConsoleConfig;
pub use error::{VantageError, VantageResult};
pub use types::{parse_iso_date, FindingCategory, FindingRecord, Severity};

/// Default page size for paginated finding queries.
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Default SLA warning window: findings surface this many days before their due date.
pub const DEFAULT_APPROACHING_WINDOW_DAYS: u32 = 3;
