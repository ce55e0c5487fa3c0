mod mock_data;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, Utc};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use vantage_assets::AssetTreeState;
use vantage_core::{ConsoleConfig, FindingRecord};
use vantage_findings::{
    posture_summary, task_status_is_terminal, vuln_status_is_terminal, FindingsView, SlaCalendar,
    SortKey, SortOrder, TaskRecord, VulnRecord,
};

#[derive(Parser, Debug)]
#[command(name = "vantage", version, about = "Vantage — Security Posture Console")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "vantage.toml")]
    config: String,

    /// Generate a default config file and exit
    #[arg(long)]
    generate_config: bool,

    /// Log level (overrides config file)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Month to render as YYYY-MM (defaults to the current month)
    #[arg(short, long)]
    month: Option<String>,

    /// Status filter ("all" = no constraint)
    #[arg(long, default_value = "all")]
    status: String,

    /// Severity filter ("all" = no constraint)
    #[arg(long, default_value = "all")]
    severity: String,

    /// Sort key: severity, status, createdDate, updatedDate, dueDate, cvssScore
    #[arg(long, default_value = "severity")]
    sort: String,

    /// Page to display (1-indexed)
    #[arg(short, long, default_value_t = 1)]
    page: usize,

    /// Page size (overrides config file)
    #[arg(long)]
    page_size: Option<usize>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Generate Config ──────────────────────────────────────────────
    if cli.generate_config {
        let config = ConsoleConfig::default();
        config.save(&cli.config)?;
        println!("Default configuration written to {}", cli.config);
        return Ok(());
    }

    // ── Load Config ──────────────────────────────────────────────────
    let config = ConsoleConfig::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: {}, using defaults", e);
        ConsoleConfig::default()
    });

    // ── Tracing ──────────────────────────────────────────────────────
    let log_level = cli.log_level.as_deref().unwrap_or(&config.general.log_level);
    let level = match log_level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Vantage v{}", env!("CARGO_PKG_VERSION"));

    let today = Utc::now().date_naive();
    let anchor = match cli.month.as_deref() {
        Some(month) => NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d")
            .with_context(|| format!("Invalid --month '{}', expected YYYY-MM", month))?,
        None => today,
    };

    // ── Data (mock backend) ──────────────────────────────────────────
    let vulns = mock_data::sample_vulns(today);
    let tasks = mock_data::sample_tasks(today);
    let tenants = mock_data::sample_tenants();
    let vuln_findings: Vec<FindingRecord> = vulns.iter().map(VulnRecord::to_finding).collect();
    let task_findings: Vec<FindingRecord> = tasks.iter().map(TaskRecord::to_finding).collect();

    // ── Findings Query ───────────────────────────────────────────────
    let page_size = cli.page_size.unwrap_or(config.findings.page_size);
    let view = FindingsView::new(page_size);
    view.set_filter("status", &cli.status);
    view.set_filter("severity", &cli.severity);
    view.set_sort(SortKey::from_name(&cli.sort), SortOrder::Desc);
    view.set_page(cli.page);

    let vuln_page = view.query(&vuln_findings);
    let task_page = view.query(&task_findings);

    // ── SLA Calendar ─────────────────────────────────────────────────
    let calendar = SlaCalendar::new(config.findings.approaching_window_days);
    let visible = view.filtered(&vuln_findings);
    let grid = calendar.build_month(&visible, anchor, today, &vuln_status_is_terminal);

    // ── Summary & Assets ─────────────────────────────────────────────
    let summary = posture_summary(
        &vuln_findings,
        today,
        config.findings.approaching_window_days,
        &vuln_status_is_terminal,
    );
    let task_summary = posture_summary(
        &task_findings,
        today,
        config.findings.approaching_window_days,
        &task_status_is_terminal,
    );

    let tree_state = AssetTreeState::new();
    tree_state.expand_all(&tenants);
    let tree = tree_state.build(&tenants);

    if cli.json {
        let output = serde_json::json!({
            "summary": { "vulnerabilities": summary, "tasks": task_summary },
            "vulnerabilities": vuln_page,
            "tasks": task_page,
            "calendar": grid,
            "assets": tree,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("═══ Posture Summary ({}) ═══", today);
    println!(
        "  vulnerabilities: {} total, {} open, {} overdue, {} approaching",
        summary.total, summary.open, summary.overdue, summary.approaching
    );
    println!(
        "  tasks:           {} total, {} open, {} overdue, {} approaching",
        task_summary.total, task_summary.open, task_summary.overdue, task_summary.approaching
    );

    println!();
    println!(
        "═══ Vulnerabilities (page {}/{}, {} match) ═══",
        view.page(),
        vuln_page.total_pages,
        vuln_page.total_count
    );
    for item in &vuln_page.items {
        println!(
            "  {:10} {:8} {:12} due {:10}  {}",
            item.key,
            item.severity.label(),
            item.status,
            item.due_date.as_deref().unwrap_or("—"),
            item.title
        );
    }

    println!();
    println!(
        "═══ Remediation Tasks (page {}/{}, {} match) ═══",
        view.page(),
        task_page.total_pages,
        task_page.total_count
    );
    for item in &task_page.items {
        println!(
            "  {:10} {:8} {:12} due {:10}  {}",
            item.key,
            item.severity.label(),
            item.status,
            item.due_date.as_deref().unwrap_or("—"),
            item.title
        );
    }

    println!();
    println!("═══ SLA Calendar {}-{:02} ═══", anchor.year(), anchor.month());
    for day in grid.iter().filter(|d| d.has_events() && d.in_current_month) {
        for event in &day.events {
            println!("  {}  {:?}  {}", day.date, event.kind, event.title);
        }
    }

    println!();
    println!("═══ Asset Inventory ═══");
    print_tree(&tree, 0);

    Ok(())
}

fn print_tree(nodes: &[vantage_assets::AssetTreeNode], depth: usize) {
    for node in nodes {
        println!(
            "{:indent$}{} {} (risk {:.1}, {} vulns)",
            "",
            if node.selected { ">" } else { "-" },
            node.name,
            node.info.risk_score,
            node.info.vulnerabilities_count,
            indent = depth * 2
        );
        if node.expanded {
            print_tree(&node.children, depth + 1);
        }
    }
}
