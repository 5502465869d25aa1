use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use tradebook_dashboard::{Dashboard, Snapshot, parse_window};

#[derive(Parser, Debug)]
#[command(
    name = "tradebook-dashboard",
    version,
    about = "Compute dashboard figures from a snapshot of backend collections"
)]
struct Cli {
    /// Directory holding transactions.json, sales_invoices.json, purchase_invoices.json, products.json
    #[arg(long, env = "TRADEBOOK_SNAPSHOT_DIR")]
    snapshot_dir: PathBuf,

    /// Only count transactions on or after this date (YYYY-MM-DD or RFC 3339)
    #[arg(long, env = "TRADEBOOK_FROM")]
    from: Option<String>,

    /// Only count transactions on or before this date (YYYY-MM-DD or RFC 3339)
    #[arg(long, env = "TRADEBOOK_TO")]
    to: Option<String>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    tradebook_observability::init();

    let cli = Cli::parse();

    let window = parse_window(cli.from.as_deref(), cli.to.as_deref())?;
    let snapshot = Snapshot::load_dir(&cli.snapshot_dir)
        .with_context(|| format!("loading snapshot from {}", cli.snapshot_dir.display()))?;

    let dashboard = Dashboard::compute(&snapshot, &window);
    tracing::info!(
        transactions = dashboard.summary.transaction_count,
        net_balance = dashboard.summary.net_balance,
        low_stock = dashboard.low_stock_count,
        "dashboard computed"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if cli.pretty {
        serde_json::to_writer_pretty(&mut out, &dashboard)?;
    } else {
        serde_json::to_writer(&mut out, &dashboard)?;
    }
    writeln!(out)?;
    out.flush().context("writing report")
}
