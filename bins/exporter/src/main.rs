//! Scheduled-backup exporter for Sanad.
//!
//! An external scheduler invokes this binary on a timer. It loads a JSON
//! snapshot of the ledger, runs the export orchestrator over it, and writes
//! the CSV or print-HTML artifact to disk or stdout.
//!
//! Usage: exporter --snapshot ledger.json --format csv --month 2024-01

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use sanad_core::export::{ExportFormat, ExportScope, ExportService};
use sanad_core::filter::FilterState;
use sanad_core::store::LedgerStore;
use sanad_core::template::{DocumentMeta, ExportColumn, TemplateKind};
use sanad_shared::AppConfig;
use sanad_shared::types::YearMonth;
use sanad_store::{MemoryStore, Snapshot};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Timezone printed timestamps are rendered in.
const PRINT_TZ: chrono_tz::Tz = chrono_tz::Asia::Baghdad;

#[derive(Debug, Parser)]
#[command(name = "exporter", about = "Render a ledger backup artifact from a snapshot")]
struct Args {
    /// Path to the JSON snapshot to export from.
    #[arg(long)]
    snapshot: PathBuf,

    /// Output format (csv or html).
    #[arg(long, default_value = "csv")]
    format: ExportFormat,

    /// Restrict the export to one YYYY-MM month.
    #[arg(long)]
    month: Option<YearMonth>,

    /// Comma-separated column list.
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "date,name,number,category,hours,hourly_rate,amount,currency,payment,description"
    )]
    columns: Vec<ExportColumn>,

    /// Output file; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = AppConfig::load().context("failed to load configuration")?;

    let raw = std::fs::read_to_string(&args.snapshot)
        .with_context(|| format!("failed to read snapshot {}", args.snapshot.display()))?;
    let snapshot: Snapshot =
        serde_json::from_str(&raw).context("failed to parse snapshot JSON")?;
    let store = MemoryStore::from_snapshot(snapshot);

    let mut filter = FilterState::new();
    if let Some(month) = args.month {
        filter = filter.with_month(month);
    }
    let scope = ExportScope::filtered(filter);

    let artifact = match args.format {
        ExportFormat::Csv => ExportService::export_csv(&store, &scope, &args.columns).await?,
        ExportFormat::Html => {
            let meta = document_meta(&store, &config, args.month).await?;
            ExportService::render_print_document(
                &store,
                &scope,
                &args.columns,
                TemplateKind::BulkReport,
                &meta,
            )
            .await?
        }
    };

    match &args.out {
        Some(path) => {
            std::fs::write(path, &artifact)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = artifact.len(), "backup artifact written");
        }
        None => print!("{artifact}"),
    }

    Ok(())
}

/// Builds the document header values: store settings win, configuration is
/// the fallback.
async fn document_meta(
    store: &MemoryStore,
    config: &AppConfig,
    month: Option<YearMonth>,
) -> anyhow::Result<DocumentMeta> {
    let company_name = store
        .get_setting("company_name")
        .await?
        .unwrap_or_else(|| config.company.name.clone());
    let tagline = store
        .get_setting("company_tagline")
        .await?
        .unwrap_or_else(|| config.company.tagline.clone());
    let logo = store
        .get_setting("company_logo")
        .await?
        .unwrap_or_else(|| config.company.logo.clone());

    Ok(DocumentMeta {
        company_name,
        tagline,
        logo,
        period: month.map_or_else(|| "All months".to_string(), |m| m.to_string()),
        printed_at: Utc::now()
            .with_timezone(&PRINT_TZ)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
    })
}
