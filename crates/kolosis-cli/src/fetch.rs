//! `fetch` and `faculties` command handlers.

use std::path::{Path, PathBuf};

use anyhow::Context;
use kolosis_core::{AppConfig, FacultyCode, FacultySelector, ProgramLevel, Record};
use kolosis_scraper::{CatalogFetcher, PortalClient};

use crate::OutputFormat;

pub(crate) struct FetchArgs {
    pub level: ProgramLevel,
    pub faculty: FacultyCode,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub concurrency: Option<usize>,
}

/// Fetches one catalog section and writes it to disk.
///
/// # Errors
///
/// Returns an error if the selector is not offered, login or a listing
/// fetch fails, or the output file cannot be written. Detail-page failures
/// only degrade the affected records.
pub(crate) async fn run_fetch(config: &AppConfig, args: FetchArgs) -> anyhow::Result<()> {
    let selector = FacultySelector::new(args.level, args.faculty)?;
    let concurrency = args.concurrency.unwrap_or(config.detail_concurrency);
    let output = args
        .output
        .unwrap_or_else(|| default_output_path(&selector, args.format));

    tracing::info!(
        %selector,
        name = selector.display_name(),
        concurrency,
        output = %output.display(),
        "starting catalog fetch"
    );

    let client = PortalClient::from_config(config)?;
    let fetcher = CatalogFetcher::new(client, selector).with_detail_concurrency(concurrency);
    let (records, summary) = fetcher.fetch_with_summary(&config.credentials).await?;

    write_records(&output, &records, args.format)?;

    println!(
        "{selector} ({}): {} records over {} pages, {} rows skipped, {} without detail -> {}",
        selector.display_name(),
        summary.rows_emitted,
        summary.pages_fetched,
        summary.rows_skipped,
        summary.degraded_details,
        output.display()
    );
    Ok(())
}

pub(crate) fn default_output_path(selector: &FacultySelector, format: OutputFormat) -> PathBuf {
    let yml = PathBuf::from(selector.output_file_name());
    match format {
        OutputFormat::Yaml => yml,
        OutputFormat::Json => yml.with_extension("json"),
    }
}

pub(crate) fn render_records(records: &[Record], format: OutputFormat) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Yaml => serde_yaml::to_string(records)?,
        OutputFormat::Json => serde_json::to_string_pretty(records)?,
    };
    Ok(rendered)
}

fn write_records(path: &Path, records: &[Record], format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render_records(records, format)?;
    std::fs::write(path, rendered)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

pub(crate) fn print_faculties() {
    println!("code     graduate (g)                 undergraduate (u)");
    for faculty in FacultyCode::ALL {
        let g = faculty.display_name(ProgramLevel::Graduate).unwrap_or("-");
        let u = faculty
            .display_name(ProgramLevel::Undergraduate)
            .unwrap_or("-");
        println!("{:<8} {g:<28} {u}", faculty.code());
    }
}
