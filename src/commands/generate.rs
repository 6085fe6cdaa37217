//! Generate head fragments for all content

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::generator::{GenerateReport, Generator};
use crate::Pressmark;

/// Load content and write the public output
pub fn run(site: &Pressmark) -> Result<()> {
    run_with_report(site).map(|_| ())
}

pub fn run_with_report(site: &Pressmark) -> Result<GenerateReport> {
    let start = std::time::Instant::now();

    let records = ContentLoader::new(site).load_records()?;
    tracing::info!("Loaded {} records", records.len());

    let report = Generator::new(site).generate(&records)?;
    if report.skipped > 0 {
        tracing::warn!("Skipped {} records without a path", report.skipped);
    }

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} head fragments in {:.2}s",
        report.written,
        duration.as_secs_f64()
    );

    Ok(report)
}
