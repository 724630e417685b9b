use std::io::Write;

use anyhow::Context;

use crate::dispatch::read_package;
use crate::report::Summary;
use crate::storage::Package;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render_summary(summary: &Summary, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => summary.message(),
        OutputFormat::Json => serde_json::to_string(summary)?,
    })
}

/// Dispatch every package and write one rendered summary per line.
/// Stops at the first package that fails.
pub fn run_packages<W: Write>(
    packages: &[Package],
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    for (i, pkg) in packages.iter().enumerate() {
        let summary = read_package(&pkg.code, &pkg.params)
            .and_then(|w| w.summary())
            .with_context(|| format!("package #{} ({})", i, pkg.code))?;
        writeln!(out, "{}", render_summary(&summary, format)?)?;
    }
    Ok(())
}
