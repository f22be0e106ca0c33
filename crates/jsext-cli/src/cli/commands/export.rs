//! `jsext export <har>` – export in-scope JavaScript assets to a directory.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use jsext_core::config::JsextConfig;
use jsext_core::export::{export, ExportOutcome};
use jsext_core::har;
use jsext_core::scan::Batch;
use jsext_core::scope::ScopeOracle;

pub fn run_export(
    har_path: &Path,
    dir: Option<PathBuf>,
    cfg: &JsextConfig,
    scope: &dyn ScopeOracle,
) -> Result<()> {
    let dest = dir
        .or_else(|| cfg.export_dir.clone())
        .context("no destination directory: pass --dir or set export_dir in the config")?;
    anyhow::ensure!(
        dest.is_dir(),
        "destination is not an existing directory: {}",
        dest.display()
    );

    let mut batch = Batch::new();
    batch.rescan(har::load_har(har_path)?, scope);

    match export(&batch, &dest) {
        ExportOutcome::NothingToExport => {
            println!("No JavaScript files to export.");
        }
        ExportOutcome::Done(result) => {
            println!("Stats:");
            println!("  Total JS files:        {}", result.total);
            println!("  In-scope files:        {}", result.in_scope);
            println!("  Successfully exported: {}", result.exported);
            println!("  Duplicates renamed:    {}", result.duplicates);
            println!("  Errors during export:  {}", result.errors);
            for failure in &result.failures {
                println!("  error exporting {}: {}", failure.url, failure.message);
            }
        }
    }
    Ok(())
}
