//! `jsext scan <har>` – list JavaScript assets in a capture.

use anyhow::Result;
use std::path::Path;

use jsext_core::har;
use jsext_core::scan::Batch;
use jsext_core::scope::ScopeOracle;

pub fn run_scan(har_path: &Path, scope: &dyn ScopeOracle, all: bool) -> Result<()> {
    let mut batch = Batch::new();
    batch.rescan(har::load_har(har_path)?, scope);

    let shown: Vec<_> = batch
        .candidates()
        .iter()
        .filter(|c| all || c.in_scope)
        .collect();

    if shown.is_empty() {
        if all {
            println!("No JavaScript files found in {}.", har_path.display());
        } else {
            println!(
                "No in-scope JavaScript files found in {}.",
                har_path.display()
            );
        }
        return Ok(());
    }

    println!("{:<4} {:<7} {:<12} {:<9} URL", "#", "STATUS", "SIZE", "SCOPE");
    for (i, c) in shown.iter().enumerate() {
        println!(
            "{:<4} {:<7} {:<12} {:<9} {}",
            i + 1,
            c.status,
            c.size,
            if c.in_scope { "yes" } else { "no" },
            c.url
        );
    }
    println!(
        "{} JavaScript file(s) shown ({} matched, {} in scope).",
        shown.len(),
        batch.len(),
        batch.in_scope_count()
    );
    Ok(())
}
