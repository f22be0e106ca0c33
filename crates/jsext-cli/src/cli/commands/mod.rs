//! CLI command handlers. Each command is in its own file for clarity.

mod completions;
mod export;
mod scan;

pub use completions::run_completions;
pub use export::run_export;
pub use scan::run_scan;
