//! CLI for the jsext JavaScript asset extractor.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use jsext_core::config::{self, JsextConfig};
use jsext_core::scope::{AllowAll, PrefixScope, ScopeOracle};

use commands::{run_completions, run_export, run_scan};

/// Top-level CLI for the jsext extractor.
#[derive(Debug, Parser)]
#[command(name = "jsext")]
#[command(about = "jsext: extract JavaScript assets from captured HTTP traffic", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Scan a HAR capture and list the JavaScript assets found.
    Scan {
        /// Path to the HAR file.
        har: PathBuf,

        /// Scope prefix (repeatable). Overrides configured scope_prefixes.
        #[arg(long = "scope", value_name = "PREFIX")]
        scope: Vec<String>,

        /// List every match, not only in-scope ones.
        #[arg(long)]
        all: bool,
    },

    /// Scan a HAR capture and export in-scope JavaScript assets to a directory.
    Export {
        /// Path to the HAR file.
        har: PathBuf,

        /// Destination directory (must already exist). Defaults to the
        /// configured export_dir.
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Scope prefix (repeatable). Overrides configured scope_prefixes.
        #[arg(long = "scope", value_name = "PREFIX")]
        scope: Vec<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Pick the scope oracle: CLI flags win, then the config, then allow-all.
fn scope_oracle(flags: Vec<String>, cfg: &JsextConfig) -> Box<dyn ScopeOracle> {
    let prefixes = if flags.is_empty() {
        cfg.scope_prefixes.clone()
    } else {
        flags
    };
    if prefixes.is_empty() {
        Box::new(AllowAll)
    } else {
        Box::new(PrefixScope::new(prefixes))
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Scan { har, scope, all } => {
                run_scan(&har, scope_oracle(scope, &cfg).as_ref(), all)?;
            }
            CliCommand::Export { har, dir, scope } => {
                run_export(&har, dir, &cfg, scope_oracle(scope, &cfg).as_ref())?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}
