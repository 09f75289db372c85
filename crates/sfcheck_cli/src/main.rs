//! sfcheck CLI
//!
//! Batch source-quality checks for single-file UI components.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::error;
use tracing_subscriber::EnvFilter;

use sfcheck_core::{RunController, RunOptions, RunOutcome};

/// sfcheck - batch diagnostics for single-file components
#[derive(Parser)]
#[command(name = "sfcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a workspace and report template and script defects
    Check {
        /// Workspace root used to resolve cross-file references
        workspace: PathBuf,

        /// Explicit files to check, bypassing the directory scan
        files: Vec<PathBuf>,

        /// Directory to scan for sources (defaults to the workspace root)
        #[arg(long)]
        src_dir: Option<PathBuf>,

        /// Validate template interpolations only
        #[arg(long)]
        only_template: bool,

        /// Check only strict-dialect (TypeScript) sources
        #[arg(long)]
        only_typescript: bool,

        /// Directory excluded from the scan (repeatable)
        #[arg(long)]
        exclude_dir: Vec<PathBuf>,

        /// Exit after the first file with errors
        #[arg(long)]
        fail_exit: bool,

        /// Suppress the per-file progress ticker on stderr
        #[arg(long)]
        no_progress: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(outcome) => {
            if outcome.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            // Partial output already printed stays visible; the failed run
            // still maps to the failure exit code.
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<RunOutcome> {
    match cli.command {
        Commands::Check {
            workspace,
            files,
            src_dir,
            only_template,
            only_typescript,
            exclude_dir,
            fail_exit,
            no_progress,
        } => {
            let workspace = workspace
                .canonicalize()
                .into_diagnostic()
                .wrap_err("Invalid workspace directory")?;

            let mut options = RunOptions::new(workspace)
                .template_only(only_template)
                .strict_only(only_typescript)
                .fail_fast(fail_exit)
                .progress(!no_progress)
                .explicit_files(files);
            if let Some(src_dir) = src_dir {
                let src_dir = src_dir
                    .canonicalize()
                    .into_diagnostic()
                    .wrap_err("Invalid source directory")?;
                options = options.source_root(src_dir);
            }
            for dir in exclude_dir {
                options = options.exclude_dir(dir);
            }

            let stdout = std::io::stdout();
            RunController::new(options)
                .execute(stdout.lock())
                .into_diagnostic()
        }
    }
}
