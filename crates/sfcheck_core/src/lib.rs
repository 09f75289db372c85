//! # sfcheck_core
//!
//! Orchestration layer for the batch source-quality check:
//! - File selection (explicit list or directory scan with exclusions)
//! - Strict-dialect classification
//! - Document loading
//! - The sequential validation loop with its early-exit policy
//! - Human-readable diagnostic reporting and the final run outcome
//!
//! ## Example
//!
//! ```rust,ignore
//! use sfcheck_core::{RunController, RunOptions};
//!
//! let options = RunOptions::new("/path/to/workspace").fail_fast(true);
//! let outcome = RunController::new(options).execute(std::io::stdout().lock())?;
//! std::process::exit(if outcome.success { 0 } else { 1 });
//! ```

mod classifier;
mod config;
mod error;
mod loader;
mod progress;
mod reporter;
mod runner;
mod selector;
mod validator;

pub use classifier::SourceClassifier;
pub use config::RunOptions;
pub use error::CheckError;
pub use loader::{DocumentLoader, FileRecord};
pub use progress::Progress;
pub use reporter::DiagnosticReporter;
pub use runner::{RunController, RunOutcome};
pub use selector::FileSelector;
pub use validator::{RunAccumulator, ValidationOrchestrator};

pub use sfcheck_document::{Diagnostic, Document, Position, Range};
