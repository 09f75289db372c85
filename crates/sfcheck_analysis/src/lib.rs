//! # sfcheck_analysis
//!
//! Diagnostic producers for sfcheck. Two independent validators implement
//! the [`DiagnosticProducer`] trait:
//!
//! - [`TemplateValidator`] — checks `{{ … }}` interpolations in the
//!   template section; applicable to every document.
//! - [`ScriptValidator`] — checks the embedded script region; reports
//!   itself as not applicable for documents without an inline script.
//!
//! Both are heuristic checkers working on raw text; they stand behind the
//! same narrow trait a full type-checking engine would, so swapping one in
//! touches no orchestration code.

mod bindings;
mod error;
mod producer;
mod script;
mod template;

pub use bindings::ScriptBindings;
pub use error::AnalysisError;
pub use producer::{DiagnosticProducer, RegionCache};
pub use script::ScriptValidator;
pub use template::TemplateValidator;
