//! # sfcheck_document
//!
//! Shared value types for sfcheck:
//! - `Document` — an in-memory single-file component with a line table
//! - `Position` / `Range` — zero-based line/character coordinates
//! - `Diagnostic` — findings reported by validators
//! - `ScriptRegion` — the `<script>`-only sub-view of a component

mod diagnostic;
mod document;
mod position;
mod region;

pub use diagnostic::Diagnostic;
pub use document::{Document, INITIAL_VERSION};
pub use position::{Position, Range};
pub use region::ScriptRegion;
