//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs` — list/select/show/match/compare/tips/analysis/card/share/validate.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate resolution logic to `services/*` and `catalog`.
//! - Keep behavior and output schema stable.

pub mod runtime;

pub use runtime::handle_commands;
