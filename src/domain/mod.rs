//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep catalog/result/output structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — catalog records, classification results, layout plan, views.
//! - `constants.rs` — stable constants (code alphabet, tip categories, share URL).
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/terminal side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs and integration contracts.
//! Keep schema-impacting changes explicit and synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
