//! Service layer containing the core logic and side-effect helpers.
//!
//! ## Service map
//! - `compat.rs` — tier classification + trait overlap between two codes.
//! - `content.rs` — tips/deep-analysis resolution, share-text composition.
//! - `layout.rs` — summary-card draw plan (palette, word wrap, circles).
//! - `settings.rs` — optional TOML config (render/gate/tips knobs).
//! - `storage.rs` — saved-selection slot + audit log.
//! - `output.rs` — JSON/text output envelope helpers.
//!
//! ## Conventions
//! - Core resolution (`compat`, `content`, `layout`) is pure given the catalog.
//! - Side effects should be explicit and localized (`storage`, `output`).
//! - Keep command handlers thin; delegate to services.

pub mod compat;
pub mod content;
pub mod layout;
pub mod output;
pub mod settings;
pub mod storage;
