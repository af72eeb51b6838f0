//! Service layer containing form logic and side-effect helpers.
//!
//! ## Service map
//! - `visibility.rs` — single-level visibility predicate interpreter.
//! - `derive.rs` — raw value checks and pure draft → submission derivation.
//! - `rules.rs` — rule table interpreter producing errors and warnings.
//! - `summary.rs` — summary record, section totals, submission reference.
//! - `model.rs` — `FormModel`: values, visibility, validate, summarize, submit.
//! - `config.rs` — TOML configuration loading.
//! - `storage.rs` — draft reading and JSON file writing.
//! - `output.rs` — JSON/text output helpers and error codes.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized (`storage.rs`, `output.rs`).
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod derive;
pub mod model;
pub mod output;
pub mod rules;
pub mod storage;
pub mod summary;
pub mod visibility;
