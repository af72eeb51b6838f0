//! Form vocabulary: the declaration's data types and fixed values.
//!
//! ## Files
//! - `models.rs` — field kinds and values, visibility gates, rule rows,
//!   drafts, resolved submissions, issues, summaries and CLI reports.
//! - `constants.rs` — field ids, option lists, accepted extensions and the
//!   messages collaborators see.
//!
//! Nothing here reads files or evaluates rules; `services/*` interprets these
//! tables. `Serialize` shapes here are what `--json` prints, and
//! `docs/contracts/*.schema.json` pins them.

pub mod constants;
pub mod models;
