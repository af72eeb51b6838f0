//! CLI handlers, one function per group of subcommands.
//!
//! - `draft.rs` — `fill`: load a draft, apply `--set` edits through the
//!   form model, toggle confirmation, write the result.
//! - `form.rs` — `schema`, `visibility`, `validate`, `summarize`, `submit`.
//!
//! Each handler returns `Ok(false)` for commands it does not own. Form
//! behaviour lives in `services/*`; handlers only load drafts and print.

pub mod draft;
pub mod form;

pub use draft::handle_draft_commands;
pub use form::handle_form_commands;

/// Settings resolved from flags and the config file.
pub struct Session {
    pub json: bool,
    pub currency: String,
}
