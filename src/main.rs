use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod domain;
mod esg;
mod schema;
mod services;

pub use cli::{Cli, Commands};
pub use commands::Session;
pub use domain::models::*;
pub use esg::{confirmation_lines, esg_declaration};
pub use services::derive::{derive_submission, parse_cli};
pub use services::model::FormModel;
pub use services::output::{
    print_error, print_one, print_rejected, print_rows, print_status, SUBMISSION_REJECTED,
};
pub use services::rules::{is_blocked, validate};
pub use services::storage::{read_draft, write_json};
pub use services::summary::display_value;

fn init_tracing(verbose: bool) {
    let filter = if verbose { "esgform=debug" } else { "warn" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = services::config::load_config(cli.config.as_deref())?;
    let session = Session {
        json: cli.json || config.general.json,
        currency: config.general.currency,
    };
    tracing::debug!(command = ?cli.command, json = session.json, "dispatch");

    if commands::handle_draft_commands(cli, &session)? {
        return Ok(());
    }
    commands::handle_form_commands(cli, &session)
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        tracing::debug!(error = ?err, "command failed");
        print_error(cli.json, &err);
        std::process::exit(2);
    }
}
