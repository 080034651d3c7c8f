#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! wikijs — manage Wiki.js documentation pages over GraphQL.

mod cli;
mod commands;
mod config;
mod graphql;
mod logging;
mod types;
mod wiki;

use clap::Parser;

use cli::{Cli, OutputCtx, write_error};
use config::Config;
use types::ErrorOutput;
use wiki::{WikiClient, WikiError};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = logging::init(cli.debug) {
        eprintln!("warning: {err:#}");
    }

    let ctx = OutputCtx::new(cli.output, cli.json);

    if let Err(err) = run(&cli, &ctx) {
        tracing::debug!(error = ?err, "command failed");
        write_error(&ErrorOutput::from_wiki_error(&err), cli.output, cli.json);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, ctx: &OutputCtx) -> Result<(), WikiError> {
    let config = Config::new(&cli.url, cli.token.as_deref(), cli.timeout)?;
    let client = WikiClient::connect(&config)?;
    commands::dispatch(&cli.command, &client, ctx)
}
