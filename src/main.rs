mod application;
mod domain;
mod infrastructure;
mod presentation;

use crate::infrastructure::console::ConsolePrompter;
use crate::infrastructure::http_client::HyperHttpClient;
use crate::presentation::cli::{Cli, normalize_args};
use clap::Parser;
use std::io;

/// wirecall: one HTTP request from flags or prompts
///
/// Any of protocol, URL, request type, basic auth, headers and body that is
/// not given as a flag is asked for interactively, then a single request is
/// sent and the response body printed. Request failures are printed too and
/// do not change the exit status.
#[tokio::main]
async fn main() {
    let cli = Cli::parse_from(normalize_args(std::env::args()));
    let config = cli.config();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(config.log_level())
        .init();

    let request_service = match HyperHttpClient::new() {
        Ok(client) => client.create_request_service(),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    let mut prompter = ConsolePrompter::stdio();
    if let Err(err) = cli.run(&request_service, &mut prompter, &mut io::stdout()).await {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
