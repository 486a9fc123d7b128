mod cli;
mod config;
mod error;
mod estimator;
mod jira_client;
mod models;

use clap::Parser;
use cli::Cli;
use config::JiraConfig;
use error::EstimatorError;
use estimator::{estimate_epic, Estimate};
use jira_client::{BlockingTransport, JiraClient, Transport};
use std::env::{self, VarError};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = run_with(|key| env::var(key), BlockingTransport::new, &cli.epic_issue);
    report(result).emit()
}

#[derive(Debug, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// What the process prints, where, and the status it exits with.
#[derive(Debug, PartialEq, Eq)]
struct Report {
    stream: Stream,
    message: String,
    exit_code: u8,
}

impl Report {
    fn emit(&self) -> ExitCode {
        match self.stream {
            Stream::Stdout => println!("{}", self.message),
            Stream::Stderr => eprintln!("{}", self.message),
        }
        ExitCode::from(self.exit_code)
    }
}

/// Configuration and connection failures go to stdout with status 1, faults to stderr with status 2.
fn report(result: Result<Estimate, EstimatorError>) -> Report {
    match result {
        Ok(estimate) => Report {
            stream: Stream::Stdout,
            message: estimate.to_string(),
            exit_code: 0,
        },
        Err(e) if e.is_recognized() => Report {
            stream: Stream::Stdout,
            message: e.to_string(),
            exit_code: 1,
        },
        Err(e) => Report {
            stream: Stream::Stderr,
            message: format!("Error: {}", e),
            exit_code: 2,
        },
    }
}

/// Loads the configuration first; the transport is only created once it is complete.
fn run_with<F, T, M>(lookup: F, make_transport: M, epic_issue: &str) -> Result<Estimate, EstimatorError>
where
    F: Fn(&str) -> Result<String, VarError>,
    T: Transport,
    M: FnOnce() -> Result<T, reqwest::Error>,
{
    let config = JiraConfig::from_lookup(lookup)?;
    let client = JiraClient::new(config, make_transport()?);
    estimate_epic(&client, epic_issue)
}
