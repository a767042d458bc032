//! fidmap: look up Motr process fids for cluster services
//!
//! Reads the cluster's key-value snapshot, rebuilds the node/service
//! topology and prints the fids for one node, one service family or the
//! whole cluster.

#![forbid(unsafe_code)]

mod args;
mod error;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use fidmap_config::Config;
use fidmap_query::{
    render_records, render_topology, CurrentHostProvider, FixedHost, OutputFormat, QueryEngine, SystemHost,
};
use fidmap_topology::{build_topology, Snapshot};

use crate::args::Cli;
use crate::error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = Config::load(cli.config.as_deref())?;
    logging::init(&config.logging.level, cli.verbose);

    let snapshot_path = cli.snapshot.as_ref().unwrap_or(&config.snapshot.path);
    let snapshot = Snapshot::from_file(snapshot_path)?;
    let topology = build_topology(&snapshot)?;

    let host: Box<dyn CurrentHostProvider> = match config.host.name {
        Some(name) => Box::new(FixedHost(name)),
        None => Box::new(SystemHost),
    };
    let engine = QueryEngine::new(&topology, host);
    let format = if cli.json { OutputFormat::Json } else { OutputFormat::Text };

    if cli.all {
        print!("{}", render_topology(engine.query_all(), format));
        return Ok(());
    }

    let service = cli.service.map(|family| family.as_str());
    match engine.query_single(cli.node.as_deref(), service) {
        Ok(records) => print!("{}", render_records(&records, format)),
        Err(miss) => eprintln!("{}", miss),
    }
    Ok(())
}
