// Copyright (c) 2026 the flightcd authors
// SPDX-License-Identifier: MIT

use std::io::{self, Write};
use std::process::ExitCode;

use flightcd::config::load_config;
use flightcd::encode::{encode_resources, EncodeError};
use flightcd::errors::Error;
use flightcd::flight::WasiFlightEngine;
use flightcd::pipeline;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // All diagnostics go to stderr; stdout carries only the resource stream.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Error> {
    let cfg = load_config()?;
    let engine = WasiFlightEngine::new();

    let data = pipeline::run(&cfg, &engine)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    encode_resources(&mut out, &data)?;
    out.flush().map_err(|err| Error::Encode(EncodeError::Sink(err)))?;

    Ok(())
}
