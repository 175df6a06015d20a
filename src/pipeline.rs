// Copyright (c) 2026 the flightcd authors
// SPDX-License-Identifier: MIT

//! The resolve → evaluate pipeline.
//!
//! Strictly linear and synchronous: the module is resolved, the flight
//! engine runs it, and the raw output is handed back for encoding. No stage
//! starts before its predecessor succeeds, and nothing is retried.

use crate::config::Config;
use crate::errors::Error;
use crate::flight::{self, EvalRequest, FlightEngine};

/// Resolve the flight module and evaluate it, returning the raw output.
///
/// The resolved module is held across the evaluation so a built artifact is
/// removed once evaluation finishes, on success and on every error path
/// alike. Build and evaluation failures both surface as
/// [`Error::Flight`](crate::errors::Error::Flight).
pub fn run(cfg: &Config, engine: &dyn FlightEngine) -> Result<Vec<u8>, Error> {
    let module = flight::resolve(&cfg.flight)?;

    tracing::debug!(path = %module.path().display(), "loading wasm");

    let request = EvalRequest {
        module_path: module.path().to_path_buf(),
        input: cfg.flight.input.clone().into_bytes(),
        args: cfg.flight.args.clone(),
        namespace: cfg.application.namespace.clone(),
    };

    let data = engine.evaluate(&cfg.application.name, &request)?;
    Ok(data)
}
