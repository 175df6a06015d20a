// Copyright (c) 2026 the flightcd authors
// SPDX-License-Identifier: MIT

//! Flight module resolution and evaluation.
//!
//! A "flight" is a WASM module whose execution produces the resource
//! manifests for one application. This module covers the path from validated
//! [`FlightParameters`](crate::config::FlightParameters) to raw flight
//! output:
//!
//! * [`resolve`] picks the module to run: a caller-supplied prebuilt path, or
//!   a freshly built artifact with scoped cleanup.
//! * [`FlightEngine`] is the seam the pipeline evaluates through; tests stub
//!   it, production uses [`WasiFlightEngine`].

mod build;
mod error;
mod resolver;
mod wasi;

pub use build::build_flight;
pub use error::{BuildError, FlightError};
pub use resolver::{resolve, ResolvedModule};
pub use wasi::WasiFlightEngine;

use std::path::PathBuf;

/// One evaluation request handed to a flight engine.
#[derive(Debug, Clone)]
pub struct EvalRequest {
    /// Filesystem location of the module to execute.
    pub module_path: PathBuf,
    /// Payload presented to the flight on its stdin.
    pub input: Vec<u8>,
    /// Positional arguments forwarded to the flight.
    pub args: Vec<String>,
    /// Namespace of the application being rendered.
    pub namespace: String,
}

/// Executes a flight module and returns its raw output bytes.
///
/// The call is synchronous and carries no timeout of its own; any
/// cancellation policy belongs to the engine implementation.
pub trait FlightEngine {
    fn evaluate(&self, app_name: &str, request: &EvalRequest) -> Result<Vec<u8>, FlightError>;
}
