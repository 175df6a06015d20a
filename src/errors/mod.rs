// Copyright (c) 2026 the flightcd authors
// SPDX-License-Identifier: MIT

mod config;

pub use config::ConfigError;

use thiserror::Error;

/// Top-level error for a single adapter run.
///
/// Every failure bubbles up to this enum unchanged; there is no retry or
/// fallback anywhere in the pipeline. The variants mirror the pipeline stages:
/// configuration, flight build/evaluation, and resource encoding.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration failure: missing environment input or a malformed
    /// parameter document.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Build or evaluation failure, spanning module resolution through
    /// execution of the flight.
    #[error("failed to execute flight wasm: {0}")]
    Flight(#[from] crate::flight::FlightError),

    /// Failure decoding the flight output or writing the resource stream.
    #[error(transparent)]
    Encode(#[from] crate::encode::EncodeError),
}
