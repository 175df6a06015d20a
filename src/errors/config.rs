// Copyright (c) 2026 the flightcd authors
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors produced while binding and validating the adapter configuration.
///
/// Every variant carries the `invalid config` prefix so configuration failures
/// are distinguishable from build, evaluation, and encoding failures by
/// message alone.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required environment variables were absent or empty.
    #[error("invalid config: missing required environment variable(s): {0}")]
    MissingEnvironment(String),

    /// The `build` parameter was present but not a recognized boolean token.
    #[error("invalid config: parsing parameter build: invalid boolean token {0:?}")]
    InvalidBuildFlag(String),

    /// Neither a `wasm` module path nor `build: true` was supplied.
    #[error("invalid config: wasm parameter must be provided or build enabled")]
    MissingModuleSource,

    /// Both a `wasm` module path and `build: true` were supplied.
    #[error("invalid config: wasm asset cannot be present and build enabled")]
    ConflictingModuleSource,

    /// The parameter document itself failed to decode.
    #[error("invalid config: {0}")]
    MalformedParameters(#[from] serde_yaml::Error),
}
