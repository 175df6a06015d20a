// Copyright (c) 2026 the flightcd authors
// SPDX-License-Identifier: MIT

//! Error types for flight resolution, build, and evaluation.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors from compiling a flight out of local source.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Could not acquire a temporary location for the build artifact.
    #[error("failed to create temp file for wasm artifact: {0}")]
    TempFile(#[source] io::Error),

    /// Could not acquire the throwaway target directory for the compiler.
    #[error("failed to create temp target dir for build: {0}")]
    TempDir(#[source] io::Error),

    /// The compiler process could not be started at all.
    #[error("failed to invoke {compiler}: {source}")]
    Spawn {
        compiler: &'static str,
        #[source]
        source: io::Error,
    },

    /// The compiler ran and reported failure.
    #[error("{compiler} exited with {status}")]
    CompilerFailed {
        compiler: &'static str,
        status: ExitStatus,
    },

    /// The build succeeded but produced no wasm artifact where expected.
    #[error("no wasm artifact found under {dir}")]
    MissingArtifact { dir: PathBuf },

    /// The produced artifact could not be moved to its temporary location.
    #[error("failed to place wasm artifact at {path}: {source}")]
    PlaceArtifact {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors from resolving or executing a flight module.
///
/// `wasmtime` reports failures as `wasmtime::Error` (an `anyhow` error), so
/// those variants carry it by value for display rather than as a typed source.
#[derive(Debug, Error)]
pub enum FlightError {
    /// Building the module from local source failed.
    #[error("failed to build binary: {0}")]
    Build(#[from] BuildError),

    /// The module file could not be read.
    #[error("failed to read wasm module {path}: {source}")]
    ReadModule {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The module bytes failed wasmtime compilation.
    #[error("failed to compile wasm module: {0}")]
    Compile(wasmtime::Error),

    /// The WASI imports could not be linked.
    #[error("failed to link wasi imports: {0}")]
    Linker(wasmtime::Error),

    /// The module could not be instantiated.
    #[error("failed to instantiate flight module: {0}")]
    Instantiate(wasmtime::Error),

    /// The module exports no `_start` entry point.
    #[error("flight module has no _start entry point: {0}")]
    MissingEntryPoint(wasmtime::Error),

    /// The flight terminated with a nonzero exit status.
    #[error("flight exited with status {0}")]
    ExitStatus(i32),

    /// The flight trapped during execution.
    #[error("flight module trapped: {0}")]
    Trap(wasmtime::Error),
}
