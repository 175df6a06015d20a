// Copyright (c) 2026 the flightcd authors
// SPDX-License-Identifier: MIT

use crate::config::FlightParameters;
use crate::flight::error::{BuildError, FlightError};
use crate::flight::build::build_flight;
use std::path::{Path, PathBuf};
use tempfile::TempPath;

/// A flight module ready for evaluation.
///
/// The two variants carry deliberately different ownership: a prebuilt module
/// path belongs to the caller and is never deleted, while a built artifact
/// has no other owner and is removed when this value drops. Holding the
/// `ResolvedModule` across evaluation is what guarantees the artifact
/// survives exactly as long as it is needed and no longer, on every exit
/// path.
#[derive(Debug)]
pub enum ResolvedModule {
    /// Externally owned module; never deleted by this process.
    Prebuilt(PathBuf),
    /// Single-use build artifact; the file is removed on drop.
    Built(TempPath),
}

impl ResolvedModule {
    /// Location of the module on disk.
    pub fn path(&self) -> &Path {
        match self {
            ResolvedModule::Prebuilt(path) => path,
            ResolvedModule::Built(path) => path,
        }
    }
}

/// Resolve the flight parameters to a concrete module on disk.
///
/// In build mode the module is compiled from the current working directory
/// into a scoped temporary artifact; see [`build_flight`]. Otherwise the
/// configured module path is returned as-is.
pub fn resolve(params: &FlightParameters) -> Result<ResolvedModule, FlightError> {
    resolve_with(params, build_flight)
}

fn resolve_with<B>(params: &FlightParameters, builder: B) -> Result<ResolvedModule, FlightError>
where
    B: FnOnce(&Path) -> Result<(), BuildError>,
{
    if !params.build {
        return Ok(ResolvedModule::Prebuilt(PathBuf::from(&params.wasm)));
    }

    tracing::debug!("building wasm");

    let artifact = tempfile::Builder::new()
        .prefix("flight.")
        .suffix(".wasm")
        .tempfile()
        .map_err(BuildError::TempFile)?
        .into_temp_path();

    // On error the artifact drops here, removing the partial file.
    builder(&artifact)?;

    Ok(ResolvedModule::Built(artifact))
}
