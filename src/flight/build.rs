// Copyright (c) 2026 the flightcd authors
// SPDX-License-Identifier: MIT

use crate::flight::error::BuildError;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

const COMPILER: &str = "cargo";
const WASM_TARGET: &str = "wasm32-wasip1";

/// Compile the flight in the current working directory into `output`.
///
/// Invokes `cargo build --release --target wasm32-wasip1` with a throwaway
/// target directory and copies the produced module to `output`. Compiler
/// stdout and stderr both land on this process's stderr; stdout stays
/// reserved for the resource stream.
pub fn build_flight(output: &Path) -> Result<(), BuildError> {
    let target_dir = tempfile::tempdir().map_err(BuildError::TempDir)?;

    let compile = Command::new(COMPILER)
        .args(["build", "--release", "--target", WASM_TARGET, "--target-dir"])
        .arg(target_dir.path())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .output()
        .map_err(|source| BuildError::Spawn {
            compiler: COMPILER,
            source,
        })?;

    // Anything cargo printed on stdout is diagnostic here, not output.
    let _ = io::stderr().write_all(&compile.stdout);

    if !compile.status.success() {
        return Err(BuildError::CompilerFailed {
            compiler: COMPILER,
            status: compile.status,
        });
    }

    let release_dir = target_dir.path().join(WASM_TARGET).join("release");
    let artifact = find_wasm_artifact(&release_dir)?;

    fs::copy(&artifact, output)
        .map(|_| ())
        .map_err(|source| BuildError::PlaceArtifact {
            path: output.to_path_buf(),
            source,
        })
}

fn find_wasm_artifact(dir: &Path) -> Result<PathBuf, BuildError> {
    let entries = fs::read_dir(dir).map_err(|_| BuildError::MissingArtifact {
        dir: dir.to_path_buf(),
    })?;

    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "wasm") {
            return Ok(path);
        }
    }

    Err(BuildError::MissingArtifact {
        dir: dir.to_path_buf(),
    })
}
