// Copyright (c) 2026 the flightcd authors
// SPDX-License-Identifier: MIT

//! WASI Preview 1 flight engine.
//!
//! Flights are classic WASI command modules: they read their input payload
//! from stdin, receive positional arguments through argv and the target
//! namespace through the `NAMESPACE` environment variable, and write their
//! resource manifests to stdout. Stderr passes through to the host so flight
//! diagnostics stay visible without touching the contractual output stream.

use crate::flight::error::FlightError;
use crate::flight::{EvalRequest, FlightEngine};
use wasmtime::{Engine, Linker, Store};
use wasmtime_wasi::pipe::{MemoryInputPipe, MemoryOutputPipe};
use wasmtime_wasi::preview1::{self, WasiP1Ctx};
use wasmtime_wasi::{I32Exit, WasiCtxBuilder};

/// Upper bound on captured flight stdout. Manifest streams are small; this
/// only exists so a runaway flight cannot exhaust host memory.
const STDOUT_CAPACITY: usize = 64 * 1024 * 1024;

/// Environment variable exposing the application namespace to the flight.
const NAMESPACE_VAR: &str = "NAMESPACE";

/// Flight engine backed by wasmtime's WASI Preview 1 support.
///
/// A fresh store, WASI context, and instance are created per evaluation, so
/// one engine can serve any number of modules without state bleeding between
/// runs.
pub struct WasiFlightEngine {
    engine: Engine,
}

impl WasiFlightEngine {
    pub fn new() -> Self {
        Self {
            engine: Engine::default(),
        }
    }
}

impl Default for WasiFlightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FlightEngine for WasiFlightEngine {
    fn evaluate(&self, app_name: &str, request: &EvalRequest) -> Result<Vec<u8>, FlightError> {
        let bytes = std::fs::read(&request.module_path).map_err(|source| {
            FlightError::ReadModule {
                path: request.module_path.clone(),
                source,
            }
        })?;
        let module = wasmtime::Module::new(&self.engine, &bytes).map_err(FlightError::Compile)?;

        let mut linker: Linker<WasiP1Ctx> = Linker::new(&self.engine);
        preview1::add_to_linker_sync(&mut linker, |ctx| ctx).map_err(FlightError::Linker)?;

        // argv[0] is the application name, per the usual command convention.
        let mut argv = Vec::with_capacity(request.args.len() + 1);
        argv.push(app_name.to_string());
        argv.extend(request.args.iter().cloned());

        let stdout = MemoryOutputPipe::new(STDOUT_CAPACITY);
        let wasi = WasiCtxBuilder::new()
            .stdin(MemoryInputPipe::new(request.input.clone()))
            .stdout(stdout.clone())
            .inherit_stderr()
            .args(&argv)
            .env(NAMESPACE_VAR, &request.namespace)
            .build_p1();

        let mut store = Store::new(&self.engine, wasi);
        let instance = linker
            .instantiate(&mut store, &module)
            .map_err(FlightError::Instantiate)?;
        let start = instance
            .get_typed_func::<(), ()>(&mut store, "_start")
            .map_err(FlightError::MissingEntryPoint)?;

        if let Err(trap) = start.call(&mut store, ()) {
            match trap.downcast_ref::<I32Exit>() {
                // proc_exit(0) traps out of _start but is a clean exit.
                Some(I32Exit(0)) => {}
                Some(I32Exit(status)) => return Err(FlightError::ExitStatus(*status)),
                None => return Err(FlightError::Trap(trap)),
            }
        }

        drop(store);
        Ok(stdout.contents().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    /// Minimal WASI command that writes "hello" to stdout via fd_write.
    const HELLO_WAT: &str = r#"
        (module
          (import "wasi_snapshot_preview1" "fd_write"
            (func $fd_write (param i32 i32 i32 i32) (result i32)))
          (memory (export "memory") 1)
          (data (i32.const 8) "hello")
          (func (export "_start")
            (i32.store (i32.const 0) (i32.const 8))  ;; iov. base
            (i32.store (i32.const 4) (i32.const 5))  ;; iov. len
            (drop (call $fd_write
              (i32.const 1)    ;; stdout
              (i32.const 0)    ;; *iovs
              (i32.const 1)    ;; iovs_len
              (i32.const 20))) ;; nwritten
          )
        )
    "#;

    const EXIT_3_WAT: &str = r#"
        (module
          (import "wasi_snapshot_preview1" "proc_exit" (func $exit (param i32)))
          (memory (export "memory") 1)
          (func (export "_start") (call $exit (i32.const 3)))
        )
    "#;

    const NO_START_WAT: &str = "(module)";

    fn write_module(wat: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&wat::parse_str(wat).unwrap()).unwrap();
        file.flush().unwrap();
        file
    }

    fn request(module: &NamedTempFile) -> EvalRequest {
        EvalRequest {
            module_path: module.path().to_path_buf(),
            input: Vec::new(),
            args: Vec::new(),
            namespace: "default".to_string(),
        }
    }

    #[test]
    fn captures_flight_stdout() {
        let module = write_module(HELLO_WAT);
        let engine = WasiFlightEngine::new();

        let output = engine.evaluate("demo", &request(&module)).unwrap();
        assert_eq!(output, b"hello");
    }

    #[test]
    fn nonzero_exit_is_an_evaluation_error() {
        let module = write_module(EXIT_3_WAT);
        let engine = WasiFlightEngine::new();

        let err = engine.evaluate("demo", &request(&module)).unwrap_err();
        assert!(matches!(err, FlightError::ExitStatus(3)));
    }

    #[test]
    fn module_without_entry_point_is_rejected() {
        let module = write_module(NO_START_WAT);
        let engine = WasiFlightEngine::new();

        let err = engine.evaluate("demo", &request(&module)).unwrap_err();
        assert!(matches!(err, FlightError::MissingEntryPoint(_)));
    }

    #[test]
    fn missing_module_file_is_a_read_error() {
        let engine = WasiFlightEngine::new();
        let req = EvalRequest {
            module_path: PathBuf::from("/nonexistent/flight.wasm"),
            input: Vec::new(),
            args: Vec::new(),
            namespace: "default".to_string(),
        };

        let err = engine.evaluate("demo", &req).unwrap_err();
        assert!(matches!(err, FlightError::ReadModule { .. }));
    }
}
