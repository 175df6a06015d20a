// Copyright (c) 2026 the flightcd authors
// SPDX-License-Identifier: MIT

pub mod config;   // environment binding + parameter decoding
pub mod encode;   // resource stream encoder
pub mod errors;   // error handling
pub mod flight;   // module resolution, build, WASI evaluation
pub mod pipeline; // resolve -> evaluate orchestration
