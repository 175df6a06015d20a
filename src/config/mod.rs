// Copyright (c) 2026 the flightcd authors
// SPDX-License-Identifier: MIT

mod environment;
mod parameters;

pub use environment::{
    load_config, load_config_from, ApplicationIdentity, Config, ENV_APP_NAME, ENV_APP_NAMESPACE,
    ENV_APP_PARAMETERS,
};
pub use parameters::FlightParameters;
