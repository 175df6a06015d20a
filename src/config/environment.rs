// Copyright (c) 2026 the flightcd authors
// SPDX-License-Identifier: MIT

use crate::config::FlightParameters;
use crate::errors::ConfigError;

/// Environment variable carrying the Argo CD application name.
pub const ENV_APP_NAME: &str = "ARGOCD_APP_NAME";
/// Environment variable carrying the Argo CD application namespace.
pub const ENV_APP_NAMESPACE: &str = "ARGOCD_APP_NAMESPACE";
/// Environment variable carrying the plugin parameter document (YAML).
pub const ENV_APP_PARAMETERS: &str = "ARGOCD_APP_PARAMETERS";

/// Identity of the application being rendered, as announced by the hosting
/// controller. Passed through to the flight engine and used for diagnostics;
/// never read from the parameter document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationIdentity {
    pub name: String,
    pub namespace: String,
}

/// Complete configuration for one adapter run.
///
/// Constructed once at startup from the process environment and immutable
/// afterwards. It has no persisted form; a fresh `Config` is built on every
/// invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub application: ApplicationIdentity,
    pub flight: FlightParameters,
}

/// Bind the adapter configuration from an environment-lookup capability.
///
/// All three required inputs are checked before returning, so a single error
/// names every variable that is absent or empty rather than only the first.
/// The parameter document is decoded and validated per
/// [`FlightParameters::decode`].
///
/// Taking `lookup` as a parameter keeps the binding testable without touching
/// the real process environment.
pub fn load_config_from<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let name = lookup(ENV_APP_NAME).filter(|value| !value.is_empty());
    let namespace = lookup(ENV_APP_NAMESPACE).filter(|value| !value.is_empty());
    let raw_parameters = lookup(ENV_APP_PARAMETERS).filter(|value| !value.is_empty());

    let mut missing = Vec::new();
    if name.is_none() {
        missing.push(ENV_APP_NAME);
    }
    if namespace.is_none() {
        missing.push(ENV_APP_NAMESPACE);
    }
    if raw_parameters.is_none() {
        missing.push(ENV_APP_PARAMETERS);
    }

    let (Some(name), Some(namespace), Some(raw_parameters)) = (name, namespace, raw_parameters)
    else {
        return Err(ConfigError::MissingEnvironment(missing.join(", ")));
    };

    let flight = FlightParameters::decode(&raw_parameters)?;

    Ok(Config {
        application: ApplicationIdentity { name, namespace },
        flight,
    })
}

/// Bind the adapter configuration from the process environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(|var| std::env::var(var).ok())
}
