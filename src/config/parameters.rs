// Copyright (c) 2026 the flightcd authors
// SPDX-License-Identifier: MIT

use crate::errors::ConfigError;
use serde::Deserialize;

/// Validated flight parameters decoded from the plugin parameter document.
///
/// Exactly one module source is ever configured: either `build` is enabled
/// (compile the flight from the application source checkout) or `wasm` names
/// a prebuilt module. Decoding enforces this; a `FlightParameters` value with
/// both or neither set cannot be constructed through [`decode`].
///
/// [`decode`]: FlightParameters::decode
///
/// # Example document
/// ```yaml
/// - name: wasm
///   string: /release/flight.wasm
/// - name: input
///   string: "{ replicas: 3 }"
/// - name: args
///   array: ["--env", "prod"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlightParameters {
    /// Compile the flight from local source instead of using a prebuilt module.
    pub build: bool,
    /// Locator of a prebuilt module, leading path separators stripped.
    pub wasm: String,
    /// Raw payload handed to the flight on stdin. May be empty.
    pub input: String,
    /// Positional arguments forwarded to the flight. May be empty.
    pub args: Vec<String>,
}

/// One raw `{name, string, array}` record from the parameter document.
///
/// Every field is optional in the document; records are matched by name with
/// the first occurrence winning, and unrecognized names are ignored so the
/// parameter schema can grow without breaking older adapters.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ParameterRecord {
    name: String,
    #[serde(rename = "string")]
    value: String,
    array: Vec<String>,
}

impl FlightParameters {
    /// Decode and validate the plugin parameter document.
    ///
    /// The document is a YAML sequence of parameter records. Recognized names
    /// are `build`, `wasm`, `input`, and `args`; see the type-level docs for
    /// the exclusivity rule between the first two. All failures surface as
    /// [`ConfigError`] with the `invalid config` prefix.
    pub fn decode(raw: &str) -> Result<Self, ConfigError> {
        let records: Vec<ParameterRecord> = serde_yaml::from_str(raw)?;

        let find = |name: &str| records.iter().find(|record| record.name == name);

        let build = match find("build") {
            Some(record) if !record.value.is_empty() => parse_bool_token(&record.value)
                .ok_or_else(|| ConfigError::InvalidBuildFlag(record.value.clone()))?,
            _ => false,
        };

        let wasm = find("wasm")
            .map(|record| record.value.trim_start_matches('/').to_string())
            .unwrap_or_default();

        if wasm.is_empty() && !build {
            return Err(ConfigError::MissingModuleSource);
        }
        if !wasm.is_empty() && build {
            return Err(ConfigError::ConflictingModuleSource);
        }

        let input = find("input")
            .map(|record| record.value.clone())
            .unwrap_or_default();
        let args = find("args")
            .map(|record| record.array.clone())
            .unwrap_or_default();

        Ok(Self {
            build,
            wasm,
            input,
            args,
        })
    }
}

/// Parse the `build` parameter's boolean token.
///
/// Accepts the permissive token set (`1`/`0`, `t`/`f`, `T`/`F`, and the
/// cased spellings of `true`/`false`) so documents written for other
/// adapters keep decoding the same way here.
fn parse_bool_token(token: &str) -> Option<bool> {
    match token {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_prebuilt_module_parameters() {
        let doc = r#"
- name: wasm
  string: modules/flight.wasm
- name: input
  string: "replicas: 3"
- name: args
  array: ["--env", "prod"]
"#;

        let params = FlightParameters::decode(doc).unwrap();
        assert!(!params.build);
        assert_eq!(params.wasm, "modules/flight.wasm");
        assert_eq!(params.input, "replicas: 3");
        assert_eq!(params.args, vec!["--env", "prod"]);
    }

    #[test]
    fn decode_is_idempotent() {
        let doc = "- name: wasm\n  string: /flight.wasm\n";
        let first = FlightParameters::decode(doc).unwrap();
        let second = FlightParameters::decode(doc).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn strips_leading_path_separators() {
        let doc = "- name: wasm\n  string: ///foo/bar\n";
        let params = FlightParameters::decode(doc).unwrap();
        assert_eq!(params.wasm, "foo/bar");
    }

    #[test]
    fn build_mode_without_module_path() {
        let doc = "- name: build\n  string: \"true\"\n";
        let params = FlightParameters::decode(doc).unwrap();
        assert!(params.build);
        assert_eq!(params.wasm, "");
    }

    #[test]
    fn neither_source_is_rejected() {
        let doc = "- name: input\n  string: \"{}\"\n";
        let err = FlightParameters::decode(doc).unwrap_err();
        assert!(matches!(err, ConfigError::MissingModuleSource));
        assert!(err
            .to_string()
            .contains("wasm parameter must be provided or build enabled"));
    }

    #[test]
    fn both_sources_are_rejected() {
        let doc = r#"
- name: build
  string: "true"
- name: wasm
  string: flight.wasm
"#;
        let err = FlightParameters::decode(doc).unwrap_err();
        assert!(matches!(err, ConfigError::ConflictingModuleSource));
    }

    #[test]
    fn accepts_permissive_boolean_tokens() {
        for token in ["1", "t", "T", "TRUE", "True", "true"] {
            let doc = format!("- name: build\n  string: \"{token}\"\n");
            let params = FlightParameters::decode(&doc).unwrap();
            assert!(params.build, "token {token:?} must enable build");
        }

        for token in ["0", "f", "F", "FALSE", "False", "false"] {
            let doc = format!(
                "- name: build\n  string: \"{token}\"\n- name: wasm\n  string: flight.wasm\n"
            );
            let params = FlightParameters::decode(&doc).unwrap();
            assert!(!params.build, "token {token:?} must disable build");
        }
    }

    #[test]
    fn unparsable_build_flag_is_rejected() {
        let doc = "- name: build\n  string: yes please\n";
        let err = FlightParameters::decode(doc).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBuildFlag(_)));
        assert!(err.to_string().starts_with("invalid config"));
    }

    #[test]
    fn empty_build_value_is_ignored() {
        let doc = r#"
- name: build
  string: ""
- name: wasm
  string: flight.wasm
"#;
        let params = FlightParameters::decode(doc).unwrap();
        assert!(!params.build);
        assert_eq!(params.wasm, "flight.wasm");
    }

    #[test]
    fn first_matching_record_wins() {
        let doc = r#"
- name: wasm
  string: first.wasm
- name: wasm
  string: second.wasm
"#;
        let params = FlightParameters::decode(doc).unwrap();
        assert_eq!(params.wasm, "first.wasm");
    }

    #[test]
    fn unknown_parameter_names_are_ignored() {
        let doc = r#"
- name: wasm
  string: flight.wasm
- name: helm-version
  string: v3
"#;
        let params = FlightParameters::decode(doc).unwrap();
        assert_eq!(params.wasm, "flight.wasm");
    }

    #[test]
    fn null_args_entries_are_a_decode_error() {
        let doc = r#"
- name: wasm
  string: flight.wasm
- name: args
  array: ["ok", null]
"#;
        let err = FlightParameters::decode(doc).unwrap_err();
        assert!(matches!(err, ConfigError::MalformedParameters(_)));
    }

    #[test]
    fn malformed_document_is_a_decode_error() {
        let err = FlightParameters::decode("not: [a, sequence").unwrap_err();
        assert!(err.to_string().starts_with("invalid config"));
    }
}
