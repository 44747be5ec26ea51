//! Shared test helpers for configuration tests.

use std::ffi::OsString;

use ortho_config::{MergeComposer, OrthoConfig};
use serde_json::Value;

use crate::IssueWatchConfig;

/// Configuration source, lowest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Defaults,
    File,
    Environment,
    Cli,
}

/// Merges `(layer, value)` pairs in order into an [`IssueWatchConfig`].
pub fn compose(layers: &[(Layer, Value)]) -> IssueWatchConfig {
    let mut composer = MergeComposer::new();

    for (layer, value) in layers.iter().cloned() {
        match layer {
            Layer::Defaults => composer.push_defaults(value),
            Layer::File => composer.push_file(value, None),
            Layer::Environment => composer.push_environment(value),
            Layer::Cli => composer.push_cli(value),
        }
    }

    IssueWatchConfig::merge_from_layers(composer.layers()).expect("merge should succeed")
}

/// Environment variables cleared while parsing command lines, so a
/// developer's shell cannot leak into the result.
const ISSUEWATCH_VARIABLES: [&str; 10] = [
    "ISSUEWATCH_ORGANIZATION",
    "ISSUEWATCH_PROJECT",
    "ISSUEWATCH_TOKEN",
    "ISSUEWATCH_TOKEN_FILE",
    "ISSUEWATCH_API_BASE",
    "ISSUEWATCH_SINCE",
    "ISSUEWATCH_LATEST_EVENT_ID",
    "ISSUEWATCH_AUTHORS",
    "ISSUEWATCH_LABEL_PREFIX",
    "ISSUEWATCH_CREATED_AFTER",
];

/// Loads configuration from `issuewatch <args>` with an empty home
/// directory and no `ISSUEWATCH_*` variables.
pub fn load_from_args(args: &[&str]) -> IssueWatchConfig {
    let temp_dir = tempfile::TempDir::new().expect("temp dir should be created");
    let home = temp_dir.path().to_string_lossy().to_string();

    let mut variables: Vec<(&str, Option<&str>)> = ISSUEWATCH_VARIABLES
        .iter()
        .map(|name| (*name, None))
        .collect();
    variables.push(("HOME", Some(home.as_str())));
    variables.push(("XDG_CONFIG_HOME", Some(home.as_str())));
    let _guard = env_lock::lock_env(variables);

    let mut argv = vec![OsString::from("issuewatch")];
    argv.extend(args.iter().map(OsString::from));
    IssueWatchConfig::load_from_iter(argv).expect("config should load")
}
