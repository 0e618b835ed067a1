//! API key lookup across an ordered list of credential providers.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::ui::Style;

/// Environment variable (in `.env` or the process environment) holding the API key.
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Environment file read from the current working directory.
pub const ENV_FILE: &str = ".env";

/// A place an API key may come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialProvider {
    /// Value passed on the command line.
    Flag(Option<String>),
    /// A `KEY=value` entry in an environment file.
    EnvFile { path: PathBuf, var: String },
    /// A variable in the process environment.
    ProcessEnv { var: String },
}

impl CredentialProvider {
    /// Returns the key this provider holds, if it holds a non-empty one.
    pub fn lookup(&self) -> Option<String> {
        let value = match self {
            Self::Flag(value) => value.clone(),
            Self::EnvFile { path, var } => read_env_file_var(path, var),
            Self::ProcessEnv { var } => std::env::var(var).ok(),
        };

        value.filter(|key| !key.trim().is_empty())
    }
}

impl fmt::Display for CredentialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(_) => write!(f, "--api-key"),
            Self::EnvFile { path, .. } => write!(f, "{}", path.display()),
            Self::ProcessEnv { var } => write!(f, "${var}"),
        }
    }
}

/// The default provider order: `--api-key`, then `.env`, then the process environment.
pub fn default_providers(flag: Option<String>) -> Vec<CredentialProvider> {
    vec![
        CredentialProvider::Flag(flag),
        CredentialProvider::EnvFile {
            path: PathBuf::from(ENV_FILE),
            var: API_KEY_ENV.to_string(),
        },
        CredentialProvider::ProcessEnv {
            var: API_KEY_ENV.to_string(),
        },
    ]
}

/// Tries each provider in order; the first non-empty key wins.
pub fn resolve_api_key(providers: &[CredentialProvider]) -> Option<(String, &CredentialProvider)> {
    providers
        .iter()
        .find_map(|provider| provider.lookup().map(|key| (key, provider)))
}

/// Reads `var` from the env file at `path` without touching the process environment.
///
/// A missing file is not an error. Lines that fail to parse are reported
/// once and skipped; the rest of the file is still searched.
fn read_env_file_var(path: &Path, var: &str) -> Option<String> {
    let entries = match dotenvy::from_path_iter(path) {
        Ok(entries) => entries,
        Err(err) if err.not_found() => return None,
        Err(err) => {
            crate::warn!(
                "{} Ignoring {}: {err}",
                Style::warning("Warning:"),
                path.display()
            );
            return None;
        }
    };

    let mut warned = false;
    for entry in entries {
        match entry {
            Ok((key, value)) if key == var => return Some(value),
            Ok(_) => {}
            Err(err) => {
                if !warned {
                    crate::warn!(
                        "{} Skipping unparseable lines in {}: {err}",
                        Style::warning("Warning:"),
                        path.display()
                    );
                    warned = true;
                }
            }
        }
    }

    None
}
