//! Run configuration: CLI options plus the resolved API key.

mod credentials;
mod resolve;

pub use credentials::{
    API_KEY_ENV, CredentialProvider, ENV_FILE, default_providers, resolve_api_key,
};
pub use resolve::{Config, ResolveOptions, resolve_config, resolve_config_with};
