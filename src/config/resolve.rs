use anyhow::Result;
use std::path::PathBuf;

use super::credentials::{API_KEY_ENV, CredentialProvider, default_providers, resolve_api_key};
use crate::translation::{
    DEFAULT_BASE_URL, MODEL, SOURCE_LANGUAGE, TARGET_LANGUAGE, build_system_prompt,
};

/// Options collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// File to translate.
    pub input: PathBuf,
    /// Destination for the translated document.
    pub output: PathBuf,
    /// `--api-key` value, highest-priority credential.
    pub api_key: Option<String>,
    /// Endpoint override; defaults to OpenRouter.
    pub base_url: Option<String>,
}

/// Fully resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub api_key: String,
    /// Where the API key was found.
    pub credential_source: CredentialProvider,
    pub base_url: String,
    pub model: String,
    pub system_prompt: String,
}

/// Resolves configuration using the default credential order
/// (`--api-key` > `.env` > process environment).
///
/// # Errors
///
/// Returns an error if no provider yields an API key.
pub fn resolve_config(options: ResolveOptions) -> Result<Config> {
    let providers = default_providers(options.api_key.clone());
    resolve_config_with(options, &providers)
}

/// Resolves configuration against an explicit list of credential providers.
pub fn resolve_config_with(
    options: ResolveOptions,
    providers: &[CredentialProvider],
) -> Result<Config> {
    let (api_key, source) = resolve_api_key(providers).ok_or_else(|| {
        anyhow::anyhow!(
            "API key not found.\n   \
             Please provide it via the --api-key flag or by creating a .env file \
             with {API_KEY_ENV}=\"sk-or-yourkey\"."
        )
    })?;

    Ok(Config {
        input: options.input,
        output: options.output,
        api_key,
        credential_source: source.clone(),
        base_url: options
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        model: MODEL.to_string(),
        system_prompt: build_system_prompt(SOURCE_LANGUAGE, TARGET_LANGUAGE),
    })
}
