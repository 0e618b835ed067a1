mod batch;
mod client;
mod prompt;
mod result;

pub use batch::{Translator, translate_chunks};
pub use client::{DEFAULT_BASE_URL, MAX_TOKENS, MODEL, TEMPERATURE, TranslationClient};
pub use prompt::{SOURCE_LANGUAGE, SYSTEM_PROMPT_TEMPLATE, TARGET_LANGUAGE, build_system_prompt};
pub use result::{FAILURE_MARKER, TranslationResult};
