use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::{ResolveOptions, resolve_config};
use crate::fs::atomic_write;
use crate::input::InputReader;
use crate::text::{assemble, split_chunks};
use crate::translation::{MODEL, TranslationClient, Translator, translate_chunks};
use crate::ui::{ChunkProgress, Style};

pub struct TranslateOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Input had no text; nothing was translated or written.
    EmptyInput,
    /// Output was written. `failed` chunks carry the failure marker.
    Translated { chunks: usize, failed: usize },
}

pub async fn run_translate(options: TranslateOptions) -> Result<RunOutcome> {
    crate::status!(
        "{}",
        Style::header(format!(
            "--- Starting Translation Process using OpenRouter ({MODEL}) ---"
        ))
    );

    let config = resolve_config(ResolveOptions {
        input: options.input,
        output: options.output,
        api_key: options.api_key,
        base_url: options.base_url,
    })?;
    crate::status!(
        "{} API Key loaded from {}.",
        Style::success("✓"),
        Style::value(&config.credential_source)
    );

    let client = TranslationClient::new(
        config.base_url.clone(),
        config.api_key.clone(),
        config.model.clone(),
        config.system_prompt.clone(),
    );
    crate::status!(
        "{} Client initialized for {}.",
        Style::success("✓"),
        Style::value(&config.base_url)
    );

    let outcome = translate_file(&client, &config.input, &config.output).await?;

    if matches!(outcome, RunOutcome::Translated { .. }) {
        crate::status!("{}", Style::header("--- Translation Process Finished ---"));
    }

    Ok(outcome)
}

/// Reads `input`, translates it chunk by chunk with `translator`, and writes
/// the assembled document to `output`.
///
/// Per-chunk failures never fail the run; only read and write errors do.
/// Empty input short-circuits before any translation call and leaves
/// `output` untouched.
pub async fn translate_file<T: Translator>(
    translator: &T,
    input: &Path,
    output: &Path,
) -> Result<RunOutcome> {
    let source_text = InputReader::read(input)?;
    crate::status!(
        "{} Read source file: {}",
        Style::success("✓"),
        Style::value(input.display())
    );

    let chunks = split_chunks(&source_text);
    if chunks.is_empty() {
        crate::warn!(
            "{} Input file is empty or contains no text to translate.",
            Style::warning("Warning:")
        );
        return Ok(RunOutcome::EmptyInput);
    }
    crate::status!("ⓘ Text split into {} chunks.", chunks.len());
    crate::status!("Sending chunks to AI for translation...");

    let progress = ChunkProgress::new(chunks.len());
    let results = translate_chunks(translator, &chunks, &progress).await;
    let failed = results.iter().filter(|r| r.is_failed()).count();

    crate::status!(
        "{} Translation of all chunks complete.",
        Style::success("✓")
    );
    if failed > 0 {
        crate::warn!(
            "{} {failed} of {} chunks failed and were left untranslated (marked in the output).",
            Style::warning("Warning:"),
            chunks.len()
        );
    }

    atomic_write(output, &assemble(&results))?;
    crate::status!(
        "🎉 Translation successfully saved to: {}",
        Style::value(output.display())
    );

    Ok(RunOutcome::Translated {
        chunks: chunks.len(),
        failed,
    })
}
