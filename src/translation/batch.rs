use anyhow::Result;
use std::future::Future;

use super::result::TranslationResult;
use crate::text::Chunk;
use crate::ui::{ChunkProgress, Style};

/// Something that can translate one chunk of text.
///
/// Implemented by [`super::TranslationClient`]; tests plug in deterministic
/// translators.
pub trait Translator {
    fn translate(&self, text: &str) -> impl Future<Output = Result<String>>;
}

/// Translates `chunks` one at a time, in order.
///
/// A failed chunk is reported on stderr and kept in place as
/// [`TranslationResult::Failed`]; the returned vector always has one entry
/// per chunk.
pub async fn translate_chunks<T: Translator>(
    translator: &T,
    chunks: &[Chunk],
    progress: &ChunkProgress,
) -> Vec<TranslationResult> {
    let total = chunks.len();
    let mut results = Vec::with_capacity(total);

    for (position, chunk) in chunks.iter().enumerate() {
        progress.start_chunk(position);

        let result = match translator.translate(&chunk.text).await {
            Ok(translated) => TranslationResult::Translated(translated),
            Err(err) => {
                progress.suspend(|| {
                    crate::warn!(
                        "{} Translation failed for chunk {}/{total}: {err:#}",
                        Style::error("✗"),
                        position + 1
                    );
                });
                TranslationResult::Failed {
                    original: chunk.text.clone(),
                }
            }
        };

        results.push(result);
    }

    progress.finish();
    results
}
