use crate::translation::TranslationResult;

/// Separator placed between translated segments in the output document.
pub const SEGMENT_SEPARATOR: &str = "\n\n";

/// Joins translation results, in order, into the output document.
///
/// Failed chunks keep their position as marked passthroughs.
pub fn assemble(results: &[TranslationResult]) -> String {
    results
        .iter()
        .map(TranslationResult::render)
        .collect::<Vec<_>>()
        .join(SEGMENT_SEPARATOR)
}
