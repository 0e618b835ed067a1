/// Prefix marking a segment whose translation failed.
///
/// The original text follows the marker so a reviewer can find and fix it.
pub const FAILURE_MARKER: &str = "[TRANSLATION_FAILED] ";

/// Outcome of translating one chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationResult {
    /// The model's translation (already trimmed; may be empty).
    Translated(String),
    /// The request failed; carries the untranslated chunk text.
    Failed { original: String },
}

impl TranslationResult {
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Text this result contributes to the output document.
    pub fn render(&self) -> String {
        match self {
            Self::Translated(text) => text.clone(),
            Self::Failed { original } => format!("{FAILURE_MARKER}{original}"),
        }
    }
}
