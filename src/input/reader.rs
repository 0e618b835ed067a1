use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

pub struct InputReader;

impl InputReader {
    /// Reads the whole file at `path` as UTF-8 text, dropping a leading
    /// byte-order mark.
    pub fn read(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Error reading input file {}", path.display()))?;

        if let Some(stripped) = content.strip_prefix(UTF8_BOM) {
            return Ok(stripped.to_string());
        }

        Ok(content)
    }
}
