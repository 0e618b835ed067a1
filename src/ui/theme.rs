//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Every helper
//! falls back to plain text when colors are disabled.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for the run banner
    pub fn header<T: Display>(text: T) -> String {
        paint(text, |t| format!("{}", t.bold()))
    }

    /// Style for primary values (e.g., file paths, model names)
    pub fn value<T: Display>(text: T) -> String {
        paint(text, |t| format!("{}", t.cyan()))
    }

    /// Style for success messages
    pub fn success<T: Display>(text: T) -> String {
        paint(text, |t| format!("{}", t.green()))
    }

    /// Style for error messages
    pub fn error<T: Display>(text: T) -> String {
        paint(text, |t| format!("{}", t.red().bold()))
    }

    /// Style for warning messages
    pub fn warning<T: Display>(text: T) -> String {
        paint(text, |t| format!("{}", t.yellow()))
    }
}

fn paint<T: Display>(text: T, styled: impl FnOnce(&T) -> String) -> String {
    if output::is_no_color() {
        text.to_string()
    } else {
        styled(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_keep_text() {
        assert!(Style::success("done").contains("done"));
        assert!(Style::error("Error:").contains("Error:"));
        assert!(Style::warning("careful").contains("careful"));
        assert!(Style::value("out.txt").contains("out.txt"));
    }
}
