//! # rosetta-translate - paragraph-by-paragraph file translation
//!
//! `rosetta-translate` translates a plain-text file from English to German.
//! The file is split into paragraphs on blank lines, each paragraph is sent
//! to an OpenAI-compatible chat-completion endpoint (OpenRouter by default)
//! one at a time, and the translations are joined back together in order.
//!
//! A paragraph whose request fails is kept in place, untranslated, behind a
//! `[TRANSLATION_FAILED]` marker so the run still completes.
//!
//! ## Quick Start
//!
//! ```bash
//! # Key from the command line
//! rosetta-translate -i story.txt -o story.de.txt --api-key sk-or-...
//!
//! # Key from ./.env (OPENROUTER_API_KEY="sk-or-...") or the environment
//! rosetta-translate --input story.txt --output story.de.txt
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// API key resolution and run configuration.
pub mod config;

/// File system utilities.
pub mod fs;

/// Input file reading.
pub mod input;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// Paragraph splitting and document reassembly.
pub mod text;

/// Translation client for OpenAI-compatible APIs.
pub mod translation;

/// Terminal UI components (progress bar, colors).
pub mod ui;
