//! # doctr - Document Translation CLI
//!
//! `doctr` translates text, PDF and DOCX documents with the Anthropic
//! Messages API. PDF and DOCX files are sent as base64 document attachments;
//! text is embedded in the prompt.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a text file to Greek
//! doctr --to el ./notes.txt
//!
//! # Translate a PDF as a formal letter for a business meeting
//! doctr --to en --style formal --format letter --context business ./contract.pdf
//!
//! # Translate from stdin and save the result
//! cat report.md | doctr --to fr --save
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/doctr/config.toml`:
//!
//! ```toml
//! [doctr]
//! from = "auto"
//! to = "el"
//! style = "professional"
//!
//! [api]
//! model = "claude-sonnet-4-20250514"
//! api_key_env = "ANTHROPIC_API_KEY"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Error types for reading and translating documents.
pub mod error;

/// Saving translations to disk.
pub mod fs;

/// Document reading from files and stdin.
pub mod input;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style config directory resolution.
pub mod paths;

/// Style, format and context presets.
pub mod style;

/// Prompt construction and the Messages API client.
pub mod translation;

/// Terminal UI components (spinner, colors, prompts).
pub mod ui;

pub use error::TranslateError;
