//! Subcommand implementations.

/// Configure command handler.
pub mod configure;

/// Preset listing command handler.
pub mod styles;

/// Translation command handler.
pub mod translate;
