//! Configuration file management and CLI override resolution.

mod manager;

pub use manager::{
    ApiConfig, ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, DefaultsConfig, ResolveOptions,
    ResolvedConfig, resolve_config,
};
