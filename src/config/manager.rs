use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;
use crate::style::{OutputFormat, Preset, Selection, TranslationContext, TranslationStyle};
use crate::translation::{
    AUTO_DETECT, DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, validate_language,
    validate_source_language,
};
use crate::ui::Style;

/// Environment variable consulted for the API key when `api_key_env` is unset.
pub const DEFAULT_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Default settings in the `[doctr]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default source language code, or `auto`.
    pub from: Option<String>,
    /// Default target language (ISO 639-1 code).
    pub to: Option<String>,
    /// Default translation style key.
    pub style: Option<String>,
    /// Default output format key.
    pub format: Option<String>,
    /// Default context key.
    pub context: Option<String>,
}

/// Settings for the Messages API in the `[api]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API base URL. Defaults to the Anthropic API.
    pub endpoint: Option<String>,
    /// Model identifier.
    pub model: Option<String>,
    /// Maximum output tokens.
    pub max_tokens: Option<u32>,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl ApiConfig {
    /// Gets the API key, preferring the environment variable over the config file.
    pub fn get_api_key(&self) -> Option<String> {
        let env_var = self.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV);
        if let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/doctr/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub doctr: DefaultsConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
    pub api_key: Option<String>,
    pub source_language: String,
    pub target_language: String,
    pub style: Selection<TranslationStyle>,
    pub format: Selection<OutputFormat>,
    pub context: Selection<TranslationContext>,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    pub style: Option<String>,
    pub format: Option<String>,
    pub context: Option<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values, which take
/// precedence over built-in defaults. Unknown style, format or context keys
/// are kept with a warning; they contribute nothing to the prompt.
///
/// # Errors
///
/// Returns an error if the target language is missing, or if either
/// language code is not supported.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let defaults = &config_file.doctr;

    let target_language = options
        .to
        .as_ref()
        .or(defaults.to.as_ref())
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'to' (target language)\n\n\
                 Please provide it via:\n  \
                 - CLI option: doctr --to <lang>\n  \
                 - Config file: ~/.config/doctr/config.toml"
            )
        })?;
    validate_language(&target_language)?;

    let source_language = options
        .from
        .as_ref()
        .or(defaults.from.as_ref())
        .cloned()
        .unwrap_or_else(|| AUTO_DETECT.to_string());
    validate_source_language(&source_language)?;

    let style = resolve_selection::<TranslationStyle>(
        "style",
        options.style.as_deref().or(defaults.style.as_deref()),
        TranslationStyle::Professional,
    );
    let format = resolve_selection::<OutputFormat>(
        "format",
        options.format.as_deref().or(defaults.format.as_deref()),
        OutputFormat::Paragraphs,
    );
    let context = resolve_selection::<TranslationContext>(
        "context",
        options.context.as_deref().or(defaults.context.as_deref()),
        TranslationContext::General,
    );

    let api = &config_file.api;

    Ok(ResolvedConfig {
        endpoint: options
            .endpoint
            .as_ref()
            .or(api.endpoint.as_ref())
            .cloned()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        model: options
            .model
            .as_ref()
            .or(api.model.as_ref())
            .cloned()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        max_tokens: api.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        api_key: api.get_api_key(),
        source_language,
        target_language,
        style,
        format,
        context,
    })
}

fn resolve_selection<P: Preset>(label: &str, key: Option<&str>, default: P) -> Selection<P> {
    let Some(key) = key else {
        return Selection::Preset(default);
    };

    let selection = Selection::parse(key);
    if !selection.is_known() {
        eprintln!(
            "{} Unknown {label} '{key}'\n\
             Available: {}\n\
             Proceeding without a {label} instruction...\n",
            Style::warning("Warning:"),
            P::keys().join(", ")
        );
    }
    selection
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/doctr/config.toml`
    /// or `~/.config/doctr/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, falling back to defaults when it is missing.
    ///
    /// A file that exists but cannot be parsed is logged and ignored.
    pub fn load_or_default(&self) -> ConfigFile {
        if !self.config_path.exists() {
            return ConfigFile::default();
        }
        self.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, path = %self.config_path.display(), "ignoring unreadable config file");
            ConfigFile::default()
        })
    }
}
