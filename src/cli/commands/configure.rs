//! Configure command handler for editing default settings.

use anyhow::Result;
use inquire::{Select, Text};

use crate::config::{ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, DefaultsConfig};
use crate::style::{OutputFormat, Preset, TranslationContext, TranslationStyle};
use crate::translation::{AUTO_DETECT, DEFAULT_ENDPOINT, DEFAULT_MODEL, SUPPORTED_LANGUAGES};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the current configuration. Otherwise prompts for
/// default languages and presets and saves them.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        let manager = ConfigManager::new()?;
        print_config(&manager, &manager.load_or_default());
        return Ok(());
    }
    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default();

    print_config(&manager, &config);

    let defaults = config.doctr.clone();
    let from = select_language("Default source language:", true, defaults.from.as_deref())?;
    let to = select_language("Default target language:", false, defaults.to.as_deref())?;
    let style = select_preset::<TranslationStyle>("Default style:", defaults.style.as_deref())?;
    let format = select_preset::<OutputFormat>("Default format:", defaults.format.as_deref())?;
    let context =
        select_preset::<TranslationContext>("Default context:", defaults.context.as_deref())?;

    let api_key_env = Text::new("API key environment variable:")
        .with_default(
            config
                .api
                .api_key_env
                .as_deref()
                .unwrap_or(DEFAULT_API_KEY_ENV),
        )
        .prompt()?;

    config.doctr = DefaultsConfig {
        from: Some(from),
        to: Some(to),
        style: Some(style),
        format: Some(format),
        context: Some(context),
    };
    config.api.api_key_env = Some(api_key_env.trim().to_string()).filter(|s| !s.is_empty());

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_config(manager: &ConfigManager, config: &ConfigFile) {
    let not_set = || Style::secondary("(not set)");
    let defaults = &config.doctr;
    let api = &config.api;

    println!(
        "{} {}",
        Style::header("Configuration"),
        Style::secondary(manager.config_path().display().to_string())
    );
    let rows = [
        ("from", defaults.from.as_deref()),
        ("to", defaults.to.as_deref()),
        ("style", defaults.style.as_deref()),
        ("format", defaults.format.as_deref()),
        ("context", defaults.context.as_deref()),
    ];
    for (label, value) in rows {
        println!(
            "  {}  {}",
            Style::label(format!("{label:9}")),
            value.map_or_else(not_set, Style::value)
        );
    }
    println!(
        "  {}  {}",
        Style::label(format!("{:9}", "endpoint")),
        Style::value(api.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))
    );
    println!(
        "  {}  {}",
        Style::label(format!("{:9}", "model")),
        Style::value(api.model.as_deref().unwrap_or(DEFAULT_MODEL))
    );
    println!(
        "  {}  {}",
        Style::label(format!("{:9}", "api_key")),
        if api.get_api_key().is_some() {
            Style::success("(set)")
        } else {
            Style::warning("(not set)")
        }
    );
    println!();
}

fn select_language(message: &str, allow_auto: bool, default: Option<&str>) -> Result<String> {
    // Options use the format "code - Name"
    let mut codes: Vec<(&str, &str)> = Vec::with_capacity(SUPPORTED_LANGUAGES.len() + 1);
    if allow_auto {
        codes.push((AUTO_DETECT, "Auto-detect"));
    }
    codes.extend_from_slice(SUPPORTED_LANGUAGES);

    let options: Vec<String> = codes
        .iter()
        .map(|(code, name)| format!("{code} - {name}"))
        .collect();

    let default_index = default
        .and_then(|d| codes.iter().position(|(code, _)| *code == d))
        .unwrap_or(0);

    let selection = Select::new(message, options)
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(option_key(&selection).to_string())
}

fn select_preset<P: Preset>(message: &str, default: Option<&str>) -> Result<String> {
    let options: Vec<String> = P::ALL
        .iter()
        .map(|p| format!("{} - {}", p.key(), p.description()))
        .collect();

    let default_index = default
        .and_then(|d| P::ALL.iter().position(|p| p.key() == d))
        .unwrap_or(0);

    let selection = Select::new(message, options)
        .with_starting_cursor(default_index)
        .prompt()?;

    Ok(option_key(&selection).to_string())
}

/// Extracts the key from a "key - Description" option.
fn option_key(option: &str) -> &str {
    option.split(" - ").next().unwrap_or(option)
}
