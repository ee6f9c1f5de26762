//! Translation command handler.

use anyhow::{Result, bail};
use std::io::{self, Write};
use std::path::Path;

use crate::cli::ExtraArgs;
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::fs::{atomic_write, save_translation};
use crate::input::{InputReader, SourceDocument};
use crate::translation::{TranslationClient, TranslationOptions, TranslationRequest};
use crate::ui::{Spinner, Style};
use crate::status;

pub struct TranslateOptions {
    pub file: Option<String>,
    pub resolve: ResolveOptions,
    pub extras: ExtraArgs,
    pub output: Option<String>,
    pub save: bool,
}

impl From<ExtraArgs> for TranslationOptions {
    fn from(extras: ExtraArgs) -> Self {
        Self {
            literal: extras.literal,
            with_explanations: extras.explain,
            deep_analysis: extras.analyze,
            with_examples: extras.examples,
        }
    }
}

/// Builds a translation request from resolved settings and a source document.
pub fn build_request(
    config: &ResolvedConfig,
    options: TranslationOptions,
    document: SourceDocument,
) -> TranslationRequest {
    let (raw_text, attachment) = document.into_parts();
    TranslationRequest {
        source_language: config.source_language.clone(),
        target_language: config.target_language.clone(),
        style: config.style.clone(),
        format: config.format.clone(),
        context: config.context.clone(),
        options,
        raw_text,
        attachment,
    }
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = resolve_config(&options.resolve, &manager.load_or_default())?;

    let document = InputReader::read(options.file.as_deref())?;
    if document.is_empty() {
        bail!("Error: Input is empty");
    }

    if config.api_key.is_none() {
        eprintln!(
            "{} No API key configured. Set ANTHROPIC_API_KEY or api_key_env in {}",
            Style::warning("Warning:"),
            manager.config_path().display()
        );
    }

    let client = TranslationClient::new(config.endpoint.clone(), config.api_key.clone())
        .with_model(config.model.clone())
        .with_max_tokens(config.max_tokens);

    let request = build_request(&config, options.extras.into(), document);

    tracing::info!(
        from = %request.source_language,
        to = %request.target_language,
        style = %request.style,
        format = %request.format,
        context = %request.context,
        "translating"
    );

    let spinner = Spinner::new("Translating...");
    let result = client.translate(&request).await;
    spinner.stop();

    let translation = result?;

    print!("{translation}");
    if !translation.ends_with('\n') {
        println!();
    }
    io::stdout().flush()?;

    if let Some(path) = options.output.as_deref() {
        atomic_write(Path::new(path), &translation)?;
        status!("{} Saved to {}", Style::success("✓"), Style::secondary(path));
    } else if options.save {
        let path = save_translation(Path::new("."), &translation)?;
        status!(
            "{} Saved to {}",
            Style::success("✓"),
            Style::secondary(path.display())
        );
    }

    Ok(())
}
