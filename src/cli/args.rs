use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "doctr")]
#[command(about = "AI-powered document translation tool")]
#[command(version)]
pub struct Args {
    /// File to translate: .txt, .md, .pdf or .docx (reads text from stdin if not provided)
    pub file: Option<String>,

    /// Source language code, or 'auto' to detect it
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Target language code (ISO 639-1, e.g., el, en, fr)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Translation style (academic, professional, email, formal, casual, creative)
    #[arg(short = 's', long)]
    pub style: Option<String>,

    /// Output format (paragraphs, letter, recommendation, bullets)
    #[arg(long)]
    pub format: Option<String>,

    /// Context (general, academic, business, presentation, research)
    #[arg(short = 'c', long)]
    pub context: Option<String>,

    #[command(flatten)]
    pub extras: ExtraArgs,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// API endpoint URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Write the translation to this file
    #[arg(short = 'o', long, conflicts_with = "save")]
    pub output: Option<String>,

    /// Save the translation as translation_<timestamp>.txt in the current directory
    #[arg(long)]
    pub save: bool,

    /// Suppress status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Show diagnostic logs
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Optional extra instructions for the model.
#[derive(ClapArgs, Debug, Default, Clone, Copy)]
pub struct ExtraArgs {
    /// Request a literal, word-for-word translation
    #[arg(long)]
    pub literal: bool,

    /// Explain key terms and idioms in brackets after the translation
    #[arg(long)]
    pub explain: bool,

    /// Add an analysis of meaning and nuance after the translation
    #[arg(long)]
    pub analyze: bool,

    /// Include examples for complex terminology
    #[arg(long)]
    pub examples: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure default settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List supported language codes
    Languages,
    /// List translation styles, output formats and contexts
    Styles,
}
