//! Translation presets: tone/style, output format and audience context.
//!
//! Each dimension is a fixed table of presets. A key that matches no preset
//! is kept as [`Selection::Unknown`] and contributes an empty instruction.

use std::fmt;

/// A fixed set of choices, each with a key and an instruction sentence.
pub trait Preset: Copy + fmt::Debug + PartialEq + 'static {
    /// Every preset in display order.
    const ALL: &'static [Self];

    /// The key used on the command line and in the config file.
    fn key(self) -> &'static str;

    /// Human-readable description.
    fn description(self) -> &'static str;

    /// Sentence inserted into the prompt.
    fn instruction(self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.key() == key)
    }

    fn keys() -> Vec<&'static str> {
        Self::ALL.iter().map(|p| p.key()).collect()
    }
}

/// Tone of the translated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationStyle {
    Academic,
    Professional,
    Email,
    Formal,
    Casual,
    Creative,
}

impl Preset for TranslationStyle {
    const ALL: &'static [Self] = &[
        Self::Academic,
        Self::Professional,
        Self::Email,
        Self::Formal,
        Self::Casual,
        Self::Creative,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Academic => "academic",
            Self::Professional => "professional",
            Self::Email => "email",
            Self::Formal => "formal",
            Self::Casual => "casual",
            Self::Creative => "creative",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Academic => "Scholarly, rigorous terminology",
            Self::Professional => "Clear, business-appropriate",
            Self::Email => "Professional email with greeting and closing",
            Self::Formal => "Official, legal or governmental register",
            Self::Casual => "Conversational, everyday language",
            Self::Creative => "Expressive, literary phrasing",
        }
    }

    fn instruction(self) -> &'static str {
        match self {
            Self::Academic => {
                "Use academic, scholarly language with formal terminology and rigorous structure."
            }
            Self::Professional => {
                "Use professional, business-appropriate language that is clear and competent."
            }
            Self::Email => "Format as a professional email with appropriate greeting and closing.",
            Self::Formal => {
                "Use very formal, official document language suitable for legal or governmental contexts."
            }
            Self::Casual => "Use conversational, everyday language that feels natural and friendly.",
            Self::Creative => {
                "Use creative, engaging language with literary flair and expressive phrasing."
            }
        }
    }
}

/// Layout of the translated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Paragraphs,
    Letter,
    Recommendation,
    Bullets,
}

impl Preset for OutputFormat {
    const ALL: &'static [Self] = &[
        Self::Paragraphs,
        Self::Letter,
        Self::Recommendation,
        Self::Bullets,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Paragraphs => "paragraphs",
            Self::Letter => "letter",
            Self::Recommendation => "recommendation",
            Self::Bullets => "bullets",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Paragraphs => "Well-structured paragraphs",
            Self::Letter => "Formal letter",
            Self::Recommendation => "Recommendation letter",
            Self::Bullets => "Bullet points",
        }
    }

    fn instruction(self) -> &'static str {
        match self {
            Self::Paragraphs => "Present the translation in well-structured paragraphs.",
            Self::Letter => "Format as a formal letter with date, greeting, body, and closing.",
            Self::Recommendation => "Format as a recommendation letter with proper structure.",
            Self::Bullets => "Format as bullet points for clarity and easy reading.",
        }
    }
}

/// Setting the translation is intended for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationContext {
    General,
    Academic,
    Business,
    Presentation,
    Research,
}

impl Preset for TranslationContext {
    const ALL: &'static [Self] = &[
        Self::General,
        Self::Academic,
        Self::Business,
        Self::Presentation,
        Self::Research,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Academic => "academic",
            Self::Business => "business",
            Self::Presentation => "presentation",
            Self::Research => "research",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::General => "No specific setting",
            Self::Academic => "Academic or university setting",
            Self::Business => "Professional business meeting",
            Self::Presentation => "Presentation",
            Self::Research => "Research paper",
        }
    }

    // General never reaches the prompt, so it has no sentence.
    fn instruction(self) -> &'static str {
        match self {
            Self::General => "",
            Self::Academic => "This is for an academic/university setting.",
            Self::Business => "This is for a professional business meeting.",
            Self::Presentation => "This is for a presentation.",
            Self::Research => "This is for a research paper.",
        }
    }
}

/// A preset chosen by key, or the raw key when no preset matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<P> {
    Preset(P),
    Unknown(String),
}

impl<P: Preset> Selection<P> {
    /// Parses a key. Never fails: unrecognized keys become `Unknown`.
    pub fn parse(key: &str) -> Self {
        P::from_key(key).map_or_else(|| Self::Unknown(key.to_string()), Self::Preset)
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Preset(preset) => preset.key(),
            Self::Unknown(key) => key,
        }
    }

    /// Returns the prompt sentence, or `""` for an unknown key.
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::Preset(preset) => preset.instruction(),
            Self::Unknown(_) => "",
        }
    }

    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Preset(_))
    }
}

impl<P: Preset> From<P> for Selection<P> {
    fn from(preset: P) -> Self {
        Self::Preset(preset)
    }
}

impl<P: Preset> fmt::Display for Selection<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
