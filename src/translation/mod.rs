mod client;
mod language;
mod prompt;
mod request;

pub use client::{
    DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, EMPTY_TRANSLATION_FALLBACK,
    TranslationClient,
};
pub use language::{
    AUTO_DETECT, SUPPORTED_LANGUAGES, language_name, print_languages, validate_language,
    validate_source_language,
};
pub use prompt::{
    DEEP_ANALYSIS_INSTRUCTION, EXAMPLES_INSTRUCTION, EXPLANATIONS_INSTRUCTION,
    EXTRACT_DOCUMENT_INSTRUCTION, LITERAL_INSTRUCTION, NATURAL_TONE_INSTRUCTION, PREAMBLE,
    build_prompt,
};
pub use request::{
    Attachment, DOCX_PLACEHOLDER, DocumentKind, PDF_PLACEHOLDER, PLACEHOLDER_MARKERS,
    TranslationOptions, TranslationRequest, is_placeholder,
};
