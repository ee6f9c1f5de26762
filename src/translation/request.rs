use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::language::AUTO_DETECT;
use crate::style::{OutputFormat, Selection, TranslationContext, TranslationStyle};

/// Placeholder text standing in for the content of a PDF attachment.
pub const PDF_PLACEHOLDER: &str = "[PDF CONTENT - Will be processed by AI]";

/// Placeholder text standing in for the content of a DOCX attachment.
pub const DOCX_PLACEHOLDER: &str = "[DOCX CONTENT - Will be processed by AI]";

/// Markers that identify text as an attachment placeholder rather than content.
pub const PLACEHOLDER_MARKERS: [&str; 2] = ["[PDF CONTENT", "[DOCX CONTENT"];

/// Returns `true` if the text is an attachment placeholder.
pub fn is_placeholder(text: &str) -> bool {
    PLACEHOLDER_MARKERS
        .iter()
        .any(|marker| text.contains(marker))
}

/// Binary document types the API accepts as attachments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Detects the document kind from a lowercase file extension.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    pub const fn media_type(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Pdf => PDF_PLACEHOLDER,
            Self::Docx => DOCX_PLACEHOLDER,
        }
    }
}

/// A binary document sent alongside the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub kind: DocumentKind,
    pub data: Vec<u8>,
}

impl Attachment {
    pub const fn new(kind: DocumentKind, data: Vec<u8>) -> Self {
        Self { kind, data }
    }

    pub const fn media_type(&self) -> &'static str {
        self.kind.media_type()
    }

    /// Payload encoded with the standard, padded base64 alphabet.
    pub fn base64_data(&self) -> String {
        STANDARD.encode(&self.data)
    }
}

/// Optional extra instructions, each independent of the others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslationOptions {
    /// Word-for-word fidelity.
    pub literal: bool,
    /// Bracketed explanations of idioms and terms after the translation.
    pub with_explanations: bool,
    /// Analysis of meaning and nuance after the translation.
    pub deep_analysis: bool,
    /// Examples for complex terminology.
    pub with_examples: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// Source language code, or `auto`.
    pub source_language: String,
    pub target_language: String,
    pub style: Selection<TranslationStyle>,
    pub format: Selection<OutputFormat>,
    pub context: Selection<TranslationContext>,
    pub options: TranslationOptions,
    /// Plain text content, or a placeholder when `attachment` carries the content.
    pub raw_text: Option<String>,
    pub attachment: Option<Attachment>,
}

impl TranslationRequest {
    /// Creates a request with auto-detected source, professional style,
    /// paragraph format and general context.
    pub fn new(target_language: impl Into<String>) -> Self {
        Self {
            source_language: AUTO_DETECT.to_string(),
            target_language: target_language.into(),
            style: TranslationStyle::Professional.into(),
            format: OutputFormat::Paragraphs.into(),
            context: TranslationContext::General.into(),
            options: TranslationOptions::default(),
            raw_text: None,
            attachment: None,
        }
    }

    pub fn is_auto_detect(&self) -> bool {
        self.source_language == AUTO_DETECT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_placeholder() {
        assert!(is_placeholder(PDF_PLACEHOLDER));
        assert!(is_placeholder(DOCX_PLACEHOLDER));
        assert!(is_placeholder("prefix [PDF CONTENT suffix"));
        assert!(!is_placeholder("Plain text about PDF content"));
    }

    #[test]
    fn test_document_kind_from_extension() {
        assert_eq!(DocumentKind::from_extension("pdf"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_extension("docx"), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_extension("doc"), None);
        assert_eq!(DocumentKind::from_extension("txt"), None);
    }

    #[test]
    fn test_media_types() {
        assert_eq!(DocumentKind::Pdf.media_type(), "application/pdf");
        assert_eq!(
            DocumentKind::Docx.media_type(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
    }

    #[test]
    fn test_attachment_base64_data() {
        let attachment = Attachment::new(DocumentKind::Pdf, b"%PDF-1.4".to_vec());
        assert_eq!(attachment.base64_data(), "JVBERi0xLjQ=");
    }

    #[test]
    fn test_new_request_defaults() {
        let request = TranslationRequest::new("el");
        assert!(request.is_auto_detect());
        assert_eq!(request.target_language, "el");
        assert_eq!(request.style.key(), "professional");
        assert_eq!(request.format.key(), "paragraphs");
        assert_eq!(request.context.key(), "general");
        assert_eq!(request.options, TranslationOptions::default());
        assert!(request.raw_text.is_none());
        assert!(request.attachment.is_none());
    }
}
