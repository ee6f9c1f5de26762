use super::language::language_name;
use super::request::{TranslationRequest, is_placeholder};
use crate::style::{Selection, TranslationContext};

pub const PREAMBLE: &str =
    "You are a professional translator with expertise in multiple languages and contexts.";

pub const NATURAL_TONE_INSTRUCTION: &str = "IMPORTANT: The translation MUST sound natural and human-written, \
     as if created by a professional human translator. Avoid robotic or machine-like phrasing.";

pub const LITERAL_INSTRUCTION: &str = "Provide a literal, word-for-word translation that stays as close to the original as possible.";

pub const EXPLANATIONS_INSTRUCTION: &str = "After the translation, provide explanations of key terms, idioms, \
     or culturally specific references in brackets.";

pub const DEEP_ANALYSIS_INSTRUCTION: &str = "After the translation, provide a deeper analysis of the text's meaning, \
     context, and nuances.";

pub const EXAMPLES_INSTRUCTION: &str =
    "Include relevant examples to illustrate complex concepts or terminology.";

pub const EXTRACT_DOCUMENT_INSTRUCTION: &str =
    "Please extract and translate all text from the uploaded document.";

const CONTENT_HEADER: &str = "Text to translate:";

/// Builds the instruction sent to the model.
///
/// Paragraphs are appended in a fixed order: preamble, languages, style,
/// format, context (skipped for `general`), natural-tone requirement, the
/// optional flag instructions, and finally the content itself. Unknown
/// style, format or context keys produce an empty instruction after their
/// label instead of failing.
pub fn build_prompt(request: &TranslationRequest) -> String {
    let mut prompt = String::new();

    push_paragraph(&mut prompt, PREAMBLE);

    let target = language_name(&request.target_language);
    if request.is_auto_detect() {
        push_paragraph(
            &mut prompt,
            &format!("Please detect the source language automatically and translate to {target}."),
        );
    } else {
        let source = language_name(&request.source_language);
        push_paragraph(
            &mut prompt,
            &format!("Translate the following text from {source} to {target}."),
        );
    }

    push_paragraph(
        &mut prompt,
        &format!("Translation Style: {}", request.style.instruction()),
    );
    push_paragraph(
        &mut prompt,
        &format!("Format: {}", request.format.instruction()),
    );

    if request.context != Selection::Preset(TranslationContext::General) {
        push_paragraph(
            &mut prompt,
            &format!("Context: {}", request.context.instruction()),
        );
    }

    push_paragraph(&mut prompt, NATURAL_TONE_INSTRUCTION);

    let options = &request.options;
    let flagged = [
        (options.literal, LITERAL_INSTRUCTION),
        (options.with_explanations, EXPLANATIONS_INSTRUCTION),
        (options.deep_analysis, DEEP_ANALYSIS_INSTRUCTION),
        (options.with_examples, EXAMPLES_INSTRUCTION),
    ];
    for (_, instruction) in flagged.iter().filter(|(enabled, _)| *enabled) {
        push_paragraph(&mut prompt, instruction);
    }

    match request.raw_text.as_deref() {
        Some(text) if is_placeholder(text) => {
            prompt.push_str("\n\n");
            prompt.push_str(EXTRACT_DOCUMENT_INSTRUCTION);
        }
        Some(text) if !text.is_empty() => {
            prompt.push_str("\n\n");
            prompt.push_str(CONTENT_HEADER);
            prompt.push('\n');
            prompt.push_str(text);
        }
        // An attachment without placeholder text still needs the extract instruction
        _ if request.attachment.is_some() => {
            prompt.push_str("\n\n");
            prompt.push_str(EXTRACT_DOCUMENT_INSTRUCTION);
        }
        _ => {}
    }

    prompt
}

fn push_paragraph(prompt: &mut String, text: &str) {
    prompt.push_str(text);
    prompt.push_str("\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{OutputFormat, Preset, TranslationStyle};
    use crate::translation::request::{
        Attachment, DOCX_PLACEHOLDER, DocumentKind, PDF_PLACEHOLDER, TranslationOptions,
    };

    fn text_request(text: &str) -> TranslationRequest {
        TranslationRequest {
            raw_text: Some(text.to_string()),
            ..TranslationRequest::new("el")
        }
    }

    const FLAG_INSTRUCTIONS: [&str; 4] = [
        LITERAL_INSTRUCTION,
        EXPLANATIONS_INSTRUCTION,
        DEEP_ANALYSIS_INSTRUCTION,
        EXAMPLES_INSTRUCTION,
    ];

    #[test]
    fn test_default_request_exact_prompt() {
        let prompt = build_prompt(&text_request("Hello"));
        let expected = format!(
            "{PREAMBLE}\n\n\
             Please detect the source language automatically and translate to Greek.\n\n\
             Translation Style: {}\n\n\
             Format: {}\n\n\
             {NATURAL_TONE_INSTRUCTION}\n\n\
             \n\nText to translate:\nHello",
            TranslationStyle::Professional.instruction(),
            OutputFormat::Paragraphs.instruction(),
        );
        assert_eq!(prompt, expected);
    }

    #[test]
    fn test_auto_detect_has_no_direct_clause() {
        let prompt = build_prompt(&text_request("Hola"));
        assert!(prompt.contains("detect the source language automatically"));
        assert!(!prompt.contains("Translate the following text from"));
    }

    #[test]
    fn test_explicit_source_language() {
        let request = TranslationRequest {
            source_language: "en".to_string(),
            ..text_request("Good morning")
        };
        let prompt = build_prompt(&request);
        assert!(prompt.contains("Translate the following text from English to Greek."));
        assert!(!prompt.contains("automatically"));
    }

    #[test]
    fn test_unknown_language_codes_pass_through() {
        let request = TranslationRequest {
            source_language: "xx".to_string(),
            target_language: "yy".to_string(),
            ..text_request("text")
        };
        let prompt = build_prompt(&request);
        assert!(prompt.contains("Translate the following text from xx to yy."));
    }

    #[test]
    fn test_every_style_sentence_appears_verbatim() {
        for style in TranslationStyle::ALL {
            let request = TranslationRequest {
                style: (*style).into(),
                ..text_request("text")
            };
            let prompt = build_prompt(&request);
            assert!(
                prompt.contains(&format!("Translation Style: {}\n\n", style.instruction())),
                "missing style sentence for {}",
                style.key()
            );
        }
    }

    #[test]
    fn test_unknown_style_keeps_empty_line() {
        let request = TranslationRequest {
            style: Selection::parse("pirate"),
            ..text_request("text")
        };
        let prompt = build_prompt(&request);
        assert!(prompt.contains("Translation Style: \n\n"));
        assert!(!prompt.contains("pirate"));
    }

    #[test]
    fn test_every_format_sentence_appears_verbatim() {
        for format in OutputFormat::ALL {
            let request = TranslationRequest {
                format: (*format).into(),
                ..text_request("text")
            };
            let prompt = build_prompt(&request);
            assert!(prompt.contains(&format!("Format: {}\n\n", format.instruction())));
        }
    }

    #[test]
    fn test_unknown_format_keeps_empty_line() {
        let request = TranslationRequest {
            format: Selection::parse("sonnet"),
            ..text_request("text")
        };
        assert!(build_prompt(&request).contains("Format: \n\n"));
    }

    #[test]
    fn test_general_context_has_no_clause() {
        let prompt = build_prompt(&text_request("text"));
        assert!(!prompt.contains("Context:"));
    }

    #[test]
    fn test_non_general_contexts_append_sentence() {
        for context in TranslationContext::ALL
            .iter()
            .filter(|c| **c != TranslationContext::General)
        {
            let request = TranslationRequest {
                context: (*context).into(),
                ..text_request("text")
            };
            let prompt = build_prompt(&request);
            assert!(prompt.contains(&format!("Context: {}\n\n", context.instruction())));
        }
    }

    #[test]
    fn test_unknown_context_appends_empty_clause() {
        let request = TranslationRequest {
            context: Selection::parse("courtroom"),
            ..text_request("text")
        };
        assert!(build_prompt(&request).contains("Context: \n\n"));
    }

    #[test]
    fn test_natural_tone_always_present() {
        let request = TranslationRequest {
            options: TranslationOptions {
                literal: true,
                with_explanations: true,
                deep_analysis: true,
                with_examples: true,
            },
            ..text_request("text")
        };
        assert!(build_prompt(&request).contains(NATURAL_TONE_INSTRUCTION));
        assert!(build_prompt(&text_request("text")).contains(NATURAL_TONE_INSTRUCTION));
    }

    #[test]
    fn test_all_flag_combinations() {
        for mask in 0u8..16 {
            let enabled = [
                mask & 1 != 0,
                mask & 2 != 0,
                mask & 4 != 0,
                mask & 8 != 0,
            ];
            let request = TranslationRequest {
                options: TranslationOptions {
                    literal: enabled[0],
                    with_explanations: enabled[1],
                    deep_analysis: enabled[2],
                    with_examples: enabled[3],
                },
                ..text_request("text")
            };
            let prompt = build_prompt(&request);

            let mut last_position = 0;
            for (instruction, on) in FLAG_INSTRUCTIONS.iter().zip(enabled) {
                match prompt.find(instruction) {
                    Some(position) => {
                        assert!(on, "mask {mask:04b}: unexpected '{instruction}'");
                        assert!(position > last_position, "mask {mask:04b}: out of order");
                        last_position = position;
                    }
                    None => assert!(!on, "mask {mask:04b}: missing '{instruction}'"),
                }
            }
        }
    }

    #[test]
    fn test_flags_come_after_natural_tone_and_before_content() {
        let request = TranslationRequest {
            options: TranslationOptions {
                with_examples: true,
                ..TranslationOptions::default()
            },
            ..text_request("CONTENT")
        };
        let prompt = build_prompt(&request);
        let tone = prompt.find(NATURAL_TONE_INSTRUCTION).unwrap_or(usize::MAX);
        let examples = prompt.find(EXAMPLES_INSTRUCTION).unwrap_or(0);
        let content = prompt.find("CONTENT").unwrap_or(0);
        assert!(tone < examples);
        assert!(examples < content);
    }

    #[test]
    fn test_plain_text_appended_at_end() {
        let text = "Line one\nLine two";
        let prompt = build_prompt(&text_request(text));
        assert!(prompt.ends_with(&format!("\n\nText to translate:\n{text}")));
    }

    #[test]
    fn test_pdf_placeholder_becomes_extract_instruction() {
        let prompt = build_prompt(&text_request(PDF_PLACEHOLDER));
        assert!(prompt.ends_with(EXTRACT_DOCUMENT_INSTRUCTION));
        assert!(!prompt.contains("[PDF CONTENT"));
        assert!(!prompt.contains("Text to translate:"));
    }

    #[test]
    fn test_docx_placeholder_becomes_extract_instruction() {
        let prompt = build_prompt(&text_request(DOCX_PLACEHOLDER));
        assert!(prompt.ends_with(EXTRACT_DOCUMENT_INSTRUCTION));
        assert!(!prompt.contains("[DOCX CONTENT"));
    }

    #[test]
    fn test_empty_text_has_no_content_clause() {
        let prompt = build_prompt(&text_request(""));
        assert!(prompt.ends_with(&format!("{NATURAL_TONE_INSTRUCTION}\n\n")));
    }

    #[test]
    fn test_attachment_without_text_requests_extraction() {
        let request = TranslationRequest {
            attachment: Some(Attachment::new(DocumentKind::Docx, vec![1, 2, 3])),
            ..TranslationRequest::new("en")
        };
        assert!(build_prompt(&request).ends_with(EXTRACT_DOCUMENT_INSTRUCTION));
    }
}
