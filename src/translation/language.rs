//! Language codes, display names and validation.

use anyhow::Result;

use crate::ui::Style;

/// Source language value that asks the model to detect the language itself.
pub const AUTO_DETECT: &str = "auto";

/// Supported language codes (ISO 639-1) and their names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("ar", "Arabic"),
    ("bg", "Bulgarian"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("sv", "Swedish"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese"),
    ("zh-TW", "Chinese (Traditional)"),
];

/// Returns the display name for a language code.
///
/// `auto` maps to `Auto-detect`. Unknown codes are returned unchanged.
pub fn language_name(code: &str) -> &str {
    if code == AUTO_DETECT {
        return "Auto-detect";
    }
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(code, |&(_, name)| name)
}

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported language codes (ISO 639-1)"));
    println!(
        "  {:5} {}",
        Style::code(AUTO_DETECT),
        Style::secondary("Auto-detect (source only)")
    );
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("  {:5} {}", Style::code(code), Style::secondary(name));
    }
}

/// Validates that the given target language code is supported.
///
/// # Errors
///
/// Returns an error if the language code is not in the supported list.
pub fn validate_language(lang: &str) -> Result<()> {
    if SUPPORTED_LANGUAGES.iter().any(|(code, _)| *code == lang) {
        Ok(())
    } else {
        anyhow::bail!(
            "Invalid language code: '{lang}'\n\n\
             Valid language codes (ISO 639-1): en, el, fr, de, es, it, ja, zh, ...\n\
             Run 'doctr languages' to see all supported codes."
        )
    }
}

/// Validates a source language code, which may also be `auto`.
pub fn validate_source_language(lang: &str) -> Result<()> {
    if lang == AUTO_DETECT {
        return Ok(());
    }
    validate_language(lang)
}
