//! Lists translation styles, output formats and contexts.

use crate::style::{OutputFormat, Preset, TranslationContext, TranslationStyle};
use crate::ui::Style;

/// Prints every preset of the three dimensions with its prompt sentence.
pub fn list_presets() {
    print_table::<TranslationStyle>("Translation styles (--style)", "professional");
    println!();
    print_table::<OutputFormat>("Output formats (--format)", "paragraphs");
    println!();
    print_table::<TranslationContext>("Contexts (--context)", "general");
}

fn print_table<P: Preset>(title: &str, default_key: &str) {
    println!("{}", Style::header(title));
    for preset in P::ALL {
        let marker = if preset.key() == default_key {
            format!(" {}", Style::secondary("(default)"))
        } else {
            String::new()
        };
        println!(
            "  {}  {}{marker}",
            Style::value(format!("{:14}", preset.key())),
            Style::secondary(preset.description())
        );
        if !preset.instruction().is_empty() {
            println!("  {:14}  {}", "", Style::hint(preset.instruction()));
        }
    }
}
