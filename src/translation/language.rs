//! Language codes accepted by the translation backends.

use super::backend::Backend;
use crate::errors::ConfigError;
use crate::ui::Style;

/// Source-language code that asks the backend to detect the language.
pub const AUTO_DETECT: &str = "auto";

/// Language codes (ISO 639-1) and their English names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("az", "Azerbaijani"),
    ("be", "Belarusian"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fil", "Filipino"),
    ("fr", "French"),
    ("ga", "Irish"),
    ("gl", "Galician"),
    ("gu", "Gujarati"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("hy", "Armenian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ka", "Georgian"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("la", "Latin"),
    ("lo", "Lao"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mk", "Macedonian"),
    ("ml", "Malayalam"),
    ("mn", "Mongolian"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("mt", "Maltese"),
    ("my", "Myanmar (Burmese)"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("ps", "Pashto"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tl", "Tagalog"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese (Simplified)"),
    ("zh-TW", "Chinese (Traditional)"),
];

/// Prints the language codes `backend` accepts to stdout.
pub fn print_languages(backend: Backend) {
    println!(
        "{}",
        Style::header(format!("Supported language codes for {backend} (ISO 639-1)"))
    );
    if backend.detects_source() {
        println!(
            "  {:5} {}",
            Style::code(AUTO_DETECT),
            Style::secondary("Detect automatically (source only)")
        );
    }
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("  {:5} {}", Style::code(code), Style::secondary(name));
    }
}

/// Resolves a language argument to the code `backend` expects.
///
/// Accepts a code exactly as listed (`pt`, `zh-TW`) or an English language
/// name in any case (`Portuguese`). `auto` is accepted only as a source
/// language and only by backends that detect it.
pub fn resolve_language(
    backend: Backend,
    input: &str,
    is_source: bool,
) -> Result<String, ConfigError> {
    if input == AUTO_DETECT && is_source && backend.detects_source() {
        return Ok(AUTO_DETECT.to_string());
    }

    SUPPORTED_LANGUAGES
        .iter()
        .find(|(code, name)| *code == input || name.eq_ignore_ascii_case(input))
        .map(|(code, _)| (*code).to_string())
        .ok_or_else(|| ConfigError::UnsupportedLanguage {
            backend: backend.to_string(),
            code: input.to_string(),
            available: available_codes(backend, is_source),
        })
}

fn available_codes(backend: Backend, is_source: bool) -> String {
    let auto = (is_source && backend.detects_source()).then_some(AUTO_DETECT);
    auto.into_iter()
        .chain(SUPPORTED_LANGUAGES.iter().map(|(code, _)| *code))
        .collect::<Vec<_>>()
        .join(", ")
}
