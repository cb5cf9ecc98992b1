//! Translation of the human-readable parts of code cells.
//!
//! Only two things ever reach the provider: the text of a line comment and
//! the literal of a formatted `print` call. Everything else stays local.
//! There is no lexer; a comment marker inside a string literal is taken for a
//! comment.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use super::protect::{fill, substitute};
use crate::errors::TranslateError;
use crate::translation::{Delay, ResilientTranslator, TranslationProvider};

/// Line-comment marker of the languages notebooks are usually written in.
pub const COMMENT_MARKER: char = '#';

pub const FIELD_TOKEN: &str = "xx_fstring_field_xx";

const FORMATTED_PRINTS: [&str; 2] = ["print(f\"", "print(f'"];

// expect is safe: the patterns are compile-time constants
#[allow(clippy::expect_used)]
static PRINT_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"print\(\s*f?(?:"(?P<double>[^"\n]*)"|'(?P<single>[^'\n]*)')"#)
        .expect("valid print pattern")
});

#[allow(clippy::expect_used)]
static FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^{}\n]*\}").expect("valid field pattern"));

#[allow(clippy::expect_used)]
static FIELD_TOKEN_ANY_CASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i){FIELD_TOKEN}")).expect("valid token pattern")
});

/// Translates every physical line of `code`, keeping line breaks.
pub async fn translate_code<P, D>(
    code: &str,
    marker: char,
    translator: &ResilientTranslator<P, D>,
) -> Result<String, TranslateError>
where
    P: TranslationProvider,
    D: Delay,
{
    let mut lines = Vec::new();
    for line in code.split('\n') {
        lines.push(translate_code_line(line, marker, translator).await?);
    }
    Ok(lines.join("\n"))
}

/// Translates a single line without a line break.
pub async fn translate_code_line<P, D>(
    line: &str,
    marker: char,
    translator: &ResilientTranslator<P, D>,
) -> Result<String, TranslateError>
where
    P: TranslationProvider,
    D: Delay,
{
    if let Some((code, comment)) = line.split_once(marker) {
        let comment = comment.trim();
        if comment.is_empty() {
            return Ok(line.to_string());
        }
        let translated = translator.translate(comment).await?;
        return Ok(format!("{code}{marker} {}", translated.trim()));
    }

    if FORMATTED_PRINTS.iter().any(|print| line.contains(print)) {
        if let Some((range, quote)) = print_literal(line) {
            let translated = translate_literal(&line[range.clone()], translator).await?;
            let translated = translated.replace('\n', " ").replace(quote, &format!("\\{quote}"));
            return Ok(format!("{}{translated}{}", &line[..range.start], &line[range.end..]));
        }
    }

    Ok(line.to_string())
}

/// Locates the literal of the first `print` call on the line.
fn print_literal(line: &str) -> Option<(Range<usize>, char)> {
    let caps = PRINT_LITERAL.captures(line)?;
    caps.name("double")
        .map(|m| (m.range(), '"'))
        .or_else(|| caps.name("single").map(|m| (m.range(), '\'')))
}

/// Translates a print literal with its `{...}` fields held back.
async fn translate_literal<P, D>(
    literal: &str,
    translator: &ResilientTranslator<P, D>,
) -> Result<String, TranslateError>
where
    P: TranslationProvider,
    D: Delay,
{
    let fields: Vec<Range<usize>> = FIELD.find_iter(literal).map(|m| m.range()).collect();
    let originals: Vec<&str> = fields.iter().map(|range| &literal[range.clone()]).collect();
    let surrogate = substitute(literal, &fields, FIELD_TOKEN);

    if !FIELD_TOKEN_ANY_CASE
        .replace_all(&surrogate, "")
        .chars()
        .any(char::is_alphanumeric)
    {
        return Ok(literal.to_string());
    }

    let translated = translator.translate(&surrogate).await?;
    Ok(fill(translated.trim(), &FIELD_TOKEN_ANY_CASE, &originals))
}
