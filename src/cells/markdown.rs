//! Translation of markdown cell text.

use super::protect::protect;
use crate::errors::TranslateError;
use crate::translation::{Delay, ResilientTranslator, TranslationProvider};

const FENCE: &str = "```";

/// Prefixes of image syntax that is never translated.
const IMAGE_PREFIXES: [&str; 2] = ["![", "<img"];

/// Header prefixes, longest first.
const HEADERS: [&str; 6] = ["### ", "###", "## ", "##", "# ", "#"];

/// Translates one markdown text unit.
///
/// A unit spanning several lines is split at its image lines outside fenced
/// blocks; image lines are kept and the text between them is translated as
/// separate units. Within a unit, checked in order: bare fences and lone line
/// breaks are returned as is, image lines are returned as is, a leading
/// header prefix is kept while the rest is translated, anything else goes
/// through the placeholder pipeline with its trailing line breaks held back
/// from the provider.
pub async fn translate_markdown<P, D>(
    text: &str,
    translator: &ResilientTranslator<P, D>,
) -> Result<String, TranslateError>
where
    P: TranslationProvider,
    D: Delay,
{
    if !text.trim_end_matches('\n').contains('\n') {
        return translate_unit(text, translator).await;
    }

    let mut translated = String::with_capacity(text.len());
    let mut pending = String::new();
    let mut in_fence = false;

    for line in text.split_inclusive('\n') {
        if is_fence(line) {
            in_fence = !in_fence;
        }
        if !in_fence && is_image(line) {
            if !pending.is_empty() {
                translated.push_str(&translate_unit(&pending, translator).await?);
                pending.clear();
            }
            translated.push_str(line);
        } else {
            pending.push_str(line);
        }
    }
    if !pending.is_empty() {
        translated.push_str(&translate_unit(&pending, translator).await?);
    }

    Ok(translated)
}

async fn translate_unit<P, D>(
    text: &str,
    translator: &ResilientTranslator<P, D>,
) -> Result<String, TranslateError>
where
    P: TranslationProvider,
    D: Delay,
{
    if matches!(text, "\n" | "```" | "```\n") {
        return Ok(text.to_string());
    }

    if is_image(text) {
        return Ok(text.to_string());
    }

    if let Some(header) = HEADERS.iter().find(|header| text.starts_with(*header)) {
        let rest = &text[header.len()..];
        let translated = translate_protected(rest, translator).await?;
        return Ok(format!("{header}{}", keep_line_breaks(rest, &translated)));
    }

    let body = text.trim_end_matches('\n');
    let translated = translate_protected(body, translator).await?;
    Ok(keep_line_breaks(text, &translated))
}

/// Translates a markdown cell line by line.
///
/// Used for cells whose fences do not pair up, where the placeholder
/// pipeline cannot see a complete code block. A line starting with a fence
/// toggles a skip flag; fence lines and everything between them pass through
/// untouched. A line that opens and closes a fence on its own, such as
/// ```` ```x = 1``` ````, passes through without toggling.
pub async fn translate_markdown_lines<P, D>(
    lines: &[String],
    translator: &ResilientTranslator<P, D>,
) -> Result<Vec<String>, TranslateError>
where
    P: TranslationProvider,
    D: Delay,
{
    let mut in_fence = false;
    let mut translated = Vec::with_capacity(lines.len());

    for line in lines {
        if is_fence(line) {
            in_fence = !in_fence;
            translated.push(line.clone());
        } else if in_fence || is_inline_fence(line) {
            translated.push(line.clone());
        } else {
            translated.push(translate_markdown(line, translator).await?);
        }
    }

    Ok(translated)
}

/// Protects `text`, translates the surrogate and restores the spans.
///
/// Text made only of protected spans and punctuation is returned without a
/// provider call.
pub async fn translate_protected<P, D>(
    text: &str,
    translator: &ResilientTranslator<P, D>,
) -> Result<String, TranslateError>
where
    P: TranslationProvider,
    D: Delay,
{
    let protected = protect(text);
    if !protected.has_translatable_text() {
        return Ok(text.to_string());
    }
    let translated = translator.translate(&protected.surrogate).await?;
    Ok(protected.restore(&translated))
}

/// Whether the fence lines of a cell pair up.
pub fn fences_balanced(lines: &[String]) -> bool {
    lines.iter().filter(|line| is_fence(line)).count() % 2 == 0
}

/// A line opening or closing a fenced block.
fn is_fence(line: &str) -> bool {
    line.starts_with(FENCE) && !is_inline_fence(line)
}

fn is_inline_fence(line: &str) -> bool {
    let line = line.trim_end();
    line.starts_with(FENCE) && line.len() > 2 * FENCE.len() && line.ends_with(FENCE)
}

fn is_image(line: &str) -> bool {
    IMAGE_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
}

/// Gives `translated` the same run of trailing line breaks as `original`.
fn keep_line_breaks(original: &str, translated: &str) -> String {
    let breaks = original.len() - original.trim_end_matches('\n').len();
    let mut out = translated.trim_end_matches('\n').to_string();
    out.push_str(&original[original.len() - breaks..]);
    out
}
