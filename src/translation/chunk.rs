//! Request-size chunking shared by the web backends.

use std::future::Future;

use crate::errors::ProviderError;

/// Splits `text` into pieces of at most `max_chars` characters.
///
/// Cuts prefer the last line break inside the window, then the last
/// whitespace; a single word longer than the window is cut where it must be.
/// The pieces concatenate back to `text` exactly.
pub fn split_chunks(text: &str, max_chars: usize) -> Vec<&str> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut rest = text;

    while rest.chars().count() > max_chars {
        let limit = rest
            .char_indices()
            .nth(max_chars)
            .map_or(rest.len(), |(idx, _)| idx);
        let window = &rest[..limit];

        let cut = window
            .rfind('\n')
            .or_else(|| window.rfind(char::is_whitespace))
            .map(|idx| idx + window[idx..].chars().next().map_or(1, char::len_utf8))
            .filter(|&cut| cut > 0)
            .unwrap_or(limit);

        chunks.push(&rest[..cut]);
        rest = &rest[cut..];
    }

    if !rest.is_empty() {
        chunks.push(rest);
    }
    chunks
}

/// Translates `text` chunk by chunk through `request`.
///
/// Whitespace around each chunk never reaches the backend; it is put back
/// verbatim around the translated core, since web backends trim it.
pub async fn translate_in_chunks<F, Fut>(
    text: &str,
    max_chars: usize,
    mut request: F,
) -> Result<String, ProviderError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<String, ProviderError>>,
{
    let mut translated = String::with_capacity(text.len());

    for chunk in split_chunks(text, max_chars) {
        let core = chunk.trim();
        if core.is_empty() {
            translated.push_str(chunk);
            continue;
        }
        let leading = &chunk[..chunk.len() - chunk.trim_start().len()];
        let trailing = &chunk[chunk.trim_end().len()..];

        translated.push_str(leading);
        translated.push_str(request(core.to_string()).await?.trim());
        translated.push_str(trailing);
    }

    Ok(translated)
}
