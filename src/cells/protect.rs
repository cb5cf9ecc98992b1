//! Placeholder substitution for markdown constructs that must not be
//! translated.
//!
//! [`protect`] swaps fenced code blocks, links (and images) and line-leading
//! header markers for fixed tokens; [`Protected::restore`] puts the originals
//! back into whatever the provider returned.
//!
//! Restoration is positional: the n-th token of a kind found in the
//! translated text receives the n-th original of that kind. Tokens are matched
//! case-insensitively since providers sometimes capitalise them. When the
//! provider duplicated tokens the originals are reused cyclically; when it
//! dropped tokens the surplus originals are discarded.

use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

use regex::{Captures, Regex};

pub const CODE_TOKEN: &str = "xx_markdown_code_xx";
pub const LINK_TOKEN: &str = "xx_markdown_link_xx";
pub const HEADER_TOKEN: &str = "xx_markdown_header_xx";

// expect is safe: the patterns are compile-time constants
#[allow(clippy::expect_used)]
static CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```[^\n`]*\n(?:.*?\n)?```").expect("valid code block pattern")
});

#[allow(clippy::expect_used)]
static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<bang>!?)\[(?P<label>[^\]\n]*)\]\((?P<target>[^)\n]*)\)")
        .expect("valid link pattern")
});

#[allow(clippy::expect_used)]
static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{1,6})[ \t]").expect("valid header pattern"));

#[allow(clippy::expect_used)]
static CODE_TOKEN_ANY_CASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i){CODE_TOKEN}")).expect("valid token pattern")
});

#[allow(clippy::expect_used)]
static LINK_TOKEN_ANY_CASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i){LINK_TOKEN}")).expect("valid token pattern")
});

#[allow(clippy::expect_used)]
static HEADER_TOKEN_ANY_CASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i){HEADER_TOKEN}")).expect("valid token pattern")
});

/// A markdown link or image, kept as its captured parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub image: bool,
    pub label: String,
    pub target: String,
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bang = if self.image { "!" } else { "" };
        write!(f, "{bang}[{}]({})", self.label, self.target)
    }
}

/// A text unit with its protected spans swapped out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Protected {
    /// The text to hand to the provider.
    pub surrogate: String,
    /// Fenced code blocks, in order of occurrence.
    pub code_blocks: Vec<String>,
    /// Links and images outside code blocks, in order of occurrence.
    pub links: Vec<Link>,
    /// Header markers (`#`..`######`) found at line starts.
    pub headers: Vec<String>,
}

/// Extracts the protected spans of `text`.
///
/// Links are substituted first, skipping any match that lies inside a fenced
/// block; code blocks are then substituted on the result, and header markers
/// last, so a `#` inside a code block is never taken for a header.
pub fn protect(text: &str) -> Protected {
    let fences: Vec<Range<usize>> = CODE_BLOCK.find_iter(text).map(|m| m.range()).collect();

    let mut links = Vec::new();
    let mut link_ranges = Vec::new();
    for caps in LINK.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        let range = whole.range();
        if fences
            .iter()
            .any(|fence| fence.start < range.end && range.start < fence.end)
        {
            continue;
        }
        links.push(Link {
            image: !caps["bang"].is_empty(),
            label: caps["label"].to_string(),
            target: caps["target"].to_string(),
        });
        link_ranges.push(range);
    }
    let text = substitute(text, &link_ranges, LINK_TOKEN);

    let code_ranges: Vec<Range<usize>> = CODE_BLOCK.find_iter(&text).map(|m| m.range()).collect();
    let code_blocks = code_ranges
        .iter()
        .map(|range| text[range.clone()].to_string())
        .collect();
    let text = substitute(&text, &code_ranges, CODE_TOKEN);

    let header_ranges: Vec<Range<usize>> = HEADER
        .captures_iter(&text)
        .filter_map(|caps| caps.get(1).map(|m| m.range()))
        .collect();
    let headers = header_ranges
        .iter()
        .map(|range| text[range.clone()].to_string())
        .collect();
    let surrogate = substitute(&text, &header_ranges, HEADER_TOKEN);

    Protected {
        surrogate,
        code_blocks,
        links,
        headers,
    }
}

impl Protected {
    /// Returns `true` if the surrogate holds anything besides tokens,
    /// whitespace and punctuation.
    pub fn has_translatable_text(&self) -> bool {
        let bare = CODE_TOKEN_ANY_CASE.replace_all(&self.surrogate, "");
        let bare = LINK_TOKEN_ANY_CASE.replace_all(&bare, "");
        let bare = HEADER_TOKEN_ANY_CASE.replace_all(&bare, "");
        bare.chars().any(char::is_alphanumeric)
    }

    /// Puts the original spans back into `translated`.
    pub fn restore(&self, translated: &str) -> String {
        let text = fill(translated, &HEADER_TOKEN_ANY_CASE, &self.headers);
        let text = fill(&text, &LINK_TOKEN_ANY_CASE, &self.links);
        fill(&text, &CODE_TOKEN_ANY_CASE, &self.code_blocks)
    }
}

/// Replaces non-overlapping, ordered `ranges` of `text` with `token`.
pub(super) fn substitute(text: &str, ranges: &[Range<usize>], token: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for range in ranges {
        out.push_str(&text[last..range.start]);
        out.push_str(token);
        last = range.end;
    }
    out.push_str(&text[last..]);
    out
}

/// Replaces every match of `token` with the next original, cycling.
pub(super) fn fill<T: fmt::Display>(text: &str, token: &Regex, originals: &[T]) -> String {
    if originals.is_empty() {
        return text.to_string();
    }
    let mut next = 0;
    token
        .replace_all(text, |_: &Captures| {
            let original = originals[next % originals.len()].to_string();
            next += 1;
            original
        })
        .into_owned()
}
