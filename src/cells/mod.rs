mod code;
mod markdown;
mod protect;

pub use code::{COMMENT_MARKER, FIELD_TOKEN, translate_code, translate_code_line};
pub use markdown::{
    fences_balanced, translate_markdown, translate_markdown_lines, translate_protected,
};
pub use protect::{CODE_TOKEN, HEADER_TOKEN, LINK_TOKEN, Link, Protected, protect};
