//! Inline span rewriting for headings, list items and paragraphs
//!
//! Rules run in a fixed order over a single line of content:
//! - `**text**` becomes `<b>text</b>`
//! - `__text__` becomes `<em>text</em>`
//! - `[[text]]` becomes the lowercase hex MD5 digest of `text`
//! - `((text))` becomes `text` with every `c`/`C` removed
//!
//! Each rule scans with a cursor that resumes right after the last
//! replacement, so substituted text is never matched again by the same rule.
//! Later rules do see the output of earlier ones: a `[[...]]` span may hash
//! text that already contains `<b>` tags.

const BOLD_DELIMITER: &str = "**";
const EMPHASIS_DELIMITER: &str = "__";
const HASH_OPEN: &str = "[[";
const HASH_CLOSE: &str = "]]";
const STRIP_OPEN: &str = "((";
const STRIP_CLOSE: &str = "))";

/// Resolve every recognized inline span in `text`
pub fn rewrite_inline(text: &str) -> String {
    let text = rewrite_bold(text);
    let text = rewrite_emphasis(&text);
    let text = rewrite_hash_directives(&text);
    rewrite_strip_directives(&text)
}

/// `**a**` -> `<b>a</b>`. An odd delimiter count leaves a dangling `<b>`.
pub fn rewrite_bold(text: &str) -> String {
    rewrite_toggled(text, BOLD_DELIMITER, "<b>", "</b>")
}

/// `__a__` -> `<em>a</em>`. An odd delimiter count leaves a dangling `<em>`.
pub fn rewrite_emphasis(text: &str) -> String {
    rewrite_toggled(text, EMPHASIS_DELIMITER, "<em>", "</em>")
}

/// `[[a]]` -> md5 hex digest of `a`
pub fn rewrite_hash_directives(text: &str) -> String {
    rewrite_enclosed(text, HASH_OPEN, HASH_CLOSE, |inner| format!("{:x}", md5::compute(inner.as_bytes())))
}

/// `((a))` -> `a` without any `c` or `C`
pub fn rewrite_strip_directives(text: &str) -> String {
    rewrite_enclosed(text, STRIP_OPEN, STRIP_CLOSE, |inner| {
        inner.chars().filter(|c| !c.eq_ignore_ascii_case(&'c')).collect()
    })
}

/// Replace occurrences of `delimiter` alternately with `open` and `close`,
/// starting with `open`.
fn rewrite_toggled(text: &str, delimiter: &str, open: &str, close: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut opened = false;

    while let Some(offset) = text[cursor..].find(delimiter) {
        let start = cursor + offset;
        result.push_str(&text[cursor..start]);
        result.push_str(if opened { close } else { open });
        opened = !opened;
        cursor = start + delimiter.len();
    }

    result.push_str(&text[cursor..]);
    result
}

/// Replace each `open ... close` span with `replace(inner)`.
///
/// The closing delimiter is searched for after the opening one; when there is
/// none the rest of the text is left as-is.
fn rewrite_enclosed<F>(text: &str, open: &str, close: &str, replace: F) -> String
where
    F: Fn(&str) -> String,
{
    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;

    while let Some(open_offset) = text[cursor..].find(open) {
        let open_start = cursor + open_offset;
        let inner_start = open_start + open.len();
        let Some(close_offset) = text[inner_start..].find(close) else {
            break;
        };
        let inner_end = inner_start + close_offset;

        result.push_str(&text[cursor..open_start]);
        result.push_str(&replace(&text[inner_start..inner_end]));
        cursor = inner_end + close.len();
    }

    result.push_str(&text[cursor..]);
    result
}
