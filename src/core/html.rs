// src/core/html.rs
//
// Just enough HTML handling to walk one exported table. Tag matching is
// case-insensitive and tolerant of attributes; nothing here validates
// markup.

use super::sanitize::{normalize_entities, normalize_ws};

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Inner content of the first `open_pat …>` … `close_pat` region.
/// `open_pat` may stop short of the tag's attributes ("<table" finds
/// `<table border=1>` too).
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let open = lc.find(&to_lower(open_pat))?;
    let body = open + s[open..].find('>')? + 1;
    let close = body + lc[body..].find(&to_lower(close_pat))?;
    Some(&s[body..close])
}

/// Byte range of the next `<tag …>…</tag>` block at or after `from`.
/// The end index sits past the closing tag.
pub fn next_tag_block_ci(s: &str, open: &str, close: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let start = from + lc.get(from..)?.find(&to_lower(open))?;
    let open_end = start + s[start..].find('>')? + 1;
    let end = open_end + lc[open_end..].find(&to_lower(close))? + close.len();
    Some((start, end))
}

/// Content between a block's opening `…>` and its last `<`.
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Cell text as the operator sees it: inner markup stripped, entities
/// decoded, whitespace collapsed and trimmed.
pub fn cell_text(block: &str) -> String {
    strip_tags(&normalize_entities(&inner_after_open_tag(block)))
}

pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}
