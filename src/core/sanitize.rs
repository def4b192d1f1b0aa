// src/core/sanitize.rs

/// Decode the handful of entities the export actually emits.
/// `&amp;` goes last so encoded entities stay encoded-once.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entities_decode_once() {
        assert_eq!(normalize_entities("A&nbsp;&amp;&nbsp;B"), "A & B");
        assert_eq!(normalize_entities("x &lt;= y"), "x <= y");
    }

    #[test]
    fn ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  a \t b\n"), "a b");
        assert_eq!(normalize_ws("a\u{a0}b"), "a b");
    }
}
