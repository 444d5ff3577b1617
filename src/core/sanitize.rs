// src/core/sanitize.rs

/// Decode the handful of entities the portal actually emits, both the HTML
/// kind and the `\uXXXX` escapes left over from JSON-embedded markup.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&#39;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("\\u0027", "'")
        .replace("\\u0022", "\"")
        .replace("\\u0026", "&")
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

/// Undo JSON string escaping of slashes and quotes (`09\/07\/2023` → `09/07/2023`).
pub fn unescape_json(s: &str) -> String {
    s.replace("\\/", "/").replace("\\\"", "\"")
}

/// Visible text of a captured field: entities decoded, whitespace collapsed.
pub fn clean_text(s: &str) -> String {
    normalize_ws(&normalize_entities(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entities_decode_both_flavours() {
        assert_eq!(normalize_entities("AP&nbsp;BIO &amp; LAB"), "AP BIO & LAB");
        assert_eq!(normalize_entities("O\\u0027Neil"), "O'Neil");
    }

    #[test]
    fn ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  Period \t 3\n"), "Period 3");
    }

    #[test]
    fn json_slashes_unescape() {
        assert_eq!(unescape_json("09\\/07\\/2023"), "09/07/2023");
    }

    #[test]
    fn clean_text_combines() {
        assert_eq!(clean_text("  ENGLISH&nbsp;&nbsp;II "), "ENGLISH II");
    }
}
