use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

/// A character reference already present in the input: named, decimal or hex.
fn entity_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^&(?:[A-Za-z][A-Za-z0-9]{0,31}|#[0-9]{1,7}|#[xX][0-9A-Fa-f]{1,6});").expect("valid entity pattern")
    })
}

/// Escapes `&`, `<`, `>`, `"` and `'` for use in element text or attribute values.
///
/// An `&` that already starts a character reference (`&amp;`, `&#039;`,
/// `&#x27;`) is kept as is, so escaping twice changes nothing.
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 16);
    for (at, ch) in input.char_indices() {
        match ch {
            '&' if entity_pattern().is_match(&input[at..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}
