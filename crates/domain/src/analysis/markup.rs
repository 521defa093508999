use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

/// Markup: an HTML comment up to `-->`, or `<` followed by a non-space
/// character up to the first `>` outside a quoted attribute value.
/// Unclosed comments, tags and quotes run to end of input. A bare `<` before
/// whitespace or a quote is text.
fn tag_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"(?s)<!--.*?(?:-->|\z)|<(?:[^\s>"'](?:"[^"]*(?:"|\z)|'[^']*(?:'|\z)|[^>"'])*)?(?:>|\z)"#,
        )
        .expect("valid tag pattern")
    })
}

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace pattern"))
}

/// Removes markup tags from `content`, leaving the text between them.
///
/// Borrows when there is nothing to strip. Applying it twice gives the same
/// result as applying it once.
pub fn strip_tags(content: &str) -> Cow<'_, str> {
    if !content.contains('<') {
        return Cow::Borrowed(content);
    }
    tag_pattern().replace_all(content, "")
}

/// Cleans a single-line text field the way the host sanitizes form input:
/// tags removed, whitespace runs (line breaks and tabs included) collapsed to
/// one space, ends trimmed.
pub fn sanitize_text_field(input: &str) -> String {
    let stripped = strip_tags(input);
    whitespace_run().replace_all(stripped.trim(), " ").into_owned()
}
