/// Escapes text for HTML element content. Ampersands go first so earlier
/// replacements are not re-escaped.
pub fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Escapes text for an HTML attribute value. Backticks are stripped in
/// addition to the standard entities.
pub fn escape_attr(raw: &str) -> String {
    escape_html(raw).replace('`', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_the_five_html_entities() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#039;&lt;/a&gt;"
        );
    }

    #[test]
    fn ampersand_is_escaped_before_the_rest() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn attr_escape_strips_backticks() {
        assert_eq!(escape_attr("https://x.test/`path`"), "https://x.test/path");
        assert_eq!(escape_attr(r#"a"b`c"#), "a&quot;bc");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape_html("Falcon Desk"), "Falcon Desk");
    }
}
