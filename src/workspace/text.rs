extern crate regex;

use regex::Regex;

/// Plain-text rendering of a question description. The remote content is
/// HTML; the solution file only needs something readable behind comment
/// leaders, so block-closing tags become line breaks and the rest is
/// stripped.
pub(crate) fn html_to_text(html: &str) -> String {
    let breaks = Regex::new(r"(?i)<br\s*/?>|</p>|</li>|</ul>|</ol>|</pre>|</div>").unwrap();
    let tags = Regex::new(r"(?s)<[^>]*>").unwrap();
    let text = breaks.replace_all(html, "\n");
    let text = tags.replace_all(&text, "");
    let text = text
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&");
    let squeeze = Regex::new(r"\n{3,}").unwrap();
    squeeze.replace_all(&text, "\n\n").trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::html_to_text;

    #[test]
    fn strips_tags_and_breaks_blocks() {
        let html = "<p>Given an array.</p><p>Return indices.</p>";
        assert_eq!(html_to_text(html), "Given an array.\n\nReturn indices.");
    }

    #[test]
    fn decodes_entities() {
        assert_eq!(html_to_text("a &lt;= b &amp;&amp; c"), "a <= b && c");
    }

    #[test]
    fn keeps_plain_text_unchanged() {
        assert_eq!(html_to_text("sample input"), "sample input");
    }
}
