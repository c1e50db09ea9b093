use std::fmt::Display;

use url::form_urlencoded;

/// Escape an HTML string suitable for use anywhere in HTML: element content,
/// and single- or double-quoted attribute values. Existing character
/// references are escaped again.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => {
                out += "&amp;";
            }
            '<' => {
                out += "&lt;";
            }
            '>' => {
                out += "&gt;";
            }
            '"' => {
                out += "&quot;";
            }
            '\'' => {
                out += "&#039;";
            }
            c => {
                out.push(c);
            }
        }
    }
    out
}

/// Short alias for [`escape_html`], for use while building page markup.
pub fn e(s: &str) -> String {
    escape_html(s)
}

/// Form-encode a single query string component. Spaces become `+`.
pub fn escape_query(s: &str) -> String {
    form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

/// Form-encode `name=value` pairs joined by `&`, in the order given.
pub fn build_query<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in pairs {
        serializer.append_pair(name.as_ref(), &value.to_string());
    }
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(e("<script>"), "&lt;script&gt;");
        assert_eq!(e("a&b"), "a&amp;b");
        assert_eq!(e(""), "");
    }

    #[test]
    fn escapes_both_quote_kinds() {
        assert_eq!(
            escape_html(r#"say "hi" & 'bye'"#),
            "say &quot;hi&quot; &amp; &#039;bye&#039;"
        );
    }

    #[test]
    fn escapes_existing_entities_again() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn keeps_non_ascii_text() {
        assert_eq!(escape_html("matrícula <ok>"), "matrícula &lt;ok&gt;");
    }

    #[test]
    fn query_component_uses_form_rules() {
        assert_eq!(escape_query("a b"), "a+b");
        assert_eq!(escape_query("x&y=z/?"), "x%26y%3Dz%2F%3F");
        assert_eq!(escape_query("-._*"), "-._*");
        assert_eq!(escape_query("í"), "%C3%AD");
    }

    #[test]
    fn query_keeps_pair_order() {
        assert_eq!(
            build_query([("q", "matrícula".to_string()), ("page", 2.to_string())]),
            "q=matr%C3%ADcula&page=2"
        );
        assert_eq!(build_query([("z", 1), ("a", 2)]), "z=1&a=2");
    }

    #[test]
    fn empty_query() {
        assert_eq!(build_query(Vec::<(&str, &str)>::new()), "");
    }
}
