// src/specs/token.rs
//! Landing page spec: the hidden Struts anti-forgery token.
//!
//! `<input type="hidden" name="org.apache.struts.taglib.html.TOKEN" value="…">`
//!
//! One token pairs with exactly one POST; callers must not cache it.

use scraper::Html;

use crate::config::consts::TOKEN_FIELD;
use crate::core::html::input_value;

/// None when the field is missing or blank (expired session, layout drift,
/// anti-bot page).
pub fn extract_token(html_doc: &str) -> Option<String> {
    let doc = Html::parse_document(html_doc);
    input_value(&doc, TOKEN_FIELD).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_hidden_token() {
        let doc = r#"
            <html><body>
              <form name="knowPRUrbanForm" method="post" action="/knowPRUrban.se">
                <input type="hidden" name="org.apache.struts.taglib.html.TOKEN" value="8f3c2b9e51d0a7">
                <select name="property(district_id)"><option value="24">Vikarabad</option></select>
              </form>
            </body></html>
        "#;
        assert_eq!(extract_token(doc).as_deref(), Some("8f3c2b9e51d0a7"));
    }

    #[test]
    fn missing_or_blank_token_is_none() {
        assert_eq!(extract_token("<html><body>Access denied</body></html>"), None);
        let blank = r#"<input type="hidden" name="org.apache.struts.taglib.html.TOKEN" value="">"#;
        assert_eq!(extract_token(blank), None);
    }
}
