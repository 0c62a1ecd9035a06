// src/core/html.rs
//
// Thin helpers over `scraper` shared by the page specs.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

/// Compile a selector. Callers pass literals or ids they control; a bad one
/// yields None instead of a panic.
pub fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(s) => Some(s),
        Err(e) => {
            loge!("Html: bad selector {css:?}: {e:?}");
            None
        }
    }
}

/// All text under an element, whitespace collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    normalize_ws(&raw)
}

/// `<tag id="...">` lookup.
pub fn find_by_id<'a>(doc: &'a Html, tag: &str, id: &str) -> Option<ElementRef<'a>> {
    let sel = selector(&format!(r#"{tag}[id="{id}"]"#))?;
    doc.select(&sel).next()
}

/// `value` attribute of the first `<input name="...">`.
pub fn input_value(doc: &Html, name: &str) -> Option<String> {
    let sel = selector(&format!(r#"input[name="{name}"]"#))?;
    doc.select(&sel)
        .next()
        .and_then(|el| el.value().attr("value"))
        .map(|v| v.trim().to_string())
}

/// Direct-ish cells of a row. Nested tables are not expected on this portal.
pub fn cells<'a>(row: ElementRef<'a>, td: &Selector) -> Vec<ElementRef<'a>> {
    row.select(td).collect()
}
