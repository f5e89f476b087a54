//! Small helpers over the `scraper` DOM shared by the parsers.

use scraper::{ElementRef, Node, Selector};

/// Parses a constant CSS selector.
///
/// Only ever called with literals from this crate; a bad selector is a
/// programming error.
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

/// Collects an element's text with every `<br>` rendered as a newline, so
/// multi-line cells (teacher lists, periods) split cleanly afterwards.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in element.descendants() {
        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if el.name() == "br" => out.push('\n'),
            _ => {}
        }
    }
    out
}

/// Removes ASCII whitespace. Ideographic spaces (U+3000) are content here:
/// they separate words inside room and category names.
pub(crate) fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_ascii_whitespace()).collect()
}

/// Concatenated, trimmed text of every matched element.
pub(crate) fn select_text<'a, I>(matches: I) -> String
where
    I: IntoIterator<Item = ElementRef<'a>>,
{
    matches
        .into_iter()
        .map(element_text)
        .collect::<String>()
        .trim()
        .to_owned()
}
