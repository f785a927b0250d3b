//! A small DOM-query capability over the `scraper` crate.
//!
//! The extractors never touch parser internals directly; everything they
//! need is "find all elements", "find the first element", "read text" and
//! "read an attribute". [`DomQuery`] names that capability explicitly and
//! is implemented for whole documents and for element subtrees, so card
//! extraction can scope its selectors to the results container.

use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;

/// Parse a CSS selector string, surfacing malformed input as a typed error.
pub fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Query a parsed document or subtree by CSS selector.
///
/// `'doc` is the lifetime of the underlying parsed document; matched
/// elements borrow from it, not from the handle the query ran on.
pub trait DomQuery<'doc>: Copy {
    /// Every element matching `selector`, in document order.
    fn find_all(self, selector: &Selector) -> Vec<ElementRef<'doc>>;

    /// The first element matching `selector`, if any.
    fn find_first(self, selector: &Selector) -> Option<ElementRef<'doc>>;
}

impl<'doc> DomQuery<'doc> for &'doc Html {
    fn find_all(self, selector: &Selector) -> Vec<ElementRef<'doc>> {
        self.select(selector).collect()
    }

    fn find_first(self, selector: &Selector) -> Option<ElementRef<'doc>> {
        self.select(selector).next()
    }
}

impl<'doc> DomQuery<'doc> for ElementRef<'doc> {
    fn find_all(self, selector: &Selector) -> Vec<ElementRef<'doc>> {
        self.select(selector).collect()
    }

    fn find_first(self, selector: &Selector) -> Option<ElementRef<'doc>> {
        self.select(selector).next()
    }
}

/// Collect an element's text content into a single trimmed string.
pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<Vec<_>>().join(" ").trim().to_string()
}

/// Read an attribute off an element.
pub fn attr_of<'doc>(element: ElementRef<'doc>, name: &str) -> Option<&'doc str> {
    element.value().attr(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <div id="results">
            <a class="job" href="/job/1">First</a>
            <a class="job" href="/job/2">Second</a>
        </div>
        <a class="job" href="/job/3">Outside</a>
    "#;

    #[test]
    fn test_find_all_on_document() {
        let document = Html::parse_document(PAGE);
        let selector = parse_selector(".job").unwrap();
        assert_eq!(document.find_all(&selector).len(), 3);
    }

    #[test]
    fn test_find_all_scoped_to_subtree() {
        let document = Html::parse_document(PAGE);
        let results = document
            .find_first(&parse_selector("#results").unwrap())
            .unwrap();
        let jobs = results.find_all(&parse_selector(".job").unwrap());
        assert_eq!(jobs.len(), 2);
    }

    #[test]
    fn test_find_first_and_text() {
        let document = Html::parse_document(PAGE);
        let selector = parse_selector(".job").unwrap();
        let first = document.find_first(&selector).unwrap();
        assert_eq!(text_of(first), "First");
    }

    #[test]
    fn test_find_first_misses() {
        let document = Html::parse_document(PAGE);
        let selector = parse_selector(".missing").unwrap();
        assert!(document.find_first(&selector).is_none());
    }

    #[test]
    fn test_attr_of() {
        let document = Html::parse_document(PAGE);
        let selector = parse_selector(".job").unwrap();
        let first = document.find_first(&selector).unwrap();
        assert_eq!(attr_of(first, "href"), Some("/job/1"));
        assert_eq!(attr_of(first, "data-missing"), None);
    }

    #[test]
    fn test_text_of_joins_nested_nodes() {
        let document = Html::parse_document(
            r#"<div class="title"><a>Python <b>Developer</b></a></div>"#,
        );
        let title = document
            .find_first(&parse_selector(".title").unwrap())
            .unwrap();
        assert_eq!(text_of(title), "Python  Developer");
    }

    #[test]
    fn test_parse_selector_rejects_garbage() {
        let err = parse_selector("][").unwrap_err();
        assert!(matches!(err, ScrapeError::Selector { .. }));
    }
}
