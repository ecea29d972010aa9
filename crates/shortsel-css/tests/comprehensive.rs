//! Comprehensive tests for shortsel-css
//!
//! Selector matching against parsed documents.

use shortsel_css::{ElementQuery, SelectorError};
use shortsel_html::{Document, HtmlParser};

fn fixture() -> Document {
    HtmlParser::new()
        .parse(
            r#"
            <html>
              <body>
                <div id="main" class="container primary" data-value="123">
                  <ul class="list">
                    <li class="item">One</li>
                    <li class="item active">Two</li>
                    <li class="item">Three</li>
                  </ul>
                  <a href="https://example.com" target="_blank" lang="en-US">Link</a>
                </div>
                <section><div><p class="note">Deep</p></div></section>
              </body>
            </html>
            "#,
        )
        .unwrap()
}

fn count(doc: &Document, selector: &str) -> usize {
    doc.query_selector_all(doc.tree().root(), selector).unwrap().len()
}

// ============================================================================
// SIMPLE SELECTORS
// ============================================================================

#[test]
fn test_type_id_class() {
    let doc = fixture();
    assert_eq!(count(&doc, "li"), 3);
    assert_eq!(count(&doc, "LI"), 3);
    assert_eq!(count(&doc, "#main"), 1);
    assert_eq!(count(&doc, ".item"), 3);
    assert_eq!(count(&doc, ".item.active"), 1);
    assert_eq!(count(&doc, "#Main"), 0, "ids are case-sensitive");
    assert_eq!(count(&doc, "*"), doc.elements().len());
}

#[test]
fn test_attribute_selectors() {
    let doc = fixture();
    assert_eq!(count(&doc, r#"[data-value="123"]"#), 1);
    assert_eq!(count(&doc, "[target]"), 1);
    assert_eq!(count(&doc, r#"[href^="https"]"#), 1);
    assert_eq!(count(&doc, "[lang|=en]"), 1);
    assert_eq!(count(&doc, "[class~=primary]"), 1);
    assert_eq!(count(&doc, r#"[DATA-VALUE="123"]"#), 1, "attribute names ignore case");
    assert_eq!(count(&doc, r#"[data-value="12"]"#), 0);
}

#[test]
fn test_structural_pseudo_classes() {
    let doc = fixture();
    let first = doc.query_selector(doc.tree().root(), "li:first-child").unwrap().unwrap();
    let second = doc.query_selector(doc.tree().root(), "li:nth-child(2)").unwrap().unwrap();
    let last = doc.query_selector(doc.tree().root(), "li:last-child").unwrap().unwrap();

    assert_ne!(first, second);
    assert_ne!(second, last);
    assert!(doc.matches(second, ".active").unwrap());
    assert_eq!(count(&doc, "li:nth-last-child(1)"), 1);
    assert_eq!(count(&doc, "p:only-child"), 1);
    assert_eq!(count(&doc, "html:root"), 1);
    assert_eq!(count(&doc, "head:empty"), 1);
}

#[test]
fn test_nth_child_extreme_offsets() {
    let doc = fixture();
    assert_eq!(count(&doc, "li:nth-child(n-2147483648)"), 3);
    assert_eq!(count(&doc, "li:nth-child(-n+2147483647)"), 3);
    assert_eq!(count(&doc, "li:nth-last-child(-n-2147483648)"), 0);
}

// ============================================================================
// COMBINATORS
// ============================================================================

#[test]
fn test_child_and_descendant() {
    let doc = fixture();
    assert_eq!(count(&doc, "html > body > div > ul > li"), 3);
    assert_eq!(count(&doc, "body > li"), 0);
    assert_eq!(count(&doc, "body li"), 3);
    assert_eq!(count(&doc, "section div > p"), 1);
    assert_eq!(count(&doc, "body > div p"), 0);
}

#[test]
fn test_selector_list() {
    let doc = fixture();
    assert_eq!(count(&doc, "#main, .note"), 2);
}

#[test]
fn test_filter_matching_scope() {
    let doc = fixture();
    let ul = doc.query_selector(doc.tree().root(), "ul").unwrap().unwrap();
    let items: Vec<_> = doc.tree().element_children(ul).collect();

    let found = doc.filter_matching(&items, ":last-child").unwrap();
    assert_eq!(found, vec![items[2]]);
}

#[test]
fn test_closest() {
    let doc = fixture();
    let note = doc.query_selector(doc.tree().root(), ".note").unwrap().unwrap();
    let section = doc.closest(note, "section").unwrap();
    assert!(section.is_some());
    assert_eq!(doc.closest(note, ".note").unwrap(), Some(note));
    assert_eq!(doc.closest(note, "ul").unwrap(), None);
}

#[test]
fn test_invalid_selector_is_error() {
    let doc = fixture();
    let root = doc.tree().root();
    assert_eq!(doc.query_selector_all(root, ""), Err(SelectorError::Empty));
    assert!(doc.query_selector_all(root, "li ~ li").is_err());
    assert!(doc.query_selector_all(root, "a::before").is_err());
}
