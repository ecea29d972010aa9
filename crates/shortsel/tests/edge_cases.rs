//! Edge case tests for shortsel
//!
//! Degenerate documents, tokens the matcher rejects and unusual options.

use shortsel::{common_selector, shortest_selector, Options, Scope, SelectorHost, SelectorType};
use shortsel_html::{Document, HtmlParser};
use shortsel_dom::NodeId;

fn parse(html: &str) -> Document {
    HtmlParser::new().parse(html).unwrap()
}

fn select(doc: &Document, selector: &str) -> Vec<NodeId> {
    doc.query(selector, Scope::Document).unwrap()
}

// ============================================================================
// DOCUMENT SHAPE
// ============================================================================

#[test]
fn test_empty_input_body() {
    let doc = parse("");
    assert_eq!(
        shortest_selector(&doc, doc.body(), &Options::default()).as_deref(),
        Some("body")
    );
}

#[test]
fn test_document_element() {
    let doc = parse("<p>x</p>");
    assert_eq!(
        shortest_selector(&doc, doc.document_element(), &Options::default()).as_deref(),
        Some("html")
    );
}

#[test]
fn test_deep_nesting() {
    let mut html = String::new();
    for _ in 0..60 {
        html.push_str("<div>");
    }
    html.push_str(r#"<span id="deep">x</span>"#);
    for _ in 0..60 {
        html.push_str("</div>");
    }
    let doc = parse(&html);
    let deep = doc.get_element_by_id("deep").unwrap();

    assert_eq!(
        shortest_selector(&doc, deep, &Options::default()).as_deref(),
        Some("#deep")
    );
}

#[test]
fn test_only_children_nested() {
    let doc = parse("<div><div><div><em>x</em></div></div></div>");
    let em = select(&doc, "em")[0];
    assert_eq!(shortest_selector(&doc, em, &Options::default()).as_deref(), Some("em"));
}

// ============================================================================
// TOKENS THE MATCHER REJECTS
// ============================================================================

#[test]
fn test_class_starting_with_digit_falls_back() {
    let doc = parse(r#"<p class="1st">a</p><p>b</p>"#);
    let first = select(&doc, "p")[0];

    let selector = shortest_selector(&doc, first, &Options::default()).unwrap();
    assert!(!selector.contains("1st"), "got {selector:?}");
    assert_eq!(select(&doc, &selector), vec![first]);
}

#[test]
fn test_attribute_value_with_quote_falls_back() {
    let doc = parse(r#"<i data-x='a"b'>1</i><i>2</i>"#);
    let first = select(&doc, "i")[0];
    let options = Options::new().with_attribute_patterns(["^data-"]).unwrap();

    let selector = shortest_selector(&doc, first, &options).unwrap();
    assert!(!selector.contains("data-x"), "got {selector:?}");
    assert_eq!(select(&doc, &selector), vec![first]);
}

// ============================================================================
// OPTIONS
// ============================================================================

#[test]
fn test_no_selector_types() {
    let doc = parse(r#"<p id="x">a</p>"#);
    let p = doc.get_element_by_id("x").unwrap();
    let options = Options::new().with_selector_types(Vec::new());
    assert_eq!(shortest_selector(&doc, p, &options), None);
}

#[test]
fn test_id_only_cannot_anchor() {
    let doc = parse(r#"<p id="x">a</p>"#);
    let p = doc.get_element_by_id("x").unwrap();
    let options = Options::new().with_selector_types([SelectorType::Id]);
    assert_eq!(shortest_selector(&doc, p, &options), None);
}

#[test]
fn test_everything_excluded_uses_structure() {
    let doc = parse(r#"<p id="a" class="a">1</p><p id="b" class="b">2</p>"#);
    let second = doc.get_element_by_id("b").unwrap();
    let options = Options::new().with_exclude_pattern(".*").unwrap();

    let selector = shortest_selector(&doc, second, &options).unwrap();
    assert!(!selector.contains(['#', '.']), "got {selector:?}");
    assert_eq!(select(&doc, &selector), vec![second]);
}

#[test]
fn test_combination_limit() {
    let doc = parse(
        r#"<b class="x y">1</b><b class="x">2</b><b class="y">3</b>"#,
    );
    let first = select(&doc, "b")[0];

    let pair = Options::new().with_selector_types([SelectorType::Class, SelectorType::Tag]);
    assert_eq!(shortest_selector(&doc, first, &pair).as_deref(), Some(".x.y"));

    let single = pair.clone().with_max_combination(1);
    assert_eq!(shortest_selector(&doc, first, &single), None);
}

#[test]
fn test_common_without_shared_leaf() {
    let doc = parse(r#"<p class="a">1</p><span class="b">2</span><em>3</em>"#);
    let targets = [select(&doc, "p")[0], select(&doc, "span")[0]];
    let options = Options::new().with_selector_types([SelectorType::Class, SelectorType::Tag]);

    assert_eq!(common_selector(&doc, &targets, &options), None);
}

#[test]
fn test_common_with_duplicates() {
    let doc = parse(r#"<p class="a">1</p><p class="a">2</p><p>3</p>"#);
    let ps = select(&doc, ".a");
    let doubled = [ps[0], ps[1], ps[0]];

    assert_eq!(
        common_selector(&doc, &doubled, &Options::default()).as_deref(),
        Some(".a")
    );
}

#[test]
fn test_host_tag_names() {
    let doc = parse("<SECTION>x</SECTION>");
    let section = select(&doc, "section")[0];
    assert_eq!(doc.tag_name(section), "section");
    assert_eq!(doc.parent(section), Some(doc.body()));
}
