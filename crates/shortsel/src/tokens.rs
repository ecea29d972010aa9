//! Candidate token extraction for a single element

use crate::config::Options;
use crate::host::SelectorHost;

/// Raw selector tokens of one element
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenRecord {
    /// `#id`, absent when the element has no usable id
    pub id: Option<String>,
    /// Lowercased tag name
    pub tag: String,
    /// `.class` tokens in class-list order
    pub classes: Vec<String>,
    /// `[name="value"]` tokens in allow-list order
    pub attributes: Vec<String>,
    /// Structural token, absent for a parentless element
    pub nth_child: Option<String>,
}

/// Derive the candidate tokens of an element
pub fn extract_tokens<H: SelectorHost>(
    host: &H,
    element: H::Element,
    options: &Options,
) -> TokenRecord {
    let id = host
        .id(element)
        .filter(|id| !id.is_empty() && !options.is_excluded(id))
        .map(|id| format!("#{id}"));

    let mut classes: Vec<String> = Vec::new();
    for class in host.class_list(element) {
        if class.is_empty() || options.is_excluded(&class) {
            continue;
        }
        let token = format!(".{class}");
        if !classes.contains(&token) {
            classes.push(token);
        }
    }

    TokenRecord {
        id,
        tag: host.tag_name(element).to_ascii_lowercase(),
        classes,
        attributes: attribute_tokens(host, element, options),
        nth_child: host.position(element).map(|(index, count)| nth_child_token(index, count)),
    }
}

/// One token per allow-list pattern: the first attribute whose name matches
fn attribute_tokens<H: SelectorHost>(host: &H, element: H::Element, options: &Options) -> Vec<String> {
    let patterns = options.attribute_patterns();
    if patterns.is_empty() {
        return Vec::new();
    }

    let attributes = host.attributes(element);
    patterns
        .iter()
        .filter_map(|pattern| attributes.iter().find(|(name, _)| pattern.is_match(name)))
        .map(|(name, value)| format!(r#"[{name}="{value}"]"#))
        .collect()
}

/// Structural token for a zero-based position among `count` siblings
pub fn nth_child_token(index: usize, count: usize) -> String {
    if index == 0 {
        ":first-child".to_string()
    } else if index + 1 == count {
        ":last-child".to_string()
    } else {
        format!(":nth-child({})", index + 1)
    }
}
