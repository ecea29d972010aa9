//! shortsel
//!
//! Synthesizes the shortest CSS selector that identifies an element (or
//! exactly a set of elements) in a document.
//!
//! # Example
//! ```rust,ignore
//! use shortsel::{shortest_selector, Options};
//!
//! let doc = shortsel_html::parse(r#"<ul><li>a</li><li id="b">b</li></ul>"#)?;
//! let b = doc.get_element_by_id("b").unwrap();
//! assert_eq!(shortest_selector(&doc, b, &Options::default()).as_deref(), Some("#b"));
//! ```
//!
//! Any document model can be used by implementing [`SelectorHost`]; one is
//! provided for [`shortsel_dom::Document`].

mod chain;
mod combinations;
mod common;
mod config;
mod document;
mod host;
mod minimizer;
mod oracle;
mod synthesizer;
mod tokens;

pub use chain::{SelectorChain, SelectorSegment};
pub use combinations::{combinations, combine_tokens};
pub use config::{Options, OptionsConfig, SelectorType, DEFAULT_MAX_COMBINATION};
pub use host::{Scope, SelectorHost};
pub use minimizer::minimize;
pub use oracle::UniquenessOracle;
pub use synthesizer::Synthesizer;
pub use tokens::{extract_tokens, nth_child_token, TokenRecord};

/// Shortest selector matching `element` alone
pub fn shortest_selector<H: SelectorHost>(
    host: &H,
    element: H::Element,
    options: &Options,
) -> Option<String> {
    Synthesizer::new(host, options).synthesize(element)
}

/// Shortest selector matching exactly `elements`
pub fn common_selector<H: SelectorHost>(
    host: &H,
    elements: &[H::Element],
    options: &Options,
) -> Option<String> {
    Synthesizer::new(host, options).synthesize_common(elements)
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("combination size must be at least 1, got {0}")]
    InvalidCombinationSize(usize),
}
