//! shortsel CSS Selectors
//!
//! Parsing and matching of the selector subset shortsel emits and
//! understands: compounds of type, `#id`, `.class`, attribute and
//! structural pseudo-class selectors, joined by the descendant or child
//! combinator.

mod parser;
mod query;
pub mod selectors;

pub use parser::SelectorParser;
pub use query::ElementQuery;
pub use selectors::{
    AttributeMatcher, AttributeSelector, Combinator, ComplexSelector, CompoundSelector,
    NthExpression, PseudoClass, SelectorComponent, SelectorList, SelectorPart,
};

/// Parse a selector list
pub fn parse_selector(selector: &str) -> Result<SelectorList, SelectorError> {
    SelectorParser::new().parse(selector)
}

/// Selector parsing error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unexpected {found:?} at offset {offset}")]
    UnexpectedChar { found: char, offset: usize },

    #[error("unexpected end of selector")]
    UnexpectedEnd,

    #[error("invalid identifier {0:?}")]
    InvalidIdentifier(String),

    #[error("unsupported pseudo-class :{0}")]
    UnsupportedPseudoClass(String),

    #[error("invalid An+B expression {0:?}")]
    InvalidNth(String),
}
