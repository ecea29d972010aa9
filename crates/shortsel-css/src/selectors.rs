//! Selector AST and matching
//!
//! Matching runs right to left: the last compound is tested against the
//! candidate element, then combinators walk up the ancestor chain. The
//! descendant combinator backtracks, so `a b > c` is matched exactly.

use shortsel_dom::{DomTree, ElementData, NodeId};

/// A comma-separated list of complex selectors
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorList(pub Vec<ComplexSelector>);

impl SelectorList {
    /// Check if any selector in the list matches the element
    pub fn matches(&self, tree: &DomTree, element: NodeId) -> bool {
        self.0.iter().any(|s| s.matches(tree, element))
    }
}

/// Compounds joined by combinators, left to right
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexSelector {
    pub parts: Vec<SelectorPart>,
}

/// One compound plus its relation to the part on its left
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorPart {
    pub compound: CompoundSelector,
    /// `None` for the leftmost part
    pub combinator: Option<Combinator>,
}

/// Combinator between two compounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// `a b`
    Descendant,
    /// `a > b`
    Child,
}

/// Simple selectors that must all match one element
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundSelector(pub Vec<SelectorComponent>);

/// A component of a compound selector
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorComponent {
    /// Universal selector *
    Universal,
    /// Type selector (tag name)
    Type(String),
    /// ID selector #id
    Id(String),
    /// Class selector .class
    Class(String),
    /// Attribute selector [attr], [attr=value], etc.
    Attribute(AttributeSelector),
    /// Structural pseudo-class
    PseudoClass(PseudoClass),
}

/// Supported pseudo-classes
#[derive(Debug, Clone, PartialEq)]
pub enum PseudoClass {
    Root,
    Empty,
    FirstChild,
    LastChild,
    OnlyChild,
    NthChild(NthExpression),
    NthLastChild(NthExpression),
}

/// An+B expression for :nth-* selectors
#[derive(Debug, Clone, PartialEq)]
pub struct NthExpression {
    /// Coefficient (A in An+B)
    pub a: i32,
    /// Offset (B in An+B)
    pub b: i32,
}

impl NthExpression {
    /// "odd" (2n+1)
    pub fn odd() -> Self {
        Self { a: 2, b: 1 }
    }

    /// "even" (2n)
    pub fn even() -> Self {
        Self { a: 2, b: 0 }
    }

    /// A plain index (0n+b)
    pub fn index(n: i32) -> Self {
        Self { a: 0, b: n }
    }

    pub fn new(a: i32, b: i32) -> Self {
        Self { a, b }
    }

    /// Parse from string like "2n+1", "odd", "even", "3"
    pub fn parse(s: &str) -> Option<Self> {
        let s: String = s
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();

        match s.as_str() {
            "odd" => return Some(Self::odd()),
            "even" => return Some(Self::even()),
            "" => return None,
            _ => {}
        }

        if let Ok(n) = s.parse::<i32>() {
            return Some(Self::index(n));
        }

        let n_pos = s.find('n')?;
        let a = match &s[..n_pos] {
            "" | "+" => 1,
            "-" => -1,
            a_str => a_str.parse().ok()?,
        };
        let rest = &s[n_pos + 1..];
        let b = if rest.is_empty() {
            0
        } else if rest.starts_with('+') || rest.starts_with('-') {
            rest.parse().ok()?
        } else {
            return None;
        };

        Some(Self::new(a, b))
    }

    /// Check if index n (1-based) matches this expression
    pub fn matches(&self, n: i32) -> bool {
        if self.a == 0 {
            return n == self.b;
        }

        // Widened so extreme a/b from the parser cannot overflow
        let (a, diff) = (i64::from(self.a), i64::from(n) - i64::from(self.b));
        if a > 0 {
            diff >= 0 && diff % a == 0
        } else {
            diff <= 0 && diff % a == 0
        }
    }
}

/// Attribute selector
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSelector {
    pub name: String,
    pub matcher: Option<AttributeMatcher>,
    pub case_insensitive: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeMatcher {
    /// [attr=value] - exact match
    Exact(String),
    /// [attr~=value] - whitespace-separated list contains
    Contains(String),
    /// [attr|=value] - exact or prefix with hyphen
    DashMatch(String),
    /// [attr^=value] - starts with
    Prefix(String),
    /// [attr$=value] - ends with
    Suffix(String),
    /// [attr*=value] - contains substring
    Substring(String),
}

impl AttributeSelector {
    /// Check if an attribute value matches
    pub fn matches(&self, value: Option<&str>) -> bool {
        let (matcher, val) = match (&self.matcher, value) {
            (None, found) => return found.is_some(),
            (Some(_), None) => return false,
            (Some(matcher), Some(val)) => (matcher, val),
        };

        let fold = |s: &str| {
            if self.case_insensitive {
                s.to_lowercase()
            } else {
                s.to_string()
            }
        };
        let val = fold(val);

        match matcher {
            AttributeMatcher::Exact(expected) => val == fold(expected),
            AttributeMatcher::Contains(expected) => {
                let expected = fold(expected);
                val.split_ascii_whitespace().any(|w| w == expected)
            }
            AttributeMatcher::DashMatch(expected) => {
                let expected = fold(expected);
                val == expected || val.starts_with(&format!("{}-", expected))
            }
            // Empty prefix/suffix/substring never matches
            AttributeMatcher::Prefix(expected) => {
                !expected.is_empty() && val.starts_with(&fold(expected))
            }
            AttributeMatcher::Suffix(expected) => {
                !expected.is_empty() && val.ends_with(&fold(expected))
            }
            AttributeMatcher::Substring(expected) => {
                !expected.is_empty() && val.contains(&fold(expected))
            }
        }
    }
}

/// Element context for selector matching
pub struct ElementContext<'a> {
    tree: &'a DomTree,
    node: NodeId,
    element: &'a ElementData,
}

impl<'a> ElementContext<'a> {
    /// Context for an element node; `None` for other nodes
    pub fn new(tree: &'a DomTree, node: NodeId) -> Option<Self> {
        tree.element(node).map(|element| Self { tree, node, element })
    }

    fn tag_name(&self) -> &str {
        self.tree.resolve(self.element.name)
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.element
            .attrs
            .iter()
            .find(|a| self.tree.resolve(a.name).eq_ignore_ascii_case(name))
            .map(|a| a.value.as_str())
    }

    /// 1-based index among element siblings, and sibling count
    fn sibling_position(&self) -> (usize, usize) {
        self.tree
            .element_position(self.node)
            .map(|(index, count)| (index + 1, count))
            .unwrap_or((1, 1))
    }
}

/// Match a selector component against an element
pub fn match_component(component: &SelectorComponent, element: &ElementContext) -> bool {
    match component {
        SelectorComponent::Universal => true,
        SelectorComponent::Type(tag) => element.tag_name().eq_ignore_ascii_case(tag),
        SelectorComponent::Id(id) => element.element.id.as_deref() == Some(id.as_str()),
        SelectorComponent::Class(class) => element.element.has_class(class),
        SelectorComponent::Attribute(attr) => attr.matches(element.attribute(&attr.name)),
        SelectorComponent::PseudoClass(pseudo) => match_pseudo_class(pseudo, element),
    }
}

/// Match a pseudo-class against an element
pub fn match_pseudo_class(pseudo: &PseudoClass, element: &ElementContext) -> bool {
    match pseudo {
        PseudoClass::Root => element.tree.parent_element(element.node).is_none(),
        PseudoClass::Empty => element.tree.children(element.node).all(|(_, child)| {
            !child.is_element() && child.as_text().is_none_or(str::is_empty)
        }),
        PseudoClass::FirstChild => element.sibling_position().0 == 1,
        PseudoClass::LastChild => {
            let (index, count) = element.sibling_position();
            index == count
        }
        PseudoClass::OnlyChild => element.sibling_position().1 == 1,
        PseudoClass::NthChild(expr) => expr.matches(element.sibling_position().0 as i32),
        PseudoClass::NthLastChild(expr) => {
            let (index, count) = element.sibling_position();
            expr.matches((count - index + 1) as i32)
        }
    }
}

impl CompoundSelector {
    /// Check if every component matches the element
    pub fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        match ElementContext::new(tree, node) {
            Some(ctx) => self.0.iter().all(|c| match_component(c, &ctx)),
            None => false,
        }
    }
}

impl ComplexSelector {
    /// Check if the selector matches the element
    pub fn matches(&self, tree: &DomTree, element: NodeId) -> bool {
        match self.parts.len() {
            0 => false,
            n => self.matches_from(tree, element, n - 1),
        }
    }

    fn matches_from(&self, tree: &DomTree, node: NodeId, index: usize) -> bool {
        let part = &self.parts[index];
        if !part.compound.matches(tree, node) {
            return false;
        }
        if index == 0 {
            return true;
        }

        match part.combinator.unwrap_or(Combinator::Descendant) {
            Combinator::Child => tree
                .parent_element(node)
                .is_some_and(|parent| self.matches_from(tree, parent, index - 1)),
            Combinator::Descendant => {
                let mut cursor = tree.parent_element(node);
                while let Some(ancestor) = cursor {
                    if self.matches_from(tree, ancestor, index - 1) {
                        return true;
                    }
                    cursor = tree.parent_element(ancestor);
                }
                false
            }
        }
    }
}
