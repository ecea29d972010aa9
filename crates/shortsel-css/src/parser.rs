//! Selector parser
//!
//! Grammar: `list := complex ("," complex)*`, `complex := compound
//! (combinator compound)*`. Only the descendant and child combinators are
//! understood.

use crate::selectors::{
    AttributeMatcher, AttributeSelector, Combinator, ComplexSelector, CompoundSelector,
    NthExpression, PseudoClass, SelectorComponent, SelectorList, SelectorPart,
};
use crate::SelectorError;

/// Selector parser
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectorParser;

impl SelectorParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a selector list
    pub fn parse(&self, input: &str) -> Result<SelectorList, SelectorError> {
        if input.trim().is_empty() {
            return Err(SelectorError::Empty);
        }
        let mut cursor = Cursor { input, pos: 0 };
        let mut selectors = vec![cursor.complex()?];
        loop {
            cursor.skip_whitespace();
            match cursor.peek() {
                None => break,
                Some(',') => {
                    cursor.bump();
                    selectors.push(cursor.complex()?);
                }
                Some(found) => return Err(cursor.unexpected(found)),
            }
        }
        Ok(SelectorList(selectors))
    }
}

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.bump();
        }
        self.pos > start
    }

    fn unexpected(&self, found: char) -> SelectorError {
        SelectorError::UnexpectedChar {
            found,
            offset: self.pos,
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), SelectorError> {
        match self.bump() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(SelectorError::UnexpectedChar {
                found: c,
                offset: self.pos - c.len_utf8(),
            }),
            None => Err(SelectorError::UnexpectedEnd),
        }
    }

    fn complex(&mut self) -> Result<ComplexSelector, SelectorError> {
        self.skip_whitespace();
        let mut parts = vec![SelectorPart {
            compound: self.compound()?,
            combinator: None,
        }];

        loop {
            let had_space = self.skip_whitespace();
            let combinator = match self.peek() {
                None | Some(',') => break,
                Some('>') => {
                    self.bump();
                    self.skip_whitespace();
                    Combinator::Child
                }
                Some(_) if had_space => Combinator::Descendant,
                Some(found) => return Err(self.unexpected(found)),
            };
            parts.push(SelectorPart {
                compound: self.compound()?,
                combinator: Some(combinator),
            });
        }

        Ok(ComplexSelector { parts })
    }

    fn compound(&mut self) -> Result<CompoundSelector, SelectorError> {
        let mut components = Vec::new();

        match self.peek() {
            Some('*') => {
                self.bump();
                components.push(SelectorComponent::Universal);
            }
            Some(c) if is_ident_start(c) => {
                components.push(SelectorComponent::Type(self.ident()?.to_ascii_lowercase()));
            }
            _ => {}
        }

        loop {
            match self.peek() {
                Some('#') => {
                    self.bump();
                    components.push(SelectorComponent::Id(self.name()?));
                }
                Some('.') => {
                    self.bump();
                    components.push(SelectorComponent::Class(self.ident()?));
                }
                Some('[') => {
                    self.bump();
                    components.push(SelectorComponent::Attribute(self.attribute()?));
                }
                Some(':') => {
                    self.bump();
                    components.push(SelectorComponent::PseudoClass(self.pseudo_class()?));
                }
                _ => break,
            }
        }

        if components.is_empty() {
            return Err(match self.peek() {
                Some(found) => self.unexpected(found),
                None => SelectorError::UnexpectedEnd,
            });
        }
        Ok(CompoundSelector(components))
    }

    /// A CSS name: identifier characters, may start with a digit
    fn name(&mut self) -> Result<String, SelectorError> {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            if c == '\\' {
                self.bump();
                out.push(self.bump().ok_or(SelectorError::UnexpectedEnd)?);
            } else if is_name_char(c) {
                self.bump();
                out.push(c);
            } else {
                break;
            }
        }
        if out.is_empty() {
            return Err(match self.peek() {
                Some(found) => self.unexpected(found),
                None => SelectorError::UnexpectedEnd,
            });
        }
        Ok(out)
    }

    /// A CSS identifier: a name that does not start with a digit
    fn ident(&mut self) -> Result<String, SelectorError> {
        let start = self.pos;
        let name = self.name()?;
        let mut chars = name.chars();
        let first = chars.next();
        let starts_badly = match first {
            Some(c) if c.is_ascii_digit() => true,
            Some('-') => chars.next().is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        };
        if starts_badly && !self.input[start..].starts_with('\\') {
            return Err(SelectorError::InvalidIdentifier(name));
        }
        Ok(name)
    }

    fn attribute(&mut self) -> Result<AttributeSelector, SelectorError> {
        self.skip_whitespace();
        let name = self.ident()?.to_ascii_lowercase();
        self.skip_whitespace();

        let op = match self.peek() {
            Some(']') => {
                self.bump();
                return Ok(AttributeSelector {
                    name,
                    matcher: None,
                    case_insensitive: false,
                });
            }
            Some('=') => {
                self.bump();
                '='
            }
            Some(c @ ('~' | '|' | '^' | '$' | '*')) => {
                self.bump();
                self.expect('=')?;
                c
            }
            Some(found) => return Err(self.unexpected(found)),
            None => return Err(SelectorError::UnexpectedEnd),
        };

        self.skip_whitespace();
        let value = match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.bump();
                self.quoted(quote)?
            }
            Some(_) => self.ident()?,
            None => return Err(SelectorError::UnexpectedEnd),
        };
        self.skip_whitespace();

        let case_insensitive = match self.peek() {
            Some('i' | 'I') => {
                self.bump();
                self.skip_whitespace();
                true
            }
            Some('s' | 'S') => {
                self.bump();
                self.skip_whitespace();
                false
            }
            _ => false,
        };
        self.expect(']')?;

        let matcher = match op {
            '=' => AttributeMatcher::Exact(value),
            '~' => AttributeMatcher::Contains(value),
            '|' => AttributeMatcher::DashMatch(value),
            '^' => AttributeMatcher::Prefix(value),
            '$' => AttributeMatcher::Suffix(value),
            _ => AttributeMatcher::Substring(value),
        };
        Ok(AttributeSelector {
            name,
            matcher: Some(matcher),
            case_insensitive,
        })
    }

    fn quoted(&mut self, quote: char) -> Result<String, SelectorError> {
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(SelectorError::UnexpectedEnd),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => out.push(self.bump().ok_or(SelectorError::UnexpectedEnd)?),
                Some(c) => out.push(c),
            }
        }
    }

    fn pseudo_class(&mut self) -> Result<PseudoClass, SelectorError> {
        let name = self.ident()?.to_ascii_lowercase();
        let argument = if self.peek() == Some('(') {
            self.bump();
            let start = self.pos;
            while self.peek().is_some_and(|c| c != ')') {
                self.bump();
            }
            let arg = self.input[start..self.pos].to_string();
            self.expect(')')?;
            Some(arg)
        } else {
            None
        };

        let nth = |arg: Option<String>| {
            let arg = arg.unwrap_or_default();
            NthExpression::parse(&arg).ok_or(SelectorError::InvalidNth(arg))
        };

        match (name.as_str(), argument.is_some()) {
            ("root", false) => Ok(PseudoClass::Root),
            ("empty", false) => Ok(PseudoClass::Empty),
            ("first-child", false) => Ok(PseudoClass::FirstChild),
            ("last-child", false) => Ok(PseudoClass::LastChild),
            ("only-child", false) => Ok(PseudoClass::OnlyChild),
            ("nth-child", true) => Ok(PseudoClass::NthChild(nth(argument)?)),
            ("nth-last-child", true) => Ok(PseudoClass::NthLastChild(nth(argument)?)),
            _ => Err(SelectorError::UnsupportedPseudoClass(name)),
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '-' || c == '\\' || !c.is_ascii()
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || !c.is_ascii()
}
