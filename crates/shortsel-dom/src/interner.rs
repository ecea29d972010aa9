//! String Interner - Deduplicate strings to save memory
//!
//! Tag names and attribute names repeat across a document; each distinct
//! name is stored once and referenced by a 4-byte id.

use std::collections::HashMap;

/// Interned string ID - just 4 bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct InternedString(pub u32);

impl InternedString {
    /// Empty string
    pub const EMPTY: InternedString = InternedString(0);
}

/// String interner for deduplicating names
#[derive(Debug)]
pub struct StringInterner {
    strings: Vec<Box<str>>,
    map: HashMap<Box<str>, u32>,
}

impl StringInterner {
    /// Create a new interner with common HTML names pre-interned
    pub fn new() -> Self {
        let mut interner = Self {
            strings: Vec::with_capacity(128),
            map: HashMap::with_capacity(128),
        };

        // Index 0 is always the empty string
        interner.intern("");

        const COMMON_NAMES: &[&str] = &[
            "html", "head", "body", "div", "span", "p", "a", "img",
            "ul", "ol", "li", "table", "tr", "td", "form", "input", "button",
            "id", "class", "href", "src", "name", "type", "title", "role",
        ];
        for name in COMMON_NAMES {
            interner.intern(name);
        }

        interner
    }

    /// Intern a string, returning its ID
    pub fn intern(&mut self, s: &str) -> InternedString {
        if let Some(&idx) = self.map.get(s) {
            return InternedString(idx);
        }

        let idx = self.strings.len() as u32;
        self.strings.push(s.into());
        self.map.insert(s.into(), idx);
        InternedString(idx)
    }

    /// Get the string for an interned ID
    ///
    /// Unknown ids resolve to the empty string.
    #[inline]
    pub fn get(&self, id: InternedString) -> &str {
        self.strings.get(id.0 as usize).map(|s| &**s).unwrap_or("")
    }

    /// Number of interned strings
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
