//! Selector segments and the ancestor chain they form

use std::fmt;

/// Token or token combination chosen for one ancestor level
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectorSegment(String);

impl SelectorSegment {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Bare tag or structural token (no id, class or attribute part)
    pub fn is_low_specificity(&self) -> bool {
        !self.0.contains(['#', '.', '='])
    }
}

impl fmt::Display for SelectorSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One optional segment per ancestor level, outermost first
///
/// Adjacent segments render joined by `" > "`. Gaps collapse into the
/// descendant combinator, so `[a, None, b]` renders as `"a b"`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectorChain {
    slots: Vec<Option<SelectorSegment>>,
}

impl SelectorChain {
    pub fn new(slots: Vec<Option<SelectorSegment>>) -> Self {
        Self { slots }
    }

    /// Chain without gaps
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        segments
            .into_iter()
            .map(|s| Some(SelectorSegment::new(s)))
            .collect()
    }

    pub fn slots(&self) -> &[Option<SelectorSegment>] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<&SelectorSegment> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Number of slots, gaps included
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no slot holds a segment
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Copy of the chain with one slot replaced
    pub fn with_slot(&self, index: usize, segment: Option<SelectorSegment>) -> Self {
        let mut slots = self.slots.clone();
        if let Some(slot) = slots.get_mut(index) {
            *slot = segment;
        }
        Self { slots }
    }

    /// Copy of the chain with one slot emptied
    pub fn without(&self, index: usize) -> Self {
        self.with_slot(index, None)
    }

    /// Render the chain as a selector string
    pub fn to_selector(&self) -> String {
        let mut out = String::new();
        let mut previous: Option<usize> = None;
        for (index, segment) in self.slots.iter().enumerate() {
            let Some(segment) = segment else { continue };
            match previous {
                Some(p) if p + 1 == index => out.push_str(" > "),
                Some(_) => out.push(' '),
                None => {}
            }
            out.push_str(segment.as_str());
            previous = Some(index);
        }
        out
    }
}

impl FromIterator<Option<SelectorSegment>> for SelectorChain {
    fn from_iter<I: IntoIterator<Item = Option<SelectorSegment>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for SelectorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_selector())
    }
}
