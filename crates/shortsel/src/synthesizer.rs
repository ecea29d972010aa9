//! Selector synthesis
//!
//! The synthesizer escalates through priority levels (prefixes of the
//! configured kind order). At each level every ancestor of the target, root
//! first, gets the cheapest segment that is unique among its siblings. The
//! first level whose assembled chain is unique in the document and survives
//! minimization produces the answer.

use crate::chain::{SelectorChain, SelectorSegment};
use crate::combinations::{combinations, combine_tokens};
use crate::config::{Options, SelectorType};
use crate::host::SelectorHost;
use crate::minimizer::minimize;
use crate::oracle::UniquenessOracle;
use crate::tokens::{extract_tokens, TokenRecord};

/// Builds selectors for elements of one host under one set of options
pub struct Synthesizer<'a, H: SelectorHost> {
    pub(crate) host: &'a H,
    pub(crate) options: &'a Options,
    pub(crate) oracle: UniquenessOracle<'a, H>,
}

impl<'a, H: SelectorHost> Synthesizer<'a, H> {
    pub fn new(host: &'a H, options: &'a Options) -> Self {
        Self {
            host,
            options,
            oracle: UniquenessOracle::new(host),
        }
    }

    /// Shortest selector found for `element`, or `None`
    pub fn synthesize(&self, element: H::Element) -> Option<String> {
        self.resolving_chains(element).find_map(|chain| {
            let minimized = minimize(self.host, &[element], &chain)?;
            Some(minimized.to_selector()).filter(|s| !s.is_empty())
        })
    }

    /// First assembled chain that resolves to `element` alone, unminimized
    pub fn unique_chain(&self, element: H::Element) -> Option<SelectorChain> {
        self.resolving_chains(element).next()
    }

    /// Every candidate for `element` at the full priority order, in search
    /// order, without any uniqueness check
    pub fn leaf_candidates(&self, element: H::Element) -> Vec<String> {
        let record = extract_tokens(self.host, element, self.options);
        self.local_candidates(&record, self.options.selector_types())
    }

    /// Chains unique in the document, one per successful level, in level order
    fn resolving_chains(&self, element: H::Element) -> impl Iterator<Item = SelectorChain> + '_ {
        // Root first; records do not depend on the level
        let lineage: Vec<(H::Element, TokenRecord)> = self
            .host
            .lineage(element)
            .into_iter()
            .rev()
            .map(|el| (el, extract_tokens(self.host, el, self.options)))
            .collect();

        self.options.priority_levels().filter_map(move |level| {
            tracing::debug!("trying priority level {:?}", level);
            let chain = self.chain_at_level(&lineage, level)?;
            let selector = chain.to_selector();
            if self.oracle.is_unique(element, &selector) {
                tracing::debug!("level {:?} resolved to {:?}", level, selector);
                Some(chain)
            } else {
                tracing::debug!("level {:?} chain {:?} is not unique", level, selector);
                None
            }
        })
    }

    /// Assemble one chain; `None` when the root gets no segment
    fn chain_at_level(
        &self,
        lineage: &[(H::Element, TokenRecord)],
        level: &[SelectorType],
    ) -> Option<SelectorChain> {
        let mut slots = Vec::with_capacity(lineage.len());
        for (depth, (el, record)) in lineage.iter().enumerate() {
            let segment = self.local_segment(*el, record, level);
            if depth == 0 && segment.is_none() {
                tracing::debug!("no root segment at level {:?}", level);
                return None;
            }
            tracing::trace!("depth {} -> {:?}", depth, segment);
            slots.push(segment);
        }
        Some(SelectorChain::new(slots))
    }

    fn local_segment(
        &self,
        element: H::Element,
        record: &TokenRecord,
        kinds: &[SelectorType],
    ) -> Option<SelectorSegment> {
        self.local_candidates(record, kinds)
            .into_iter()
            .find(|candidate| self.oracle.is_unique_among_siblings(element, candidate))
            .map(SelectorSegment::new)
    }

    /// Candidates of the enabled kinds, best ranked first
    ///
    /// Every non-empty mix of kinds is a candidate group; a group ranks by
    /// the mean configured position of its kinds, ties keeping enumeration
    /// order (fewer kinds first).
    fn local_candidates(&self, record: &TokenRecord, kinds: &[SelectorType]) -> Vec<String> {
        let max = self.options.max_combination();

        // Compound order: tag leads, structural token trails
        let groups: Vec<(SelectorType, Vec<String>)> = [
            (SelectorType::Tag, Some(record.tag.clone()).filter(|t| !t.is_empty()).into_iter().collect()),
            (SelectorType::Id, record.id.iter().cloned().collect()),
            (SelectorType::Class, combine_tokens(&record.classes, 1, max)),
            (SelectorType::Attributes, combine_tokens(&record.attributes, 1, max)),
            (SelectorType::NthChild, record.nth_child.iter().cloned().collect()),
        ]
        .into_iter()
        .filter(|(kind, tokens)| kinds.contains(kind) && !tokens.is_empty())
        .collect();

        let mut ranked: Vec<(usize, usize, Vec<String>)> = combinations(&groups, 1, groups.len())
            .into_iter()
            .map(|mix| {
                let rank: usize = mix.iter().map(|(kind, _)| self.rank(*kind)).sum();
                (rank, mix.len(), compound_product(&mix))
            })
            .collect();
        // Stable; compares rank_a / len_a with rank_b / len_b
        ranked.sort_by(|a, b| (a.0 * b.1).cmp(&(b.0 * a.1)));

        ranked.into_iter().flat_map(|(_, _, candidates)| candidates).collect()
    }

    /// One-based position of `kind` in the configured order
    fn rank(&self, kind: SelectorType) -> usize {
        let order = self.options.selector_types();
        order.iter().position(|&k| k == kind).unwrap_or(order.len()) + 1
    }
}

/// Every concatenation taking one token per group, groups in order
///
/// Earlier groups vary fastest.
fn compound_product(groups: &[&(SelectorType, Vec<String>)]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for (_, tokens) in groups {
        if out.is_empty() {
            out = tokens.clone();
            continue;
        }
        let next = tokens
            .iter()
            .flat_map(|token| out.iter().map(move |prefix| format!("{prefix}{token}")))
            .collect();
        out = next;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Scope;
    use shortsel_html::{Document, HtmlParser};

    fn doc(html: &str) -> Document {
        HtmlParser::new().parse(html).unwrap()
    }

    fn record() -> TokenRecord {
        TokenRecord {
            id: None,
            tag: "li".into(),
            classes: vec![".a".into()],
            attributes: vec![],
            nth_child: Some(":first-child".into()),
        }
    }

    #[test]
    fn test_local_candidates_follow_configured_order() {
        let document = doc("<p></p>");

        let options = Options::default();
        let synth = Synthesizer::new(&document, &options);
        assert_eq!(
            synth.local_candidates(&record(), options.selector_types()),
            vec![
                ".a",
                "li.a",
                ".a:first-child",
                "li.a:first-child",
                "li",
                "li:first-child",
                ":first-child",
            ]
        );

        let options = Options::new().with_selector_types([SelectorType::NthChild, SelectorType::Tag]);
        let synth = Synthesizer::new(&document, &options);
        assert_eq!(
            synth.local_candidates(&record(), options.selector_types()),
            vec![":first-child", "li:first-child", "li"]
        );
    }

    #[test]
    fn test_local_candidates_mix_class_combinations() {
        let document = doc("<p></p>");
        let options = Options::new()
            .with_selector_types([SelectorType::Id, SelectorType::Class])
            .with_max_combination(2);
        let synth = Synthesizer::new(&document, &options);
        let record = TokenRecord {
            id: Some("#i".into()),
            classes: vec![".a".into(), ".b".into()],
            ..record()
        };

        assert_eq!(
            synth.local_candidates(&record, options.selector_types()),
            vec!["#i", "#i.a", "#i.b", "#i.a.b", ".a", ".b", ".a.b"]
        );
    }

    #[test]
    fn test_swapped_priority_changes_result() {
        let document = doc("<div><p>a</p><span>b</span></div>");
        let span = document.query("span", Scope::Document).unwrap()[0];

        let tag_first = Options::new().with_selector_types([SelectorType::Tag, SelectorType::NthChild]);
        assert_eq!(
            Synthesizer::new(&document, &tag_first).synthesize(span).as_deref(),
            Some("span")
        );

        let nth_first = Options::new().with_selector_types([SelectorType::NthChild, SelectorType::Tag]);
        let selector = Synthesizer::new(&document, &nth_first).synthesize(span).unwrap();
        assert!(selector.ends_with(":last-child"), "got {selector:?}");
        assert_eq!(document.query(&selector, Scope::Document).unwrap(), vec![span]);
    }

    #[test]
    fn test_prefers_id() {
        let document = doc(r#"<div><span id="hello">a</span><span>b</span></div>"#);
        let options = Options::default();
        let target = document.get_element_by_id("hello").unwrap();

        let selector = Synthesizer::new(&document, &options).synthesize(target);
        assert_eq!(selector.as_deref(), Some("#hello"));
    }

    #[test]
    fn test_unique_chain_reaches_root() {
        let document = doc(r#"<div><span class="a">a</span><span class="b">b</span></div>"#);
        let options = Options::default();
        let target = document.query(".b", Scope::Document).unwrap()[0];

        let chain = Synthesizer::new(&document, &options).unique_chain(target).unwrap();
        assert_eq!(chain.to_selector(), "html > body > div > .b");
    }

    #[test]
    fn test_root_without_segment_abandons_level() {
        let document = doc(r#"<p id="solo">x</p>"#);
        let options = Options::new().with_selector_types([SelectorType::Id]);
        let target = document.get_element_by_id("solo").unwrap();

        // html has no id, so no level can anchor a chain
        assert_eq!(Synthesizer::new(&document, &options).synthesize(target), None);
    }

    #[test]
    fn test_empty_priority_list_fails() {
        let document = doc(r#"<p id="solo">x</p>"#);
        let options = Options::new().with_selector_types(Vec::new());
        let target = document.get_element_by_id("solo").unwrap();
        assert_eq!(Synthesizer::new(&document, &options).synthesize(target), None);
    }
}
