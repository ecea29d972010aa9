//! Greedy removal of redundant chain segments
//!
//! Two passes, left to right. The first only tries bare tag and structural
//! segments; the second tries everything still present. A removal is kept
//! only when the shortened chain still resolves to the same targets.

use crate::chain::SelectorChain;
use crate::host::SelectorHost;
use crate::oracle::UniquenessOracle;

/// Shorten `chain` while it keeps resolving to exactly `targets`
///
/// Returns `None` when `targets` is empty, when the input chain does not
/// resolve to `targets`, or when nothing would remain.
pub fn minimize<H: SelectorHost>(
    host: &H,
    targets: &[H::Element],
    chain: &SelectorChain,
) -> Option<SelectorChain> {
    if targets.is_empty() {
        return None;
    }
    let oracle = UniquenessOracle::new(host);
    if !oracle.resolves_to(targets, &chain.to_selector()) {
        tracing::debug!("chain {:?} does not resolve to its targets", chain.to_selector());
        return None;
    }

    let mut necessary = chain.clone();
    prune(&oracle, targets, &mut necessary, true);
    prune(&oracle, targets, &mut necessary, false);

    tracing::debug!("minimized {:?} to {:?}", chain.to_selector(), necessary.to_selector());
    if necessary.is_empty() {
        return None;
    }
    Some(necessary)
}

fn prune<H: SelectorHost>(
    oracle: &UniquenessOracle<'_, H>,
    targets: &[H::Element],
    chain: &mut SelectorChain,
    low_specificity_only: bool,
) {
    for index in 0..chain.len() {
        let Some(segment) = chain.get(index) else { continue };
        if low_specificity_only && !segment.is_low_specificity() {
            continue;
        }

        let candidate = chain.without(index);
        if oracle.resolves_to(targets, &candidate.to_selector()) {
            tracing::trace!("dropped segment {} at {}", segment, index);
            *chain = candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Scope;
    use shortsel_html::{Document, HtmlParser};

    fn fixture() -> Document {
        HtmlParser::new()
            .parse(
                r#"
                <div class="card"><span id="x">target</span></div>
                <div class="card"><span>other</span></div>
                <div><span class="card">third</span></div>
                "#,
            )
            .unwrap()
    }

    #[test]
    fn test_unique_id_drops_everything_else() {
        let doc = HtmlParser::new()
            .parse(
                r#"
                <div><section class="card"><span id="x">t</span></section></div>
                <div><section class="card"><span>o</span></section></div>
                "#,
            )
            .unwrap();
        let x = doc.get_element_by_id("x").unwrap();
        let chain = SelectorChain::from_segments(["div", ".card", "#x"]);

        let minimized = minimize(&doc, &[x], &chain).unwrap();
        assert_eq!(minimized.to_selector(), "#x");
    }

    #[test]
    fn test_keeps_what_is_needed() {
        let doc = fixture();
        let spans = doc.query("span", Scope::Document).unwrap();
        let chain = SelectorChain::from_segments(["html", "body", "div.card", "span"]);

        let minimized = minimize(&doc, &spans[..2], &chain).unwrap();
        assert_eq!(minimized.to_selector(), "div.card > span");
    }

    #[test]
    fn test_gap_becomes_descendant() {
        let doc = HtmlParser::new()
            .parse(r#"<main><div><p>a</p></div></main><div><p>b</p></div>"#)
            .unwrap();
        let first = doc.query("p", Scope::Document).unwrap()[0];
        let chain = SelectorChain::from_segments(["html", "body", "main", "div", "p"]);

        let minimized = minimize(&doc, &[first], &chain).unwrap();
        assert_eq!(minimized.to_selector(), "main p");
    }

    #[test]
    fn test_rejects_non_resolving_input() {
        let doc = fixture();
        let x = doc.get_element_by_id("x").unwrap();
        let chain = SelectorChain::from_segments(["span"]);
        assert_eq!(minimize(&doc, &[x], &chain), None);
        assert_eq!(minimize(&doc, &[], &chain), None);
    }

    #[test]
    fn test_idempotent() {
        let doc = fixture();
        let x = doc.get_element_by_id("x").unwrap();
        let chain = SelectorChain::from_segments(["html", "body", "div.card", "span#x"]);

        let once = minimize(&doc, &[x], &chain).unwrap();
        let twice = minimize(&doc, &[x], &once).unwrap();
        assert_eq!(once.to_selector(), "span#x");
        assert_eq!(once.to_selector(), twice.to_selector());
    }
}
