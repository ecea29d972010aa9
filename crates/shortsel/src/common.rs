//! One selector for a set of elements

use crate::chain::{SelectorChain, SelectorSegment};
use crate::host::SelectorHost;
use crate::minimizer::minimize;
use crate::synthesizer::Synthesizer;

impl<H: SelectorHost> Synthesizer<'_, H> {
    /// Selector matching exactly `elements` in the document, or `None`
    ///
    /// Repeated elements count once.
    pub fn synthesize_common(&self, elements: &[H::Element]) -> Option<String> {
        let mut targets: Vec<H::Element> = Vec::with_capacity(elements.len());
        for &el in elements {
            if !targets.contains(&el) {
                targets.push(el);
            }
        }
        let (&first, rest) = targets.split_first()?;

        let chains = targets
            .iter()
            .map(|&el| self.unique_chain(el))
            .collect::<Option<Vec<_>>>()?;
        let mut chain = intersect_chains(&chains)?;

        let last = chain.len().checked_sub(1)?;
        if chain.get(last).is_none() {
            let mut shared = self.leaf_candidates(first);
            for &el in rest {
                let candidates = self.leaf_candidates(el);
                shared.retain(|c| candidates.contains(c));
            }
            tracing::debug!("{} shared leaf candidates", shared.len());

            let filled = shared
                .into_iter()
                .map(|candidate| chain.with_slot(last, Some(SelectorSegment::new(candidate))))
                .find(|filled| self.oracle.is_same_set(&targets, &filled.to_selector()));
            chain = filled?;
        }

        if !self.oracle.is_same_set(&targets, &chain.to_selector()) {
            tracing::debug!("common chain {:?} misses the target set", chain.to_selector());
            return None;
        }
        let minimized = minimize(self.host, &targets, &chain)?;
        Some(minimized.to_selector())
    }
}

/// Keep a slot only where every chain agrees; length of the first chain
fn intersect_chains(chains: &[SelectorChain]) -> Option<SelectorChain> {
    let (first, rest) = chains.split_first()?;
    Some(
        (0..first.len())
            .map(|index| {
                let segment = first.get(index)?;
                rest.iter()
                    .all(|chain| chain.get(index) == Some(segment))
                    .then(|| segment.clone())
            })
            .collect(),
    )
}
