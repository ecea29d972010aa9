//! Order-preserving subset enumeration

/// All subsets of `items` with size in `min..=max`, preserving item order
///
/// Subsets come by increasing size, and within a size in lexicographic
/// order of their indices. Sizes above `items.len()` are skipped.
pub fn combinations<T>(items: &[T], min: usize, max: usize) -> Vec<Vec<&T>> {
    let mut out = Vec::new();
    let max = max.min(items.len());
    if min > max {
        return out;
    }

    for size in min..=max {
        let mut indices: Vec<usize> = (0..size).collect();
        loop {
            out.push(indices.iter().map(|&i| &items[i]).collect());

            // Rightmost index that can still move right
            let Some(pos) = (0..size).rev().find(|&p| indices[p] < items.len() - size + p) else {
                break;
            };
            indices[pos] += 1;
            for next in pos + 1..size {
                indices[next] = indices[next - 1] + 1;
            }
        }
    }
    out
}

/// Every combination of tokens concatenated into one candidate string
pub fn combine_tokens<S: AsRef<str>>(tokens: &[S], min: usize, max: usize) -> Vec<String> {
    combinations(tokens, min, max)
        .into_iter()
        .map(|combo| combo.into_iter().map(AsRef::<str>::as_ref).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumeration_order() {
        assert_eq!(
            combine_tokens(&["a", "b", "c"], 1, 2),
            vec!["a", "b", "c", "ab", "ac", "bc"]
        );
    }

    #[test]
    fn test_sizes_two_to_three_of_four() {
        let got = combine_tokens(&["a", "b", "c", "d"], 2, 3);
        assert_eq!(
            got,
            vec!["ab", "ac", "ad", "bc", "bd", "cd", "abc", "abd", "acd", "bcd"]
        );
    }

    #[test]
    fn test_max_clamped_to_len() {
        assert_eq!(combine_tokens(&[".x", ".y"], 1, 3), vec![".x", ".y", ".x.y"]);
    }

    #[test]
    fn test_empty_and_inverted_ranges() {
        let none: [&str; 0] = [];
        assert!(combinations(&none, 1, 3).is_empty());
        assert!(combinations(&["a"], 2, 1).is_empty());
    }

    #[test]
    fn test_min_zero_includes_empty_subset() {
        let got = combinations(&[1, 2], 0, 1);
        assert_eq!(got, vec![vec![], vec![&1], vec![&2]]);
    }

    #[test]
    fn test_counts_follow_binomials() {
        let items: Vec<u8> = (0..6).collect();
        // C(6,1) + C(6,2) + C(6,3)
        assert_eq!(combinations(&items, 1, 3).len(), 6 + 15 + 20);
    }
}
