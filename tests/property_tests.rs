use huffman_codes::{
    FreqTable, analyze, build_codes, build_tree, generate_codes, verify_prefix_free,
    weighted_length,
};
use proptest::prelude::*;

fn table(freqs: &[u64]) -> FreqTable<usize> {
    freqs.iter().copied().enumerate().collect()
}

/// Smallest weighted length over every length assignment that satisfies
/// Kraft's inequality, i.e. over every prefix-free binary code.
fn brute_force_optimum(freqs: &[u64]) -> u128 {
    fn search(freqs: &[u64], max_len: u32, budget: u64, acc: u64, best: &mut u64) {
        let Some((&f, rest)) = freqs.split_first() else {
            *best = (*best).min(acc);
            return;
        };
        for len in 1..=max_len {
            let cost = 1u64 << (max_len - len);
            if cost <= budget {
                search(rest, max_len, budget - cost, acc + f * len as u64, best);
            }
        }
    }

    let max_len = freqs.len() as u32 - 1;
    let mut best = u64::MAX;
    search(freqs, max_len, 1u64 << max_len, 0, &mut best);
    u128::from(best)
}

proptest! {
    #[test]
    fn test_codes_are_prefix_free(freqs in prop::collection::vec(0..1000u64, 1..300)) {
        let codes = build_codes(&table(&freqs));
        prop_assert_eq!(codes.len(), freqs.len());
        prop_assert!(verify_prefix_free(&codes));
        prop_assert!(codes.values().all(|c| !c.is_empty()));
    }

    #[test]
    fn test_codes_are_optimal(freqs in prop::collection::vec(0..50u64, 2..=6)) {
        let freq = table(&freqs);
        let codes = build_codes(&freq);
        prop_assert_eq!(weighted_length(&freq, &codes).unwrap(), brute_force_optimum(&freqs));
    }

    #[test]
    fn test_weighted_length_ignores_insertion_order(
        (freqs, shuffled) in prop::collection::vec(1..1000u64, 1..100)
            .prop_flat_map(|v| {
                let pairs: Vec<(usize, u64)> = v.into_iter().enumerate().collect();
                (Just(pairs.clone()), Just(pairs).prop_shuffle())
            })
    ) {
        let freq: FreqTable<usize> = freqs.into_iter().collect();
        let reordered: FreqTable<usize> = shuffled.into_iter().collect();

        let a = weighted_length(&freq, &build_codes(&freq)).unwrap();
        let b = weighted_length(&reordered, &build_codes(&reordered)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_rebuild_is_deterministic(freqs in prop::collection::vec(0..20u64, 0..100)) {
        let freq = table(&freqs);
        let first = build_codes(&freq);
        let second = build_codes(&freq);
        prop_assert_eq!(
            weighted_length(&freq, &first).unwrap(),
            weighted_length(&freq, &second).unwrap()
        );
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_tree_has_one_leaf_per_symbol(freqs in prop::collection::vec(0..1000u64, 1..300)) {
        let freq = table(&freqs);
        let tree = build_tree(&freq).unwrap();
        prop_assert_eq!(tree.leaf_count(), freqs.len());
        prop_assert_eq!(tree.freq(), freq.total());

        let codes = generate_codes(Some(&tree));
        let longest = codes.values().map(String::len).max().unwrap_or(0);
        prop_assert_eq!(longest, tree.depth().max(1));
    }

    #[test]
    fn test_average_length_within_one_bit_of_entropy(
        freqs in prop::collection::vec(1..1000u64, 1..200)
    ) {
        let freq = table(&freqs);
        let report = analyze(&freq, &build_codes(&freq)).unwrap();
        prop_assert!(report.prefix_free);
        prop_assert!(report.average_length + 1e-9 >= report.entropy);
        prop_assert!(report.average_length < report.entropy + 1.0 + 1e-9);
    }
}
