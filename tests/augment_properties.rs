use std::collections::HashSet;
use std::sync::Arc;

use lexaug::analysis::stop::{BuiltinStopWords, StopWords};
use lexaug::analysis::synonym::SynonymDictionary;
use lexaug::augment::{AugmentConfig, Augmenter, Operation};

const SEEDS: std::ops::Range<u64> = 0..200;

fn dictionary() -> SynonymDictionary {
    SynonymDictionary::from_senses(vec![
        vec!["quick".into(), "speedy".into(), "fast".into()],
        vec!["brown".into(), "chocolate".into()],
        vec!["fox".into(), "dodger".into(), "trickster".into()],
        vec!["jumps".into(), "leaps".into(), "springs".into()],
        vec!["lazy".into(), "idle".into()],
        vec!["dog".into(), "hound".into()],
    ])
}

fn augmenter(seed: u64) -> Augmenter {
    Augmenter::with_config(
        &BuiltinStopWords,
        Arc::new(dictionary()),
        AugmentConfig::default().with_seed(seed),
    )
    .unwrap()
}

fn tokens(sentence: &str) -> Vec<&str> {
    sentence.split_whitespace().collect()
}

#[test]
fn test_empty_sentence_for_every_operation() {
    let augmenter = augmenter(0);
    assert_eq!(augmenter.synonym_replacement("", 2).unwrap(), "");
    assert_eq!(augmenter.random_insertion("", 2).unwrap(), "");
    assert_eq!(augmenter.random_deletion("", 0.5).unwrap(), "");
    assert_eq!(augmenter.random_swap("", 2).unwrap(), "");
    assert_eq!(augmenter.apply_chain(&Operation::ALL, "").unwrap(), "");
    for variant in augmenter.generate("   ", 4).unwrap() {
        assert_eq!(variant, "");
    }
}

#[test]
fn test_token_count_bounds() {
    let sentence = "the quick brown fox jumps over the lazy dog";
    let original = tokens(sentence);

    for seed in SEEDS {
        let augmenter = augmenter(seed);

        let deleted = augmenter.random_deletion(sentence, 0.3).unwrap();
        assert!(tokens(&deleted).len() <= original.len());
        assert!(!tokens(&deleted).is_empty());

        let inserted = augmenter.random_insertion(sentence, 3).unwrap();
        let inserted_len = tokens(&inserted).len();
        assert!(inserted_len >= original.len());
        assert!(inserted_len <= original.len() + 3);

        let swapped = augmenter.random_swap(sentence, 3).unwrap();
        let mut swapped_sorted = tokens(&swapped);
        let mut original_sorted = original.clone();
        swapped_sorted.sort();
        original_sorted.sort();
        assert_eq!(swapped_sorted, original_sorted);

        let replaced = augmenter.synonym_replacement(sentence, 2).unwrap();
        assert_eq!(tokens(&replaced).len(), original.len());
    }
}

#[test]
fn test_replacement_alters_at_most_n_distinct_words() {
    let sentence = "quick fox and quick dog near a brown fox";
    let original = tokens(sentence);

    for seed in SEEDS {
        let augmenter = augmenter(seed);
        for n in 0..4 {
            let replaced = augmenter.synonym_replacement(sentence, n).unwrap();
            let altered: HashSet<&str> = original
                .iter()
                .zip(tokens(&replaced))
                .filter(|(before, after)| *before != after)
                .map(|(before, _)| *before)
                .collect();
            assert!(altered.len() <= n, "seed {seed}, n {n}: {replaced}");
        }
    }
}

#[test]
fn test_single_word_survives_deletion() {
    for seed in SEEDS.take(20) {
        let augmenter = augmenter(seed);
        for p in [0.0, 0.3, 0.5, 1.0] {
            assert_eq!(augmenter.random_deletion("hello", p).unwrap(), "hello");
        }
    }
}

#[test]
fn test_stop_words_are_never_replaced() {
    let sentence = "the of and to in";
    for seed in SEEDS.take(20) {
        let augmenter = augmenter(seed);
        for n in 0..5 {
            assert_eq!(augmenter.synonym_replacement(sentence, n).unwrap(), sentence);
        }
    }
}

#[test]
fn test_synonyms_never_contain_the_word() {
    let augmenter = augmenter(0);
    for word in ["quick", "Quick", "QUICK", "fox", "Jumps", "dog"] {
        let synonyms = augmenter.get_synonyms(word).unwrap();
        assert!(!synonyms.is_empty(), "{word}");
        assert!(
            synonyms.iter().all(|s| s.to_lowercase() != word.to_lowercase()),
            "{word}: {synonyms:?}"
        );
    }
}

#[test]
fn test_single_word_swap_is_identity() {
    for seed in SEEDS.take(20) {
        let augmenter = augmenter(seed);
        assert_eq!(augmenter.random_swap("lonely", 5).unwrap(), "lonely");
    }
}

#[test]
fn test_same_seed_same_output() {
    let sentence = "the quick brown fox jumps over the lazy dog";

    for seed in SEEDS.take(50) {
        let first = augmenter(seed);
        let second = augmenter(seed);

        for operation in Operation::ALL {
            assert_eq!(
                first.apply(operation, sentence).unwrap(),
                second.apply(operation, sentence).unwrap()
            );
        }
        assert_eq!(
            first.generate(sentence, 8).unwrap(),
            second.generate(sentence, 8).unwrap()
        );
    }
}

#[test]
fn test_reseed_restarts_the_sequence() {
    let sentence = "the quick brown fox jumps over the lazy dog";
    let augmenter = augmenter(7);

    let before = augmenter.generate(sentence, 6).unwrap();
    augmenter.reseed(7);
    let after = augmenter.generate(sentence, 6).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_replacement_with_custom_stop_words() {
    let sentence = "the quick brown fox jumps";
    let original = tokens(sentence);

    for seed in SEEDS {
        let augmenter = Augmenter::from_parts(
            StopWords::from_words("english", ["the"]),
            Arc::new(dictionary()),
            AugmentConfig::default().with_seed(seed),
        )
        .unwrap();

        let replaced = augmenter.synonym_replacement(sentence, 1).unwrap();
        let replaced = tokens(&replaced);
        assert_eq!(replaced.len(), original.len());
        assert_eq!(replaced[0], "the");

        let changed: Vec<usize> = (0..original.len())
            .filter(|&i| original[i] != replaced[i])
            .collect();
        assert_eq!(changed.len(), 1, "seed {seed}: {replaced:?}");
        assert!(changed[0] >= 1);
    }
}

#[test]
fn test_chain_runs_every_operation() {
    let config = AugmentConfig {
        max_replacements: 1,
        insertions: 1,
        deletion_probability: 0.0,
        swaps: 0,
        seed: Some(3),
        ..Default::default()
    };
    let augmenter =
        Augmenter::with_config(&BuiltinStopWords, Arc::new(dictionary()), config).unwrap();

    let chained = augmenter
        .apply_chain(
            &[Operation::SynonymReplacement, Operation::RandomInsertion],
            "quick fox",
        )
        .unwrap();
    // One word replaced, one synonym inserted.
    assert_eq!(tokens(&chained).len(), 3);
    assert_ne!(chained, "quick fox");
}
