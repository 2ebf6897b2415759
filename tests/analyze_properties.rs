// tests/analyze_properties.rs
//
// Behavioural properties of the public `analyze` entry point and the edit
// distance it relies on. Random cases use a fixed seed so runs are reproducible.

use feedback_insights::analyze::{edit_distance, score_word, LEXICON};
use feedback_insights::{analyze, AnalysisResult, Sentiment, Theme};
use rand::{rngs::StdRng, Rng, SeedableRng};

const ALPHABET: &[char] = &['a', 'b', 'e', 'r', 's', 't', 'é', ' '];

fn random_word(rng: &mut StdRng, max_len: usize) -> String {
    let len = rng.random_range(0..=max_len);
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
        .collect()
}

#[test]
fn edit_distance_identity_and_empty() {
    let mut rng = StdRng::seed_from_u64(0xFEED_BAC4);
    for _ in 0..200 {
        let s = random_word(&mut rng, 12);
        assert_eq!(edit_distance(&s, &s), 0, "identity for {s:?}");
        assert_eq!(edit_distance("", &s), s.chars().count());
        assert_eq!(edit_distance(&s, ""), s.chars().count());
    }
}

#[test]
fn edit_distance_is_symmetric_and_bounded() {
    let mut rng = StdRng::seed_from_u64(0x5EED_2024);
    for _ in 0..500 {
        let a = random_word(&mut rng, 10);
        let b = random_word(&mut rng, 10);
        let (la, lb) = (a.chars().count(), b.chars().count());
        let d = edit_distance(&a, &b);
        assert_eq!(d, edit_distance(&b, &a), "symmetry for {a:?} / {b:?}");
        assert!(d >= la.abs_diff(lb), "lower bound for {a:?} / {b:?}");
        assert!(d <= la.max(lb), "upper bound for {a:?} / {b:?}");
    }
}

#[test]
fn edit_distance_classic_pairs() {
    assert_eq!(edit_distance("kitten", "sitting"), 3);
    assert_eq!(edit_distance("sunday", "saturday"), 3);
    assert_eq!(edit_distance("grrat", "great"), 1);
    assert_eq!(edit_distance("sturdie", "sturdy"), 2);
}

#[test]
fn distinct_lexicon_keys_are_apart() {
    let keys: Vec<&str> = LEXICON.entries().map(|(w, _)| w).collect();
    for (i, a) in keys.iter().enumerate() {
        for b in &keys[i + 1..] {
            assert!(edit_distance(a, b) > 0, "{a:?} / {b:?}");
        }
    }
}

#[test]
fn empty_input() {
    assert_eq!(
        analyze(""),
        AnalysisResult {
            sentiment: Sentiment::Neutral,
            themes: vec![],
            score: 0
        }
    );
}

#[test]
fn single_positive_word() {
    let r = analyze("great");
    assert_eq!(r.score, 2);
    assert_eq!(r.sentiment, Sentiment::Positive);
}

#[test]
fn negation_flips_following_word() {
    let r = analyze("not good");
    assert_eq!(r.score, -1);
    assert_eq!(r.sentiment, Sentiment::Negative);
}

#[test]
fn broken_dull_ring() {
    let r = analyze("this ring broke and the finish is dull");
    assert_eq!(r.sentiment, Sentiment::Negative);
    assert!(r.themes.contains(&Theme::Durability));
    assert!(r.themes.contains(&Theme::Appearance));
}

#[test]
fn fuzzy_layer_length_gate() {
    // three chars never reach the fuzzy layer
    assert_eq!(analyze("grt").score, 0);
    assert_eq!(score_word("gud"), 0);

    // four chars already do
    assert_eq!(analyze("gret").score, 2);

    // five chars, one edit from "great" (5 chars, one error allowed)
    let r = analyze("grrat");
    assert_eq!(r.score, 2);
    assert_eq!(r.sentiment, Sentiment::Positive);
}

#[test]
fn analyze_is_idempotent() {
    for text in [
        "",
        "Loved it, but the clasp broke.",
        "not comfortable; too heavy!",
        "Stunning design, excelent quality",
    ] {
        assert_eq!(analyze(text), analyze(text), "input {text:?}");
    }
}

#[test]
fn no_theme_keywords() {
    assert!(analyze("ok").themes.is_empty());
}

#[test]
fn unrecognized_text_is_neutral() {
    for text in ["   ", "qwxz zzzz", "12345 67890", "!!!"] {
        let r = analyze(text);
        assert_eq!(r.sentiment, Sentiment::Neutral, "input {text:?}");
        assert!(r.themes.is_empty(), "input {text:?}");
        assert_eq!(r.score, 0);
    }
}

#[test]
fn concurrent_callers_agree() {
    let text = "The rose gold is beautiful but the chain feels flimsy";
    let expected = analyze(text);
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(move || analyze(text)))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
