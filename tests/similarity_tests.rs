// Tests for pronunciation scoring
//
// These tests verify the similarity percentage and the feedback tiers
// the presentation layer relies on.

use loqa_pronounce::{similarity, FeedbackTier};

const PAIRS: &[(&str, &str)] = &[
    ("", ""),
    ("", "abc"),
    ("cat", "cats"),
    ("good morning", "good mourning"),
    ("Obrigado", "obrigada"),
    ("How are you?", "how are you"),
    ("kitten", "sitting"),
    ("a", "b"),
];

#[test]
fn test_identical_strings_score_100() {
    for s in ["", "a", "Hello", "Where is the train station?", "coração"] {
        assert_eq!(similarity(s, s), 100, "score({:?}, {:?})", s, s);
    }
}

#[test]
fn test_empty_strings() {
    assert_eq!(similarity("", ""), 100);
    assert_eq!(similarity("", "abc"), 0);
    assert_eq!(similarity("abc", ""), 0);
}

#[test]
fn test_symmetry() {
    for (a, b) in PAIRS {
        assert_eq!(similarity(a, b), similarity(b, a), "pair ({:?}, {:?})", a, b);
    }
}

#[test]
fn test_bounds() {
    for (a, b) in PAIRS {
        let score = similarity(a, b);
        assert!(score <= 100, "score({:?}, {:?}) = {}", a, b, score);
    }
    // No shared characters
    assert_eq!(similarity("abc", "xyzxyz"), 0);
    // Shared "a" and "c" still count: distance 22 over 24 characters
    assert_eq!(similarity("abc", "a much longer transcript"), 8);
}

#[test]
fn test_case_insensitive() {
    assert_eq!(similarity("Hello", "hello"), 100);
    assert_eq!(similarity("GOOD NIGHT", "good night"), 100);
    assert_eq!(similarity("ÁRVORE", "árvore"), 100);
}

#[test]
fn test_single_edit_near_miss() {
    // distance 1 over 4 characters
    assert_eq!(similarity("cat", "cats"), 75);
}

#[test]
fn test_full_mismatch_same_length() {
    assert_eq!(similarity("abc", "xyz"), 0);
}

#[test]
fn test_half_rounds_away_from_zero() {
    // distance 3 over 8 characters = 62.5%
    assert_eq!(similarity("abcdefgh", "abcdexyz"), 63);
    // distance 5 over 8 characters = 37.5%
    assert_eq!(similarity("abcdefgh", "abcvwxyz"), 38);
}

#[test]
fn test_non_half_values_round_to_nearest() {
    // distance 1 over 3 characters = 66.67%
    assert_eq!(similarity("abc", "abd"), 67);
    // distance 2 over 3 characters = 33.33%
    assert_eq!(similarity("abc", "axy"), 33);
}

#[test]
fn test_punctuation_counts_as_characters() {
    // "?" is one deletion over 12 characters = 91.67%
    assert_eq!(similarity("How are you?", "how are you"), 92);
}

#[test]
fn test_feedback_tier_boundaries() {
    assert_eq!(FeedbackTier::from_score(0), FeedbackTier::Low);
    assert_eq!(FeedbackTier::from_score(60), FeedbackTier::Low);
    assert_eq!(FeedbackTier::from_score(61), FeedbackTier::Medium);
    assert_eq!(FeedbackTier::from_score(80), FeedbackTier::Medium);
    assert_eq!(FeedbackTier::from_score(81), FeedbackTier::High);
    assert_eq!(FeedbackTier::from_score(100), FeedbackTier::High);
}

#[test]
fn test_feedback_message_includes_score() {
    assert!(FeedbackTier::Low.message(40).contains("40%"));
    assert!(FeedbackTier::Low.message(40).contains("try again"));
    assert!(FeedbackTier::Medium.message(75).contains("Well done"));
    assert!(FeedbackTier::High.message(95).contains("excellent pronunciation"));
}

#[test]
fn test_feedback_tier_serialization() {
    let json = serde_json::to_string(&FeedbackTier::Medium).unwrap();
    assert_eq!(json, "\"medium\"");
    assert_eq!(FeedbackTier::High.to_string(), "high");
}
