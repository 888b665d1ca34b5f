//! Encoding tests against the international Morse table.

use telegraph_chaplet::morse::{encode, MorseSymbol};
use MorseSymbol::*;

/// Collapse an encoding to on-marks only, for pattern comparison.
fn marks(text: &str) -> Vec<MorseSymbol> {
    encode(text)
        .symbols
        .into_iter()
        .filter(|s| s.is_on())
        .collect()
}

#[test]
fn test_sos_exact_sequence() {
    let enc = encode("SOS");
    assert_eq!(
        enc.symbols,
        vec![
            Dit, ElementGap, Dit, ElementGap, Dit,
            CharGap,
            Dah, ElementGap, Dah, ElementGap, Dah,
            CharGap,
            Dit, ElementGap, Dit, ElementGap, Dit,
        ]
    );
    assert!(enc.skipped.is_empty());
}

#[test]
fn test_standard_patterns_for_letters() {
    let expected: [(&str, &[MorseSymbol]); 6] = [
        ("A", &[Dit, Dah]),
        ("E", &[Dit]),
        ("Q", &[Dah, Dah, Dit, Dah]),
        ("T", &[Dah]),
        ("Y", &[Dah, Dit, Dah, Dah]),
        ("Z", &[Dah, Dah, Dit, Dit]),
    ];
    for (text, pattern) in expected {
        assert_eq!(marks(text), pattern, "pattern for {text}");
    }
}

#[test]
fn test_standard_patterns_for_digits() {
    assert_eq!(marks("0"), vec![Dah; 5]);
    assert_eq!(marks("5"), vec![Dit; 5]);
    assert_eq!(marks("3"), vec![Dit, Dit, Dit, Dah, Dah]);
}

#[test]
fn test_every_alphanumeric_has_a_pattern() {
    for c in ('A'..='Z').chain('0'..='9') {
        let enc = encode(&c.to_string());
        assert!(enc.skipped.is_empty(), "no pattern for {c}");
        assert!(!enc.symbols.is_empty(), "empty pattern for {c}");
    }
}

#[test]
fn test_punctuation_of_the_prayer_texts() {
    for c in [".", ",", "?", "'", ";", ":"] {
        assert!(encode(c).skipped.is_empty(), "no pattern for {c:?}");
    }
}

#[test]
fn test_whitespace_becomes_word_gap_not_char_gap() {
    let enc = encode("AD TE");
    assert!(enc.symbols.contains(&WordGap));
    // Exactly one word gap, and no char gap adjacent to it.
    let gap_pos = enc
        .symbols
        .iter()
        .position(|s| *s == WordGap)
        .unwrap();
    assert_ne!(enc.symbols[gap_pos - 1], CharGap);
    assert_ne!(enc.symbols[gap_pos + 1], CharGap);
}

#[test]
fn test_encode_is_deterministic() {
    let text = "Glória Patri, et Fílio, et Spirítui Sancto.";
    let first = encode(text);
    let second = encode(text);
    assert_eq!(first, second);
}

#[test]
fn test_unsupported_characters_reported_and_skipped() {
    let enc = encode("quis † ut % deus");
    assert_eq!(enc.skipped, vec!['†', '%']);
    // The rest of the text still encodes.
    assert_eq!(
        enc.symbols.iter().filter(|s| **s == WordGap).count(),
        encode("quis  ut  deus")
            .symbols
            .iter()
            .filter(|s| **s == WordGap)
            .count()
    );
}

#[test]
fn test_diacritics_fold_to_base_letters() {
    assert_eq!(encode("festína"), encode("festina"));
    assert_eq!(encode("cǽlum"), encode("cælum"));
    assert_eq!(encode("obœdiéntiæ"), encode("obœdientiæ"));
}
