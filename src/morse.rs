//! Text to Morse symbol encoding.
//!
//! Pure logic, no hardware dependencies. Consumes prayer text,
//! produces symbol sequences. Fully testable without a sounder.
//!
//! The pattern table is international Morse plus the two ligatures
//! that appear in the Latin liturgical texts (`Æ` and `Œ`). Accented
//! letters are folded to their base letter before lookup; traditional
//! Morse has no codes for them.

/// One element of an encoded transmission.
///
/// `Dit`/`Dah` are signal-on; the three gap kinds are signal-off.
/// Durations are assigned later by the timing scheduler, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MorseSymbol {
    /// Short mark, 1 unit on.
    Dit,
    /// Long mark, 3 units on.
    Dah,
    /// Gap between elements of one character, 1 unit off.
    ElementGap,
    /// Gap between characters of one word, 3 units off.
    CharGap,
    /// Gap between words, 7 units off.
    WordGap,
}

impl MorseSymbol {
    /// True for symbols that key the line (sounder armature down).
    #[inline]
    pub fn is_on(self) -> bool {
        matches!(self, MorseSymbol::Dit | MorseSymbol::Dah)
    }
}

/// Result of encoding one text.
///
/// Characters with no pattern after normalization are skipped, never
/// fatal; they are reported here so the caller can log them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Encoding {
    pub symbols: Vec<MorseSymbol>,
    pub skipped: Vec<char>,
}

/// International Morse pattern for one (uppercased, normalized)
/// character. `.` is a dit, `-` a dah.
fn pattern(c: char) -> Option<&'static str> {
    Some(match c {
        'A' => ".-",
        'B' => "-...",
        'C' => "-.-.",
        'D' => "-..",
        'E' => ".",
        'F' => "..-.",
        'G' => "--.",
        'H' => "....",
        'I' => "..",
        'J' => ".---",
        'K' => "-.-",
        'L' => ".-..",
        'M' => "--",
        'N' => "-.",
        'O' => "---",
        'P' => ".--.",
        'Q' => "--.-",
        'R' => ".-.",
        'S' => "...",
        'T' => "-",
        'U' => "..-",
        'V' => "...-",
        'W' => ".--",
        'X' => "-..-",
        'Y' => "-.--",
        'Z' => "--..",
        '0' => "-----",
        '1' => ".----",
        '2' => "..---",
        '3' => "...--",
        '4' => "....-",
        '5' => ".....",
        '6' => "-....",
        '7' => "--...",
        '8' => "---..",
        '9' => "----.",
        '.' => ".-.-.-",
        ',' => "--..--",
        '?' => "..--..",
        '\'' => ".----.",
        '!' => "-.-.--",
        '/' => "-..-.",
        '(' => "-.--.",
        ')' => "-.--.-",
        '&' => ".-...",
        ':' => "---...",
        ';' => "-.-.-.",
        '=' => "-...-",
        '+' => ".-.-.",
        '-' => "-....-",
        '_' => "..--.-",
        '"' => ".-..-.",
        '$' => "...-..-",
        '@' => ".--.-.",
        // Ligatures used in the Latin texts.
        'Æ' => ".-.-",
        'Œ' => "---.",
        _ => return None,
    })
}

/// Fold an accented uppercase letter to its unaccented base.
///
/// Covers every diacritic form occurring in the chaplet texts plus
/// the usual Latin-script neighbors. `Ǽ` folds to the `Æ` ligature,
/// which has its own pattern.
fn normalize(c: char) -> char {
    match c {
        'À' | 'Á' | 'Â' | 'Ä' | 'Ã' | 'Å' | 'Ā' | 'Ă' | 'Ą' => 'A',
        'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ĕ' | 'Ė' | 'Ę' | 'Ě' => 'E',
        'Ì' | 'Í' | 'Î' | 'Ï' | 'Ī' | 'Ĭ' | 'Į' | 'Ĩ' => 'I',
        'Ò' | 'Ó' | 'Ô' | 'Ö' | 'Õ' | 'Ō' | 'Ŏ' | 'Ő' => 'O',
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ū' | 'Ŭ' | 'Ů' | 'Ű' | 'Ų' => 'U',
        'Ǽ' => 'Æ',
        other => other,
    }
}

/// Encode text into a Morse symbol sequence.
///
/// Pure and deterministic: identical input always yields an identical
/// sequence. Whitespace becomes a [`MorseSymbol::WordGap`]; a pending
/// inter-character gap is superseded by the word gap rather than left
/// dangling. Unsupported characters are collected in
/// [`Encoding::skipped`] and encoding continues.
pub fn encode(text: &str) -> Encoding {
    let mut out = Encoding::default();
    // CharGap is held back until the next character proves there is
    // one; a word gap or end of text discards it.
    let mut pending_char_gap = false;

    for raw in text.chars() {
        if raw.is_whitespace() {
            pending_char_gap = false;
            out.symbols.push(MorseSymbol::WordGap);
            continue;
        }

        // Uppercase first (also maps œ → Œ, ǽ → Ǽ), then fold accents.
        let mut handled = false;
        for upper in raw.to_uppercase() {
            let c = normalize(upper);
            let Some(pat) = pattern(c) else { continue };
            handled = true;

            if pending_char_gap {
                out.symbols.push(MorseSymbol::CharGap);
            }
            for (i, mark) in pat.chars().enumerate() {
                if i > 0 {
                    out.symbols.push(MorseSymbol::ElementGap);
                }
                out.symbols.push(match mark {
                    '.' => MorseSymbol::Dit,
                    _ => MorseSymbol::Dah,
                });
            }
            pending_char_gap = true;
        }

        if !handled {
            out.skipped.push(raw);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use MorseSymbol::*;

    #[test]
    fn test_single_letter() {
        let enc = encode("E");
        assert_eq!(enc.symbols, vec![Dit]);
        assert!(enc.skipped.is_empty());
    }

    #[test]
    fn test_sos_pattern() {
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
    }

    #[test]
    fn test_word_gap_supersedes_char_gap() {
        let enc = encode("E E");
        assert_eq!(enc.symbols, vec![Dit, WordGap, Dit]);
    }

    #[test]
    fn test_lowercase_equals_uppercase() {
        assert_eq!(encode("pax"), encode("PAX"));
    }

    #[test]
    fn test_accents_fold_to_base() {
        assert_eq!(encode("Dóminus"), encode("DOMINUS"));
        assert_eq!(encode("Michaëlis"), encode("MICHAELIS"));
    }

    #[test]
    fn test_ligatures_have_own_patterns() {
        let ae = encode("æ");
        assert_eq!(ae.symbols, vec![Dit, ElementGap, Dah, ElementGap, Dit, ElementGap, Dah]);
        let oe = encode("cœ");
        // C (-.-.), char gap, Œ (---.)
        assert_eq!(
            oe.symbols,
            vec![
                Dah, ElementGap, Dit, ElementGap, Dah, ElementGap, Dit,
                CharGap,
                Dah, ElementGap, Dah, ElementGap, Dah, ElementGap, Dit,
            ]
        );
    }

    #[test]
    fn test_accented_ligature_folds() {
        assert_eq!(encode("sǽcula"), encode("sæcula"));
    }

    #[test]
    fn test_unsupported_reported_not_fatal() {
        let enc = encode("A☩B");
        assert_eq!(enc.skipped, vec!['☩']);
        // A, char gap, B — the unknown char contributes nothing.
        assert_eq!(
            enc.symbols,
            vec![
                Dit, ElementGap, Dah,
                CharGap,
                Dah, ElementGap, Dit, ElementGap, Dit, ElementGap, Dit,
            ]
        );
    }

    #[test]
    fn test_deterministic() {
        let text = "Quis ut Deus?";
        assert_eq!(encode(text), encode(text));
    }

    #[test]
    fn test_empty_input() {
        let enc = encode("");
        assert!(enc.symbols.is_empty());
        assert!(enc.skipped.is_empty());
    }

    #[test]
    fn test_no_trailing_char_gap() {
        let enc = encode("AB ");
        assert_eq!(enc.symbols.last(), Some(&WordGap));
        let enc = encode("AB");
        assert_eq!(enc.symbols.last(), Some(&Dit));
    }

    #[test]
    fn test_full_latin_text_encodes_cleanly() {
        let enc = encode(
            "Per intercessiónem Sancti Michaëlis et cappéllæ Séraphim cœléstis, \
             Dóminus nos dignos effíciat incéndi igne caritátis perféctæ. Amen.",
        );
        assert!(enc.skipped.is_empty(), "skipped: {:?}", enc.skipped);
        assert!(!enc.symbols.is_empty());
    }
}
