//! Pulse schedule expansion tests.

use telegraph_chaplet::morse::{encode, MorseSymbol};
use telegraph_chaplet::timing::{expand, PulseEvent, TimingUnit};
use MorseSymbol::*;

#[test]
fn test_durations_at_unit_80() {
    let unit = TimingUnit::from_millis(80);
    let events = expand(&[Dit, Dah, ElementGap, CharGap, WordGap], unit).unwrap();
    let durations: Vec<u64> = events.iter().map(|e| e.duration_ms).collect();
    // Dit 80, Dah 240, element gap 80, char gap 240, word gap 560.
    assert_eq!(durations, vec![80, 240, 80, 240, 560]);
}

#[test]
fn test_signal_state_per_symbol_kind() {
    let unit = TimingUnit::from_millis(80);
    let events = expand(&[Dit, ElementGap, Dah, CharGap, Dit, WordGap], unit).unwrap();
    let states: Vec<bool> = events.iter().map(|e| e.signal_on).collect();
    assert_eq!(states, vec![true, false, true, false, true, false]);
}

#[test]
fn test_zero_unit_is_a_configuration_error() {
    let unit = TimingUnit::from_millis(0);
    assert!(expand(&[], unit).is_err());
    assert!(expand(&[Dit], unit).is_err());
    assert!(expand(&[WordGap, WordGap, WordGap], unit).is_err());
}

#[test]
fn test_no_zero_duration_events() {
    let unit = TimingUnit::from_millis(1);
    let enc = encode("Quis ut Deus? Quis résistet Michaëlis gladió?");
    let events = expand(&enc.symbols, unit).unwrap();
    assert!(events.iter().all(|e| e.duration_ms > 0));
}

#[test]
fn test_schedule_always_ends_signal_off() {
    let unit = TimingUnit::from_millis(80);
    for text in ["E", "AMEN", "Quis ut Deus?", "PAX VOBISCUM "] {
        let enc = encode(text);
        let events = expand(&enc.symbols, unit).unwrap();
        assert_eq!(events.last().map(|e| e.signal_on), Some(false), "text {text:?}");
    }
}

#[test]
fn test_expand_is_order_preserving() {
    let unit = TimingUnit::from_millis(10);
    let enc = encode("PARIS");
    let events = expand(&enc.symbols, unit).unwrap();
    // One event per symbol (plus the possible trailing off event);
    // on-ness follows the symbols one for one.
    for (symbol, event) in enc.symbols.iter().zip(events.iter()) {
        assert_eq!(symbol.is_on(), event.signal_on);
    }
}

#[test]
fn test_paris_cycle_length() {
    // PARIS is the canonical 50-unit word; with the trailing word gap
    // it defines Morse speed. The marks and gaps sum to 43 units
    // (50 = 43 + 7), and the schedule adds one release unit because
    // the word ends on a dit.
    let unit = TimingUnit::from_millis(1);
    let enc = encode("PARIS");
    let events = expand(&enc.symbols, unit).unwrap();
    let total: u64 = events.iter().map(|e| e.duration_ms).sum();
    assert_eq!(total, 44);
}

#[test]
fn test_event_duration_accessor() {
    let event = PulseEvent { signal_on: true, duration_ms: 240 };
    assert_eq!(event.duration(), std::time::Duration::from_millis(240));
}
