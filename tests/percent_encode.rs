//! Tests for percent encoding.
#![cfg(feature = "std")]

#[macro_use]
mod utils;

use iri_pct::char::{is_iri_literal, is_ucschar, is_unreserved};
use iri_pct::percent_encode::{
    percent_encode, percent_encode_bytes, PercentEncoded, PercentEncodedBytes,
};
use iri_pct::task::ProcessAndWrite;

/// Pairs of raw strings and expected encoded strings.
const CASES: &[(&str, &str)] = &[
    ("", ""),
    ("abc-1_2.3~", "abc-1_2.3~"),
    ("@", "%40"),
    ("a:b@c/d?e#f", "a%3Ab%40c%2Fd%3Fe%23f"),
    ("hello@world", "hello%40world"),
    ("joe@example", "joe%40example"),
    ("\u{C138}\u{C0C1}", "\u{C138}\u{C0C1}"),
    ("user-\u{C138}\u{C0C1}", "user-\u{C138}\u{C0C1}"),
    (
        "\u{C138}\u{C0C1}@\u{6F22}\u{5B57}",
        "\u{C138}\u{C0C1}%40\u{6F22}\u{5B57}",
    ),
    ("\u{FFFE}", "%EF%BF%BE"),
    ("\u{FFFF}", "%EF%BF%BF"),
    ("\u{E000}", "%EE%80%80"),
    ("\u{F8FF}", "%EF%A3%BF"),
    ("\u{E0001}", "%F3%A0%80%81"),
    ("\u{10FFFF}", "%F4%8F%BF%BF"),
    ("\u{7F}\u{80}\u{9F}\u{A0}", "%7F%C2%80%C2%9F\u{A0}"),
];

#[test]
fn encode_cases() {
    for &(raw, expected) in CASES {
        assert_eq!(percent_encode(raw), expected, "raw={raw:?}");
        assert_eq!(percent_encode_bytes(raw.as_bytes()), expected, "raw={raw:?}");
        assert_eq_display!(PercentEncoded::new(raw), expected, "raw={raw:?}");
        assert_eq_display!(PercentEncodedBytes::new(raw.as_bytes()), expected);
    }
}

#[test]
fn every_ascii_character() {
    for b in 0_u8..0x80 {
        let c = char::from(b);
        let s = c.to_string();
        let encoded = percent_encode(&s);
        if is_unreserved(c) {
            assert_eq!(encoded, s);
        } else {
            assert_eq!(encoded, format!("%{b:02X}"));
        }
    }
}

#[test]
fn idempotent_on_safe_input() {
    let safe: String = ('\0'..='\u{3000}')
        .chain('\u{1F300}'..='\u{1F6FF}')
        .filter(|&c| is_iri_literal(c))
        .collect();
    assert_eq!(percent_encode(&safe), safe);
    assert_eq!(percent_encode(&percent_encode(&safe)), safe);
}

#[test]
fn round_trip_restores_bytes() {
    let inputs = [
        "",
        "plain",
        "a:b@c/d?e#f",
        "100% \u{03B1}\u{03B2}\u{03B3}",
        "\u{D7FF}\u{E000}\u{F900}\u{FDD0}\u{FDF0}\u{FFEF}\u{FFF0}\u{FFFD}",
        "\u{1FFFD}\u{1FFFE}\u{E0FFF}\u{E1000}\u{F0000}\u{10FFFF}",
        "tab\tnewline\ncr\rnull\0",
    ];
    for raw in inputs {
        let encoded = percent_encode(raw);
        assert_eq!(utils::percent_decode(&encoded), raw.as_bytes(), "raw={raw:?}");
    }
}

#[test]
fn output_length_law() {
    for c in '\0'..='\u{FFFF}' {
        let s = c.to_string();
        let encoded = percent_encode(&s);
        if is_unreserved(c) || is_ucschar(c) {
            assert_eq!(encoded, s, "c={c:?}");
        } else {
            assert_eq!(encoded.len(), s.len() * 3, "c={c:?}");
            assert!(encoded.len() > s.len());
        }
    }
}

#[test]
fn ill_formed_bytes_are_replaced() {
    let replacement = "%EF%BF%BD";
    assert_eq!(percent_encode_bytes(b"\xFF"), replacement);
    assert_eq!(percent_encode_bytes(b"\xC0\xAF"), replacement.repeat(2));
    // Truncated 3-byte sequence at the end is a single unit.
    assert_eq!(percent_encode_bytes(b"a\xE2\x82"), format!("a{replacement}"));
    // Truncated 3-byte sequence followed by a valid character.
    assert_eq!(percent_encode_bytes(b"\xE2\x82-"), format!("{replacement}-"));
    // Encoded surrogate.
    assert_eq!(percent_encode_bytes(b"\xED\xA0\x80"), replacement.repeat(3));
    assert_eq!(
        percent_encode_bytes(b"\xF0\x9F\x98\x80\xF0\x9F\x98"),
        format!("\u{1F600}{replacement}")
    );
}

#[test]
fn ill_formed_bytes_match_lossy_decoding() {
    let inputs: [&[u8]; 5] = [
        b"\x80\x80",
        b"ok\xF5\x80",
        b"\xF4\x90\x80\x80",
        b"\xE0\x80\x80/",
        b"\xEF\xBF\xBF\xEF\xBF",
    ];
    for raw in inputs {
        let lossy = String::from_utf8_lossy(raw);
        assert_eq!(percent_encode_bytes(raw), percent_encode(&lossy), "raw={raw:?}");
    }
}

#[test]
fn write_to_fixed_buffer() {
    let encoded = PercentEncoded::new("\u{C138} \u{C0C1}");
    let expected = "\u{C138}%20\u{C0C1}";

    let mut buf = [0_u8; 64];
    let written = (&encoded)
        .write_to_byte_slice(&mut buf)
        .expect("buffer is large enough");
    assert_eq!(written, expected);

    let mut buf = vec![0_u8; expected.len()];
    assert!((&encoded).write_to_byte_slice(&mut buf).is_ok());

    let mut buf = vec![0_u8; expected.len() - 1];
    assert!((&encoded).write_to_byte_slice(&mut buf).is_err());
}

#[test]
fn reuse_string_buffer() {
    let mut buf = String::new();
    for (raw, expected) in [("a b", "a%20b"), ("\u{FFFF}", "%EF%BF%BF")] {
        buf.clear();
        let appended = (&PercentEncoded::new(raw))
            .append_to_std_string(&mut buf)
            .expect("never fails for strings");
        assert_eq!(appended, expected);
    }
}

#[test]
fn thread_safe() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let raw = format!("{i}/\u{C138}\u{C0C1}");
                percent_encode(&raw)
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let encoded = handle.join().expect("thread should not panic");
        assert_eq!(encoded, format!("{i}%2F\u{C138}\u{C0C1}"));
    }
}
