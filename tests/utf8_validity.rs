// utf8_validity.rs - Codec boundary behavior through the public entry points.

use unifold::options::{COMPOSE, DECOMPOSE, NULLTERM, STABLE};
use unifold::{codepoint_valid, encode_char, iterate, map, nfc, Error};

#[test]
fn overlong_encodings_are_rejected() {
    // U+0000 as two bytes, U+002F as two and three bytes.
    for bad in [
        &b"\xC0\x80"[..],
        &b"\xC1\xAF"[..],
        &b"\xE0\x80\xAF"[..],
        &b"\xF0\x80\x80\xAF"[..],
    ] {
        assert_eq!(map(bad, STABLE | COMPOSE), Err(Error::InvalidUtf8), "{:?}", bad);
    }
}

#[test]
fn surrogates_are_rejected() {
    assert_eq!(nfc(b"\xED\xA0\x80"), Err(Error::InvalidUtf8));
    assert_eq!(nfc(b"\xED\xBF\xBF"), Err(Error::InvalidUtf8));
}

#[test]
fn out_of_range_scalars_are_rejected() {
    assert_eq!(nfc(b"\xF4\x90\x80\x80"), Err(Error::InvalidUtf8));
    assert_eq!(nfc(b"\xF7\xBF\xBF\xBF"), Err(Error::InvalidUtf8));
}

#[test]
fn truncated_sequences_are_rejected() {
    for bad in [&b"ab\xC3"[..], &b"ab\xE2\x82"[..], &b"ab\xF0\x9D\x84"[..]] {
        assert_eq!(map(bad, STABLE | DECOMPOSE), Err(Error::InvalidUtf8), "{:?}", bad);
    }
}

#[test]
fn stray_continuation_bytes_are_rejected() {
    assert_eq!(nfc(b"\x80"), Err(Error::InvalidUtf8));
    assert_eq!(nfc(b"a\xBFb"), Err(Error::InvalidUtf8));
}

#[test]
fn iterate_then_encode_reproduces_well_formed_input() {
    let text = "aÄ€𝄞한국어\u{300}\u{10FFFF}\u{E000}";
    let mut rest = text.as_bytes();
    let mut rebuilt = Vec::new();
    let mut buf = [0u8; 4];
    while !rest.is_empty() {
        let (uc, n) = iterate(rest).unwrap();
        assert!(codepoint_valid(uc));
        let m = encode_char(uc, &mut buf);
        assert_eq!(m, n);
        rebuilt.extend_from_slice(&buf[..m]);
        rest = &rest[n..];
    }
    assert_eq!(rebuilt, text.as_bytes());
}

#[test]
fn interior_nul_is_data_without_nullterm() {
    assert_eq!(map(b"a\0b", STABLE | COMPOSE).unwrap(), b"a\0b");
    assert_eq!(map(b"a\0b", NULLTERM | STABLE | COMPOSE).unwrap(), b"a");
}

#[test]
fn error_codes_match_the_c_surface() {
    let err = nfc(b"\xC0\x80").unwrap_err();
    assert_eq!(err.code(), -3);
    assert_eq!(unifold::errmsg(err.code()), "Invalid UTF-8 string.");
}
