// utf8.rs - UTF-8 codec (RFC 3629 range: U+0000 - U+10FFFF).
//
// Strict decoder: rejects invalid lead bytes, bad continuations, surrogate
// scalars, values above U+10FFFF and over-long forms.

use crate::error::Error;

// === Lead byte classes ===
// Maps the first byte to the sequence length; 0 marks an invalid lead
// (continuation bytes, 0xC0/0xC1 and 0xF5..0xFF).

#[rustfmt::skip]
pub static UTF8_CLASS: [u8; 256] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// True iff the value is a Unicode scalar: in range and not a surrogate.
pub fn codepoint_valid(codepoint: i32) -> bool {
    (0..0x110000).contains(&codepoint) && !(0xD800..0xE000).contains(&codepoint)
}

/// Reads a single codepoint from the start of `s`.
///
/// On success returns the codepoint and the number of bytes consumed. An
/// empty slice, a truncated sequence or any malformed encoding yields
/// [`Error::InvalidUtf8`].
pub fn iterate(s: &[u8]) -> Result<(i32, usize), Error> {
    let lead = *s.first().ok_or(Error::InvalidUtf8)?;
    let length = UTF8_CLASS[lead as usize] as usize;
    if length == 0 || length > s.len() {
        return Err(Error::InvalidUtf8);
    }
    for &byte in &s[1..length] {
        if !is_continuation(byte) {
            return Err(Error::InvalidUtf8);
        }
    }
    let uc = match length {
        1 => lead as i32,
        2 => {
            let uc = ((lead & 0x1F) as i32) << 6 | (s[1] & 0x3F) as i32;
            if uc < 0x80 {
                -1
            } else {
                uc
            }
        }
        3 => {
            let uc = ((lead & 0x0F) as i32) << 12
                | ((s[1] & 0x3F) as i32) << 6
                | (s[2] & 0x3F) as i32;
            if uc < 0x800 || (0xD800..0xE000).contains(&uc) {
                -1
            } else {
                uc
            }
        }
        _ => {
            let uc = ((lead & 0x07) as i32) << 18
                | ((s[1] & 0x3F) as i32) << 12
                | ((s[2] & 0x3F) as i32) << 6
                | (s[3] & 0x3F) as i32;
            if !(0x10000..0x110000).contains(&uc) {
                -1
            } else {
                uc
            }
        }
    };
    if uc < 0 {
        return Err(Error::InvalidUtf8);
    }
    Ok((uc, length))
}

/// Encodes a codepoint into `dst`, returning the number of bytes written.
///
/// Values outside [0, 0x10FFFF] produce 0 bytes. The scalar is not otherwise
/// validated; the internal grapheme marker 0xFFFF is emitted as the single
/// byte 0xFF.
pub fn encode_char(codepoint: i32, dst: &mut [u8; 4]) -> usize {
    if codepoint < 0 {
        0
    } else if codepoint < 0x80 {
        dst[0] = codepoint as u8;
        1
    } else if codepoint < 0x800 {
        dst[0] = 0xC0 | (codepoint >> 6) as u8;
        dst[1] = 0x80 | (codepoint & 0x3F) as u8;
        2
    } else if codepoint == 0xFFFF {
        dst[0] = 0xFF;
        1
    } else if codepoint < 0x10000 {
        dst[0] = 0xE0 | (codepoint >> 12) as u8;
        dst[1] = 0x80 | ((codepoint >> 6) & 0x3F) as u8;
        dst[2] = 0x80 | (codepoint & 0x3F) as u8;
        3
    } else if codepoint < 0x110000 {
        dst[0] = 0xF0 | (codepoint >> 18) as u8;
        dst[1] = 0x80 | ((codepoint >> 12) & 0x3F) as u8;
        dst[2] = 0x80 | ((codepoint >> 6) & 0x3F) as u8;
        dst[3] = 0x80 | (codepoint & 0x3F) as u8;
        4
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(mut s: &[u8]) -> Result<Vec<i32>, Error> {
        let mut out = Vec::new();
        while !s.is_empty() {
            let (uc, n) = iterate(s)?;
            out.push(uc);
            s = &s[n..];
        }
        Ok(out)
    }

    #[test]
    fn ascii_and_multibyte() {
        assert_eq!(iterate(b"A"), Ok((0x41, 1)));
        assert_eq!(iterate("Ä".as_bytes()), Ok((0xC4, 2)));
        assert_eq!(iterate("€".as_bytes()), Ok((0x20AC, 3)));
        assert_eq!(iterate("𝄞".as_bytes()), Ok((0x1D11E, 4)));
    }

    #[test]
    fn rejects_bad_leads() {
        for lead in [0x80u8, 0xBF, 0xC0, 0xC1, 0xF5, 0xFF] {
            assert_eq!(iterate(&[lead, 0x80, 0x80, 0x80]), Err(Error::InvalidUtf8));
        }
    }

    #[test]
    fn rejects_overlong_forms() {
        // 2-byte overlongs have invalid leads; longer overlongs decode small.
        assert_eq!(iterate(&[0xC0, 0x80]), Err(Error::InvalidUtf8));
        assert_eq!(iterate(&[0xC1, 0xBF]), Err(Error::InvalidUtf8));
        assert_eq!(iterate(&[0xE0, 0x80, 0x80]), Err(Error::InvalidUtf8));
        assert_eq!(iterate(&[0xE0, 0x9F, 0xBF]), Err(Error::InvalidUtf8));
        assert_eq!(iterate(&[0xF0, 0x80, 0x80, 0x80]), Err(Error::InvalidUtf8));
        assert_eq!(iterate(&[0xF0, 0x8F, 0xBF, 0xBF]), Err(Error::InvalidUtf8));
    }

    #[test]
    fn rejects_surrogates_and_out_of_range() {
        // U+D800 and U+DFFF encoded as 3-byte sequences.
        assert_eq!(iterate(&[0xED, 0xA0, 0x80]), Err(Error::InvalidUtf8));
        assert_eq!(iterate(&[0xED, 0xBF, 0xBF]), Err(Error::InvalidUtf8));
        // First scalar past U+10FFFF.
        assert_eq!(iterate(&[0xF4, 0x90, 0x80, 0x80]), Err(Error::InvalidUtf8));
    }

    #[test]
    fn rejects_truncation() {
        assert_eq!(iterate(b""), Err(Error::InvalidUtf8));
        assert_eq!(iterate(&[0xC3]), Err(Error::InvalidUtf8));
        assert_eq!(iterate(&[0xE2, 0x82]), Err(Error::InvalidUtf8));
        assert_eq!(iterate(&[0xF0, 0x9D, 0x84]), Err(Error::InvalidUtf8));
        // Continuation replaced by a new lead.
        assert_eq!(iterate(&[0xC3, 0x41]), Err(Error::InvalidUtf8));
    }

    #[test]
    fn encode_round_trips_well_formed_input() {
        let text = "aÄ€𝄞한국어\u{300}";
        let codepoints = decode_all(text.as_bytes()).unwrap();
        let mut bytes = Vec::new();
        let mut buf = [0u8; 4];
        for &uc in &codepoints {
            let n = encode_char(uc, &mut buf);
            bytes.extend_from_slice(&buf[..n]);
        }
        assert_eq!(bytes, text.as_bytes());
    }

    #[test]
    fn encode_edge_values() {
        let mut buf = [0u8; 4];
        assert_eq!(encode_char(-1, &mut buf), 0);
        assert_eq!(encode_char(0x110000, &mut buf), 0);
        assert_eq!(encode_char(0, &mut buf), 1);
        assert_eq!(encode_char(0x10FFFF, &mut buf), 4);
        // The grapheme marker leaves the UTF-8 domain on purpose.
        assert_eq!(encode_char(0xFFFF, &mut buf), 1);
        assert_eq!(buf[0], 0xFF);
    }

    #[test]
    fn codepoint_validity() {
        assert!(codepoint_valid(0));
        assert!(codepoint_valid(0x10FFFF));
        assert!(!codepoint_valid(-1));
        assert!(!codepoint_valid(0xD800));
        assert!(!codepoint_valid(0xDFFF));
        assert!(codepoint_valid(0xE000));
        assert!(!codepoint_valid(0x110000));
    }
}
