// map.rs - High-level mapping driver and the NFD/NFC/NFKD/NFKC entry points.
//
// map() sizes the codepoint buffer with a query pass, fills it with a second
// pass, then hands it to the re-encoder. The only allocations of the whole
// pipeline happen here.

use crate::decompose::decompose;
use crate::error::Error;
use crate::options::{self, Options};
use crate::reencode::reencode;

/// Maps a UTF-8 byte string into a newly allocated UTF-8 byte string
/// according to `options`.
///
/// With `NULLTERM` the input ends at the first zero byte, otherwise the
/// whole slice is processed. On success the returned buffer holds exactly
/// the mapped bytes; it is valid UTF-8 unless `CHARBOUND` was requested.
pub fn map(src: &[u8], options: Options) -> Result<Vec<u8>, Error> {
    let count = decompose(src, &mut [], options)?;
    let mut buffer: Vec<i32> = Vec::new();
    buffer.try_reserve_exact(count).map_err(|_| Error::NoMem)?;
    buffer.resize(count, 0);
    let written = decompose(src, &mut buffer, options)?;
    debug_assert_eq!(written, count);
    buffer.truncate(written);
    reencode(&mut buffer, options)
}

/// NFD-normalizes a zero-terminated or whole byte string.
pub fn nfd(src: &[u8]) -> Result<Vec<u8>, Error> {
    map(src, options::NULLTERM | options::STABLE | options::DECOMPOSE)
}

/// NFC-normalizes a zero-terminated or whole byte string.
pub fn nfc(src: &[u8]) -> Result<Vec<u8>, Error> {
    map(src, options::NULLTERM | options::STABLE | options::COMPOSE)
}

/// NFKD-normalizes a zero-terminated or whole byte string.
pub fn nfkd(src: &[u8]) -> Result<Vec<u8>, Error> {
    map(
        src,
        options::NULLTERM | options::STABLE | options::DECOMPOSE | options::COMPAT,
    )
}

/// NFKC-normalizes a zero-terminated or whole byte string.
pub fn nfkc(src: &[u8]) -> Result<Vec<u8>, Error> {
    map(
        src,
        options::NULLTERM | options::STABLE | options::COMPOSE | options::COMPAT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{CHARBOUND, COMPOSE, NULLTERM, STABLE};

    #[test]
    fn map_composes() {
        assert_eq!(map(b"A\xCC\x88", STABLE | COMPOSE).unwrap(), "Ä".as_bytes());
    }

    #[test]
    fn nfx_wrappers_use_fixed_option_sets() {
        assert_eq!(nfc("A\u{308}".as_bytes()).unwrap(), "Ä".as_bytes());
        assert_eq!(nfd("Ä".as_bytes()).unwrap(), "A\u{308}".as_bytes());
        assert_eq!(nfkd("ﬁ".as_bytes()).unwrap(), b"fi");
        assert_eq!(nfkc("ﬁ".as_bytes()).unwrap(), b"fi");
        // Canonical forms keep compatibility characters.
        assert_eq!(nfc("ﬁ".as_bytes()).unwrap(), "ﬁ".as_bytes());
    }

    #[test]
    fn nullterm_cuts_at_the_first_zero() {
        assert_eq!(nfc(b"ab\0cd").unwrap(), b"ab");
        assert_eq!(map(b"ab\0cd", STABLE | COMPOSE).unwrap(), b"ab\0cd");
    }

    #[test]
    fn charbound_output_is_marked() {
        let out = map(b"ab", NULLTERM | CHARBOUND).unwrap();
        assert_eq!(out, &[0xFF, b'a', 0xFF, b'b']);
    }

    #[test]
    fn empty_input() {
        assert_eq!(map(b"", STABLE | COMPOSE).unwrap(), b"");
    }

    #[test]
    fn invalid_input_surfaces_the_error() {
        assert_eq!(map(b"\xFF", STABLE | COMPOSE), Err(Error::InvalidUtf8));
    }
}
