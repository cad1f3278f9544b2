// api.rs - Idiomatic Rust API on top of the byte-level mapping core.
//
// Wraps map() and the option bitmask with Rust-native types: MapBuilder for
// configured transforms, plus String-level normalization helpers.

use crate::error::Error;
use crate::map::map;
use crate::options::{self, Options};

/// Builder for a configured Unicode text transform.
///
/// # Examples
///
/// ```
/// use unifold::api::MapBuilder;
///
/// let fold = MapBuilder::new().compose().stable().casefold();
/// assert_eq!(fold.map_str("Straße").unwrap(), "strasse");
///
/// let clean = MapBuilder::new().strip_cc().newline_to_lf();
/// assert_eq!(clean.map_str("a\r\nb").unwrap(), "a\nb");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MapBuilder {
    options: Options,
}

impl MapBuilder {
    /// Creates a builder with no options set.
    pub fn new() -> Self {
        MapBuilder { options: 0 }
    }

    /// Starts from the NFC option set (stable canonical composition).
    pub fn nfc() -> Self {
        MapBuilder {
            options: options::STABLE | options::COMPOSE,
        }
    }

    /// Starts from the NFD option set (stable canonical decomposition).
    pub fn nfd() -> Self {
        MapBuilder {
            options: options::STABLE | options::DECOMPOSE,
        }
    }

    /// Starts from the NFKC option set.
    pub fn nfkc() -> Self {
        MapBuilder {
            options: options::STABLE | options::COMPOSE | options::COMPAT,
        }
    }

    /// Starts from the NFKD option set.
    pub fn nfkd() -> Self {
        MapBuilder {
            options: options::STABLE | options::DECOMPOSE | options::COMPAT,
        }
    }

    /// Recombine decomposed sequences (see `COMPOSE`).
    pub fn compose(self) -> Self {
        self.with(options::COMPOSE)
    }

    /// Leave the result fully decomposed (see `DECOMPOSE`).
    pub fn decompose(self) -> Self {
        self.with(options::DECOMPOSE)
    }

    /// Apply compatibility decompositions (see `COMPAT`).
    pub fn compat(self) -> Self {
        self.with(options::COMPAT)
    }

    /// Respect composition stability (see `STABLE`).
    pub fn stable(self) -> Self {
        self.with(options::STABLE)
    }

    /// Apply Unicode case folding (see `CASEFOLD`).
    pub fn casefold(self) -> Self {
        self.with(options::CASEFOLD)
    }

    /// Strip default-ignorable codepoints (see `IGNORE`).
    pub fn ignore_defaults(self) -> Self {
        self.with(options::IGNORE)
    }

    /// Fail on unassigned codepoints (see `REJECTNA`).
    pub fn reject_unassigned(self) -> Self {
        self.with(options::REJECTNA)
    }

    /// Strip or convert control characters (see `STRIPCC`).
    pub fn strip_cc(self) -> Self {
        self.with(options::STRIPCC)
    }

    /// Strip all character marks (see `STRIPMARK`).
    pub fn strip_marks(self) -> Self {
        self.with(options::STRIPMARK)
    }

    /// Lump visually similar codepoints together (see `LUMP`).
    pub fn lump(self) -> Self {
        self.with(options::LUMP)
    }

    /// Convert NLF-sequences to LINE FEED.
    pub fn newline_to_lf(self) -> Self {
        self.with(options::NLF2LF)
    }

    /// Convert NLF-sequences to LINE SEPARATOR (U+2028).
    pub fn newline_to_ls(self) -> Self {
        self.with(options::NLF2LS)
    }

    /// Convert NLF-sequences to PARAGRAPH SEPARATOR (U+2029).
    pub fn newline_to_ps(self) -> Self {
        self.with(options::NLF2PS)
    }

    /// Mark grapheme cluster starts with 0xFF bytes (see `CHARBOUND`).
    /// The output of [`map_bytes`](Self::map_bytes) is then no longer UTF-8.
    pub fn charbound(self) -> Self {
        self.with(options::CHARBOUND)
    }

    /// Sets a raw option flag. See the constants in [`crate::options`].
    pub fn option(self, flag: Options) -> Self {
        self.with(flag)
    }

    fn with(mut self, flag: Options) -> Self {
        self.options |= flag;
        self
    }

    /// The raw option bitmask this builder accumulated.
    pub fn options(&self) -> Options {
        self.options
    }

    /// Maps a byte string. The result is valid UTF-8 unless
    /// [`charbound`](Self::charbound) was requested.
    pub fn map_bytes(&self, src: &[u8]) -> Result<Vec<u8>, Error> {
        map(src, self.options)
    }

    /// Maps a string, including any interior zero bytes.
    pub fn map_str(&self, src: &str) -> Result<String, Error> {
        let bytes = map(src.as_bytes(), self.options & !options::NULLTERM)?;
        String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8)
    }
}

/// NFC-normalizes a string.
///
/// # Examples
///
/// ```
/// assert_eq!(unifold::nfc_str("A\u{308}").unwrap(), "Ä");
/// ```
pub fn nfc_str(s: &str) -> Result<String, Error> {
    MapBuilder::nfc().map_str(s)
}

/// NFD-normalizes a string.
pub fn nfd_str(s: &str) -> Result<String, Error> {
    MapBuilder::nfd().map_str(s)
}

/// NFKC-normalizes a string.
///
/// # Examples
///
/// ```
/// assert_eq!(unifold::nfkc_str("ﬁ\u{FF21}").unwrap(), "fiA");
/// ```
pub fn nfkc_str(s: &str) -> Result<String, Error> {
    MapBuilder::nfkc().map_str(s)
}

/// NFKD-normalizes a string.
pub fn nfkd_str(s: &str) -> Result<String, Error> {
    MapBuilder::nfkd().map_str(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_presets() {
        assert_eq!(MapBuilder::nfc().map_str("A\u{308}").unwrap(), "Ä");
        assert_eq!(MapBuilder::nfd().map_str("Ä").unwrap(), "A\u{308}");
        assert_eq!(MapBuilder::nfkc().map_str("ﬃ").unwrap(), "ffi");
        assert_eq!(MapBuilder::nfkd().map_str("½").unwrap(), "1\u{2044}2");
    }

    #[test]
    fn casefold_comparison() {
        let fold = MapBuilder::nfc().casefold();
        assert_eq!(
            fold.map_str("Grüße").unwrap(),
            fold.map_str("GRÜSSE").unwrap()
        );
    }

    #[test]
    fn interior_zero_bytes_survive_map_str() {
        assert_eq!(MapBuilder::nfc().map_str("a\0b").unwrap(), "a\0b");
    }

    #[test]
    fn charbound_bytes() {
        let out = MapBuilder::new().charbound().map_bytes(b"hi").unwrap();
        assert_eq!(out, &[0xFF, b'h', 0xFF, b'i']);
        // And the String surface refuses the non-UTF-8 result.
        assert_eq!(
            MapBuilder::new().charbound().map_str("hi"),
            Err(Error::InvalidUtf8)
        );
    }

    #[test]
    fn conflicting_options_error() {
        assert_eq!(
            MapBuilder::new().compose().decompose().map_str("a"),
            Err(Error::InvalidOpts)
        );
    }
}
