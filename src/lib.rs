// unifold - Unicode normalization and text mapping for UTF-8 strings.
//
// Module structure follows the pipeline, leaf-first:
//   property.rs  - per-codepoint property oracle (generated tables)
//   utf8.rs      - UTF-8 codec
//   grapheme.rs  - UAX #29 extended grapheme break rule
//   decompose.rs - per-codepoint decomposer + canonical reordering
//   reencode.rs  - NLF/control rewrite, composition, byte emission
//   map.rs       - two-pass mapping driver, NFD/NFC/NFKD/NFKC
//   api.rs       - idiomatic String-level layer

//! Unicode mapping for UTF-8 strings: the four normalization forms, case
//! folding, stripping of default-ignorable and control characters, lumping
//! of visually similar characters, newline normalization and grapheme
//! cluster boundary detection, driven by one option bitmask.
//!
//! The byte-level core mirrors a C-style contract (caller-provided buffers,
//! size queries, negative error codes available via [`Error::code`]); the
//! [`api`] module and the top-level `nfc_str`-family helpers offer the
//! Rust-native surface.
//!
//! ```
//! use unifold::prelude::*;
//!
//! assert_eq!(nfc_str("A\u{308}").unwrap(), "Ä");
//! assert_eq!(nfkd_str("ﬁ").unwrap(), "fi");
//!
//! let scrub = MapBuilder::nfc().strip_cc().newline_to_lf();
//! assert_eq!(scrub.map_str("one\r\ntwo\u{7}").unwrap(), "one\ntwo");
//! ```

pub mod api;
pub mod error;
pub mod grapheme;
pub mod map;
pub mod options;
pub mod prelude;
pub mod property;
pub mod utf8;

mod decompose;
mod reencode;

pub use api::{nfc_str, nfd_str, nfkc_str, nfkd_str, MapBuilder};
pub use decompose::{decompose, decompose_char};
pub use error::{errmsg, Error};
pub use grapheme::grapheme_break;
pub use map::{map, nfc, nfd, nfkc, nfkd};
pub use property::{
    category, category_string, charwidth, get_property, Boundclass, Category, Property,
};
pub use reencode::reencode;
pub use utf8::{codepoint_valid, encode_char, iterate};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
