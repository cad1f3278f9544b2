// options.rs - Option bitmask for the mapping pipeline.
//
// The numeric values are part of the stable public surface; several flags
// gate behavior deep inside the decomposer and the re-encoder.

use crate::error::Error;

/// Options are a plain bitmask.
pub type Options = u32;

/// The UTF-8 input is terminated by the first zero byte.
pub const NULLTERM: Options = 1 << 0;
/// Respect Unicode versioning stability when composing.
pub const STABLE: Options = 1 << 1;
/// Apply compatibility decompositions (formatting information is lost).
pub const COMPAT: Options = 1 << 2;
/// Recombine decomposed sequences into composite codepoints.
pub const COMPOSE: Options = 1 << 3;
/// Leave the result fully decomposed.
pub const DECOMPOSE: Options = 1 << 4;
/// Strip "default ignorable" codepoints such as SOFT HYPHEN.
pub const IGNORE: Options = 1 << 5;
/// Fail when the input contains unassigned codepoints.
pub const REJECTNA: Options = 1 << 6;
/// NLF-sequences (LF, CRLF, CR, NEL) represent a line break; convert them
/// to LINE SEPARATOR (U+2028).
pub const NLF2LS: Options = 1 << 7;
/// NLF-sequences represent a paragraph break; convert them to PARAGRAPH
/// SEPARATOR (U+2029).
pub const NLF2PS: Options = 1 << 8;
/// The meaning of NLF-sequences is unknown; convert them to LINE FEED.
pub const NLF2LF: Options = NLF2LS | NLF2PS;
/// Strip or convert control characters. NLF-sequences become a space unless
/// one of the NLF2* options is given (HT and FF count as NLF-sequences while
/// such an option is set); HT becomes a space and all other controls are
/// removed.
pub const STRIPCC: Options = 1 << 9;
/// Apply Unicode case folding for caseless comparison.
pub const CASEFOLD: Options = 1 << 10;
/// Emit a 0xFF byte before each grapheme cluster (UAX #29).
pub const CHARBOUND: Options = 1 << 11;
/// Lump certain codepoints together, e.g. HYPHEN (U+2010) and MINUS
/// (U+2212) both become "-". With `NLF2LF` this also maps line and
/// paragraph separators to LINE FEED.
pub const LUMP: Options = 1 << 12;
/// Strip all character marks (nonspacing, spacing, enclosing). Requires
/// `COMPOSE` or `DECOMPOSE`.
pub const STRIPMARK: Options = 1 << 13;

#[inline]
pub(crate) fn option_on(options: Options, flag: Options) -> bool {
    options & flag != 0
}

/// Rejects option combinations the pipeline cannot honor.
pub fn check(options: Options) -> Result<(), Error> {
    if option_on(options, COMPOSE) && option_on(options, DECOMPOSE) {
        return Err(Error::InvalidOpts);
    }
    if option_on(options, STRIPMARK) && !option_on(options, COMPOSE | DECOMPOSE) {
        return Err(Error::InvalidOpts);
    }
    Ok(())
}
