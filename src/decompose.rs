// decompose.rs - Per-codepoint decomposition and the full-string decomposer.
//
// decompose_char() applies the option-driven pipeline to one codepoint:
// rejection of unassigned codepoints, stripping of ignorables and marks,
// case folding, algorithmic Hangul decomposition, mapped decompositions,
// lumping and grapheme boundary markers. decompose() drives it over a byte
// string and canonically reorders the result.

use crate::error::Error;
use crate::grapheme::grapheme_break_class;
use crate::options::{self, option_on, Options};
use crate::property::{get_property, Boundclass, Category};
use crate::utf8;

// === Hangul syllable arithmetic ===

pub(crate) const HANGUL_SBASE: i32 = 0xAC00;
pub(crate) const HANGUL_LBASE: i32 = 0x1100;
pub(crate) const HANGUL_VBASE: i32 = 0x1161;
pub(crate) const HANGUL_TBASE: i32 = 0x11A7;
pub(crate) const HANGUL_LCOUNT: i32 = 19;
pub(crate) const HANGUL_VCOUNT: i32 = 21;
pub(crate) const HANGUL_TCOUNT: i32 = 28;
pub(crate) const HANGUL_NCOUNT: i32 = HANGUL_VCOUNT * HANGUL_TCOUNT;
pub(crate) const HANGUL_SCOUNT: i32 = HANGUL_LCOUNT * HANGUL_NCOUNT;

// Decomposed codepoint counts are kept small enough that re-encoding the
// buffer as 4·(count+1)+1 bytes cannot overflow the size type.
const MAX_CODEPOINTS: usize = isize::MAX as usize / 4 - 1;

/// Writes `value` at `index` if the buffer is large enough; counting
/// continues past the end so callers can size-query with a short buffer.
#[inline]
fn write_at(dst: &mut [i32], index: usize, value: i32) {
    if index < dst.len() {
        dst[index] = value;
    }
}

#[inline]
fn tail(dst: &mut [i32], written: usize) -> &mut [i32] {
    let start = written.min(dst.len());
    &mut dst[start..]
}

// Replacements applied under LUMP, after decomposition had its chance.
fn lump(uc: i32, category: Category, options: Options) -> Option<i32> {
    match category {
        Category::Zs => return Some(0x0020),
        Category::Pd => return Some(0x002D),
        Category::Pc => return Some(0x005F),
        Category::Zl | Category::Zp if options & options::NLF2LF == options::NLF2LF => {
            return Some(0x000A)
        }
        _ => {}
    }
    match uc {
        0x2018 | 0x2019 | 0x02BC | 0x02C8 => Some(0x0027),
        0x2212 => Some(0x002D),
        0x2044 | 0x2215 => Some(0x002F),
        0x2236 => Some(0x003A),
        0x2039 | 0x2329 | 0x3008 => Some(0x003C),
        0x203A | 0x232A | 0x3009 => Some(0x003E),
        0x2216 => Some(0x005C),
        0x02C4 | 0x02C6 | 0x2038 | 0x2303 => Some(0x005E),
        0x02CD => Some(0x005F),
        0x02CB => Some(0x0060),
        0x2223 => Some(0x007C),
        0x223C => Some(0x007E),
        0x00B7 | 0x00D7 | 0x2217 | 0x2219 | 0x22C5 => Some(0x002A),
        _ => None,
    }
}

fn decompose_seq(
    mapping: &[i32],
    dst: &mut [i32],
    options: Options,
    last_boundclass: &mut Boundclass,
) -> Result<usize, Error> {
    let mut written = 0;
    for &mapped in mapping {
        written += decompose_char(mapped, tail(dst, written), options, last_boundclass)?;
    }
    Ok(written)
}

fn decompose_hangul(sindex: i32, dst: &mut [i32]) -> usize {
    write_at(dst, 0, HANGUL_LBASE + sindex / HANGUL_NCOUNT);
    write_at(dst, 1, HANGUL_VBASE + (sindex % HANGUL_NCOUNT) / HANGUL_TCOUNT);
    let tindex = sindex % HANGUL_TCOUNT;
    if tindex != 0 {
        write_at(dst, 2, HANGUL_TBASE + tindex);
        3
    } else {
        2
    }
}

/// Decomposes a single codepoint into `dst` according to `options`.
///
/// Returns the number of codepoints the decomposition needs. If that exceeds
/// `dst.len()`, the count is still returned and the buffer contents are
/// unspecified, so callers may size-query with an empty buffer first.
///
/// `last_boundclass` carries the grapheme-boundary state between calls when
/// `CHARBOUND` is active; start it at [`Boundclass::Start`].
pub fn decompose_char(
    uc: i32,
    dst: &mut [i32],
    options: Options,
    last_boundclass: &mut Boundclass,
) -> Result<usize, Error> {
    let property = get_property(uc);
    let category = property.category;

    if option_on(options, options::REJECTNA) && category == Category::Cn {
        return Err(Error::NotAssigned);
    }
    if option_on(options, options::IGNORE) && (property.ignorable || uc == 0x00AD) {
        return Ok(0);
    }
    if option_on(options, options::STRIPMARK)
        && matches!(category, Category::Mn | Category::Mc | Category::Me)
    {
        return Ok(0);
    }
    if option_on(options, options::CASEFOLD) {
        if let Some(mapping) = property.casefold_mapping() {
            return decompose_seq(mapping, dst, options, last_boundclass);
        }
    }
    if option_on(options, options::COMPOSE | options::DECOMPOSE) {
        let sindex = uc - HANGUL_SBASE;
        if (0..HANGUL_SCOUNT).contains(&sindex) {
            return Ok(decompose_hangul(sindex, dst));
        }
        if let Some(mapping) = property.decomp_mapping() {
            if property.decomp_type.is_none() || option_on(options, options::COMPAT) {
                return decompose_seq(mapping, dst, options, last_boundclass);
            }
        }
    }
    if option_on(options, options::LUMP) {
        if let Some(replacement) = lump(uc, category, options) {
            return decompose_char(replacement, dst, options & !options::LUMP, last_boundclass);
        }
    }
    if option_on(options, options::CHARBOUND) {
        let boundclass = property.boundclass;
        let boundary = grapheme_break_class(*last_boundclass, boundclass);
        *last_boundclass = boundclass;
        if boundary {
            write_at(dst, 0, 0xFFFF);
            write_at(dst, 1, uc);
            return Ok(2);
        }
    }
    write_at(dst, 0, uc);
    Ok(1)
}

// Stable insertion sort by combining class; starters (class 0) anchor the
// runs and are never moved.
fn canonical_reorder(buffer: &mut [i32]) {
    for i in 1..buffer.len() {
        let uc = buffer[i];
        let ccc = get_property(uc).combining_class;
        if ccc == 0 {
            continue;
        }
        let mut j = i;
        while j > 0 {
            let prev_ccc = get_property(buffer[j - 1]).combining_class;
            if prev_ccc == 0 || prev_ccc <= ccc {
                break;
            }
            buffer[j] = buffer[j - 1];
            j -= 1;
        }
        buffer[j] = uc;
    }
}

/// Decomposes a UTF-8 byte string into `dst` and canonically reorders the
/// result.
///
/// With `NULLTERM`, processing stops at the first zero byte; otherwise the
/// whole slice is consumed. Returns the number of codepoints the result
/// needs; as with [`decompose_char`], a short (or empty) `dst` turns the
/// call into a size query.
pub fn decompose(src: &[u8], dst: &mut [i32], options: Options) -> Result<usize, Error> {
    options::check(options)?;
    let mut wpos: usize = 0;
    let mut rpos: usize = 0;
    let mut last_boundclass = Boundclass::Start;
    while rpos < src.len() {
        if option_on(options, options::NULLTERM) && src[rpos] == 0 {
            break;
        }
        let (uc, consumed) = utf8::iterate(&src[rpos..])?;
        rpos += consumed;
        let written = decompose_char(uc, tail(dst, wpos), options, &mut last_boundclass)?;
        wpos += written;
        if wpos > MAX_CODEPOINTS {
            return Err(Error::Overflow);
        }
    }
    if wpos <= dst.len() {
        canonical_reorder(&mut dst[..wpos]);
    }
    Ok(wpos)
}
