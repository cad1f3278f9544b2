// reencode.rs - Codepoint post-processing, canonical composition and UTF-8
// re-encoding.
//
// The newline/control rewrite and the composition pass shorten the codepoint
// buffer in place; the surviving codepoints are then emitted as UTF-8. The C
// trick of re-encoding into the very same storage is traded for a separate
// byte buffer (one codepoint always re-encodes into at most its own four
// bytes, so nothing else changes).

use crate::decompose::{
    HANGUL_LBASE, HANGUL_LCOUNT, HANGUL_SBASE, HANGUL_SCOUNT, HANGUL_TBASE, HANGUL_TCOUNT,
    HANGUL_VBASE, HANGUL_VCOUNT,
};
use crate::error::Error;
use crate::options::{self, option_on, Options};
use crate::property::{compose_pair, get_property, Property};
use crate::utf8::encode_char;

// Newline and control rewrite; returns the new buffer length.
//
// A CR directly followed by LF collapses into a single NLF. NLF-sequences
// go to LS, PS or LF per the NLF2* bits, or to a space when only STRIPCC
// is set; HT and FF count as NLF-sequences while any NLF2* bit is set.
// Under STRIPCC the remaining C0/C1 controls are dropped, except HT which
// becomes a space.
fn postprocess(buffer: &mut [i32], options: Options) -> usize {
    let length = buffer.len();
    let mut wpos = 0;
    let mut rpos = 0;
    while rpos < length {
        let uc = buffer[rpos];
        if uc == 0x000D && rpos + 1 < length && buffer[rpos + 1] == 0x000A {
            rpos += 1;
        }
        if uc == 0x000A
            || uc == 0x000D
            || uc == 0x0085
            || (option_on(options, options::NLF2LS | options::NLF2PS)
                && (uc == 0x0009 || uc == 0x000C))
        {
            buffer[wpos] = if option_on(options, options::NLF2LS) {
                if option_on(options, options::NLF2PS) {
                    0x000A
                } else {
                    0x2028
                }
            } else if option_on(options, options::NLF2PS) {
                0x2029
            } else {
                0x0020
            };
            wpos += 1;
        } else if option_on(options, options::STRIPCC)
            && (uc < 0x0020 || (0x007F..0x00A0).contains(&uc))
        {
            if uc == 0x0009 {
                buffer[wpos] = 0x0020;
                wpos += 1;
            }
        } else {
            buffer[wpos] = uc;
            wpos += 1;
        }
        rpos += 1;
    }
    wpos
}

// Canonical composition; returns the new buffer length.
//
// Walks the buffer keeping the current starter. A candidate may combine
// with the starter only if no non-starter in between has a combining class
// at least as high (the blocking rule); Hangul jamo combine algorithmically.
fn compose(buffer: &mut [i32], options: Options) -> usize {
    let length = buffer.len();
    let mut starter: Option<usize> = None;
    let mut starter_property: Option<&'static Property> = None;
    let mut max_combining_class: i32 = -1;
    let mut wpos = 0;
    for rpos in 0..length {
        let current_char = buffer[rpos];
        let current_property = get_property(current_char);
        if let Some(spos) = starter {
            if current_property.combining_class as i32 > max_combining_class {
                // Hangul L + V -> LV.
                let lindex = buffer[spos] - HANGUL_LBASE;
                if (0..HANGUL_LCOUNT).contains(&lindex) {
                    let vindex = current_char - HANGUL_VBASE;
                    if (0..HANGUL_VCOUNT).contains(&vindex) {
                        buffer[spos] =
                            HANGUL_SBASE + (lindex * HANGUL_VCOUNT + vindex) * HANGUL_TCOUNT;
                        starter_property = None;
                        continue;
                    }
                }
                // Hangul LV + T -> LVT.
                let sindex = buffer[spos] - HANGUL_SBASE;
                if (0..HANGUL_SCOUNT).contains(&sindex) && sindex % HANGUL_TCOUNT == 0 {
                    let tindex = current_char - HANGUL_TBASE;
                    if (1..HANGUL_TCOUNT).contains(&tindex) {
                        buffer[spos] += tindex;
                        starter_property = None;
                        continue;
                    }
                }
                // Table composition.
                let sprop = *starter_property.get_or_insert_with(|| get_property(buffer[spos]));
                if sprop.comb1st_index >= 0 && current_property.comb2nd_index >= 0 {
                    if let Some(composition) =
                        compose_pair(sprop.comb1st_index, current_property.comb2nd_index)
                    {
                        if !option_on(options, options::STABLE)
                            || !get_property(composition).comp_exclusion
                        {
                            buffer[spos] = composition;
                            starter_property = None;
                            continue;
                        }
                    }
                }
            }
        }
        buffer[wpos] = current_char;
        if current_property.combining_class != 0 {
            if current_property.combining_class as i32 > max_combining_class {
                max_combining_class = current_property.combining_class as i32;
            }
        } else {
            starter = Some(wpos);
            starter_property = None;
            max_combining_class = -1;
        }
        wpos += 1;
    }
    wpos
}

/// Post-processes and re-encodes a codepoint buffer as UTF-8.
///
/// Applies the NLF/STRIPCC rewrite and, under `COMPOSE`, canonical and
/// algorithmic Hangul composition, both in place; then emits UTF-8. The
/// grapheme marker 0xFFFF becomes the single byte 0xFF, so the output is
/// not valid UTF-8 when `CHARBOUND` was used upstream.
pub fn reencode(buffer: &mut [i32], options: Options) -> Result<Vec<u8>, Error> {
    let mut length = buffer.len();
    if option_on(options, options::NLF2LS | options::NLF2PS | options::STRIPCC) {
        length = postprocess(&mut buffer[..length], options);
    }
    if option_on(options, options::COMPOSE) {
        length = compose(&mut buffer[..length], options);
    }

    let cap = length
        .checked_mul(4)
        .filter(|&n| n < isize::MAX as usize)
        .ok_or(Error::Overflow)?;
    let mut bytes: Vec<u8> = Vec::new();
    bytes.try_reserve(cap).map_err(|_| Error::NoMem)?;
    let mut encoded = [0u8; 4];
    for &uc in &buffer[..length] {
        let n = encode_char(uc, &mut encoded);
        bytes.extend_from_slice(&encoded[..n]);
    }
    Ok(bytes)
}
