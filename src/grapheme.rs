// grapheme.rs - Extended grapheme cluster boundary rule (UAX #29).
//
// The rule is evaluated over boundclass pairs only; regional-indicator
// parity is not threaded through, so every RI ∥ RI pair glues (the
// two-codepoint interface cannot count a preceding run).

use crate::property::{get_property, Boundclass};

// Hangul jamo joining: L×(L|V|LV|LVT), (LV|V)×(V|T), (LVT|T)×T.
#[inline]
fn hangul_glue(lbc: Boundclass, tbc: Boundclass) -> bool {
    use Boundclass::{L, LV, LVT, T, V};
    match lbc {
        L => matches!(tbc, L | V | LV | LVT),
        LV | V => matches!(tbc, V | T),
        LVT | T => tbc == T,
        _ => false,
    }
}

/// Applies the extended grapheme cluster rules to a pair of boundclasses,
/// returning whether a break is permitted between them.
pub(crate) fn grapheme_break_class(lbc: Boundclass, tbc: Boundclass) -> bool {
    use Boundclass::*;
    if lbc == Start {
        return true;
    }
    if lbc == CR && tbc == LF {
        return false;
    }
    if matches!(lbc, CR | LF | Control) || matches!(tbc, CR | LF | Control) {
        return true;
    }
    if tbc == Extend {
        return false;
    }
    if hangul_glue(lbc, tbc) {
        return false;
    }
    if lbc == RegionalIndicator && tbc == RegionalIndicator {
        return false;
    }
    if tbc == SpacingMark {
        return false;
    }
    true
}

/// Given a pair of consecutive codepoints, returns whether a grapheme break
/// is permitted between them per the extended grapheme clusters of UAX #29.
pub fn grapheme_break(codepoint1: i32, codepoint2: i32) -> bool {
    grapheme_break_class(
        get_property(codepoint1).boundclass,
        get_property(codepoint2).boundclass,
    )
}
