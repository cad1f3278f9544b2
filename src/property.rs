// property.rs - Per-codepoint property oracle.
//
// Lookup is a two-level table walk over generated data: STAGE1 maps the high
// byte of a codepoint to a block offset, STAGE2 maps the block offset plus
// the low byte to an index into the deduplicated PROPERTIES records. The
// tables themselves are emitted by build.rs into OUT_DIR/unicode_data.rs.

/// Unicode general categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Category {
    /// Other, not assigned
    Cn = 0,
    /// Letter, uppercase
    Lu = 1,
    /// Letter, lowercase
    Ll = 2,
    /// Letter, titlecase
    Lt = 3,
    /// Letter, modifier
    Lm = 4,
    /// Letter, other
    Lo = 5,
    /// Mark, nonspacing
    Mn = 6,
    /// Mark, spacing combining
    Mc = 7,
    /// Mark, enclosing
    Me = 8,
    /// Number, decimal digit
    Nd = 9,
    /// Number, letter
    Nl = 10,
    /// Number, other
    No = 11,
    /// Punctuation, connector
    Pc = 12,
    /// Punctuation, dash
    Pd = 13,
    /// Punctuation, open
    Ps = 14,
    /// Punctuation, close
    Pe = 15,
    /// Punctuation, initial quote
    Pi = 16,
    /// Punctuation, final quote
    Pf = 17,
    /// Punctuation, other
    Po = 18,
    /// Symbol, math
    Sm = 19,
    /// Symbol, currency
    Sc = 20,
    /// Symbol, modifier
    Sk = 21,
    /// Symbol, other
    So = 22,
    /// Separator, space
    Zs = 23,
    /// Separator, line
    Zl = 24,
    /// Separator, paragraph
    Zp = 25,
    /// Other, control
    Cc = 26,
    /// Other, format
    Cf = 27,
    /// Other, surrogate
    Cs = 28,
    /// Other, private use
    Co = 29,
}

impl Category {
    /// The two-letter category name, e.g. "Lu" or "Co".
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cn => "Cn",
            Category::Lu => "Lu",
            Category::Ll => "Ll",
            Category::Lt => "Lt",
            Category::Lm => "Lm",
            Category::Lo => "Lo",
            Category::Mn => "Mn",
            Category::Mc => "Mc",
            Category::Me => "Me",
            Category::Nd => "Nd",
            Category::Nl => "Nl",
            Category::No => "No",
            Category::Pc => "Pc",
            Category::Pd => "Pd",
            Category::Ps => "Ps",
            Category::Pe => "Pe",
            Category::Pi => "Pi",
            Category::Pf => "Pf",
            Category::Po => "Po",
            Category::Sm => "Sm",
            Category::Sc => "Sc",
            Category::Sk => "Sk",
            Category::So => "So",
            Category::Zs => "Zs",
            Category::Zl => "Zl",
            Category::Zp => "Zp",
            Category::Cc => "Cc",
            Category::Cf => "Cf",
            Category::Cs => "Cs",
            Category::Co => "Co",
        }
    }
}

/// Bidirectional character classes. Carried through as a property; the
/// pipeline itself performs no reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
#[allow(clippy::upper_case_acronyms)]
pub enum BidiClass {
    /// Left-to-Right
    L = 1,
    /// Left-to-Right Embedding
    LRE = 2,
    /// Left-to-Right Override
    LRO = 3,
    /// Right-to-Left
    R = 4,
    /// Right-to-Left Arabic
    AL = 5,
    /// Right-to-Left Embedding
    RLE = 6,
    /// Right-to-Left Override
    RLO = 7,
    /// Pop Directional Format
    PDF = 8,
    /// European Number
    EN = 9,
    /// European Separator
    ES = 10,
    /// European Number Terminator
    ET = 11,
    /// Arabic Number
    AN = 12,
    /// Common Number Separator
    CS = 13,
    /// Nonspacing Mark
    NSM = 14,
    /// Boundary Neutral
    BN = 15,
    /// Paragraph Separator
    B = 16,
    /// Segment Separator
    S = 17,
    /// Whitespace
    WS = 18,
    /// Other Neutrals
    ON = 19,
    /// Left-to-Right Isolate
    LRI = 20,
    /// Right-to-Left Isolate
    RLI = 21,
    /// First Strong Isolate
    FSI = 22,
    /// Pop Directional Isolate
    PDI = 23,
}

/// Compatibility decomposition tags. A codepoint whose decomposition carries
/// no tag decomposes canonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DecompType {
    Font = 1,
    NoBreak = 2,
    Initial = 3,
    Medial = 4,
    Final = 5,
    Isolated = 6,
    Circle = 7,
    Super = 8,
    Sub = 9,
    Vertical = 10,
    Wide = 11,
    Narrow = 12,
    Small = 13,
    Square = 14,
    Fraction = 15,
    Compat = 16,
}

/// Grapheme cluster boundary classes (UAX #29).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
#[allow(clippy::upper_case_acronyms)]
pub enum Boundclass {
    /// Iteration start; breaks before anything.
    Start = 0,
    Other = 1,
    CR = 2,
    LF = 3,
    Control = 4,
    Extend = 5,
    L = 6,
    V = 7,
    T = 8,
    LV = 9,
    LVT = 10,
    RegionalIndicator = 11,
    SpacingMark = 12,
}

/// Properties of a single codepoint. Obtained from [`get_property`]; all
/// records are static and shared.
#[derive(Debug)]
pub struct Property {
    /// General category.
    pub category: Category,
    /// Canonical Combining Class, 0..=254. 0 means "starter".
    pub combining_class: u8,
    /// Bidirectional class, if any.
    pub bidi_class: Option<BidiClass>,
    /// Compatibility tag of the decomposition; `None` for canonical
    /// decompositions (and for codepoints without one).
    pub decomp_type: Option<DecompType>,
    pub(crate) decomp_index: i16,
    pub(crate) decomp_len: u8,
    pub(crate) casefold_index: i16,
    pub(crate) casefold_len: u8,
    /// Simple uppercase mapping, -1 if absent.
    pub uppercase_mapping: i32,
    /// Simple lowercase mapping, -1 if absent.
    pub lowercase_mapping: i32,
    /// Simple titlecase mapping, -1 if absent.
    pub titlecase_mapping: i32,
    /// Premultiplied row offset into the composition table, -1 if this
    /// codepoint cannot be the first of a composable pair.
    pub comb1st_index: i32,
    /// Column into the composition table, -1 if this codepoint cannot be
    /// the second of a composable pair.
    pub comb2nd_index: i32,
    /// Mirrored in bidirectional text.
    pub bidi_mirrored: bool,
    /// Composing into this codepoint would violate versioning stability.
    pub comp_exclusion: bool,
    /// Default-ignorable; stripped under `IGNORE`.
    pub ignorable: bool,
    /// Grapheme boundaries never cross this codepoint.
    pub control_boundary: bool,
    /// Grapheme cluster boundary class.
    pub boundclass: Boundclass,
    /// Display width in cells: 0, 1 or 2.
    pub charwidth: u8,
}

impl Property {
    /// The canonical or compatibility decomposition, if any.
    pub fn decomp_mapping(&self) -> Option<&'static [i32]> {
        if self.decomp_index < 0 {
            return None;
        }
        let start = self.decomp_index as usize;
        Some(&SEQUENCES[start..start + self.decomp_len as usize])
    }

    /// The full case folding, if any.
    pub fn casefold_mapping(&self) -> Option<&'static [i32]> {
        if self.casefold_index < 0 {
            return None;
        }
        let start = self.casefold_index as usize;
        Some(&SEQUENCES[start..start + self.casefold_len as usize])
    }
}

include!(concat!(env!("OUT_DIR"), "/unicode_data.rs"));

/// Looks up the properties of a codepoint. Total: out-of-range values and
/// unassigned codepoints yield the default record (category `Cn`, all other
/// fields zero or absent).
pub fn get_property(codepoint: i32) -> &'static Property {
    if (0..0x110000).contains(&codepoint) {
        let offset = STAGE1[(codepoint >> 8) as usize] as usize;
        let index = STAGE2[offset + (codepoint & 0xFF) as usize];
        &PROPERTIES[index as usize]
    } else {
        &PROPERTIES[0]
    }
}

/// Canonical composite for a (comb1st_index, comb2nd_index) pair, or `None`.
/// `comb1st` is a premultiplied row offset, `comb2nd` a column.
pub(crate) fn compose_pair(comb1st: i32, comb2nd: i32) -> Option<i32> {
    debug_assert!(comb1st >= 0 && comb2nd >= 0);
    match COMBINATIONS[comb1st as usize + comb2nd as usize] {
        -1 => None,
        composite => Some(composite),
    }
}

/// The general category of a codepoint.
pub fn category(codepoint: i32) -> Category {
    get_property(codepoint).category
}

/// The two-letter general category name of a codepoint, e.g. "Lu".
pub fn category_string(codepoint: i32) -> &'static str {
    get_property(codepoint).category.as_str()
}

/// Display width of a codepoint, analogous to wcwidth except that
/// non-printable codepoints yield 0 instead of -1.
pub fn charwidth(codepoint: i32) -> i32 {
    get_property(codepoint).charwidth as i32
}
