//! Character classification.
//!
//! The predicates in this module decide whether a code point can be written
//! literally in an IRI, or must be percent-encoded.
//!
//! * [`is_unreserved`] tests `unreserved` rule of [RFC 3986 section 2.3].
//! * [`is_ucschar`] tests `ucschar` rule of [RFC 3987 section 2.2].
//!
//! Each predicate has a `*_code_point` variant taking `u32`, which is total
//! over all `u32` values, including surrogates and values beyond `U+10FFFF`.
//!
//! [RFC 3986 section 2.3]: https://tools.ietf.org/html/rfc3986#section-2.3
//! [RFC 3987 section 2.2]: https://tools.ietf.org/html/rfc3987#section-2.2

/// Inclusive code point ranges of `ucschar` rule.
///
/// The ranges are sorted in ascending order and disjoint.
///
/// ```text
/// ucschar = %xA0-D7FF / %xF900-FDCF / %xFDF0-FFEF
///         / %x10000-1FFFD / %x20000-2FFFD / %x30000-3FFFD
///         / %x40000-4FFFD / %x50000-5FFFD / %x60000-6FFFD
///         / %x70000-7FFFD / %x80000-8FFFD / %x90000-9FFFD
///         / %xA0000-AFFFD / %xB0000-BFFFD / %xC0000-CFFFD
///         / %xD0000-DFFFD / %xE1000-EFFFD
/// ```
///
/// # Examples
///
/// ```
/// use iri_pct::char::UCSCHAR_RANGES;
///
/// let (low, high) = UCSCHAR_RANGES[0];
/// assert_eq!((low, high), (0xA0, 0xD7FF));
/// assert!(UCSCHAR_RANGES.windows(2).all(|w| w[0].1 < w[1].0));
/// ```
pub const UCSCHAR_RANGES: [(u32, u32); 17] = [
    (0xA0, 0xD7FF),
    (0xF900, 0xFDCF),
    (0xFDF0, 0xFFEF),
    (0x1_0000, 0x1_FFFD),
    (0x2_0000, 0x2_FFFD),
    (0x3_0000, 0x3_FFFD),
    (0x4_0000, 0x4_FFFD),
    (0x5_0000, 0x5_FFFD),
    (0x6_0000, 0x6_FFFD),
    (0x7_0000, 0x7_FFFD),
    (0x8_0000, 0x8_FFFD),
    (0x9_0000, 0x9_FFFD),
    (0xA_0000, 0xA_FFFD),
    (0xB_0000, 0xB_FFFD),
    (0xC_0000, 0xC_FFFD),
    (0xD_0000, 0xD_FFFD),
    (0xE_1000, 0xE_FFFD),
];

/// Checks if the given character matches `unreserved` rule of RFC 3986.
///
/// ```text
/// unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
/// ```
///
/// Note that this is ASCII-only. Non-ASCII characters allowed in IRIs are
/// tested by [`is_ucschar`].
///
/// # Examples
///
/// ```
/// use iri_pct::char::is_unreserved;
///
/// assert!(is_unreserved('a'));
/// assert!(is_unreserved('~'));
/// assert!(!is_unreserved('@'));
/// assert!(!is_unreserved('\u{03B1}'));
/// ```
#[inline]
#[must_use]
pub const fn is_unreserved(c: char) -> bool {
    is_unreserved_code_point(c as u32)
}

/// Checks if the given code point matches `unreserved` rule of RFC 3986.
///
/// See [`is_unreserved`].
#[inline]
#[must_use]
pub const fn is_unreserved_code_point(cp: u32) -> bool {
    if cp >= 0x80 {
        return false;
    }
    let b = cp as u8;
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

/// Checks if the given character matches `ucschar` rule of RFC 3987.
///
/// # Examples
///
/// ```
/// use iri_pct::char::is_ucschar;
///
/// assert!(is_ucschar('\u{D7FF}'));
/// assert!(is_ucschar('\u{1F600}'));
/// // Private use area.
/// assert!(!is_ucschar('\u{E000}'));
/// // Noncharacters.
/// assert!(!is_ucschar('\u{FFFE}'));
/// assert!(!is_ucschar('\u{FFFF}'));
/// // ASCII.
/// assert!(!is_ucschar('a'));
/// ```
#[inline]
#[must_use]
pub const fn is_ucschar(c: char) -> bool {
    is_ucschar_code_point(c as u32)
}

/// Checks if the given code point matches `ucschar` rule of RFC 3987.
///
/// Surrogate code points and values out of the Unicode codespace are never
/// `ucschar`.
///
/// See [`is_ucschar`] and [`UCSCHAR_RANGES`].
#[inline]
#[must_use]
pub const fn is_ucschar_code_point(cp: u32) -> bool {
    // BMP first: most of the non-ASCII text in the wild lives there.
    matches!(
        cp,
        0xA0..=0xD7FF |
        0xF900..=0xFDCF |
        0xFDF0..=0xFFEF |
        0x1_0000..=0x1_FFFD |
        0x2_0000..=0x2_FFFD |
        0x3_0000..=0x3_FFFD |
        0x4_0000..=0x4_FFFD |
        0x5_0000..=0x5_FFFD |
        0x6_0000..=0x6_FFFD |
        0x7_0000..=0x7_FFFD |
        0x8_0000..=0x8_FFFD |
        0x9_0000..=0x9_FFFD |
        0xA_0000..=0xA_FFFD |
        0xB_0000..=0xB_FFFD |
        0xC_0000..=0xC_FFFD |
        0xD_0000..=0xD_FFFD |
        0xE_1000..=0xE_FFFD
    )
}

/// Checks if the given character can be written literally in an IRI component
/// without percent-encoding.
///
/// This is `is_unreserved(c) || is_ucschar(c)`.
///
/// # Examples
///
/// ```
/// use iri_pct::char::is_iri_literal;
///
/// assert!(is_iri_literal('-'));
/// assert!(is_iri_literal('\u{C138}'));
/// assert!(!is_iri_literal('/'));
/// assert!(!is_iri_literal('\u{FFFF}'));
/// ```
#[inline]
#[must_use]
pub const fn is_iri_literal(c: char) -> bool {
    is_unreserved(c) || is_ucschar(c)
}
