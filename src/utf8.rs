//! Lossy UTF-8 decoding.

use core::str;

/// A chunk of the possibly ill-formed UTF-8 byte sequence.
///
/// A chunk is a (possibly empty) valid string followed by a (possibly empty)
/// ill-formed byte sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Utf8Chunk<'a> {
    /// Valid prefix.
    valid: &'a str,
    /// Ill-formed suffix.
    ///
    /// This is a maximal subpart, i.e. the longest prefix of the rest that
    /// could be a prefix of a well-formed sequence, or a single byte.
    invalid: &'a [u8],
}

impl<'a> Utf8Chunk<'a> {
    /// Returns the valid part.
    #[inline]
    #[must_use]
    pub(crate) fn valid(&self) -> &'a str {
        self.valid
    }

    /// Returns the invalid part.
    #[inline]
    #[must_use]
    pub(crate) fn invalid(&self) -> &'a [u8] {
        self.invalid
    }
}

/// Iterator of [`Utf8Chunk`]s.
///
/// Replacing each non-empty invalid part with `U+FFFD` yields the same string
/// as `String::from_utf8_lossy`.
#[derive(Debug, Clone)]
pub(crate) struct Utf8Chunks<'a> {
    /// The rest of the input.
    source: &'a [u8],
}

impl<'a> Utf8Chunks<'a> {
    /// Creates a new iterator.
    #[inline]
    #[must_use]
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { source: bytes }
    }
}

impl<'a> Iterator for Utf8Chunks<'a> {
    type Item = Utf8Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.source.is_empty() {
            return None;
        }

        match str::from_utf8(self.source) {
            Ok(valid) => {
                self.source = &[];
                Some(Utf8Chunk {
                    valid,
                    invalid: &[],
                })
            }
            Err(e) => {
                let (valid, after_valid) = self.source.split_at(e.valid_up_to());
                // `error_len() == None` means the input ended in the middle
                // of a character.
                let invalid_len = e.error_len().unwrap_or(after_valid.len());
                let (invalid, rest) = after_valid.split_at(invalid_len);
                self.source = rest;

                let valid = str::from_utf8(valid)
                    .expect("[validity] the prefix before `valid_up_to` must be valid UTF-8");
                Some(Utf8Chunk { valid, invalid })
            }
        }
    }
}

impl core::iter::FusedIterator for Utf8Chunks<'_> {}
