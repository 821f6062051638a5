//! Percent encoding.
//!
//! Characters matching `unreserved` rule of RFC 3986 or `ucschar` rule of
//! RFC 3987 are written as is. Any other character is percent-encoded as its
//! UTF-8 byte sequence, with uppercase hexadecimal digits.
//!
//! ```
//! # #[cfg(feature = "alloc")] {
//! use iri_pct::percent_encode::percent_encode;
//!
//! assert_eq!(percent_encode("a:b@c/d?e#f"), "a%3Ab%40c%2Fd%3Fe%23f");
//! assert_eq!(percent_encode("\u{C138}\u{C0C1}"), "\u{C138}\u{C0C1}");
//! assert_eq!(percent_encode("\u{FFFF}"), "%EF%BF%BF");
//! # }
//! ```
//!
//! Nothing is decoded: a `%` in the input is encoded to `%25`.
//!
//! # Ill-formed input
//!
//! [`percent_encode_bytes`] and [`PercentEncodedBytes`] accept byte sequences
//! which might not be valid UTF-8. Each maximal ill-formed subsequence is
//! replaced with a single U+FFFD REPLACEMENT CHARACTER (the same substitution
//! as [`String::from_utf8_lossy`]), and the replacement character is then
//! encoded by the usual rule. U+FFFD is not `ucschar`, so every ill-formed
//! unit becomes `%EF%BF%BD`.
//!
//! [`String::from_utf8_lossy`]: https://doc.rust-lang.org/std/string/struct.String.html#method.from_utf8_lossy

use core::fmt::{self, Write as _};
use core::str;

#[cfg(feature = "alloc")]
use alloc::string::String;

use crate::buffer::{ByteSliceBuf, FmtWritableBuffer};
use crate::char::is_iri_literal;
use crate::format::eq_str_display;
use crate::task::{Error as TaskError, ProcessAndWrite};
use crate::utf8::Utf8Chunks;

/// Uppercase hexadecimal digits.
const HEXDIGITS_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Percent-encodes the given string.
///
/// The result is a new string; the input is never modified.
/// Output length is never less than the input length, and they are the same
/// iff no character is encoded.
///
/// # Examples
///
/// ```
/// use iri_pct::percent_encode::percent_encode;
///
/// assert_eq!(percent_encode(""), "");
/// assert_eq!(percent_encode("abc-1_2.3~"), "abc-1_2.3~");
/// assert_eq!(percent_encode("@"), "%40");
/// assert_eq!(percent_encode("hello world"), "hello%20world");
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
#[must_use]
pub fn percent_encode(s: &str) -> String {
    // The output is never shorter than the input.
    let mut buf = String::with_capacity(s.len());
    encode_str(&mut buf, s).expect("[validity] `fmt::Write` for `String` never fails");
    buf
}

/// Percent-encodes the given possibly ill-formed UTF-8 byte sequence.
///
/// See [the module documentation](self#ill-formed-input) for the handling of
/// ill-formed input.
///
/// # Examples
///
/// ```
/// use iri_pct::percent_encode::percent_encode_bytes;
///
/// assert_eq!(percent_encode_bytes(b"a/b"), "a%2Fb");
/// assert_eq!(percent_encode_bytes(b"a\xFFb"), "a%EF%BF%BDb");
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
#[must_use]
pub fn percent_encode_bytes(bytes: &[u8]) -> String {
    let mut buf = String::with_capacity(bytes.len());
    encode_bytes(&mut buf, bytes).expect("[validity] `fmt::Write` for `String` never fails");
    buf
}

/// A proxy to percent-encode a string lazily.
///
/// The encoding is done while the value is formatted by [`fmt::Display`], so
/// no allocation is required.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "alloc")] {
/// use iri_pct::percent_encode::PercentEncoded;
///
/// let encoded = PercentEncoded::new("joe@example");
/// assert_eq!(encoded.to_string(), "joe%40example");
/// assert!(encoded == "joe%40example");
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PercentEncoded<T> {
    /// Raw string before being encoded.
    raw: T,
}

impl<T: fmt::Display> PercentEncoded<T> {
    /// Creates a proxy to percent-encode the given value.
    ///
    /// Any [`fmt::Display`] type can be used, and its formatted output is
    /// encoded.
    ///
    /// ```
    /// # #[cfg(feature = "alloc")] {
    /// use iri_pct::percent_encode::PercentEncoded;
    ///
    /// assert_eq!(PercentEncoded::new(-3.5).to_string(), "-3.5");
    /// assert_eq!(PercentEncoded::new('+').to_string(), "%2B");
    /// # }
    /// ```
    #[inline]
    #[must_use]
    pub fn new(raw: T) -> Self {
        Self { raw }
    }

    /// Returns a reference to the raw value.
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &T {
        &self.raw
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub fn into_raw(self) -> T {
        self.raw
    }
}

impl<T: fmt::Display> fmt::Display for PercentEncoded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        /// Filter that encodes a string before written.
        struct Filter<'a, 'b> {
            /// Writer.
            writer: &'a mut fmt::Formatter<'b>,
        }
        impl fmt::Write for Filter<'_, '_> {
            #[inline]
            fn write_str(&mut self, s: &str) -> fmt::Result {
                encode_str(&mut *self.writer, s)
            }
        }

        let mut filter = Filter { writer: f };
        write!(filter, "{}", self.raw)
    }
}

impl<T: fmt::Display> PartialEq<str> for PercentEncoded<T> {
    /// Compares the encoded result with the string, without allocation.
    #[inline]
    fn eq(&self, other: &str) -> bool {
        eq_str_display(other, self)
    }
}

impl<T: fmt::Display> PartialEq<&str> for PercentEncoded<T> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        eq_str_display(other, self)
    }
}

/// A proxy to percent-encode a possibly ill-formed UTF-8 byte sequence lazily.
///
/// See [the module documentation](self#ill-formed-input) for the handling of
/// ill-formed input.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "alloc")] {
/// use iri_pct::percent_encode::PercentEncodedBytes;
///
/// let encoded = PercentEncodedBytes::new(b"caf\xC3\xA9 \xC3");
/// assert_eq!(encoded.to_string(), "caf\u{E9}%20%EF%BF%BD");
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PercentEncodedBytes<'a> {
    /// Raw bytes before being decoded and encoded.
    raw: &'a [u8],
}

impl<'a> PercentEncodedBytes<'a> {
    /// Creates a proxy to percent-encode the given bytes.
    #[inline]
    #[must_use]
    pub fn new(raw: &'a [u8]) -> Self {
        Self { raw }
    }

    /// Returns the raw bytes.
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &'a [u8] {
        self.raw
    }
}

impl fmt::Display for PercentEncodedBytes<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        encode_bytes(f, self.raw)
    }
}

impl PartialEq<str> for PercentEncodedBytes<'_> {
    /// Compares the encoded result with the string, without allocation.
    #[inline]
    fn eq(&self, other: &str) -> bool {
        eq_str_display(other, self)
    }
}

impl PartialEq<&str> for PercentEncodedBytes<'_> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        eq_str_display(other, self)
    }
}

/// Percent-encodes the string and writes it.
///
/// Runs of literal characters are written as a single slice.
fn encode_str<W: fmt::Write + ?Sized>(writer: &mut W, s: &str) -> fmt::Result {
    let mut literal_start = 0;
    for (i, c) in s.char_indices() {
        if is_iri_literal(c) {
            continue;
        }
        if literal_start < i {
            writer.write_str(&s[literal_start..i])?;
        }
        write_pct_encoded_char(writer, c)?;
        literal_start = i + c.len_utf8();
    }
    if literal_start < s.len() {
        writer.write_str(&s[literal_start..])?;
    }
    Ok(())
}

/// Decodes the bytes lossily, percent-encodes the result, and writes it.
fn encode_bytes<W: fmt::Write + ?Sized>(writer: &mut W, bytes: &[u8]) -> fmt::Result {
    for chunk in Utf8Chunks::new(bytes) {
        encode_str(writer, chunk.valid())?;
        if !chunk.invalid().is_empty() {
            write_pct_encoded_char(writer, char::REPLACEMENT_CHARACTER)?;
        }
    }
    Ok(())
}

/// Returns the percent-encoded triplet for the byte.
#[inline]
#[must_use]
const fn pct_triplet(b: u8) -> [u8; 3] {
    [
        b'%',
        HEXDIGITS_UPPER[(b >> 4) as usize],
        HEXDIGITS_UPPER[(b & 0x0F) as usize],
    ]
}

/// Percent-encodes the given character and writes it.
#[inline]
fn write_pct_encoded_char<W: fmt::Write + ?Sized>(writer: &mut W, c: char) -> fmt::Result {
    let mut utf8 = [0_u8; 4];
    let utf8 = c.encode_utf8(&mut utf8).as_bytes();
    let mut triplets = [0_u8; 12];
    for (dest, b) in triplets.chunks_exact_mut(3).zip(utf8) {
        dest.copy_from_slice(&pct_triplet(*b));
    }
    let triplets = str::from_utf8(&triplets[..(utf8.len() * 3)])
        .expect("[validity] percent-encoded triplets must be ASCII string");
    writer.write_str(triplets)
}

/// Writes the formatted value to the byte slice.
fn write_display_to_byte_slice<'b, D>(
    value: &D,
    buf: &'b mut [u8],
) -> Result<&'b str, TaskError<fmt::Error>>
where
    D: ?Sized + fmt::Display,
{
    let mut slice_buf = ByteSliceBuf::new(buf);
    let mut writer = FmtWritableBuffer::new(&mut slice_buf);
    if write!(writer, "{}", value).is_err() {
        return Err(match writer.take_error() {
            Some(e) => TaskError::from(e),
            None => TaskError::Process(fmt::Error),
        });
    }
    let s = str::from_utf8(slice_buf.into_bytes())
        .expect("[validity] formatted output must be valid UTF-8 string");
    Ok(s)
}

/// Appends the formatted value to the string.
///
/// The string is left unmodified on failure.
#[cfg(feature = "alloc")]
fn try_append_display<'b, D>(
    value: &D,
    buf: &'b mut String,
) -> Result<&'b str, TaskError<fmt::Error>>
where
    D: ?Sized + fmt::Display,
{
    let start = buf.len();
    let mut writer = FmtWritableBuffer::new(&mut *buf);
    if write!(writer, "{}", value).is_err() {
        let e = match writer.take_error() {
            Some(e) => TaskError::from(e),
            None => TaskError::Process(fmt::Error),
        };
        buf.truncate(start);
        return Err(e);
    }
    Ok(&buf[start..])
}

impl<T: fmt::Display> ProcessAndWrite for &'_ PercentEncoded<T> {
    type OutputBorrowed = str;
    #[cfg(feature = "alloc")]
    type OutputOwned = String;
    /// Formatting error of the raw value.
    type ProcessError = fmt::Error;

    #[cfg(feature = "alloc")]
    fn allocate_and_write(self) -> Result<Self::OutputOwned, TaskError<Self::ProcessError>> {
        let mut s = String::new();
        self.try_append_to_std_string(&mut s)?;
        Ok(s)
    }

    #[inline]
    fn write_to_byte_slice(
        self,
        buf: &mut [u8],
    ) -> Result<&Self::OutputBorrowed, TaskError<Self::ProcessError>> {
        write_display_to_byte_slice(self, buf)
    }

    #[cfg(feature = "alloc")]
    #[inline]
    fn try_append_to_std_string(
        self,
        buf: &mut String,
    ) -> Result<&Self::OutputBorrowed, TaskError<Self::ProcessError>> {
        try_append_display(self, buf)
    }
}

/// Converts the error of the task which never fails to process data.
fn never_process_error(e: TaskError<fmt::Error>) -> TaskError<core::convert::Infallible> {
    match e {
        TaskError::Buffer(e) => TaskError::Buffer(e),
        TaskError::Process(_) => {
            unreachable!("[consistency] encoding bytes never fails except for buffer errors")
        }
    }
}

impl ProcessAndWrite for &'_ PercentEncodedBytes<'_> {
    type OutputBorrowed = str;
    #[cfg(feature = "alloc")]
    type OutputOwned = String;
    type ProcessError = core::convert::Infallible;

    #[cfg(feature = "alloc")]
    fn allocate_and_write(self) -> Result<Self::OutputOwned, TaskError<Self::ProcessError>> {
        let mut s = String::new();
        s.try_reserve(self.raw.len())?;
        self.try_append_to_std_string(&mut s)?;
        Ok(s)
    }

    #[inline]
    fn write_to_byte_slice(
        self,
        buf: &mut [u8],
    ) -> Result<&Self::OutputBorrowed, TaskError<Self::ProcessError>> {
        write_display_to_byte_slice(self, buf).map_err(never_process_error)
    }

    #[cfg(feature = "alloc")]
    #[inline]
    fn try_append_to_std_string(
        self,
        buf: &mut String,
    ) -> Result<&Self::OutputBorrowed, TaskError<Self::ProcessError>> {
        try_append_display(self, buf).map_err(never_process_error)
    }
}
