//! Buffers.

mod error;

use core::fmt;

#[cfg(feature = "alloc")]
use alloc::collections::TryReserveError;
#[cfg(feature = "alloc")]
use alloc::string::String;

pub(crate) use self::error::BufferTooSmallError;
pub use self::error::Error;

/// A trait for possibly extensible buffer types.
pub(crate) trait Buffer {
    /// Error on extending buffer.
    type ExtendError;

    /// Returns the content in a byte slice.
    #[must_use]
    fn as_bytes(&self) -> &[u8];
    /// Appends the given string slice.
    fn push_str(&mut self, s: &str) -> Result<(), Self::ExtendError>;
}

#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
impl Buffer for String {
    type ExtendError = TryReserveError;

    #[inline]
    fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }

    fn push_str(&mut self, s: &str) -> Result<(), Self::ExtendError> {
        // Cannot use `String::push_str` alone, as it panics on OOM.
        self.try_reserve(s.len())?;
        String::push_str(self, s);
        Ok(())
    }
}

/// Byte slice as a modifiable buffer.
#[derive(Debug)]
pub(crate) struct ByteSliceBuf<'a> {
    /// Target slice.
    buf: &'a mut [u8],
    /// Content length, not the buffer size.
    len: usize,
}

impl<'a> ByteSliceBuf<'a> {
    /// Creates a byte slice buffer.
    #[inline]
    #[must_use]
    pub(crate) fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    /// Returns the content in a byte slice with the lifetime of the backend.
    #[inline]
    #[must_use]
    pub(crate) fn into_bytes(self) -> &'a [u8] {
        &self.buf[..self.len]
    }
}

impl Buffer for ByteSliceBuf<'_> {
    type ExtendError = BufferTooSmallError;

    #[inline]
    fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    fn push_str(&mut self, s: &str) -> Result<(), Self::ExtendError> {
        let s_end = self.len + s.len();
        if self.buf.len() < s_end {
            return Err(BufferTooSmallError::new());
        }

        self.buf[self.len..s_end].copy_from_slice(s.as_bytes());
        self.len = s_end;

        Ok(())
    }
}

/// A wrapper to implement `fmt::Write` for a [`Buffer`].
///
/// `fmt::Write` can only return `fmt::Error`, so the real cause is kept
/// aside and can be taken after the write failed.
#[derive(Debug)]
pub(crate) struct FmtWritableBuffer<'a, B: Buffer> {
    /// Backend buffer.
    buffer: &'a mut B,
    /// Error on extending the buffer.
    error: Option<B::ExtendError>,
}

impl<'a, B: Buffer> FmtWritableBuffer<'a, B> {
    /// Creates a new writer.
    #[inline]
    #[must_use]
    pub(crate) fn new(buffer: &'a mut B) -> Self {
        Self {
            buffer,
            error: None,
        }
    }

    /// Takes the error stored on write failure, if any.
    ///
    /// `None` after a failed write means the failure came from the value
    /// being formatted, not from the buffer.
    #[inline]
    #[must_use]
    pub(crate) fn take_error(&mut self) -> Option<B::ExtendError> {
        self.error.take()
    }

    /// Takes the error stored on write failure.
    ///
    /// # Panics
    ///
    /// Panics if no error was recorded.
    #[cfg_attr(not(feature = "alloc"), allow(dead_code))]
    #[must_use]
    pub(crate) fn take_error_unwrap(&mut self) -> B::ExtendError {
        self.error
            .take()
            .expect("[consistency] buffer error should be recorded on write failure")
    }
}

impl<B: Buffer> fmt::Write for FmtWritableBuffer<'_, B> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.push_str(s).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use core::fmt::Write as _;

    #[test]
    fn byte_slice_buf_exact_capacity() {
        let mut storage = [0_u8; 6];
        let mut buf = ByteSliceBuf::new(&mut storage);
        buf.push_str("foo").expect("enough capacity");
        buf.push_str("bar").expect("enough capacity");
        assert_eq!(buf.as_bytes(), b"foobar");
        assert!(buf.push_str("!").is_err());
        assert_eq!(buf.into_bytes(), b"foobar");
    }

    #[test]
    fn byte_slice_buf_keeps_content_on_failure() {
        let mut storage = [0_u8; 4];
        let mut buf = ByteSliceBuf::new(&mut storage);
        buf.push_str("abc").expect("enough capacity");
        assert!(buf.push_str("de").is_err());
        assert_eq!(buf.as_bytes(), b"abc");
    }

    #[test]
    fn fmt_writable_records_error() {
        let mut storage = [0_u8; 2];
        let mut buf = ByteSliceBuf::new(&mut storage);
        let mut writer = FmtWritableBuffer::new(&mut buf);
        assert!(write!(writer, "{}", 42).is_ok());
        assert!(write!(writer, "{}", 7).is_err());
        let _: BufferTooSmallError = writer.take_error_unwrap();
        assert_eq!(buf.as_bytes(), b"42");
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn string_buffer() {
        let mut s = String::from("a");
        Buffer::push_str(&mut s, "bc").expect("allocation should succeed");
        assert_eq!(Buffer::as_bytes(&s), b"abc");
    }
}
