//! Utilities for formatting.

use core::fmt::{self, Write as _};

#[cfg(feature = "alloc")]
use alloc::collections::TryReserveError;
#[cfg(feature = "alloc")]
use alloc::string::String;

#[cfg(feature = "alloc")]
use crate::buffer::FmtWritableBuffer;

/// Returns true if the two equals after they are converted to strings.
pub(crate) fn eq_str_display<T>(s: &str, d: &T) -> bool
where
    T: ?Sized + fmt::Display,
{
    /// Dummy writer to compare the formatted object to the given string.
    struct CmpWriter<'a>(&'a str);
    impl fmt::Write for CmpWriter<'_> {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            if self.0.len() < s.len() {
                return Err(fmt::Error);
            }
            let (prefix, rest) = self.0.split_at(s.len());
            self.0 = rest;
            if prefix == s {
                Ok(())
            } else {
                Err(fmt::Error)
            }
        }
    }

    let mut writer = CmpWriter(s);
    let succeeded = write!(writer, "{}", d).is_ok();
    succeeded && writer.0.is_empty()
}

/// A debug-printable type to hide the sensitive information.
#[cfg_attr(not(feature = "alloc"), allow(dead_code))]
#[derive(Clone, Copy)]
pub(crate) struct Censored;

impl fmt::Debug for Censored {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{censored}")
    }
}

/// [`ToString`][`alloc::string::ToString`], but without panic.
///
/// # Examples
///
/// ```
/// use iri_pct::format::ToStringFallible;
/// use iri_pct::percent_encode::PercentEncoded;
///
/// let s = PercentEncoded::new("a b").try_to_string()?;
/// assert_eq!(s, "a%20b");
/// # Ok::<_, std::collections::TryReserveError>(())
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub trait ToStringFallible: alloc::string::ToString {
    /// [`ToString::to_string`][`alloc::string::ToString::to_string`], but without panic on OOM.
    fn try_to_string(&self) -> Result<String, TryReserveError>;
}

#[cfg(feature = "alloc")]
impl<T: fmt::Display> ToStringFallible for T {
    /// [`ToString::to_string`][`alloc::string::ToString::to_string`], but without panic on OOM.
    ///
    /// # Panics
    ///
    /// Panics if the `Display` implementation of the value itself returns an
    /// error, as `ToString::to_string` does.
    fn try_to_string(&self) -> Result<String, TryReserveError> {
        let mut buf = String::new();
        let mut writer = FmtWritableBuffer::new(&mut buf);
        match write!(writer, "{}", self) {
            Ok(_) => Ok(buf),
            Err(_) => Err(writer.take_error_unwrap()),
        }
    }
}
