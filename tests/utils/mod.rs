//! Utilities for tests.

use core::fmt;

/// Returns true if the two equals after they are converted to strings.
pub(crate) fn eq_display_str<T>(d: &T, s: &str) -> bool
where
    T: ?Sized + fmt::Display,
{
    use core::fmt::Write as _;

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

/// Asserts that the `Display` output of the value equals to the string,
/// without allocation.
#[allow(unused_macros)]
macro_rules! assert_eq_display {
    ($left:expr, $right:expr $(,)?) => {{
        match (&$left, &$right) {
            (left, right) => {
                assert!(
                    utils::eq_display_str(left, right.as_ref()),
                    "`eq_str_display(left, right)`\n\
                     left: `{left}`,\n\
                     right: `{right}`",
                );
            }
        }
    }};
    ($left:expr, $right:expr, $($args:tt)*) => {{
        match (&$left, &$right) {
            (left, right) => {
                assert!(
                    utils::eq_display_str(left, right.as_ref()),
                    "{}",
                    format_args!(
                        "{}: {}",
                        format_args!(
                            "`eq_str_display(left, right)`\n\
                             left: `{left}`,\n\
                             right: `{right}`",
                        ),
                        format_args!($($args)*)
                    )
                );
            }
        }
    }};
}

/// Decodes every percent-encoded triplet into a byte.
///
/// Characters other than `%XX` are kept as their UTF-8 bytes.
///
/// # Panics
///
/// Panics if a `%` is not followed by two hexadecimal digits.
#[allow(dead_code)]
pub(crate) fn percent_decode(s: &str) -> Vec<u8> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = s
                .get((i + 1)..(i + 3))
                .unwrap_or_else(|| panic!("incomplete triplet at {i} in {s:?}"));
            let byte = u8::from_str_radix(hex, 16)
                .unwrap_or_else(|_| panic!("invalid triplet {hex:?} in {s:?}"));
            out.push(byte);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    out
}
