//! IRI components.
//!
//! [`Iri`] is a plain container of already decomposed IRI components.
//! Splitting a string into components is the job of a parser, and this module
//! does not provide one.
//!
//! Components are stored as Unicode text. Percent-encoding is never applied to
//! the stored values; it is applied on demand, for example through
//! [`Iri::encoded_components`], when a strict URI form is required.
//!
//! ```
//! use iri_pct::iri::{Iri, Userinfo};
//!
//! let iri = Iri {
//!     scheme: "http".to_owned(),
//!     userinfo: Some(Userinfo::new("joe")),
//!     host: "\u{C548}\u{B155}.kr".to_owned(),
//!     path: "/\u{C138}\u{C0C1}".to_owned(),
//!     ..Default::default()
//! };
//! assert_eq!(iri.to_string(), "http://joe@\u{C548}\u{B155}.kr/\u{C138}\u{C0C1}");
//! ```

use core::fmt;

use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::format::Censored;
use crate::percent_encode::PercentEncoded;

/// A decomposed IRI.
///
/// This is intentionally similar to URL types found in other libraries: each
/// component is a public field, populated by a parser and read by a
/// serializer.
///
/// No invariants are enforced. In particular, `scheme` is not validated or
/// case-normalized, and `host` is not converted with IDNA.
///
/// The [`fmt::Display`] implementation writes the components as they are,
/// without percent-encoding.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Iri {
    /// Scheme, such as `http`.
    pub scheme: String,
    /// Userinfo.
    pub userinfo: Option<Userinfo>,
    /// Host.
    ///
    /// This may contain non-ASCII characters.
    pub host: String,
    /// Path.
    pub path: String,
    /// Query, without the leading `?`.
    ///
    /// This is stored as is, and might already contain percent-encoded
    /// triplets.
    pub raw_query: String,
    /// Fragment, without the leading `#`.
    pub fragment: String,
}

impl Iri {
    /// Returns true if the authority part (`//userinfo@host`) is written.
    #[inline]
    #[must_use]
    pub fn has_authority(&self) -> bool {
        self.userinfo.is_some() || !self.host.is_empty()
    }

    /// Returns the components percent-encoded one by one.
    ///
    /// Each component is encoded independently, so delimiters such as `/` in
    /// the path are encoded too.
    ///
    /// # Examples
    ///
    /// ```
    /// use iri_pct::iri::Iri;
    ///
    /// let iri = Iri {
    ///     scheme: "http".to_owned(),
    ///     host: "\u{C548}\u{B155}.kr".to_owned(),
    ///     path: "\u{C138}\u{C0C1} \u{FFFF}".to_owned(),
    ///     raw_query: "q=1".to_owned(),
    ///     ..Default::default()
    /// };
    /// let encoded = iri.encoded_components();
    /// assert_eq!(encoded.host().to_string(), "\u{C548}\u{B155}.kr");
    /// assert_eq!(encoded.path().to_string(), "\u{C138}\u{C0C1}%20%EF%BF%BF");
    /// assert_eq!(encoded.raw_query().to_string(), "q%3D1");
    /// assert_eq!(encoded.fragment().to_string(), "");
    /// ```
    #[inline]
    #[must_use]
    pub fn encoded_components(&self) -> EncodedComponents<'_> {
        EncodedComponents { iri: self }
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.scheme.is_empty() {
            write!(f, "{}:", self.scheme)?;
        }
        if self.has_authority() {
            f.write_str("//")?;
            if let Some(userinfo) = &self.userinfo {
                write!(f, "{}@", userinfo)?;
            }
            f.write_str(&self.host)?;
        }
        f.write_str(&self.path)?;
        if !self.raw_query.is_empty() {
            write!(f, "?{}", self.raw_query)?;
        }
        if !self.fragment.is_empty() {
            write!(f, "#{}", self.fragment)?;
        }
        Ok(())
    }
}

/// Percent-encoding proxies for the components of an [`Iri`].
///
/// Returned by [`Iri::encoded_components`].
#[derive(Debug, Clone, Copy)]
pub struct EncodedComponents<'a> {
    /// Source IRI.
    iri: &'a Iri,
}

impl<'a> EncodedComponents<'a> {
    /// Returns the encoded host.
    #[inline]
    #[must_use]
    pub fn host(&self) -> PercentEncoded<&'a str> {
        PercentEncoded::new(self.iri.host.as_str())
    }

    /// Returns the encoded path.
    #[inline]
    #[must_use]
    pub fn path(&self) -> PercentEncoded<&'a str> {
        PercentEncoded::new(self.iri.path.as_str())
    }

    /// Returns the encoded query.
    #[inline]
    #[must_use]
    pub fn raw_query(&self) -> PercentEncoded<&'a str> {
        PercentEncoded::new(self.iri.raw_query.as_str())
    }

    /// Returns the encoded fragment.
    #[inline]
    #[must_use]
    pub fn fragment(&self) -> PercentEncoded<&'a str> {
        PercentEncoded::new(self.iri.fragment.as_str())
    }
}

/// Userinfo of an IRI: a username and an optional password.
///
/// The value is opaque: no validation or encoding is done.
/// The password is not shown by [`fmt::Debug`].
///
/// # Examples
///
/// ```
/// use iri_pct::iri::Userinfo;
///
/// let userinfo = Userinfo::with_password("joe", "secret");
/// assert_eq!(userinfo.username(), "joe");
/// assert_eq!(userinfo.password(), Some("secret"));
/// assert_eq!(userinfo.to_string(), "joe:secret");
/// assert!(!format!("{:?}", userinfo).contains("secret"));
/// ```
#[derive(Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Userinfo {
    /// Username.
    username: String,
    /// Password.
    #[cfg_attr(feature = "serde", serde(default))]
    password: Option<String>,
}

impl Userinfo {
    /// Creates a userinfo with the username and without a password.
    #[inline]
    #[must_use]
    pub fn new<T: Into<String>>(username: T) -> Self {
        Self {
            username: username.into(),
            password: None,
        }
    }

    /// Creates a userinfo with the username and the password.
    #[inline]
    #[must_use]
    pub fn with_password<T: Into<String>, U: Into<String>>(username: T, password: U) -> Self {
        Self {
            username: username.into(),
            password: Some(password.into()),
        }
    }

    /// Returns the username.
    #[inline]
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password, if set.
    #[inline]
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

impl fmt::Debug for Userinfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Userinfo")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| Censored))
            .finish()
    }
}

impl fmt::Display for Userinfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)?;
        if let Some(password) = &self.password {
            write!(f, ":{}", password)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::borrow::ToOwned;
    use alloc::format;
    use alloc::string::ToString;

    /// Creates an IRI from components.
    fn iri(scheme: &str, host: &str, path: &str, query: &str, fragment: &str) -> Iri {
        Iri {
            scheme: scheme.to_owned(),
            userinfo: None,
            host: host.to_owned(),
            path: path.to_owned(),
            raw_query: query.to_owned(),
            fragment: fragment.to_owned(),
        }
    }

    #[test]
    fn display_full() {
        let mut v = iri("https", "\u{C548}\u{B155}.kr", "/a b", "x=%20", "frag");
        v.userinfo = Some(Userinfo::with_password("u", "p"));
        assert_eq!(v.to_string(), "https://u:p@\u{C548}\u{B155}.kr/a b?x=%20#frag");
    }

    #[test]
    fn display_without_authority() {
        assert_eq!(
            iri("mailto", "", "joe@example.com", "", "").to_string(),
            "mailto:joe@example.com"
        );
        assert_eq!(iri("", "", "rel/path", "q", "").to_string(), "rel/path?q");
        assert_eq!(Iri::default().to_string(), "");
    }

    #[test]
    fn display_userinfo_without_host() {
        let mut v = iri("s", "", "", "", "");
        v.userinfo = Some(Userinfo::new(""));
        assert!(v.has_authority());
        assert_eq!(v.to_string(), "s://@");
    }

    #[test]
    fn stored_components_are_not_encoded() {
        let v = iri("http", "h", "/\u{FFFF}", "", "");
        assert_eq!(v.path, "/\u{FFFF}");
        assert_eq!(v.encoded_components().path().to_string(), "%2F%EF%BF%BF");
        // Still untouched.
        assert_eq!(v.path, "/\u{FFFF}");
    }

    #[test]
    fn encoded_components() {
        let v = iri("http", "ex ample", "/p", "a=b&c", "#x");
        let enc = v.encoded_components();
        assert!(enc.host() == "ex%20ample");
        assert!(enc.path() == "%2Fp");
        assert!(enc.raw_query() == "a%3Db%26c");
        assert!(enc.fragment() == "%23x");
    }

    #[test]
    fn userinfo_debug_censors_password() {
        let u = Userinfo::with_password("joe", "hunter2");
        let debug = format!("{:?}", u);
        assert!(debug.contains("joe"));
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("{censored}"));

        let u = Userinfo::new("joe");
        assert_eq!(format!("{:?}", u), r#"Userinfo { username: "joe", password: None }"#);
    }

    #[test]
    fn userinfo_accessors() {
        let u = Userinfo::new("alice");
        assert_eq!(u.username(), "alice");
        assert_eq!(u.password(), None);
        assert_eq!(u.to_string(), "alice");
    }
}
