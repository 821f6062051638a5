//! IRI components and percent-encoding for [RFC 3987 IRI][RFC 3987].
//!
//! An IRI is a URI which allows most Unicode characters to be written directly.
//! For example, `http://\u{C548}\u{B155}.kr/\u{C138}\u{C0C1}` is an IRI, and
//! a URI would need `http://xn--o70b819a.kr/%EC%84%B8%EC%83%81` for it.
//!
//! This crate provides:
//!
//! * [`char`]: classification of code points.
//!     + [`char::is_unreserved`] for `unreserved` rule of RFC 3986.
//!     + [`char::is_ucschar`] for `ucschar` rule of RFC 3987.
//! * [`percent_encode`][`mod@percent_encode`]: percent-encoding which leaves
//!   `unreserved` and `ucschar` characters as is.
//! * `iri`: a plain container of decomposed IRI components (requires `alloc`).
//!
//! Parsing IRI strings, IDNA conversion of hosts, and interpretation of
//! scheme-specific rules are out of scope.
//!
//! [RFC 3987]: https://tools.ietf.org/html/rfc3987
//!
//! # Examples
//!
//! ```
//! # #[cfg(feature = "alloc")] {
//! use iri_pct::percent_encode::percent_encode;
//!
//! assert_eq!(percent_encode("\u{C138}\u{C0C1}/a b"), "\u{C138}\u{C0C1}%2Fa%20b");
//! # }
//! ```
//!
//! # `std` and `alloc` support
//!
//! This crate supports `no_std` usage.
//!
//! * `alloc` feature:
//!     + Std library or `alloc` crate is required.
//!     + This feature enables types and functions which require memory allocation,
//!       e.g. `iri::Iri` and `percent_encode::percent_encode()`.
//! * `std` feature (**enabled by default**):
//!     + Std library is required.
//!     + This automatically enables `alloc` feature.
//!     + The feature let the crate utilize std-specific stuff, such as `std::error::Error` trait.
//! * Without neither of them:
//!     + The crate can be used in `no_std` environment.
//!     + Classification and the lazy [`percent_encode::PercentEncoded`] proxy
//!       are still available.
//! * `serde` feature:
//!     + Implements `Serialize` and `Deserialize` for `iri::Iri` and `iri::Userinfo`.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod buffer;
pub mod char;
pub mod format;
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub mod iri;
pub mod percent_encode;
pub mod task;
pub(crate) mod utf8;
