//! Tests for `iri-pct` using external test data.
