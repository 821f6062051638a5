//! Benchmarks for `iri-pct`.
