#![warn(missing_docs)]
//! # mosaic-relay-benchmarks
//!
//! Lightweight wall-clock guardrails for the sizing and URL assembly loop.
//! The smoke checks live under `tests/`; this crate intentionally exports
//! nothing.
