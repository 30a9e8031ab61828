#![warn(missing_docs)]
//! # mosaic-relay-contract-tests
//!
//! Frozen-contract validation for the outward mosaic photo payload. The
//! checks live under `tests/`; this crate intentionally exports nothing.
