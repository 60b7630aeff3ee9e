//! Shared utilities for updesc.
//!
//! Cross-cutting concerns used by the other crates: the error type and
//! Cargo-style status lines on stderr.

pub mod errors;
pub mod progress;
