//! # Snapshot Testing Support
//!
//! Utilities for testing the transcoder via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts parsed documents to id-free [`BlockShape`] lists
//!   that are stable across runs, for `insta` snapshot testing
//! - **`invariants`**: Asserting wrappers around [`crate::roundtrip`] checks
//!
//! ## Testing Strategy
//!
//! Fixture files are parsed, checked against the data model invariants, and
//! snapshotted twice: once as block shapes and once as the canonical text the
//! shapes serialize to. The canonical text must itself be a fixed point.
//!
//! [`BlockShape`]: crate::models::BlockShape

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
