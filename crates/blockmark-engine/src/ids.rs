//! # Block Identifiers
//!
//! Every block carries an opaque [`BlockId`] so the editor can keep list keys
//! stable while blocks are inserted, moved and deleted. Identifiers are never
//! written to canonical text and never take part in round-trip comparisons.
//!
//! Identifiers come from an [`IdSource`]. The default [`UuidIds`] draws random
//! v4 UUIDs; [`SequentialIds`] hands out `block-1`, `block-2`, ... and exists so
//! tests and fixtures can assert on identifiers. Both are `Send + Sync` and can
//! be shared by parsers running on different threads. Neither promises any
//! ordering between threads.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, locally unique identifier of a block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A missing identifier (e.g. in hand-written JSON) is replaced by a fresh one.
impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for BlockId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for BlockId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Source of block identifiers used by the parser.
pub trait IdSource: Send + Sync {
    /// Returns an identifier not previously returned by this source.
    fn next_id(&self) -> BlockId;
}

/// Random v4 UUIDs. The default source.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&self) -> BlockId {
        BlockId::new()
    }
}

/// Deterministic `block-N` identifiers, counting from 1.
#[derive(Debug, Default)]
pub struct SequentialIds {
    issued: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> BlockId {
        let n = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
        BlockId(format!("block-{n}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn uuid_ids_are_unique() {
        let ids: HashSet<BlockId> = (0..1000).map(|_| UuidIds.next_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn sequential_ids_count_from_one() {
        let source = SequentialIds::new();
        assert_eq!(source.next_id().as_str(), "block-1");
        assert_eq!(source.next_id().as_str(), "block-2");
        assert_eq!(source.next_id().as_str(), "block-3");
    }

    #[test]
    fn sequential_ids_are_unique_across_threads() {
        let source = Arc::new(SequentialIds::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let source = Arc::clone(&source);
                thread::spawn(move || (0..250).map(|_| source.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id issued");
            }
        }
        assert_eq!(seen.len(), 1000);
    }

    #[test]
    fn id_serializes_as_plain_string() {
        let id = BlockId::from("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    }
}
