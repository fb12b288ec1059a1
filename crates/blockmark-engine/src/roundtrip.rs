//! # Round-trip Checks
//!
//! The grammar's contract, checked at runtime:
//!
//! - serializing the parse of any text gives *canonical* text, and parsing
//!   plus serializing canonical text gives it back unchanged
//! - parsing the serialization of a lossless document gives back the same
//!   block shapes
//! - a parsed document satisfies the data model invariants
//!
//! The CLI's `check` command and the test suites are built on these.

use thiserror::Error;

use crate::models::{Block, BlockKind, Document};
use crate::parsing::parse;
use crate::serializing::serialize;

/// Outcome of pushing a text through parse and serialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTrip {
    /// `serialize(parse(input))`.
    pub canonical: String,
    /// The input was already canonical.
    pub is_canonical: bool,
    /// Parsing and serializing `canonical` again changes nothing.
    pub is_stable: bool,
}

pub fn check(text: &str) -> RoundTrip {
    let canonical = parse(text).serialize();
    let again = parse(&canonical).serialize();
    RoundTrip {
        is_canonical: canonical == text,
        is_stable: again == canonical,
        canonical,
    }
}

/// Whether `parse(serialize(blocks))` has the same shapes as `blocks`.
///
/// Holds for documents whose blocks have no lossy sub-structure; e.g. an
/// image credit without a caption or a multi-paragraph `content` does not
/// survive the text form.
pub fn check_blocks(blocks: &[Block]) -> bool {
    let reparsed = parse(&serialize(blocks));
    reparsed.same_shape(&Document::new(blocks.to_vec()))
}

/// A data model invariant broken by a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("document has no blocks")]
    EmptyDocument,
    #[error("block {index}: list has no items")]
    EmptyList { index: usize },
    #[error("block {index}: divider carries content, caption or credit")]
    DividerWithContent { index: usize },
    #[error("block {index}: credit on a block that is not an image")]
    StrayCredit { index: usize },
    #[error("block {index}: unknown block kind")]
    UnknownKind { index: usize },
}

/// Checks the invariants every parsed document satisfies.
pub fn invariants(blocks: &[Block]) -> Vec<Violation> {
    let mut violations = Vec::new();
    if blocks.is_empty() {
        violations.push(Violation::EmptyDocument);
    }

    for (index, block) in blocks.iter().enumerate() {
        match block.kind {
            kind if kind.is_list() && block.items().next().is_none() => {
                violations.push(Violation::EmptyList { index });
            }
            BlockKind::Divider
                if !block.content.is_empty()
                    || block.caption.is_some()
                    || block.credit.is_some() =>
            {
                violations.push(Violation::DividerWithContent { index });
            }
            BlockKind::Unknown => violations.push(Violation::UnknownKind { index }),
            _ => {}
        }

        if block.credit.is_some() && !matches!(block.kind, BlockKind::Image | BlockKind::Divider)
        {
            violations.push(Violation::StrayCredit { index });
        }
    }
    violations
}
