//! # Block Kinds
//!
//! Each block kind owns its syntax: the markers that open it, how its lines
//! are read back into a [`BlockShape`], and how a [`Block`] of that kind is
//! written out. The parser and serializer only dispatch; they hold no
//! delimiter knowledge of their own.
//!
//! Sub-parsers receive the remaining lines of the input, starting at the line
//! that opened the block, and report how many of them they consumed.
//!
//! [`Block`]: crate::models::Block

pub mod divider;
pub mod heading;
pub mod image;
pub mod list;
pub mod paragraph;
pub mod pull_quote;

pub use divider::Divider;
pub use heading::{Heading, HeadingLevel};
pub use image::Image;
pub use list::{BulletList, NumberedList};
pub use paragraph::Paragraph;
pub use pull_quote::PullQuote;

use crate::models::BlockShape;

/// A block recognized by a sub-parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub shape: BlockShape,
    /// Number of input lines the block occupied. Always at least 1.
    pub consumed: usize,
}

impl Parsed {
    pub fn new(shape: BlockShape, consumed: usize) -> Self {
        debug_assert!(consumed > 0, "a block must consume at least one line");
        Self { shape, consumed }
    }

    pub fn single(shape: BlockShape) -> Self {
        Self::new(shape, 1)
    }
}

/// Takes lines from the front of `lines` while their trimmed form satisfies `opens`.
fn take_contiguous<'a>(lines: &[&'a str], opens: impl Fn(&str) -> bool) -> Vec<&'a str> {
    lines
        .iter()
        .map(|line| line.trim())
        .take_while(|line| opens(line))
        .collect()
}
