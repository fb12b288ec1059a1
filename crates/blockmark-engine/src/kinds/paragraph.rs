use crate::models::{Block, BlockKind, BlockShape};

use super::Parsed;

/// Paragraph block. No delimiters; it is what any unrecognized line becomes.
///
/// Each non-blank source line is its own paragraph. Consecutive lines are
/// never merged.
pub struct Paragraph;

impl Paragraph {
    pub fn parse(trimmed: &str) -> Parsed {
        Parsed::single(BlockShape::new(BlockKind::Paragraph, trimmed))
    }

    pub fn render(block: &Block) -> String {
        block.content.clone()
    }
}
