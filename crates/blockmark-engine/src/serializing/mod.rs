//! # Serializing
//!
//! A [`Block`] sequence to canonical text. Each block renders to one or more
//! lines and blocks are joined by a single blank line. The output carries no
//! trailing newline.
//!
//! Serialization is total. Blocks of an unknown kind render their raw
//! content, like paragraphs.

use crate::kinds::{
    BulletList, Divider, Heading, HeadingLevel, Image, NumberedList, Paragraph, PullQuote,
};
use crate::models::{Block, BlockKind};

/// Separator placed between rendered blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

pub fn serialize(blocks: &[Block]) -> String {
    let text = blocks
        .iter()
        .map(render_block)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR);
    log::debug!(
        "serialized {} block(s) into {} byte(s)",
        blocks.len(),
        text.len()
    );
    text
}

/// Renders a single block without surrounding blank lines.
pub fn render_block(block: &Block) -> String {
    match block.kind {
        BlockKind::Paragraph => Paragraph::render(block),
        BlockKind::Heading2 => Heading::render(HeadingLevel::H2, &block.content),
        BlockKind::Heading3 => Heading::render(HeadingLevel::H3, &block.content),
        BlockKind::Image => Image::render(block),
        BlockKind::PullQuote => PullQuote::render(block),
        BlockKind::BulletList => BulletList::render(block),
        BlockKind::NumberedList => NumberedList::render(block),
        BlockKind::Divider => Divider::render(),
        BlockKind::Unknown => {
            log::debug!(
                "block {} has an unknown kind, writing it as a paragraph",
                block.id
            );
            Paragraph::render(block)
        }
    }
}
