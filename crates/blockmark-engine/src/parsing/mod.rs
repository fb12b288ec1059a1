//! # Parsing
//!
//! Canonical (or hand-written) text to a [`Document`], in one forward pass.
//!
//! ## Phases per line
//!
//! 1. **Classification** (`classify`): the trimmed line under the cursor is
//!    sorted into a [`LineClass`]. First matching rule wins.
//! 2. **Sub-parse** (`crate::kinds`): the kind that opened reads its lines,
//!    looking ahead where its grammar allows, and reports how many it consumed.
//!
//! The parser never fails. Anything it does not recognize becomes a
//! paragraph, and an input with no blocks at all yields a single empty
//! paragraph.

pub mod classify;
pub mod cursor;

pub use classify::{LineClass, LineClassifier};
pub use cursor::LineCursor;

use crate::ids::{IdSource, UuidIds};
use crate::kinds::{
    BulletList, Divider, Heading, Image, NumberedList, Paragraph, Parsed, PullQuote,
};
use crate::models::{BlockKind, BlockShape, Document};

/// Parses text, giving each block a random id.
pub fn parse(text: &str) -> Document {
    parse_with_ids(text, &UuidIds)
}

/// Parses text, drawing block ids from `ids`.
pub fn parse_with_ids(text: &str, ids: &dyn IdSource) -> Document {
    let classifier = LineClassifier;
    let mut cursor = LineCursor::new(text);
    let mut blocks = Vec::new();

    while let Some(line) = cursor.current() {
        let class = classifier.classify(line);
        let Some(parsed) = parse_block(class, cursor.rest()) else {
            cursor.bump_n(1);
            continue;
        };

        log::trace!(
            "line {}: {:?} -> {:?} ({} line(s))",
            cursor.position() + 1,
            class,
            parsed.shape.kind,
            parsed.consumed
        );
        cursor.bump_n(parsed.consumed);
        blocks.push(parsed.shape.into_block(ids.next_id()));
    }

    if blocks.is_empty() {
        blocks.push(BlockShape::new(BlockKind::Paragraph, "").into_block(ids.next_id()));
    }

    log::debug!(
        "parsed {} line(s) into {} block(s)",
        cursor.line_count(),
        blocks.len()
    );
    Document::new(blocks)
}

/// Runs the sub-parser for `class` on the remaining lines. `None` for blank lines.
fn parse_block(class: LineClass, lines: &[&str]) -> Option<Parsed> {
    let trimmed = lines.first()?.trim();

    let parsed = match class {
        LineClass::Blank => return None,
        LineClass::Divider => Divider::parse(),
        LineClass::Heading(level) => Heading::parse(level, trimmed),
        LineClass::Image => Image::parse(lines).unwrap_or_else(|| Paragraph::parse(trimmed)),
        LineClass::PullQuote => PullQuote::parse(lines),
        LineClass::BulletItem => BulletList::parse(lines),
        LineClass::NumberedItem => NumberedList::parse(lines),
        LineClass::Text => Paragraph::parse(trimmed),
    };
    Some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use crate::models::Block;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn kinds(doc: &Document) -> Vec<BlockKind> {
        doc.iter().map(|b| b.kind).collect()
    }

    #[rstest]
    #[case("")]
    #[case("   \n  ")]
    #[case("\n\n\n")]
    #[case("\r\n\t\r\n")]
    fn empty_input_yields_one_empty_paragraph(#[case] text: &str) {
        let doc = parse(text);
        assert_eq!(doc.len(), 1);
        assert_eq!(doc[0].kind, BlockKind::Paragraph);
        assert_eq!(doc[0].content, "");
        assert_eq!(doc[0].caption, None);
    }

    #[rstest]
    #[case("---")]
    #[case("***")]
    #[case("___")]
    fn divider_spellings_parse_alike(#[case] text: &str) {
        let doc = parse(text);
        assert_eq!(doc.shapes(), vec![BlockShape::new(BlockKind::Divider, "")]);
    }

    #[test]
    fn heading_level_two() {
        let doc = parse("## Hello");
        assert_eq!(doc.shapes(), vec![BlockShape::new(BlockKind::Heading2, "Hello")]);
    }

    #[test]
    fn image_with_credit() {
        let doc = parse("![Alt text](http://x/img.png)\n*Alt text — Photo by Jane*");
        assert_eq!(doc.len(), 1);
        assert_eq!(doc[0].kind, BlockKind::Image);
        assert_eq!(doc[0].content, "http://x/img.png");
        assert_eq!(doc[0].caption.as_deref(), Some("Alt text"));
        assert_eq!(doc[0].credit.as_deref(), Some("Photo by Jane"));
    }

    #[test]
    fn numbered_list_strips_digits() {
        let doc = parse("1. a\n1. b\n1. c");
        assert_eq!(doc.len(), 1);
        assert_eq!(doc[0].kind, BlockKind::NumberedList);
        assert_eq!(doc[0].items().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn single_line_quote_leaves_caption_unset() {
        let doc = parse("> \"Just a quote\"");
        assert_eq!(doc[0].kind, BlockKind::PullQuote);
        assert_eq!(doc[0].content, "Just a quote");
        assert_eq!(doc[0].caption, None);
    }

    #[test]
    fn consecutive_lines_stay_separate_paragraphs() {
        let doc = parse("first line\n  second line  \nthird");
        assert_eq!(
            doc.shapes(),
            vec![
                BlockShape::new(BlockKind::Paragraph, "first line"),
                BlockShape::new(BlockKind::Paragraph, "second line"),
                BlockShape::new(BlockKind::Paragraph, "third"),
            ]
        );
    }

    #[test]
    fn blank_lines_split_lists() {
        let doc = parse("- a\n- b\n\n- c");
        assert_eq!(kinds(&doc), vec![BlockKind::BulletList, BlockKind::BulletList]);
        assert_eq!(doc[0].content, "a\nb");
        assert_eq!(doc[1].content, "c");
    }

    #[test]
    fn bullet_and_numbered_lists_do_not_merge() {
        let doc = parse("- a\n1. b\n- c");
        assert_eq!(
            kinds(&doc),
            vec![
                BlockKind::BulletList,
                BlockKind::NumberedList,
                BlockKind::BulletList
            ]
        );
    }

    #[test]
    fn malformed_image_demotes_to_paragraph() {
        let doc = parse("![broken](http://x/img.png\n*not a credit*");
        assert_eq!(
            doc.shapes(),
            vec![
                BlockShape::new(BlockKind::Paragraph, "![broken](http://x/img.png"),
                BlockShape::new(BlockKind::Paragraph, "*not a credit*"),
            ]
        );
    }

    #[test]
    fn image_followed_by_star_bullet_takes_it_as_credit() {
        let doc = parse("![a](u)\n* item");
        assert_eq!(doc.len(), 1);
        assert_eq!(doc[0].caption.as_deref(), Some(" item"));
    }

    #[test]
    fn unknown_markup_is_kept_as_text() {
        let doc = parse("# Title\n| a | b |\n**bold**");
        assert_eq!(
            kinds(&doc),
            vec![BlockKind::Paragraph, BlockKind::Paragraph, BlockKind::Paragraph]
        );
        assert_eq!(doc[1].content, "| a | b |");
    }

    #[test]
    fn crlf_input() {
        let doc = parse("## Title\r\n\r\n- a\r\n- b\r\n");
        assert_eq!(
            doc.shapes(),
            vec![
                BlockShape::new(BlockKind::Heading2, "Title"),
                BlockShape::new(BlockKind::BulletList, "a\nb"),
            ]
        );
    }

    #[test]
    fn mixed_document() {
        let text = "## Intro\n\nSome text.\n\n![Cat](http://x/cat.png)\n*A cat — Photo by Jane*\n\n> \"Meow\"\n> — The cat\n\n- one\n- two\n\n1. first\n2. second\n\n---\n\n### Outro";
        let doc = parse(text);
        assert_eq!(
            kinds(&doc),
            vec![
                BlockKind::Heading2,
                BlockKind::Paragraph,
                BlockKind::Image,
                BlockKind::PullQuote,
                BlockKind::BulletList,
                BlockKind::NumberedList,
                BlockKind::Divider,
                BlockKind::Heading3,
            ]
        );
        assert_eq!(doc[3].caption.as_deref(), Some("The cat"));
    }

    #[test]
    fn ids_come_from_the_given_source() {
        let ids = SequentialIds::new();
        let doc = parse_with_ids("a\n\nb\n\n---", &ids);
        let got: Vec<&str> = doc.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(got, vec!["block-1", "block-2", "block-3"]);
    }

    #[test]
    fn default_block_also_gets_an_id() {
        let ids = SequentialIds::new();
        let doc = parse_with_ids("", &ids);
        assert_eq!(doc[0], Block::paragraph("").with_id("block-1"));
    }

    #[test]
    fn random_ids_are_distinct() {
        let doc = parse("a\nb\nc");
        assert_ne!(doc[0].id, doc[1].id);
        assert_ne!(doc[1].id, doc[2].id);
    }
}
