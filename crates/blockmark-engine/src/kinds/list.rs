use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Block, BlockKind, BlockShape};

use super::{Parsed, take_contiguous};

/// Bullet list. Items start with `- ` or `* `; `- ` is written.
pub struct BulletList;

impl BulletList {
    pub const MARKERS: [&'static str; 2] = ["- ", "* "];
    pub const MARKER: &'static str = "- ";

    pub fn opens(trimmed: &str) -> bool {
        Self::MARKERS
            .iter()
            .any(|marker| trimmed.starts_with(marker))
    }

    /// Consumes contiguous item lines of either marker.
    pub fn parse(lines: &[&str]) -> Parsed {
        let items: Vec<&str> = take_contiguous(lines, Self::opens)
            .into_iter()
            .map(Self::strip_marker)
            .collect();
        let consumed = items.len().max(1);
        Parsed::new(
            BlockShape::new(BlockKind::BulletList, items.join("\n")),
            consumed,
        )
    }

    fn strip_marker(line: &str) -> &str {
        Self::MARKERS
            .iter()
            .find_map(|marker| line.strip_prefix(marker))
            .unwrap_or(line)
    }

    pub fn render(block: &Block) -> String {
        block
            .items()
            .map(|item| format!("{}{item}", Self::MARKER))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Numbered list. Items start with digits, a dot and whitespace.
///
/// The digits in the source are discarded; rendering always numbers items
/// from 1 within the block.
pub struct NumberedList;

impl NumberedList {
    fn pattern() -> &'static Regex {
        static NUMBERED_REGEX: OnceLock<Regex> = OnceLock::new();
        // ASCII digits only: list markers are not localized.
        NUMBERED_REGEX
            .get_or_init(|| Regex::new(r"^[0-9]+\.\s+").expect("Invalid numbered list regex"))
    }

    pub fn opens(trimmed: &str) -> bool {
        Self::pattern().is_match(trimmed)
    }

    pub fn parse(lines: &[&str]) -> Parsed {
        let items: Vec<&str> = take_contiguous(lines, Self::opens)
            .into_iter()
            .map(Self::strip_marker)
            .collect();
        let consumed = items.len().max(1);
        Parsed::new(
            BlockShape::new(BlockKind::NumberedList, items.join("\n")),
            consumed,
        )
    }

    fn strip_marker(line: &str) -> &str {
        match Self::pattern().find(line) {
            Some(m) => &line[m.end()..],
            None => line,
        }
    }

    pub fn render(block: &Block) -> String {
        block
            .items()
            .enumerate()
            .map(|(i, item)| format!("{}. {item}", i + 1))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("- item", true)]
    #[case("* item", true)]
    #[case("+ item", false)]
    #[case("-item", false)]
    #[case("---", false)]
    fn bullet_opens(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(BulletList::opens(line), expected);
    }

    #[rstest]
    #[case("1. item", true)]
    #[case("12. item", true)]
    #[case("3.\titem", true)]
    #[case("1.item", false)]
    #[case("1) item", false)]
    #[case("a. item", false)]
    #[case("١. item", false)]
    fn numbered_opens(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(NumberedList::opens(line), expected);
    }

    #[test]
    fn bullet_markers_can_mix() {
        let parsed = BulletList::parse(&["- a", "  * b", "- c", "", "- d"]);
        assert_eq!(parsed.consumed, 3);
        assert_eq!(parsed.shape.content, "a\nb\nc");
    }

    #[test]
    fn bullet_strips_exactly_two_characters() {
        let parsed = BulletList::parse(&["-  spaced"]);
        assert_eq!(parsed.shape.content, " spaced");
    }

    #[test]
    fn numbered_discards_source_digits() {
        let parsed = NumberedList::parse(&["7. a", "7.   b", "100. c", "text"]);
        assert_eq!(parsed.consumed, 3);
        assert_eq!(parsed.shape.content, "a\nb\nc");
    }

    #[test]
    fn bullet_render_drops_blank_items() {
        let block = Block::new(BlockKind::BulletList, "a\n\n   \nb");
        assert_eq!(BulletList::render(&block), "- a\n- b");
    }

    #[test]
    fn numbered_render_renumbers_from_one() {
        let block = Block::new(BlockKind::NumberedList, "a\n\nb\nc");
        assert_eq!(NumberedList::render(&block), "1. a\n2. b\n3. c");
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert_eq!(BulletList::render(&Block::bullet_list(Vec::<&str>::new())), "");
    }
}
