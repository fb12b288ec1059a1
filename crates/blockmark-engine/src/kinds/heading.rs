use crate::models::{BlockKind, BlockShape};

use super::Parsed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H2,
    H3,
}

impl HeadingLevel {
    pub fn prefix(self) -> &'static str {
        match self {
            HeadingLevel::H2 => Heading::H2_PREFIX,
            HeadingLevel::H3 => Heading::H3_PREFIX,
        }
    }

    pub fn kind(self) -> BlockKind {
        match self {
            HeadingLevel::H2 => BlockKind::Heading2,
            HeadingLevel::H3 => BlockKind::Heading3,
        }
    }
}

/// Level 2 and level 3 headings.
pub struct Heading;

impl Heading {
    pub const H2_PREFIX: &'static str = "## ";
    pub const H3_PREFIX: &'static str = "### ";

    /// Detects a heading on a trimmed line.
    ///
    /// Longer prefixes are tested first. The two current prefixes cannot both
    /// match, but a `#### ` level added later would be shadowed otherwise.
    pub fn level(trimmed: &str) -> Option<HeadingLevel> {
        if trimmed.starts_with(Self::H3_PREFIX) {
            Some(HeadingLevel::H3)
        } else if trimmed.starts_with(Self::H2_PREFIX) {
            Some(HeadingLevel::H2)
        } else {
            None
        }
    }

    /// Strips the first occurrence of the prefix; the rest is the heading text.
    pub fn parse(level: HeadingLevel, trimmed: &str) -> Parsed {
        let text = trimmed.strip_prefix(level.prefix()).unwrap_or(trimmed);
        Parsed::single(BlockShape::new(level.kind(), text))
    }

    pub fn render(level: HeadingLevel, content: &str) -> String {
        format!("{}{content}", level.prefix())
    }
}
