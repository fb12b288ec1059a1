use crate::models::{BlockKind, BlockShape};

use super::Parsed;

/// Horizontal divider. Carries no content.
pub struct Divider;

impl Divider {
    /// The spelling the serializer writes.
    pub const MARKER: &'static str = "---";

    /// Every spelling the parser accepts.
    pub const SPELLINGS: [&'static str; 3] = ["---", "***", "___"];

    /// Whether a trimmed line is a divider. Only an exact match counts.
    pub fn opens(trimmed: &str) -> bool {
        Self::SPELLINGS.contains(&trimmed)
    }

    pub fn parse() -> Parsed {
        Parsed::single(BlockShape::new(BlockKind::Divider, ""))
    }

    pub fn render() -> String {
        Self::MARKER.to_string()
    }
}
