use crate::models::{Block, BlockKind, BlockShape};

use super::{Parsed, take_contiguous};

/// Pull quote with an optional attribution line.
///
/// ```text
/// > "Quoted text"
/// > — Attribution
/// ```
pub struct PullQuote;

impl PullQuote {
    pub const PREFIX: &'static str = "> ";
    pub const QUOTE_MARK: char = '"';
    pub const ATTRIBUTION_PREFIX: &'static str = "— ";

    pub fn opens(trimmed: &str) -> bool {
        trimmed.starts_with(Self::PREFIX)
    }

    /// Consumes every contiguous `> ` line.
    ///
    /// The first line is the quote; when there is more than one line, the last
    /// is the attribution. Lines in between are not kept.
    pub fn parse(lines: &[&str]) -> Parsed {
        let quote_lines: Vec<&str> = take_contiguous(lines, Self::opens)
            .into_iter()
            .map(|line| line.strip_prefix(Self::PREFIX).unwrap_or(line))
            .collect();

        let first = quote_lines.first().copied().unwrap_or_default();
        let mut shape = BlockShape::new(BlockKind::PullQuote, Self::unquote(first));

        if quote_lines.len() > 1
            && let Some(last) = quote_lines.last()
        {
            let attribution = last.strip_prefix(Self::ATTRIBUTION_PREFIX).unwrap_or(last);
            shape.caption = Some(attribution.to_string());
        }

        Parsed::new(shape, quote_lines.len().max(1))
    }

    /// Removes at most one quote mark from each end.
    fn unquote(line: &str) -> &str {
        let line = line.strip_prefix(Self::QUOTE_MARK).unwrap_or(line);
        line.strip_suffix(Self::QUOTE_MARK).unwrap_or(line)
    }

    /// An empty caption is written like an absent one; `> — ` on its own
    /// would not read back as an empty attribution.
    pub fn render(block: &Block) -> String {
        let mut out = format!(
            "{}{}{}{}",
            Self::PREFIX,
            Self::QUOTE_MARK,
            block.content,
            Self::QUOTE_MARK
        );
        if let Some(caption) = block.caption.as_deref().filter(|c| !c.is_empty()) {
            out.push('\n');
            out.push_str(Self::PREFIX);
            out.push_str(Self::ATTRIBUTION_PREFIX);
            out.push_str(caption);
        }
        out
    }
}
