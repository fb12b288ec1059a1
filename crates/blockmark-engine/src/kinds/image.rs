use std::sync::OnceLock;

use regex::Regex;

use crate::models::{ATTRIBUTION_SEPARATOR, Block, BlockKind, BlockShape};

use super::Parsed;

/// Image with optional caption and credit.
///
/// Written as one `![caption](url)` line, followed by a `*caption — credit*`
/// line when there is anything to attribute.
pub struct Image;

impl Image {
    pub const OPENER: &'static str = "![";
    pub const EMPHASIS: char = '*';

    fn pattern() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        // The whole line must be the image; trailing text demotes it to a paragraph.
        IMAGE_REGEX
            .get_or_init(|| Regex::new(r"^!\[(.*?)\]\((.*)\)$").expect("Invalid image regex"))
    }

    /// Splits a trimmed image line into `(alt, url)`.
    pub fn match_line(trimmed: &str) -> Option<(&str, &str)> {
        if !trimmed.starts_with(Self::OPENER) {
            return None;
        }
        let caps = Self::pattern().captures(trimmed)?;
        let alt = caps.get(1).map_or("", |m| m.as_str());
        let url = caps.get(2).map_or("", |m| m.as_str());
        Some((alt, url))
    }

    pub fn opens(trimmed: &str) -> bool {
        Self::match_line(trimmed).is_some()
    }

    /// Reads an image line and, if the next line starts with `*`, its
    /// caption/credit line.
    pub fn parse(lines: &[&str]) -> Option<Parsed> {
        let (alt, url) = Self::match_line(lines.first()?.trim())?;
        let mut shape = BlockShape::new(BlockKind::Image, url);
        shape.caption = Some(alt.to_string());

        let credit_line = lines
            .get(1)
            .map(|line| line.trim())
            .filter(|line| line.starts_with(Self::EMPHASIS));

        match credit_line {
            Some(line) => {
                let (caption, credit) = Self::split_credit_line(line);
                shape.caption = Some(caption);
                if credit.is_some() {
                    shape.credit = credit;
                }
                Some(Parsed::new(shape, 2))
            }
            None => Some(Parsed::single(shape)),
        }
    }

    /// Strips one `*` from each end and splits on ` — `.
    ///
    /// The first part is the caption; anything after the first separator,
    /// rejoined, is the credit. Other dash variants do not split.
    pub fn split_credit_line(line: &str) -> (String, Option<String>) {
        let inner = line.strip_prefix(Self::EMPHASIS).unwrap_or(line);
        let inner = inner.strip_suffix(Self::EMPHASIS).unwrap_or(inner);

        match inner.split_once(ATTRIBUTION_SEPARATOR) {
            Some((caption, credit)) => (caption.to_string(), Some(credit.to_string())),
            None => (inner.to_string(), None),
        }
    }

    pub fn render(block: &Block) -> String {
        let mut out = format!(
            "![{}]({})",
            block.caption.as_deref().unwrap_or_default(),
            block.content
        );
        if let Some(attribution) = block.attribution() {
            out.push('\n');
            out.push(Self::EMPHASIS);
            out.push_str(&attribution);
            out.push(Self::EMPHASIS);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("![Alt](http://x/a.png)", Some(("Alt", "http://x/a.png")))]
    #[case("![](http://x/a.png)", Some(("", "http://x/a.png")))]
    #[case("![Alt]()", Some(("Alt", "")))]
    #[case("![Alt](http://x/a_(1).png)", Some(("Alt", "http://x/a_(1).png")))]
    #[case("![Alt](http://x/a.png) trailing", None)]
    #[case("![Alt](http://x/a.png", None)]
    #[case("![Alt] (http://x/a.png)", None)]
    #[case("[Alt](http://x/a.png)", None)]
    fn matches_image_lines(#[case] line: &str, #[case] expected: Option<(&str, &str)>) {
        assert_eq!(Image::match_line(line), expected);
    }

    #[test]
    fn image_without_credit_line() {
        let parsed = Image::parse(&["![Alt](u)", "next"]).unwrap();
        assert_eq!(parsed.consumed, 1);
        assert_eq!(parsed.shape.content, "u");
        assert_eq!(parsed.shape.caption.as_deref(), Some("Alt"));
        assert_eq!(parsed.shape.credit, None);
    }

    #[test]
    fn image_without_alt_has_empty_caption() {
        let parsed = Image::parse(&["![](u)"]).unwrap();
        assert_eq!(parsed.shape.caption.as_deref(), Some(""));
    }

    #[test]
    fn credit_line_splits_caption_and_credit() {
        let parsed = Image::parse(&["![Alt](u)", "*Caption — Photo by Jane*"]).unwrap();
        assert_eq!(parsed.consumed, 2);
        assert_eq!(parsed.shape.caption.as_deref(), Some("Caption"));
        assert_eq!(parsed.shape.credit.as_deref(), Some("Photo by Jane"));
    }

    #[test]
    fn credit_line_without_separator_overrides_caption() {
        let parsed = Image::parse(&["![Alt](u)", "  *Just a caption*  "]).unwrap();
        assert_eq!(parsed.consumed, 2);
        assert_eq!(parsed.shape.caption.as_deref(), Some("Just a caption"));
        assert_eq!(parsed.shape.credit, None);
    }

    #[test]
    fn extra_separators_stay_in_credit() {
        let (caption, credit) = Image::split_credit_line("*A — B — C*");
        assert_eq!(caption, "A");
        assert_eq!(credit.as_deref(), Some("B — C"));
    }

    #[rstest]
    #[case("*A - B*")]
    #[case("*A – B*")]
    #[case("*A—B*")]
    fn other_dashes_do_not_split(#[case] line: &str) {
        let (caption, credit) = Image::split_credit_line(line);
        assert_eq!(caption, &line[1..line.len() - 1]);
        assert_eq!(credit, None);
    }

    #[test]
    fn blank_line_is_not_a_credit_line() {
        let parsed = Image::parse(&["![Alt](u)", "", "*later*"]).unwrap();
        assert_eq!(parsed.consumed, 1);
    }

    #[test]
    fn malformed_image_is_not_parsed() {
        assert!(Image::parse(&["![Alt](u"]).is_none());
    }

    #[rstest]
    #[case(None, None, "![](u)")]
    #[case(Some(""), None, "![](u)")]
    #[case(Some("Alt"), None, "![Alt](u)\n*Alt*")]
    #[case(Some("Alt"), Some("Jane"), "![Alt](u)\n*Alt — Jane*")]
    #[case(None, Some("Jane"), "![](u)\n*Jane*")]
    fn renders_image(
        #[case] caption: Option<&str>,
        #[case] credit: Option<&str>,
        #[case] expected: &str,
    ) {
        let mut block = Block::image("u");
        block.caption = caption.map(str::to_string);
        block.credit = credit.map(str::to_string);
        assert_eq!(Image::render(&block), expected);
    }
}
