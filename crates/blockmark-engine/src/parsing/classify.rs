use crate::kinds::{BulletList, Divider, Heading, HeadingLevel, Image, NumberedList, PullQuote};

/// What the line under the cursor opens.
///
/// Classification looks at a single trimmed line only. Continuation lines
/// (image credits, further quote and list lines) are the sub-parsers' business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Blank,
    Divider,
    Heading(HeadingLevel),
    Image,
    PullQuote,
    BulletItem,
    NumberedItem,
    /// Nothing else matched; the line becomes a paragraph.
    Text,
}

/// Classifies lines for the block scanner.
pub struct LineClassifier;

impl LineClassifier {
    /// Rules are tried in order and the first match wins.
    ///
    /// A line that starts like an image but is not a well-formed one falls
    /// through the remaining rules and ends up as [`LineClass::Text`].
    pub fn classify(&self, line: &str) -> LineClass {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            LineClass::Blank
        } else if Divider::opens(trimmed) {
            LineClass::Divider
        } else if let Some(level) = Heading::level(trimmed) {
            LineClass::Heading(level)
        } else if Image::opens(trimmed) {
            LineClass::Image
        } else if PullQuote::opens(trimmed) {
            LineClass::PullQuote
        } else if BulletList::opens(trimmed) {
            LineClass::BulletItem
        } else if NumberedList::opens(trimmed) {
            LineClass::NumberedItem
        } else {
            LineClass::Text
        }
    }
}
