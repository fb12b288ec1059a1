use serde::{Deserialize, Serialize};

use crate::ids::BlockId;

/// Separator placed between caption and credit wherever both are shown.
pub const ATTRIBUTION_SEPARATOR: &str = " — ";

/// The closed set of block kinds.
///
/// Names serialize in lower case (`"heading2"`, `"pullquote"`, ...). Any other
/// name found in JSON deserializes to [`BlockKind::Unknown`], which renders as
/// a paragraph. The parser never produces `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Paragraph,
    Heading2,
    Heading3,
    Image,
    PullQuote,
    BulletList,
    NumberedList,
    Divider,
    #[serde(other)]
    Unknown,
}

impl BlockKind {
    /// The eight kinds the grammar knows how to write and read.
    pub const ALL: [BlockKind; 8] = [
        BlockKind::Paragraph,
        BlockKind::Heading2,
        BlockKind::Heading3,
        BlockKind::Image,
        BlockKind::PullQuote,
        BlockKind::BulletList,
        BlockKind::NumberedList,
        BlockKind::Divider,
    ];

    pub fn is_list(self) -> bool {
        matches!(self, BlockKind::BulletList | BlockKind::NumberedList)
    }
}

/// One unit of content in a document.
///
/// What `content` holds depends on `kind`:
///
/// - paragraph / headings: the text
/// - image: the image URL
/// - pull quote: the quoted text
/// - lists: the items, joined with `\n`
/// - divider: nothing
///
/// `caption` is the image caption or the quote attribution and `credit` the
/// image source line. `None` and `Some("")` are distinct values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub id: BlockId,
    #[serde(alias = "type")]
    pub kind: BlockKind,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit: Option<String>,
}

impl Block {
    /// Creates a block with a freshly generated id and no caption or credit.
    pub fn new(kind: BlockKind, content: impl Into<String>) -> Self {
        Self::with_parts(BlockId::new(), kind, content)
    }

    pub fn with_parts(id: BlockId, kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            content: content.into(),
            caption: None,
            credit: None,
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(BlockKind::Paragraph, text)
    }

    pub fn heading2(text: impl Into<String>) -> Self {
        Self::new(BlockKind::Heading2, text)
    }

    pub fn heading3(text: impl Into<String>) -> Self {
        Self::new(BlockKind::Heading3, text)
    }

    pub fn image(url: impl Into<String>) -> Self {
        Self::new(BlockKind::Image, url)
    }

    pub fn pull_quote(text: impl Into<String>) -> Self {
        Self::new(BlockKind::PullQuote, text)
    }

    pub fn bullet_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(BlockKind::BulletList, join_items(items))
    }

    pub fn numbered_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(BlockKind::NumberedList, join_items(items))
    }

    pub fn divider() -> Self {
        Self::new(BlockKind::Divider, "")
    }

    pub fn with_id(mut self, id: impl Into<BlockId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_credit(mut self, credit: impl Into<String>) -> Self {
        self.credit = Some(credit.into());
        self
    }

    /// List items stored in `content`, skipping blank lines.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.content
            .split('\n')
            .filter(|item| !item.trim().is_empty())
    }

    /// The `caption — credit` line shown under an image.
    ///
    /// Empty parts are left out; returns `None` when nothing is left. Preview
    /// renderers use this so that preview and exported text agree.
    pub fn attribution(&self) -> Option<String> {
        let parts: Vec<&str> = [self.caption.as_deref(), self.credit.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(ATTRIBUTION_SEPARATOR))
        }
    }

    /// Identifier-free view of this block.
    pub fn shape(&self) -> BlockShape {
        BlockShape {
            kind: self.kind,
            content: self.content.clone(),
            caption: self.caption.clone(),
            credit: self.credit.clone(),
        }
    }

    /// Compares everything except the id.
    pub fn same_shape(&self, other: &Block) -> bool {
        self.kind == other.kind
            && self.content == other.content
            && self.caption == other.caption
            && self.credit == other.credit
    }
}

fn join_items<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| item.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// A block without its identifier.
///
/// Sub-parsers produce shapes; the parser attaches ids. Round-trip checks and
/// snapshots compare shapes so that random ids never cause a mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockShape {
    pub kind: BlockKind,
    pub content: String,
    pub caption: Option<String>,
    pub credit: Option<String>,
}

impl BlockShape {
    pub fn new(kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            caption: None,
            credit: None,
        }
    }

    pub fn into_block(self, id: BlockId) -> Block {
        Block {
            id,
            kind: self.kind,
            content: self.content,
            caption: self.caption,
            credit: self.credit,
        }
    }
}
