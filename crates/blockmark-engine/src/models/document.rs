use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::io::DocumentError;
use crate::models::block::{Block, BlockShape};

/// An ordered, flat sequence of blocks. Order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Parses canonical text. See [`crate::parsing::parse`].
    pub fn parse(text: &str) -> Self {
        crate::parsing::parse(text)
    }

    /// Renders canonical text. See [`crate::serializing::serialize`].
    pub fn serialize(&self) -> String {
        crate::serializing::serialize(&self.blocks)
    }

    /// Loads a document from its JSON interchange form (an array of blocks).
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, DocumentError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    pub fn shapes(&self) -> Vec<BlockShape> {
        self.blocks.iter().map(Block::shape).collect()
    }

    /// Compares two documents block by block, ignoring ids.
    pub fn same_shape(&self, other: &Document) -> bool {
        self.blocks.len() == other.blocks.len()
            && self
                .blocks
                .iter()
                .zip(&other.blocks)
                .all(|(a, b)| a.same_shape(b))
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }
}

impl Deref for Document {
    type Target = [Block];

    fn deref(&self) -> &Self::Target {
        &self.blocks
    }
}

impl From<Vec<Block>> for Document {
    fn from(blocks: Vec<Block>) -> Self {
        Self::new(blocks)
    }
}

impl FromIterator<Block> for Document {
    fn from_iter<T: IntoIterator<Item = Block>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Document {
    type Item = Block;
    type IntoIter = std::vec::IntoIter<Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
