use crate::models::{BlockShape, Document};

/// Converts a parsed document into its snapshot form.
///
/// Block ids are random, so they are dropped; everything else is kept.
pub fn normalize(document: &Document) -> Vec<BlockShape> {
    document.shapes()
}
