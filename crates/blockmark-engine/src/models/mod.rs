pub mod block;
pub mod document;

pub use block::{ATTRIBUTION_SEPARATOR, Block, BlockKind, BlockShape};
pub use document::Document;
