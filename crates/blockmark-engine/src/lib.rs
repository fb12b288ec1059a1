//! Transcoder between block documents and their canonical text form.
//!
//! ```
//! use blockmark_engine::{Block, BlockKind, parse, serialize};
//!
//! let doc = parse("## Hello\n\n1. a\n1. b");
//! assert_eq!(doc[0].kind, BlockKind::Heading2);
//! assert_eq!(serialize(&doc), "## Hello\n\n1. a\n2. b");
//!
//! let blocks = vec![Block::pull_quote("Be bold").with_caption("Ada")];
//! assert_eq!(serialize(&blocks), "> \"Be bold\"\n> — Ada");
//! ```

pub mod ids;
pub mod io;
pub mod kinds;
pub mod models;
pub mod parsing;
pub mod roundtrip;
pub mod serializing;
pub mod snapshot;

// Re-export key types for easier usage
pub use ids::{BlockId, IdSource, SequentialIds, UuidIds};
pub use io::DocumentError;
pub use models::{Block, BlockKind, BlockShape, Document};
pub use parsing::{parse, parse_with_ids};
pub use serializing::serialize;
