//! Doc-comment extraction and region splicing for docsplice.
//!
//! The pipeline turns annotated declarations into a documentation listing
//! and splices it into a marked region of a source file:
//!
//! - [`words`] splits camel-case identifiers into lowercase words
//! - [`wrap`] wraps a documentation entry into `// - ` bullet lines
//! - [`extract`] pairs declarations with the comments directly above them
//! - [`tee`] forks one line source into two independently paced cursors
//! - [`region`] drives the rewrite of the region between two markers
//!
//! [`consts`] is the sibling generator for sequential constant tables.

pub mod consts;
pub mod error;
pub mod extract;
pub mod region;
pub mod tee;
pub mod words;
pub mod wrap;

pub use consts::ConstTable;
pub use error::{Error, PatternRole, Result};
pub use extract::{DeclarationPattern, DocExtractor, extract_docs};
pub use region::{RegionPatterns, RewriteSummary, ScanPosition, rewrite, rewrite_str, split_lines};
pub use tee::{Cursor, tee};
pub use words::{identifier_words, split_words};
pub use wrap::{DOC_PREFIXES, WRAP_WIDTH, wrap};
