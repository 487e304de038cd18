//! Markdown frontmatter codec: extracts and re-emits the `---` fenced YAML
//! metadata block at the top of a document.

mod document;
mod error;

pub use document::{canonicalize, parse, serialize, Document};
pub use error::{CodecError, Result};
