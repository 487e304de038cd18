//! # Frontmatter engine
//!
//! The derivation-and-reconciliation core for a markdown documentation
//! corpus: derives structural metadata from a document's relative path,
//! merges it with the category mapping and static defaults to fill missing
//! frontmatter fields, and validates records against the field schema.
//!
//! Derivation, reconciliation and validation are pure and never fail; only
//! the mapping loader touches the filesystem.

mod derive;
mod error;
mod issue;
mod mapping;
mod reconcile;
mod validate;

pub use derive::{derive_from_path, parse_order, strip_order_prefix, DerivedValues};
pub use error::{EngineError, Result};
pub use issue::{format_issues, total_problems, FileIssue};
pub use mapping::{load_category_mapping, CategoryMapping};
pub use reconcile::{missing_autofill_fields, reconcile, ReconcileOutcome};
pub use validate::validate;
