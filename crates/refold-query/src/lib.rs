//! Query building blocks for result folding.
//!
//! This crate models the small slice of the search query language that folding
//! needs to speak:
//!
//! - **Fields**: `@foldingcollection` - validated field references
//! - **Field equality**: `@foldingcollection=thread42` - the expansion filter
//! - **OR / grouping**: `(foo bar) OR @uri` - keyword combination
//!
//! and the [`QueryDescriptor`] handed to the query-execution collaborator,
//! which carries numeric windows as structured [`RangeConstraint`]s.
//!
//! # Example
//!
//! ```
//! use refold_query::{FieldName, QueryExpr};
//!
//! let field = FieldName::parse("@fieldname").unwrap();
//! let filter = QueryExpr::field_equals(field, "fieldvalue");
//! assert_eq!(filter.to_query_string(), "@fieldname=fieldvalue");
//!
//! let keywords = QueryExpr::or(vec![
//!     QueryExpr::group(QueryExpr::keywords("foo bar")),
//!     QueryExpr::keywords("@uri"),
//! ]);
//! assert_eq!(keywords.to_query_string(), "(foo bar) OR @uri");
//! ```

#![warn(missing_docs)]

mod descriptor;
mod error;
mod expr;
mod field;

pub use descriptor::{QueryDescriptor, RangeConstraint};
pub use error::FieldNameError;
pub use expr::{QueryExpr, quote_value};
pub use field::{FIELD_PREFIX, FieldName};
