//! Search result records and result folding.
//!
//! A query response is a flat list of records, several of which may be parts of
//! one logical document (an email and its attachments) or items of one thread.
//! This crate reconstructs that structure:
//!
//! - [`ResultRecord`] / [`ResultSet`]: the records as deserialized from a response
//! - [`RawFields`]: typed access to a record's open-ended field payload
//! - [`build_forest`]: folds a top result's flat `child_results` into attachments
//!   and sibling documents
//! - [`fold_flat`] / [`flatten_forest`]: folding without an anchor, and its inverse
//!
//! # Example
//!
//! ```
//! use refold_result::{ResultRecord, build_forest};
//!
//! let mut top = ResultRecord::new("mail");
//! top.child_results = vec![
//!     ResultRecord::new("attachment").with_parent("mail"),
//!     ResultRecord::new("reply"),
//! ];
//!
//! let top = build_forest(top);
//! assert_eq!(top.attachments[0].unique_id, "attachment");
//! assert_eq!(top.child_results[0].unique_id, "reply");
//! ```

#![warn(missing_docs)]

mod error;
mod forest;
mod raw;
mod record;

pub use error::FieldError;
pub use forest::{build_forest, flatten_forest, fold_flat};
pub use raw::{FieldValue, RawFields};
pub use record::{Highlight, ResultRecord, ResultSet};
