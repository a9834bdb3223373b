//! Field list derivation

mod collection;
mod policy;

pub use collection::FieldList;
pub use policy::{CREATE_FIELDS, MAX_LIST_TEXT_LENGTH, REMARK_FIELDS, UPDATE_FIELDS};
