//! Boundary schema validation for animation documents.

pub(crate) mod validate;
