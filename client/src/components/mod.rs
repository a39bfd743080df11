//! Reusable presentation components.

pub mod field;
