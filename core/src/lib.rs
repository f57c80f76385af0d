//! Fieldguard Core Types
//!
//! This crate provides the foundational types shared by the validator:
//! - Field value shapes (`FieldValue`, `FieldData`)
//! - The record validation error (`ValidationError`)

mod error;
mod value;

pub use error::*;
pub use value::*;
