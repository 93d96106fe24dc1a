//! Custom extractors for Axum handlers.
//!
//! This module provides reusable extractors that reduce boilerplate
//! and standardize error handling across your API.

pub mod validated_json;

pub use validated_json::{FieldValidate, ValidatedJson};
