//! # dialbook-core
//!
//! Core library for the dialbook phonebook service.
//!
//! This crate provides:
//! - The [`Contact`] domain model
//! - Contact validation
//! - Local storage (`SQLite` via sqlx) through [`ContactRepository`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod contact;
mod error;

pub use contact::{Contact, ContactDraft, ContactId, ContactRepository};
pub use contact::{ValidationError, ValidationResult, validate_draft};
pub use error::{Error, Result};
