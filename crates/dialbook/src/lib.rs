//! # dialbook
//!
//! HTTP API server for the dialbook phonebook service.
//!
//! This crate provides:
//! - REST endpoints for contact CRUD and search under `/api/contacts`
//! - Request validation and HTTP status mapping
//! - Server bootstrap (CLI, logging, database location)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod api;

pub use api::{ApiError, AppState, router};
