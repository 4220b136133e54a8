//! # NewsX Core
//!
//! The domain layer of the NewsX backend.
//! Entities, validation, pagination and the services behind every endpoint.
//! This crate has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, RepoError};
