//! # NewsX Shared
//!
//! Request and response schema types for every endpoint.
//! Kept free of server dependencies so clients can reuse them.

pub mod dto;
pub mod response;

pub use response::{CreatedResponse, DataResponse, ErrorResponse, ListResponse, PagedResponse};
