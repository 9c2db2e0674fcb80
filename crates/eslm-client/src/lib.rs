//! ESLM Client - HTTP client for the dashboard backend API
//!
//! One method per resource endpoint. Each call performs exactly one request
//! and decodes the body into the resource type. There is no retry, caching,
//! request de-duplication or response validation; transport failures and
//! non-success statuses are returned to the caller as they are.

#![deny(unsafe_code)]

pub mod client;
pub mod error;

pub use client::{EslmClient, PromptSubmission, DEFAULT_ENDPOINT};
pub use error::{ClientError, ClientResult};
