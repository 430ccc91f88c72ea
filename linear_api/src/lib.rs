//! Client library for the Linear GraphQL API.
//!
//! This crate provides an authenticated HTTP client for Linear, typed
//! request/response surfaces for the operations the MCP gateway exposes,
//! and the shared projection helpers (filters, priority labels, markdown
//! image extraction) used when reshaping remote responses.

pub mod client;
pub mod error;
pub mod filter;
pub mod images;
pub mod issues;
pub mod teams;
pub mod types;
pub mod users;

pub use client::{DEFAULT_PAGE_SIZE, LINEAR_API_URL, LinearClient};
pub use error::{ApiError, Result};
pub use filter::IssueFilter;
