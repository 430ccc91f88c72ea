//! MCP server for Linear.
//!
//! This crate provides an MCP (Model Context Protocol) server that exposes
//! Linear issue tracking operations to AI assistants like Claude.

pub mod catalog;
pub mod dispatch;
mod server;
pub mod tools;

pub use server::{LinearMcpServer, ServerError};
