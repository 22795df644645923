//! MCP server module
//!
//! Exposes the Spork tools over the Model Context Protocol.

pub mod server;

pub use server::SporkService;
