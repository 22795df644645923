//! Spork Tools module
//!
//! MCP tool implementations for the Spork nutrition service.

pub mod meals;
pub mod status;
