//! Macro Log tools
//!
//! Tool implementations behind the MCP server. Each takes the app state and
//! returns a serializable response or an error message.

pub mod entries;
pub mod library;
pub mod status;
