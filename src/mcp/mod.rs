//! MCP tool-call protocol surface
//!
//! Envelope types and the static tool registry for the multiplexed
//! discovery/invoke convention.

pub mod tools;
pub mod types;

pub use tools::{tool_descriptors, tool_summaries, FETCH_PRODUCTS};
pub use types::{McpEnvelope, McpReply, ToolAnnouncement, ToolDescriptor, ToolSummary};
