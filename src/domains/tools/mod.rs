//! Tools domain module.
//!
//! Every tool exposed to MCP clients maps to exactly one controller REST
//! call. Instead of one handler per tool, each tool is a declarative
//! [`ToolDescriptor`] and a single [`ToolAdapter`] runs all of them.
//!
//! ## Architecture
//!
//! - `definitions/` - The tool table (watchlist and chart tools)
//! - `descriptor.rs` - Descriptor, parameter and request-mapping types
//! - `registry.rs` - Ordered registry with lookup by name
//! - `adapter.rs` - Validation, request building and result translation
//! - `client.rs` - HTTP client for the controller API
//! - `result.rs` - Tool call results
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! Add a `ToolDescriptor` entry to the matching table in `definitions/`.
//! The registry audits it at startup; nothing else needs to change.

mod adapter;
mod client;
pub mod definitions;
pub mod descriptor;
mod error;
mod registry;
mod result;

pub use adapter::{ToolAdapter, prepare, validate};
pub use client::{ControllerApi, ControllerClient, ControllerError};
pub use descriptor::{HttpMethod, ParamSpec, ParamType, RequestMapper, RequestSpec, ToolDescriptor};
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use result::ToolResult;

#[cfg(test)]
pub(crate) use adapter::tests::RecordingApi;
