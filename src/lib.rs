//! TradingView controller MCP bridge.
//!
//! Exposes the controller's REST API as MCP tools: each tool is a
//! declarative descriptor bound to one HTTP call, and a single generic
//! adapter validates arguments, issues the call and forwards the response.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server handler and
//!   the transports (stdio, optional HTTP)
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: Tool table, registry, adapter and controller client
//!
//! # Example
//!
//! ```rust,no_run
//! use tv_controller_mcp::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let transport = TransportService::new(config.transport.clone());
//!     transport.run(McpServer::new(config)?).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
