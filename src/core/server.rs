//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. Discovery is answered from the [`ToolRegistry`] in registration
//! order, and every invocation runs through the shared [`ToolAdapter`].
//!
//! **Adding a new tool does NOT require modifying this file!** Tools are
//! data, declared in `domains/tools/definitions/`.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    model::*,
    service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::Config;
use super::error::Result;
use crate::domains::tools::{
    ControllerApi, ControllerClient, ToolAdapter, ToolError, ToolRegistry,
};

const INSTRUCTIONS: &str = "Controls TradingView through the local controller service. \
Watchlist tools manage regular and colored watchlists; chart tools read and change the \
symbol, resolution, type, currency, unit, visible range and toggles of a chart addressed \
by chart_id (see list_charts). Results are the controller's JSON responses.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. Cloning is
/// cheap: the registry and configuration are shared.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Every tool descriptor, fixed at startup.
    registry: Arc<ToolRegistry>,

    /// Runs tool invocations against the controller.
    adapter: ToolAdapter,
}

impl McpServer {
    /// Create a new MCP server talking to the configured controller.
    pub fn new(config: Config) -> Result<Self> {
        let client = ControllerClient::from_config(&config.controller)?;
        Self::with_api(config, Arc::new(client))
    }

    /// Create a server on top of any controller API implementation.
    pub fn with_api(config: Config, api: Arc<dyn ControllerApi>) -> Result<Self> {
        let registry = ToolRegistry::builtin()?;
        info!("Registered {} tools", registry.len());

        Ok(Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
            adapter: ToolAdapter::new(api),
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// All tools in registration order.
    pub fn tools(&self) -> Vec<Tool> {
        self.registry.to_tools()
    }

    /// Invoke a tool by name.
    ///
    /// Only an unknown name is an `Err`; validation and controller failures
    /// come back as error-flagged results.
    pub async fn invoke_tool(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> std::result::Result<CallToolResult, ToolError> {
        let descriptor = self.registry.resolve(name).inspect_err(|_| {
            warn!("Unknown tool requested: {}", name);
        })?;

        Ok(self.adapter.invoke(descriptor, &arguments).await.into())
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _request, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        self.invoke_tool(&request.name, request.arguments.unwrap_or_default())
            .await
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::{HttpMethod, RecordingApi, RequestSpec};
    use rmcp::{ServiceError, ServiceExt, service::QuitReason};
    use serde_json::json;

    fn server(api: Arc<RecordingApi>) -> McpServer {
        McpServer::with_api(Config::new("127.0.0.1:9"), api).unwrap()
    }

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_tools_are_stable_and_ordered() {
        let server = server(RecordingApi::ok("{}"));
        let first: Vec<_> = server.tools().into_iter().map(|t| t.name).collect();
        let second: Vec<_> = server.tools().into_iter().map(|t| t.name).collect();

        assert_eq!(first.len(), 50);
        assert_eq!(first, second);
        assert_eq!(first[0], "list_watchlists");
        assert_eq!(first[15], "list_charts");
    }

    #[test]
    fn test_get_info_advertises_tools() {
        let server = server(RecordingApi::ok("{}"));
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert_eq!(info.server_info.name, "maudeview-watchlist-manager");
        assert!(info.instructions.is_some());
    }

    #[tokio::test]
    async fn test_invoke_unknown_tool_is_not_found() {
        let api = RecordingApi::ok("{}");
        let server = server(api.clone());

        let err = server
            .invoke_tool("no_such_tool", JsonObject::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_bad_call_does_not_stop_later_calls() {
        let api = RecordingApi::ok(r#"{"active":"w1"}"#);
        let server = server(api.clone());

        let rejected = server
            .invoke_tool("set_active_watchlist", JsonObject::new())
            .await
            .unwrap();
        assert!(rejected.is_error.unwrap_or(false));

        let arguments = json!({ "id": "w1" }).as_object().cloned().unwrap();
        let accepted = server
            .invoke_tool("set_active_watchlist", arguments)
            .await
            .unwrap();
        assert!(!accepted.is_error.unwrap_or(false));
        assert_eq!(text_of(&accepted), r#"{"active":"w1"}"#);
        assert_eq!(
            api.calls(),
            vec![
                RequestSpec::new(HttpMethod::Put, "/api/v1/watchlists/active")
                    .with_body(json!({ "id": "w1" }))
            ]
        );
    }

    #[tokio::test]
    async fn test_controller_failure_is_error_result() {
        let api = RecordingApi::failing(500, "boom");
        let server = server(api);

        let result = server
            .invoke_tool("list_charts", JsonObject::new())
            .await
            .unwrap();
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), "GET /api/v1/charts returned 500: boom");
    }

    #[tokio::test]
    async fn test_serves_mcp_session_until_client_leaves() {
        let api = RecordingApi::ok("{}");
        let server = server(api.clone());
        let (server_io, client_io) = tokio::io::duplex(64 * 1024);

        let server_task = tokio::spawn(async move {
            let service = server.serve(server_io).await.unwrap();
            service.waiting().await.unwrap()
        });
        let client = ().serve(client_io).await.unwrap();

        let tools = client.list_all_tools().await.unwrap();
        assert_eq!(tools.len(), 50);
        assert_eq!(tools[0].name, "list_watchlists");
        assert_eq!(tools[49].name, "activate_chart");

        let err = client
            .call_tool(CallToolRequestParam {
                name: "nope".into(),
                arguments: None,
            })
            .await
            .unwrap_err();
        match err {
            ServiceError::McpError(error) => assert_eq!(error.code, ErrorCode::INVALID_PARAMS),
            other => panic!("Expected MCP error, got {other:?}"),
        }

        let rejected = client
            .call_tool(CallToolRequestParam {
                name: "get_watchlist".into(),
                arguments: None,
            })
            .await
            .unwrap();
        assert!(rejected.is_error.unwrap_or(false));
        assert!(text_of(&rejected).contains("watchlist_id"));
        assert!(api.calls().is_empty());

        client.cancel().await.unwrap();
        let reason = server_task.await.unwrap();
        assert!(matches!(reason, QuitReason::Closed));
    }
}
