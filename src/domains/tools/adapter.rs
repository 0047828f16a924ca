//! Tool Handler Adapter.
//!
//! The single handler shared by every tool: validate the caller's arguments
//! against the descriptor, map them to a [`RequestSpec`], send it, and turn
//! the outcome into a [`ToolResult`]. Faults stay inside the invocation.

use std::sync::Arc;

use rmcp::model::JsonObject;
use tracing::{info, instrument, warn};

use super::client::ControllerApi;
use super::descriptor::{RequestSpec, ToolDescriptor};
use super::error::ToolError;
use super::result::ToolResult;

/// Generic adapter from tool invocations to controller calls.
#[derive(Clone)]
pub struct ToolAdapter {
    api: Arc<dyn ControllerApi>,
}

impl ToolAdapter {
    pub fn new(api: Arc<dyn ControllerApi>) -> Self {
        Self { api }
    }

    /// Run one tool invocation to completion.
    #[instrument(skip_all, fields(tool = descriptor.name))]
    pub async fn invoke(&self, descriptor: &ToolDescriptor, arguments: &JsonObject) -> ToolResult {
        let request = match prepare(descriptor, arguments) {
            Ok(request) => request,
            Err(e) => {
                warn!("Rejected {} call: {}", descriptor.name, e);
                return ToolResult::error(e.to_string());
            }
        };

        info!("{} -> {} {}", descriptor.name, request.method, request.path);

        match self.api.send(&request).await {
            Ok(body) => ToolResult::success(body),
            Err(e) => {
                warn!("Controller call failed: {}", e);
                ToolResult::error(e.to_string())
            }
        }
    }
}

/// Validate arguments and build the request, without touching the network.
pub fn prepare(descriptor: &ToolDescriptor, arguments: &JsonObject) -> Result<RequestSpec, ToolError> {
    validate(descriptor, arguments)?;
    Ok(descriptor.mapper.map(arguments))
}

/// Check arguments against the descriptor's parameter list.
///
/// Required parameters must be present and non-null; any parameter present
/// must have its declared type. Undeclared arguments are ignored.
pub fn validate(descriptor: &ToolDescriptor, arguments: &JsonObject) -> Result<(), ToolError> {
    for param in descriptor.params {
        match arguments.get(param.name).filter(|v| !v.is_null()) {
            None if param.required => {
                return Err(ToolError::invalid_arguments(format!(
                    "missing required parameter '{}'",
                    param.name
                )));
            }
            None => {}
            Some(value) if !param.kind.accepts(value) => {
                return Err(ToolError::invalid_arguments(format!(
                    "parameter '{}' must be {}",
                    param.name,
                    param.kind.label()
                )));
            }
            Some(_) => {}
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domains::tools::client::ControllerError;
    use crate::domains::tools::descriptor::{HttpMethod, ParamType};
    use crate::domains::tools::registry::ToolRegistry;
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::sync::Mutex;

    /// Records every request and answers with a canned outcome.
    pub(crate) struct RecordingApi {
        pub calls: Mutex<Vec<RequestSpec>>,
        status: u16,
        body: &'static str,
    }

    impl RecordingApi {
        pub fn ok(body: &'static str) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                status: 200,
                body,
            })
        }

        pub fn failing(status: u16, body: &'static str) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                status,
                body,
            })
        }

        pub fn calls(&self) -> Vec<RequestSpec> {
            self.calls.lock().expect("calls mutex").clone()
        }
    }

    #[async_trait]
    impl ControllerApi for RecordingApi {
        async fn send(&self, request: &RequestSpec) -> Result<Vec<u8>, ControllerError> {
            self.calls
                .lock()
                .expect("calls mutex")
                .push(request.clone());

            if (200..300).contains(&self.status) {
                Ok(self.body.as_bytes().to_vec())
            } else {
                Err(ControllerError::Status {
                    method: request.method,
                    path: request.path.clone(),
                    status: self.status,
                    body: self.body.to_string(),
                })
            }
        }
    }

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    async fn invoke(api: &Arc<RecordingApi>, tool: &str, arguments: Value) -> ToolResult {
        let registry = ToolRegistry::builtin().unwrap();
        let adapter = ToolAdapter::new(api.clone());
        adapter
            .invoke(registry.resolve(tool).unwrap(), &args(arguments))
            .await
    }

    #[tokio::test]
    async fn test_get_watchlist_substitutes_path() {
        let api = RecordingApi::ok(r#"{"id":"abc"}"#);
        let result = invoke(&api, "get_watchlist", json!({ "watchlist_id": "abc" })).await;

        assert_eq!(result, ToolResult::success(br#"{"id":"abc"}"#.to_vec()));
        assert_eq!(
            api.calls(),
            vec![RequestSpec::new(HttpMethod::Get, "/api/v1/watchlist/abc")]
        );
    }

    #[tokio::test]
    async fn test_set_active_watchlist_scenario() {
        let api = RecordingApi::ok(r#"{"active":"w1"}"#);
        let result = invoke(&api, "set_active_watchlist", json!({ "id": "w1" })).await;

        assert!(!result.is_error());
        assert_eq!(result.text(), r#"{"active":"w1"}"#);
        assert_eq!(
            api.calls(),
            vec![
                RequestSpec::new(HttpMethod::Put, "/api/v1/watchlists/active")
                    .with_body(json!({ "id": "w1" }))
            ]
        );
    }

    #[tokio::test]
    async fn test_add_watchlist_symbols_sends_list() {
        let api = RecordingApi::ok("{}");
        invoke(
            &api,
            "add_watchlist_symbols",
            json!({ "watchlist_id": "w1", "symbols": ["NASDAQ:AAPL", "NYSE:MSFT"] }),
        )
        .await;

        let calls = api.calls();
        assert_eq!(calls[0].method, HttpMethod::Post);
        assert_eq!(calls[0].path, "/api/v1/watchlist/w1/symbols");
        assert_eq!(
            calls[0].body,
            Some(json!({ "symbols": ["NASDAQ:AAPL", "NYSE:MSFT"] }))
        );
    }

    #[tokio::test]
    async fn test_set_symbol_uses_query_string() {
        let api = RecordingApi::ok("{}");
        invoke(
            &api,
            "set_symbol",
            json!({ "chart_id": "abc123", "symbol": "NASDAQ:AAPL" }),
        )
        .await;

        assert_eq!(
            api.calls(),
            vec![RequestSpec::new(
                HttpMethod::Put,
                "/api/v1/chart/abc123/symbol?symbol=NASDAQ:AAPL"
            )]
        );
    }

    #[tokio::test]
    async fn test_integer_bodies() {
        let api = RecordingApi::ok("{}");
        invoke(
            &api,
            "set_visible_range",
            json!({ "chart_id": "c", "from": 1700000000, "to": 1700086400 }),
        )
        .await;
        invoke(&api, "activate_chart", json!({ "index": 2 })).await;

        let calls = api.calls();
        assert_eq!(
            calls[0].body,
            Some(json!({ "from": 1700000000, "to": 1700086400 }))
        );
        assert_eq!(calls[1].path, "/api/v1/chart/activate");
        assert_eq!(calls[1].body, Some(json!({ "index": 2 })));
    }

    #[tokio::test]
    async fn test_missing_required_field_makes_no_call() {
        let api = RecordingApi::ok("{}");
        let result = invoke(&api, "rename_watchlist", json!({ "watchlist_id": "w1" })).await;

        assert!(result.is_error());
        assert!(result.text().contains("missing required parameter 'name'"));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_null_counts_as_missing() {
        let api = RecordingApi::ok("{}");
        let result = invoke(&api, "get_symbol", json!({ "chart_id": null })).await;

        assert!(result.is_error());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_wrong_type_makes_no_call() {
        let api = RecordingApi::ok("{}");
        let result = invoke(&api, "scroll_chart", json!({ "chart_id": "c", "bars": "ten" })).await;
        assert_eq!(
            result,
            ToolResult::error("Invalid arguments: parameter 'bars' must be integer")
        );

        let result = invoke(&api, "bulk_remove_colored_symbols", json!({ "symbols": "AAPL" })).await;
        assert!(result.is_error());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_every_tool_rejects_missing_fields() {
        let registry = ToolRegistry::builtin().unwrap();
        let api = RecordingApi::ok("{}");
        let adapter = ToolAdapter::new(api.clone());

        for descriptor in registry.list().iter().filter(|d| !d.params.is_empty()) {
            let result = adapter.invoke(descriptor, &JsonObject::new()).await;
            assert!(result.is_error(), "{} accepted empty arguments", descriptor.name);
        }
        assert!(api.calls().is_empty());
    }

    fn url_text(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    #[tokio::test]
    async fn test_every_tool_issues_one_call_with_declared_mapping() {
        let registry = ToolRegistry::builtin().unwrap();
        let api = RecordingApi::ok("{}");
        let adapter = ToolAdapter::new(api.clone());

        for descriptor in registry.list() {
            // Distinct values per parameter so a swapped key shows up.
            let mut arguments = JsonObject::new();
            for (i, param) in descriptor.params.iter().enumerate() {
                let value = match param.kind {
                    ParamType::String => json!(format!("{}-value", param.name)),
                    ParamType::Integer => json!(100 + i as i64),
                    ParamType::StringArray => json!([format!("{}-item", param.name)]),
                };
                arguments.insert(param.name.to_string(), value);
            }

            let before = api.calls().len();
            let result = adapter.invoke(descriptor, &arguments).await;
            let calls = api.calls();

            assert!(!result.is_error(), "{} failed", descriptor.name);
            assert_eq!(calls.len(), before + 1, "{}", descriptor.name);

            let mapper = &descriptor.mapper;
            let mut expected_path = mapper.path.to_string();
            for placeholder in mapper.path_placeholders() {
                expected_path = expected_path.replace(
                    &format!("{{{placeholder}}}"),
                    &url_text(&arguments[placeholder]),
                );
            }
            let query: Vec<String> = mapper
                .query
                .iter()
                .map(|key| format!("{key}={}", url_text(&arguments[*key])))
                .collect();
            if !query.is_empty() {
                expected_path = format!("{expected_path}?{}", query.join("&"));
            }
            let expected_body = (!mapper.body.is_empty()).then(|| {
                Value::Object(
                    mapper
                        .body
                        .iter()
                        .map(|key| (key.to_string(), arguments[*key].clone()))
                        .collect(),
                )
            });

            let call = calls.last().unwrap();
            assert_eq!(call.method, mapper.method, "{}", descriptor.name);
            assert_eq!(call.path, expected_path, "{}", descriptor.name);
            assert_eq!(call.body, expected_body, "{}", descriptor.name);
        }
    }

    #[tokio::test]
    async fn test_query_and_body_shapes() {
        let api = RecordingApi::ok("{}");
        invoke(&api, "set_chart_type", json!({ "chart_id": "c1", "type": "candles" })).await;
        invoke(
            &api,
            "remove_watchlist_symbols",
            json!({ "watchlist_id": "w1", "symbols": ["NYSE:MSFT"] }),
        )
        .await;

        assert_eq!(
            api.calls(),
            vec![
                RequestSpec::new(HttpMethod::Put, "/api/v1/chart/c1/chart-type?type=candles"),
                RequestSpec::new(HttpMethod::Delete, "/api/v1/watchlist/w1/symbols")
                    .with_body(json!({ "symbols": ["NYSE:MSFT"] })),
            ]
        );
    }

    #[tokio::test]
    async fn test_not_found_status_becomes_error_result() {
        let api = RecordingApi::failing(404, r#"{"error":"not found"}"#);
        let result = invoke(&api, "get_watchlist", json!({ "watchlist_id": "nope" })).await;

        assert!(result.is_error());
        let message = result.text();
        assert!(message.contains("404"));
        assert!(message.contains(r#"{"error":"not found"}"#));
        assert_eq!(api.calls().len(), 1);
    }

    #[test]
    fn test_prepare_ignores_undeclared_arguments() {
        let registry = ToolRegistry::builtin().unwrap();
        let descriptor = registry.resolve("list_charts").unwrap();
        let request = prepare(descriptor, &args(json!({ "extra": true }))).unwrap();
        assert_eq!(request, RequestSpec::new(HttpMethod::Get, "/api/v1/charts"));
    }
}
