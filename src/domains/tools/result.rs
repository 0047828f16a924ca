//! Tool call results.

use rmcp::model::{CallToolResult, Content};

/// Outcome of a single tool invocation.
///
/// Success carries the controller's response body untouched; the bridge
/// never parses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolResult {
    Success(Vec<u8>),
    Error(String),
}

impl ToolResult {
    /// Create a successful result from a raw response body.
    pub fn success(body: impl Into<Vec<u8>>) -> Self {
        Self::Success(body.into())
    }

    /// Create an error-flagged result.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Text shown to the caller: the body on success, the message on error.
    pub fn text(&self) -> String {
        match self {
            Self::Success(body) => String::from_utf8_lossy(body).into_owned(),
            Self::Error(message) => message.clone(),
        }
    }
}

impl From<ToolResult> for CallToolResult {
    fn from(result: ToolResult) -> Self {
        match result {
            ToolResult::Success(body) => {
                let text = String::from_utf8(body)
                    .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned());
                CallToolResult::success(vec![Content::text(text)])
            }
            ToolResult::Error(message) => CallToolResult::error(vec![Content::text(message)]),
        }
    }
}
