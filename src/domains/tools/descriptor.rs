//! Declarative tool descriptors.
//!
//! A [`ToolDescriptor`] is pure data: a name, a description, the ordered list
//! of parameters the tool accepts and a [`RequestMapper`] saying how a
//! validated argument set becomes one HTTP call against the controller.
//! Every tool shares the same generic adapter; only this data differs.

use std::fmt;
use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use serde_json::{Map, Value, json};

/// HTTP verbs used by the controller API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON type accepted for a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Integer,
    StringArray,
}

impl ParamType {
    /// Human-readable name used in validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::StringArray => "array of strings",
        }
    }

    /// Check a JSON value against this type.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer => value.is_i64(),
            Self::StringArray => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
        }
    }

    fn schema(&self) -> Value {
        match self {
            Self::String => json!({ "type": "string" }),
            Self::Integer => json!({ "type": "integer" }),
            Self::StringArray => json!({ "type": "array", "items": { "type": "string" } }),
        }
    }
}

/// One declared tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamType,
    pub required: bool,
    pub description: &'static str,
}

impl ParamSpec {
    /// A required string parameter.
    pub const fn string(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamType::String,
            required: true,
            description,
        }
    }

    /// A required integer parameter.
    pub const fn integer(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamType::Integer,
            required: true,
            description,
        }
    }

    /// A required list-of-strings parameter.
    pub const fn strings(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamType::StringArray,
            required: true,
            description,
        }
    }
}

/// How a validated argument set becomes an HTTP request.
///
/// `path` may contain `{param}` placeholders. Parameters listed in `query`
/// are appended as `?name=value&...`, and parameters listed in `body` are
/// copied, with their JSON types intact, into a JSON object body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestMapper {
    pub method: HttpMethod,
    pub path: &'static str,
    pub query: &'static [&'static str],
    pub body: &'static [&'static str],
}

impl RequestMapper {
    pub const fn new(method: HttpMethod, path: &'static str) -> Self {
        Self {
            method,
            path,
            query: &[],
            body: &[],
        }
    }

    pub const fn with_query(mut self, query: &'static [&'static str]) -> Self {
        self.query = query;
        self
    }

    pub const fn with_body(mut self, body: &'static [&'static str]) -> Self {
        self.body = body;
        self
    }

    /// Names referenced by `{...}` placeholders in the path template.
    pub fn path_placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            match after.find('}') {
                Some(end) => {
                    names.push(&after[..end]);
                    rest = &after[end + 1..];
                }
                None => break,
            }
        }
        names
    }

    /// Build the concrete request from already validated arguments.
    ///
    /// Values are formatted verbatim; nothing is percent-encoded.
    pub fn map(&self, arguments: &JsonObject) -> RequestSpec {
        let mut path = self.path.to_string();
        for name in self.path_placeholders() {
            let value = arguments.get(name).map(plain_text).unwrap_or_default();
            path = path.replace(&format!("{{{name}}}"), &value);
        }

        let pairs: Vec<String> = self
            .query
            .iter()
            .filter_map(|name| {
                arguments
                    .get(*name)
                    .filter(|v| !v.is_null())
                    .map(|v| format!("{name}={}", plain_text(v)))
            })
            .collect();
        if !pairs.is_empty() {
            path.push('?');
            path.push_str(&pairs.join("&"));
        }

        let body = if self.body.is_empty() {
            None
        } else {
            let mut payload = Map::new();
            for name in self.body {
                if let Some(value) = arguments.get(*name).filter(|v| !v.is_null()) {
                    payload.insert((*name).to_string(), value.clone());
                }
            }
            Some(Value::Object(payload))
        };

        RequestSpec {
            method: self.method,
            path,
            body,
        }
    }
}

/// Render a scalar argument the way it appears inside a URL.
fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A fully resolved request, built per invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub method: HttpMethod,
    /// Path relative to the controller base URL, query string included.
    pub path: String,
    pub body: Option<Value>,
}

impl RequestSpec {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Static definition of one tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub params: &'static [ParamSpec],
    pub mapper: RequestMapper,
}

impl ToolDescriptor {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        params: &'static [ParamSpec],
        mapper: RequestMapper,
    ) -> Self {
        Self {
            name,
            description,
            params,
            mapper,
        }
    }

    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// JSON Schema for the tool's arguments.
    pub fn input_schema(&self) -> JsonObject {
        let mut properties = Map::new();
        for param in self.params {
            let mut schema = param.kind.schema();
            if let Value::Object(map) = &mut schema {
                map.insert("description".into(), Value::from(param.description));
            }
            properties.insert(param.name.to_string(), schema);
        }

        let required: Vec<Value> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| Value::from(p.name))
            .collect();

        let mut schema = Map::new();
        schema.insert("type".into(), Value::from("object"));
        schema.insert("properties".into(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".into(), Value::Array(required));
        }
        schema
    }

    /// Create the MCP Tool model advertised during discovery.
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: Arc::new(self.input_schema()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
