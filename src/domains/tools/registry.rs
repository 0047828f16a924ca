//! Tool Registry - central registration and lookup for all tools.
//!
//! This module provides:
//! - Ordered registration of tool descriptors, audited at startup
//! - Lookup by name for dispatch
//! - Enumeration in registration order for discovery

use std::collections::HashMap;

use rmcp::model::Tool;
use tracing::{debug, warn};

use super::definitions;
use super::descriptor::ToolDescriptor;
use super::error::ToolError;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - owns every descriptor for the life of the process.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in tool.
    pub fn builtin() -> Result<Self, ToolError> {
        let mut registry = Self::new();
        for descriptor in definitions::all() {
            registry.register(descriptor.clone())?;
        }
        debug!("Registered {} tools", registry.len());
        Ok(registry)
    }

    /// Register a descriptor.
    ///
    /// Fails on a duplicate name or when the parameter schema and the
    /// request mapping do not line up: every path placeholder must name a
    /// declared parameter, and every required parameter must be consumed
    /// exactly once by the path, the query string or the body.
    pub fn register(&mut self, descriptor: ToolDescriptor) -> Result<(), ToolError> {
        if self.index.contains_key(descriptor.name) {
            warn!("Duplicate tool registration: {}", descriptor.name);
            return Err(ToolError::DuplicateName(descriptor.name.to_string()));
        }
        audit(&descriptor)?;

        self.index.insert(descriptor.name, self.tools.len());
        self.tools.push(descriptor);
        Ok(())
    }

    /// All descriptors in registration order.
    pub fn list(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Find a descriptor by name.
    pub fn resolve(&self, name: &str) -> Result<&ToolDescriptor, ToolError> {
        self.index
            .get(name)
            .map(|&i| &self.tools[i])
            .ok_or_else(|| ToolError::not_found(name))
    }

    /// Get all tools as MCP Tool models (metadata), in registration order.
    pub fn to_tools(&self) -> Vec<Tool> {
        self.tools.iter().map(ToolDescriptor::to_tool).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Check that a descriptor's schema and request mapping agree.
fn audit(descriptor: &ToolDescriptor) -> Result<(), ToolError> {
    let name = descriptor.name;
    let mapper = &descriptor.mapper;
    let placeholders = mapper.path_placeholders();

    let consumers = placeholders
        .iter()
        .chain(mapper.query.iter())
        .chain(mapper.body.iter());
    for used in consumers {
        if descriptor.param(used).is_none() {
            return Err(ToolError::invalid_descriptor(
                name,
                format!("'{used}' is mapped but not declared"),
            ));
        }
    }

    for param in descriptor.params {
        let uses = placeholders.iter().filter(|p| **p == param.name).count()
            + mapper.query.iter().filter(|q| **q == param.name).count()
            + mapper.body.iter().filter(|b| **b == param.name).count();

        if param.required && uses != 1 {
            return Err(ToolError::invalid_descriptor(
                name,
                format!("required parameter '{}' is consumed {uses} times", param.name),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::descriptor::{HttpMethod, ParamSpec, RequestMapper};

    fn descriptor(
        name: &'static str,
        params: &'static [ParamSpec],
        mapper: RequestMapper,
    ) -> ToolDescriptor {
        ToolDescriptor::new(name, "test tool", params, mapper)
    }

    #[test]
    fn test_builtin_registers_all_tools() {
        let registry = ToolRegistry::builtin().unwrap();
        assert_eq!(registry.len(), 50);

        let names: Vec<_> = registry.list().iter().map(|d| d.name).collect();
        assert_eq!(names.first(), Some(&"list_watchlists"));
        assert_eq!(names.last(), Some(&"activate_chart"));
        assert!(names.contains(&"get_watchlist"));
        assert!(names.contains(&"add_watchlist_symbols"));
        assert!(names.contains(&"set_symbol"));
        assert!(names.contains(&"set_visible_range"));
    }

    #[test]
    fn test_resolve_returns_registered_descriptor() {
        let registry = ToolRegistry::builtin().unwrap();
        for expected in definitions::all() {
            let resolved = registry.resolve(expected.name).unwrap();
            assert_eq!(resolved, expected);
        }
    }

    #[test]
    fn test_list_preserves_registration_order() {
        let registry = ToolRegistry::builtin().unwrap();
        let listed: Vec<_> = registry.list().iter().map(|d| d.name).collect();
        let declared: Vec<_> = definitions::all().map(|d| d.name).collect();
        assert_eq!(listed, declared);
    }

    #[test]
    fn test_resolve_unknown() {
        let registry = ToolRegistry::builtin().unwrap();
        let err = registry.resolve("unknown").unwrap_err();
        assert!(matches!(err, ToolError::NotFound(ref n) if n == "unknown"));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = ToolRegistry::new();
        let tool = descriptor("dup", &[], RequestMapper::new(HttpMethod::Get, "/a"));
        registry.register(tool.clone()).unwrap();

        let err = registry.register(tool).unwrap_err();
        assert!(matches!(err, ToolError::DuplicateName(_)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unconsumed_required_param_rejected() {
        const PARAMS: &[ParamSpec] = &[ParamSpec::string("chart_id", "Chart")];
        let mut registry = ToolRegistry::new();
        let err = registry
            .register(descriptor(
                "bad",
                PARAMS,
                RequestMapper::new(HttpMethod::Get, "/api/v1/charts"),
            ))
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidDescriptor { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_double_consumed_param_rejected() {
        const PARAMS: &[ParamSpec] = &[ParamSpec::string("symbol", "Symbol")];
        let mut registry = ToolRegistry::new();
        let err = registry
            .register(descriptor(
                "bad",
                PARAMS,
                RequestMapper::new(HttpMethod::Put, "/s/{symbol}").with_query(&["symbol"]),
            ))
            .unwrap_err();
        assert!(err.to_string().contains("consumed 2 times"));
    }

    #[test]
    fn test_undeclared_placeholder_rejected() {
        let mut registry = ToolRegistry::new();
        let err = registry
            .register(descriptor(
                "bad",
                &[],
                RequestMapper::new(HttpMethod::Get, "/api/v1/chart/{chart_id}"),
            ))
            .unwrap_err();
        assert!(err.to_string().contains("'chart_id' is mapped but not declared"));
    }
}
