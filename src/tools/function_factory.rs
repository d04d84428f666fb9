use super::{tool::ToolRegistry, Tool};
use crate::{Result, ToolError};
use serde_json::Value;
use tracing::debug;

/// Factory for creating and managing function/tool execution
#[derive(Debug, Default)]
pub struct FunctionFactory {
    registry: ToolRegistry,
}

impl FunctionFactory {
    /// Create a new function factory
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool with the factory
    pub fn register_tool<T: Tool + 'static>(&mut self, tool: T) {
        self.registry.register(tool);
    }

    /// Execute a function call by name
    pub async fn execute_function(&self, function_name: &str, parameters: Value) -> Result<Value> {
        let tool = self
            .registry
            .get(function_name)
            .ok_or_else(|| ToolError::ToolNotFound(function_name.to_string()))?;

        debug!(tool = function_name, %parameters, "executing tool");
        tool.execute(parameters).await
    }

    /// Get all available tool definitions
    pub fn get_tool_definitions(&self) -> Vec<Value> {
        self.registry.to_tool_definitions()
    }

    /// Names of all registered tools, sorted
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.registry.list().iter().map(|tool| tool.name()).collect()
    }

    /// Check if a function exists
    pub fn has_function(&self, name: &str) -> bool {
        self.registry.get(name).is_some()
    }
}
