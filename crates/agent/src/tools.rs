use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use siza_core::errors::{ApplicationError, InterfaceError};
use tracing::{info, warn};

/// What the model's function-calling layer sees for a tool. Names and
/// parameter schemas are part of the contract with the model and must stay
/// stable across releases.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON Schema object describing the arguments.
    pub parameters: Value,
}

/// One invocation requested by the platform on the model's behalf.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub call_id: String,
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

impl ToolCall {
    pub fn new(call_id: impl Into<String>, name: impl Into<String>, arguments: Value) -> Self {
        Self { call_id: call_id.into(), name: name.into(), arguments }
    }
}

#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    fn definition(&self) -> ToolDefinition;
    /// `input` is always a JSON object by the time it gets here.
    async fn execute(&self, input: Value) -> Result<Value, ApplicationError>;
}

#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Box<dyn Tool>>,
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry").field("tools", &self.names()).finish()
    }
}

impl ToolRegistry {
    pub fn register<T>(&mut self, tool: T)
    where
        T: Tool + 'static,
    {
        self.tools.insert(tool.name().to_string(), Box::new(tool));
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    /// Definitions sorted by tool name.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|tool| tool.definition()).collect()
    }

    pub async fn execute(&self, name: &str, arguments: Value) -> Result<Value, ApplicationError> {
        let tool =
            self.tools.get(name).ok_or_else(|| ApplicationError::UnknownTool(name.to_string()))?;
        let input = normalize_arguments(name, arguments)?;
        tool.execute(input).await
    }

    /// Runs a platform tool call. Failures come back tagged with the call id so
    /// the platform can report them on its tool-call failure channel.
    pub async fn call(&self, call: ToolCall) -> Result<Value, InterfaceError> {
        match self.execute(&call.name, call.arguments).await {
            Ok(output) => {
                info!(
                    event_name = "agent.tool.completed",
                    correlation_id = %call.call_id,
                    tool = %call.name,
                    outcome = "ok",
                    "tool call completed"
                );
                Ok(output)
            }
            Err(error) => {
                let mapped = error.into_interface(call.call_id.as_str());
                warn!(
                    event_name = "agent.tool.failed",
                    correlation_id = %call.call_id,
                    tool = %call.name,
                    outcome = mapped.error_class(),
                    error = %mapped,
                    "tool call failed"
                );
                Err(mapped)
            }
        }
    }
}

/// Function-calling payloads carry arguments either as an object or as a
/// JSON-encoded string; both are accepted, and `null` or `""` mean no arguments.
fn normalize_arguments(tool: &str, arguments: Value) -> Result<Value, ApplicationError> {
    let invalid = |message: String| ApplicationError::InvalidToolArguments {
        tool: tool.to_string(),
        message,
    };

    match arguments {
        Value::Null => Ok(Value::Object(Map::new())),
        Value::Object(_) => Ok(arguments),
        Value::String(raw) if raw.trim().is_empty() => Ok(Value::Object(Map::new())),
        Value::String(raw) => match serde_json::from_str::<Value>(&raw) {
            Ok(decoded @ Value::Object(_)) => Ok(decoded),
            Ok(_) => Err(invalid("arguments must be a JSON object".to_string())),
            Err(error) => Err(invalid(format!("arguments are not valid JSON: {error}"))),
        },
        _ => Err(invalid("arguments must be a JSON object".to_string())),
    }
}
