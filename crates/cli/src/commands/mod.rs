pub mod catalog;
pub mod config;
pub mod doctor;
pub mod search;
pub mod tools;

use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;
use serde_json::Value;
use siza_agent::{shopping_tools, ToolCall, ToolRegistry};
use siza_core::{store, CatalogError, InterfaceError};

pub const EXIT_CONFIG: u8 = 2;
pub const EXIT_CATALOG: u8 = 3;
pub const EXIT_TOOL: u8 = 4;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
}

impl CommandResult {
    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    /// Successful command whose output is a JSON document rather than a message.
    pub fn document(command: &str, document: &impl Serialize) -> Self {
        match serde_json::to_string_pretty(document) {
            Ok(output) => Self { exit_code: 0, output },
            Err(error) => Self::failure(command, "serialization", error.to_string(), EXIT_TOOL),
        }
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

pub(crate) fn load_tools() -> Result<ToolRegistry, CatalogError> {
    let catalog = store::grocery()?;
    Ok(shopping_tools(Arc::new(catalog)))
}

/// Runs one tool call against the built-in catalog the same way the worker does.
pub(crate) fn run_tool(command: &str, tool: &str, arguments: Value) -> CommandResult {
    let registry = match load_tools() {
        Ok(registry) => registry,
        Err(error) => {
            return CommandResult::failure(
                command,
                "catalog_validation",
                error.to_string(),
                EXIT_CATALOG,
            )
        }
    };

    let call = ToolCall::new(format!("cli-{command}"), tool, arguments);
    match block_on_call(&registry, call) {
        Ok(Ok(output)) => CommandResult::document(command, &output),
        Ok(Err(error)) => tool_failure(command, &error),
        Err(error) => CommandResult::failure(command, "runtime", format!("{error:#}"), EXIT_TOOL),
    }
}

fn block_on_call(
    registry: &ToolRegistry,
    call: ToolCall,
) -> anyhow::Result<Result<Value, InterfaceError>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to initialize async runtime")?;
    Ok(runtime.block_on(registry.call(call)))
}

fn tool_failure(command: &str, error: &InterfaceError) -> CommandResult {
    CommandResult::failure(command, error.error_class(), error.message(), EXIT_TOOL)
}
