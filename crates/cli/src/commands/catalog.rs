use serde_json::Value;
use siza_agent::shopping::GET_CATALOG;

use super::{run_tool, CommandResult};

pub fn run() -> CommandResult {
    run_tool("catalog", GET_CATALOG, Value::Null)
}
