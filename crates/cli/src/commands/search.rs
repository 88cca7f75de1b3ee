use serde_json::json;
use siza_agent::shopping::SEARCH_PRODUCTS;

use super::{run_tool, CommandResult};

/// Prints either the matching categories or the not-found message; both exit 0.
pub fn run(query: &str) -> CommandResult {
    run_tool("search", SEARCH_PRODUCTS, json!({ "query": query }))
}
