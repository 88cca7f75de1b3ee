//! The two catalog tools the model can call: `get_catalog` and `search_products`.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use siza_core::domain::product::Category;
use siza_core::errors::ApplicationError;
use siza_core::{Catalog, QueryResult};

use crate::tools::{Tool, ToolDefinition, ToolRegistry};

pub const GET_CATALOG: &str = "get_catalog";
pub const SEARCH_PRODUCTS: &str = "search_products";

/// Output of `search_products`. Matches use the same shape as `get_catalog`;
/// a search with no hits produces a message instead of an empty list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchProductsOutput {
    Matches { categories: Vec<Category> },
    NotFound { message: String },
}

impl SearchProductsOutput {
    pub fn from_result(query: &str, result: QueryResult) -> Self {
        match result {
            QueryResult::Matches(categories) => Self::Matches { categories },
            QueryResult::NotFound => Self::NotFound {
                message: format!("No products found matching '{}'.", query.trim()),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GetCatalogInput {}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SearchProductsInput {
    query: String,
}

fn decode_input<T: DeserializeOwned>(tool: &str, input: Value) -> Result<T, ApplicationError> {
    serde_json::from_value(input).map_err(|error| ApplicationError::InvalidToolArguments {
        tool: tool.to_string(),
        message: error.to_string(),
    })
}

pub struct GetCatalogTool {
    catalog: Arc<Catalog>,
}

impl GetCatalogTool {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for GetCatalogTool {
    fn name(&self) -> &'static str {
        GET_CATALOG
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: GET_CATALOG.to_string(),
            description: "Get the full store catalog: every category with its items, prices \
                          and units. Use this when the customer wants to browse everything \
                          that is available rather than look for something specific."
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {},
                "additionalProperties": false
            }),
        }
    }

    async fn execute(&self, input: Value) -> Result<Value, ApplicationError> {
        let GetCatalogInput {} = decode_input(GET_CATALOG, input)?;
        serde_json::to_value(self.catalog.as_ref())
            .map_err(|error| ApplicationError::Serialization(error.to_string()))
    }
}

pub struct SearchProductsTool {
    catalog: Arc<Catalog>,
}

impl SearchProductsTool {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl Tool for SearchProductsTool {
    fn name(&self) -> &'static str {
        SEARCH_PRODUCTS
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: SEARCH_PRODUCTS.to_string(),
            description: "Search the store catalog by category or product name, for example \
                          'produce', 'milk' or 'tomato'. Returns the matching categories with \
                          their matching items, or a message when nothing matches. Call this \
                          before quoting a price or confirming that something is in stock."
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Category or product name to look for."
                    }
                },
                "required": ["query"],
                "additionalProperties": false
            }),
        }
    }

    async fn execute(&self, input: Value) -> Result<Value, ApplicationError> {
        let SearchProductsInput { query } = decode_input(SEARCH_PRODUCTS, input)?;

        let output = SearchProductsOutput::from_result(&query, self.catalog.search(&query));
        serde_json::to_value(output)
            .map_err(|error| ApplicationError::Serialization(error.to_string()))
    }
}

/// The registry handed to every session. Both tools read the same shared catalog.
pub fn shopping_tools(catalog: Arc<Catalog>) -> ToolRegistry {
    let mut registry = ToolRegistry::default();
    registry.register(GetCatalogTool::new(Arc::clone(&catalog)));
    registry.register(SearchProductsTool::new(catalog));
    registry
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;
    use serde_json::{json, Value};
    use siza_core::domain::product::{Category, Item};
    use siza_core::errors::{ApplicationError, InterfaceError};
    use siza_core::Catalog;

    use super::{shopping_tools, SearchProductsOutput, GET_CATALOG, SEARCH_PRODUCTS};
    use crate::tools::{ToolCall, ToolRegistry};

    fn registry() -> ToolRegistry {
        let item = |id: &str, name: &str, cents: i64, unit: &str| {
            Item::new(id, name, Decimal::new(cents, 2), unit)
        };
        let catalog = Catalog::new(vec![
            Category::new(
                "Produce",
                vec![item("p1", "Tomatoes", 249, "lb"), item("p2", "Kale", 199, "bunch")],
            ),
            Category::new("Dairy", vec![item("d1", "Whole Milk", 389, "gallon")]),
        ])
        .expect("fixture catalog");
        shopping_tools(Arc::new(catalog))
    }

    #[test]
    fn registry_exposes_both_tools_in_stable_order() {
        let registry = registry();
        assert_eq!(registry.names(), vec![GET_CATALOG, SEARCH_PRODUCTS]);

        let definitions = registry.definitions();
        assert_eq!(definitions[1].parameters["required"], json!(["query"]));
        assert_eq!(definitions[1].parameters["properties"]["query"]["type"], "string");
        assert!(definitions.iter().all(|definition| !definition.description.is_empty()));
    }

    #[tokio::test]
    async fn get_catalog_returns_everything() {
        let output = registry().execute(GET_CATALOG, json!({})).await.expect("get_catalog");

        let categories = output["categories"].as_array().expect("categories array");
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0]["items"][0]["price"], "2.49");
        assert_eq!(categories[1]["items"][0]["unit"], "gallon");
    }

    #[tokio::test]
    async fn search_products_filters_items() {
        let output = registry()
            .execute(SEARCH_PRODUCTS, json!({ "query": "MILK" }))
            .await
            .expect("search_products");

        let decoded: SearchProductsOutput = serde_json::from_value(output).expect("decode");
        let SearchProductsOutput::Matches { categories } = decoded else {
            panic!("expected matches");
        };
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Dairy");
        assert_eq!(categories[0].items[0].name, "Whole Milk");
    }

    #[tokio::test]
    async fn search_products_reports_not_found_as_message() {
        let output = registry()
            .execute(SEARCH_PRODUCTS, json!({ "query": "xyznotfound" }))
            .await
            .expect("not found is not a failure");

        assert_eq!(output, json!({ "message": "No products found matching 'xyznotfound'." }));
        assert!(!output.is_array());
    }

    #[tokio::test]
    async fn missing_query_is_a_contract_violation() {
        let error = registry().execute(SEARCH_PRODUCTS, json!({})).await.expect_err("must fail");
        assert!(matches!(
            error,
            ApplicationError::InvalidToolArguments { ref message, .. }
                if message.contains("missing field `query`")
        ));
    }

    #[tokio::test]
    async fn get_catalog_rejects_arguments_it_does_not_declare() {
        let error = registry()
            .call(ToolCall::new("call-5", GET_CATALOG, json!({ "category": "produce" })))
            .await
            .expect_err("undeclared argument must fail");

        assert!(matches!(
            error,
            InterfaceError::BadRequest { ref message, ref correlation_id }
                if correlation_id == "call-5" && message.contains("unknown field `category`")
        ));
    }

    #[tokio::test]
    async fn search_products_rejects_extra_arguments() {
        let error = registry()
            .execute(SEARCH_PRODUCTS, json!({ "query": "milk", "limit": 1 }))
            .await
            .expect_err("limit is not a declared parameter");

        assert!(matches!(
            error,
            ApplicationError::InvalidToolArguments { ref tool, ref message }
                if tool == SEARCH_PRODUCTS && message.contains("unknown field `limit`")
        ));
    }

    #[tokio::test]
    async fn non_string_query_fails_through_call_channel() {
        let error = registry()
            .call(ToolCall::new("call-42", SEARCH_PRODUCTS, json!({ "query": 12 })))
            .await
            .expect_err("numeric query must fail");

        assert!(matches!(
            error,
            InterfaceError::BadRequest { ref correlation_id, .. } if correlation_id == "call-42"
        ));
    }

    #[tokio::test]
    async fn repeated_calls_are_idempotent() {
        let registry = registry();
        let call = || {
            ToolCall::new("c", SEARCH_PRODUCTS, Value::String(r#"{"query":"kale"}"#.to_string()))
        };

        let first = registry.call(call()).await.expect("first call");
        let second = registry.call(call()).await.expect("second call");
        assert_eq!(first, second);
    }
}
