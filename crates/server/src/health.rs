use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::Serialize;
use siza_agent::shopping::{GET_CATALOG, SEARCH_PRODUCTS};

use crate::http::AppState;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub catalog: HealthCheck,
    pub tools: HealthCheck,
    pub checked_at: String,
}

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let catalog = catalog_check(&state);
    let tools = tools_check(&state);
    let ready = catalog.status == "ready" && tools.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: format!("agent `{}` runtime initialized", state.agent.name()),
        },
        catalog,
        tools,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

fn catalog_check(state: &AppState) -> HealthCheck {
    let categories = state.catalog.category_count();
    let items = state.catalog.item_count();
    if items == 0 {
        return HealthCheck { status: "degraded", detail: "catalog has no items".to_string() };
    }
    HealthCheck { status: "ready", detail: format!("{categories} categories, {items} items") }
}

fn tools_check(state: &AppState) -> HealthCheck {
    let tools = state.agent.tools();
    let missing: Vec<&str> =
        [GET_CATALOG, SEARCH_PRODUCTS].into_iter().filter(|name| !tools.contains(name)).collect();

    if missing.is_empty() {
        HealthCheck { status: "ready", detail: format!("{} tools registered", tools.len()) }
    } else {
        HealthCheck { status: "degraded", detail: format!("missing tools: {}", missing.join(", ")) }
    }
}
