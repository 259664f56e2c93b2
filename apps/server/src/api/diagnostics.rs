use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::{main_lib::AppState, models::DiagnosticsResponse};

const MAX_LISTED_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

fn presence(set: bool) -> String {
    let label = if set { "✅ Set" } else { "❌ Not Set" };
    label.to_string()
}

fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}

/// Reports document store reachability and configuration. Never fails.
#[utoipa::path(get, path = "/test", responses((status = 200, body = DiagnosticsResponse)))]
pub(crate) async fn test_database(
    State(state): State<Arc<AppState>>,
) -> Json<DiagnosticsResponse> {
    let mut response = DiagnosticsResponse {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: presence(state.database_url_set),
        database_name: presence(state.database_name_set),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    match &state.document_store {
        Some(store) => {
            response.database = "✅ Available".to_string();
            match store.list_collections().await {
                Ok(mut collections) => {
                    collections.truncate(MAX_LISTED_COLLECTIONS);
                    response.collections = collections;
                    response.database = "✅ Connected & Working".to_string();
                }
                Err(e) => {
                    tracing::warn!("Diagnostics could not list collections: {}", e);
                    response.database =
                        format!("⚠️  Connected but Error: {}", truncate(&e.to_string()));
                }
            }
        }
        None => {
            response.database = "⚠️  Available but not initialized".to_string();
        }
    }

    Json(response)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/test", get(test_database))
}
