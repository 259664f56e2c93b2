use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::{main_lib::AppState, models::Device};

/// Lists tradeable devices. Storage problems are absorbed by the catalog,
/// which answers with its fallback list instead.
#[utoipa::path(get, path = "/api/devices", responses((status = 200, body = [Device])))]
pub(crate) async fn list_devices(State(state): State<Arc<AppState>>) -> Json<Vec<Device>> {
    let devices = state.device_catalog_service.list_devices().await;
    Json(devices.into_iter().map(Device::from).collect())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/devices", get(list_devices))
}
