use std::sync::Arc;

use axum::{routing::get, Json, Router};

use crate::{main_lib::AppState, models::MessageResponse};

#[utoipa::path(get, path = "/", responses((status = 200, body = MessageResponse)))]
pub(crate) async fn read_root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "The Fone Buyers API is running".to_string(),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(read_root))
}
