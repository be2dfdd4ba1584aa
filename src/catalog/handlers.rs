// HTTP handlers for catalog endpoints

use axum::{extract::State, Json};

use crate::catalog::MenuItem;
use crate::AppState;

/// Handler for GET /api/catalog (also mounted at /api/menu)
/// Returns the full menu in declaration order
#[utoipa::path(
    get,
    path = "/api/catalog",
    responses(
        (status = 200, description = "All menu items", body = Vec<MenuItem>)
    ),
    tag = "catalog"
)]
pub async fn list_menu_items_handler(State(state): State<AppState>) -> Json<Vec<MenuItem>> {
    let items = state.catalog.list_menu_items().to_vec();
    tracing::debug!("Serving {} menu items", items.len());
    Json(items)
}
