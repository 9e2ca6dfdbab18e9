//! Panel catalog routes.

use axum::Json;
use axum::extract::Path;
use axum::http::StatusCode;

use crate::error::ApiError;
use crate::panels::{self, Panel, PanelKind};

/// `GET /api/panels` — every panel widget.
pub async fn list_panels() -> Json<Vec<Panel>> {
    Json(panels::catalog())
}

/// `GET /api/panels/:kind` — one panel widget by kind.
pub async fn get_panel(Path(kind): Path<String>) -> Result<Json<Panel>, ApiError> {
    let kind = kind
        .parse::<PanelKind>()
        .map_err(|e| ApiError::from_error(StatusCode::NOT_FOUND, &e))?;
    Ok(Json(Panel::for_kind(kind)))
}
