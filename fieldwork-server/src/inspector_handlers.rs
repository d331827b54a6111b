use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::debug;

use fieldwork_core::{InspectorId, InspectorPatch, NewInspector};

use crate::{
    AppState,
    errors::{AppError, AppResult},
    requests::{InspectorCreateRequest, InspectorUpdateRequest},
    validation::JsonBody,
    views::InspectorView,
};

/// Register a new inspector.
pub async fn create_inspector_handler(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<InspectorView>)> {
    let request = InspectorCreateRequest::from_value(&body).inspect_err(|err| {
        debug!(%err, "inspector create rejected");
    })?;

    let inspector = state
        .store
        .create_inspector(NewInspector {
            name: request.name,
            email: request.email,
            timezone: request.timezone,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(InspectorView::detail(&inspector))))
}

/// List all inspectors (summary form).
pub async fn list_inspectors_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<InspectorView>>> {
    let inspectors = state.store.list_inspectors().await?;
    Ok(Json(
        inspectors.iter().map(InspectorView::summary).collect(),
    ))
}

/// Partial update. Responds 201 on success, matching the established
/// contract for this endpoint.
pub async fn update_inspector_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<InspectorView>)> {
    let id = InspectorId(id);
    state
        .store
        .find_inspector(id)
        .await?
        .ok_or_else(|| AppError::not_found("Inspector not found"))?;

    let request = InspectorUpdateRequest::from_value(&body)?;

    let inspector = state
        .store
        .update_inspector(
            id,
            InspectorPatch {
                name: request.name,
                email: request.email,
                timezone: request.timezone,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(InspectorView::detail(&inspector))))
}

/// Hard delete. Jobs referencing the inspector keep their status with the
/// reference nullified by the store.
pub async fn delete_inspector_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.store.delete_inspector(InspectorId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
