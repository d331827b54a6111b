use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::debug;

use fieldwork_core::{
    InspectorId, Job, JobFilter, JobId, JobPatch, JobStatus, NewJob,
};

use crate::{
    AppState,
    errors::{AppError, AppResult},
    requests::{
        JobAssignRequest, JobCompleteRequest, JobCreateRequest, JobUpdateRequest,
    },
    validation::JsonBody,
    views::JobView,
};

/// Resolves the job's weak inspector reference at read time and builds the
/// wire shape.
async fn job_view(state: &AppState, job: &Job) -> AppResult<JobView> {
    let inspector = match job.inspector_id {
        Some(id) => state.store.find_inspector(id).await?,
        None => None,
    };
    Ok(JobView::compose(job, inspector.as_ref()))
}

async fn find_job_or_404(state: &AppState, id: JobId) -> AppResult<Job> {
    state
        .store
        .find_job(id)
        .await?
        .ok_or_else(|| AppError::not_found("Job not found"))
}

/// Create a job in the available state.
pub async fn create_job_handler(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<JobView>)> {
    let request = JobCreateRequest::from_value(&body).inspect_err(|err| {
        debug!(%err, "job create rejected");
    })?;

    let job = state
        .store
        .create_job(NewJob {
            title: request.title,
            description: request.description,
        })
        .await?;

    let view = job_view(&state, &job).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

#[derive(Debug, Deserialize)]
pub struct JobListQuery {
    status: Option<String>,
    inspector: Option<String>,
}

/// List jobs, optionally filtered by exact status and/or inspector id.
/// Filters combine with AND; empty parameter values count as absent.
pub async fn list_jobs_handler(
    State(state): State<AppState>,
    Query(query): Query<JobListQuery>,
) -> AppResult<Json<Vec<JobView>>> {
    let mut filter = JobFilter::default();

    if let Some(raw) = query.status.as_deref().filter(|s| !s.is_empty()) {
        filter.status = Some(
            JobStatus::from_str_exact(raw)
                .ok_or_else(|| AppError::bad_request("Invalid status value"))?,
        );
    }

    if let Some(raw) = query.inspector.as_deref().filter(|s| !s.is_empty()) {
        let id: i64 = raw
            .parse()
            .map_err(|_| AppError::bad_request("Invalid inspector value"))?;
        filter.inspector = Some(InspectorId(id));
    }

    let jobs = state.store.list_jobs(filter).await?;
    let mut views = Vec::with_capacity(jobs.len());
    for job in &jobs {
        views.push(job_view(&state, job).await?);
    }
    Ok(Json(views))
}

pub async fn get_job_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<JobView>> {
    let job = find_job_or_404(&state, JobId(id)).await?;
    let view = job_view(&state, &job).await?;
    Ok(Json(view))
}

/// Full-state update. Title and description are overwritable in any state;
/// a supplied status is force-set without going through the guarded
/// transitions (administrative override, part of the established contract).
pub async fn update_job_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<JobView>> {
    let id = JobId(id);
    find_job_or_404(&state, id).await?;

    let request = JobUpdateRequest::from_value(&body)?;

    let job = state
        .store
        .update_job(
            id,
            JobPatch {
                title: request.title,
                description: request.description,
                status: request.status,
            },
        )
        .await?;

    let view = job_view(&state, &job).await?;
    Ok(Json(view))
}

pub async fn delete_job_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.store.delete_job(JobId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Assign an available job to an inspector with a scheduled time.
///
/// The early status check gives the common case its 409 before the body is
/// validated; the store repeats the guard under its write lock, so a racing
/// assign that slips past the pre-check still loses with a conflict.
pub async fn assign_job_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<JobView>> {
    let id = JobId(id);
    let job = find_job_or_404(&state, id).await?;
    if job.status != JobStatus::Available {
        return Err(AppError::conflict("Job is not available"));
    }

    let request = JobAssignRequest::from_value(&body)?;

    state
        .store
        .find_inspector(request.inspector_id)
        .await?
        .ok_or_else(|| AppError::not_found("Inspector not found"))?;

    let job = state
        .store
        .assign_job(id, request.inspector_id, request.scheduled_at)
        .await?;

    let view = job_view(&state, &job).await?;
    Ok(Json(view))
}

/// Complete an assigned job with an assessment note.
pub async fn complete_job_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<JobView>> {
    let id = JobId(id);
    let job = find_job_or_404(&state, id).await?;
    if job.status != JobStatus::Assigned {
        return Err(AppError::conflict("Only assigned jobs can be completed"));
    }

    let request = JobCompleteRequest::from_value(&body)?;

    let job = state.store.complete_job(id, request.assessment).await?;

    let view = job_view(&state, &job).await?;
    Ok(Json(view))
}
