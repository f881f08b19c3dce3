//! JSON REST handlers for salon services.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use salon_app::ports::{AppointmentRepository, ServiceRepository};
use salon_domain::id::ServiceId;
use salon_domain::service::{Service, ServiceDraft};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Service>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/services`
pub async fn list<SR, AR>(
    State(state): State<AppState<SR, AR>>,
) -> Result<Json<Vec<Service>>, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    AR: AppointmentRepository + Send + Sync + 'static,
{
    let services = state.catalog_service.list_services().await?;
    Ok(Json(services))
}

/// `GET /api/services/:id`
pub async fn get<SR, AR>(
    State(state): State<AppState<SR, AR>>,
    Path(id): Path<String>,
) -> Result<Json<Service>, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    AR: AppointmentRepository + Send + Sync + 'static,
{
    let service_id: ServiceId = id.parse()?;
    let service = state.catalog_service.get_service(service_id).await?;
    Ok(Json(service))
}

/// `POST /api/services`: body is the raw form draft (all strings).
pub async fn create<SR, AR>(
    State(state): State<AppState<SR, AR>>,
    Json(draft): Json<ServiceDraft>,
) -> Result<CreateResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    AR: AppointmentRepository + Send + Sync + 'static,
{
    let created = state.catalog_service.register_service(&draft).await?;
    Ok(CreateResponse::Created(Json(created)))
}
