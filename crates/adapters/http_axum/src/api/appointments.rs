//! JSON REST handlers for appointments.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use salon_app::ports::{AppointmentRepository, ServiceRepository};
use salon_domain::appointment::{Appointment, AppointmentDraft};
use salon_domain::id::AppointmentId;
use salon_domain::time::{Timestamp, now};

use crate::error::ApiError;
use crate::state::AppState;

/// Query string of the upcoming endpoint.
#[derive(Deserialize)]
pub struct UpcomingQuery {
    /// Evaluation instant (RFC 3339); defaults to the time of the request.
    pub at: Option<Timestamp>,
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Appointment>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/appointments`: every appointment in booking order.
pub async fn list<SR, AR>(
    State(state): State<AppState<SR, AR>>,
) -> Result<Json<Vec<Appointment>>, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    AR: AppointmentRepository + Send + Sync + 'static,
{
    let appointments = state.booking_service.list_appointments().await?;
    Ok(Json(appointments))
}

/// `GET /api/appointments/upcoming?at=…`
pub async fn upcoming<SR, AR>(
    State(state): State<AppState<SR, AR>>,
    Query(query): Query<UpcomingQuery>,
) -> Result<Json<Vec<Appointment>>, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    AR: AppointmentRepository + Send + Sync + 'static,
{
    let at = query.at.unwrap_or_else(now);
    let appointments = state.booking_service.upcoming(at).await?;
    Ok(Json(appointments))
}

/// `GET /api/appointments/:id`
pub async fn get<SR, AR>(
    State(state): State<AppState<SR, AR>>,
    Path(id): Path<String>,
) -> Result<Json<Appointment>, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    AR: AppointmentRepository + Send + Sync + 'static,
{
    let appointment_id: AppointmentId = id.parse()?;
    let appointment = state.booking_service.get_appointment(appointment_id).await?;
    Ok(Json(appointment))
}

/// `POST /api/appointments`: booked on the calendar's current selection.
pub async fn create<SR, AR>(
    State(state): State<AppState<SR, AR>>,
    Json(draft): Json<AppointmentDraft>,
) -> Result<CreateResponse, ApiError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    AR: AppointmentRepository + Send + Sync + 'static,
{
    let created = state.booking_service.register_appointment(&draft).await?;
    Ok(CreateResponse::Created(Json(created)))
}
