//! JSON REST handlers for the calendar selection.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use salon_app::ports::{AppointmentRepository, ServiceRepository};
use salon_domain::time::Timestamp;

use crate::state::AppState;

/// Current calendar selection, `null` when cleared.
#[derive(Debug, Serialize, Deserialize)]
pub struct CalendarSelection {
    pub selected: Option<Timestamp>,
}

/// `GET /api/calendar`
pub async fn get<SR, AR>(State(state): State<AppState<SR, AR>>) -> Json<CalendarSelection>
where
    SR: ServiceRepository + Send + Sync + 'static,
    AR: AppointmentRepository + Send + Sync + 'static,
{
    Json(CalendarSelection {
        selected: state.booking_service.selected_date(),
    })
}

/// `PUT /api/calendar`
pub async fn select<SR, AR>(
    State(state): State<AppState<SR, AR>>,
    Json(body): Json<CalendarSelection>,
) -> Json<CalendarSelection>
where
    SR: ServiceRepository + Send + Sync + 'static,
    AR: AppointmentRepository + Send + Sync + 'static,
{
    state.booking_service.select_date(body.selected);
    Json(CalendarSelection {
        selected: state.booking_service.selected_date(),
    })
}
