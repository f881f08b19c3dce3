//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod appointments;
#[allow(clippy::missing_errors_doc)]
pub mod calendar;
#[allow(clippy::missing_errors_doc)]
pub mod services;

use axum::Router;
use axum::routing::get;

use salon_app::ports::{AppointmentRepository, ServiceRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<SR, AR>() -> Router<AppState<SR, AR>>
where
    SR: ServiceRepository + Send + Sync + 'static,
    AR: AppointmentRepository + Send + Sync + 'static,
{
    Router::new()
        // Services
        .route(
            "/services",
            get(services::list::<SR, AR>).post(services::create::<SR, AR>),
        )
        .route("/services/{id}", get(services::get::<SR, AR>))
        // Appointments
        .route(
            "/appointments",
            get(appointments::list::<SR, AR>).post(appointments::create::<SR, AR>),
        )
        .route(
            "/appointments/upcoming",
            get(appointments::upcoming::<SR, AR>),
        )
        .route("/appointments/{id}", get(appointments::get::<SR, AR>))
        // Calendar
        .route(
            "/calendar",
            get(calendar::get::<SR, AR>).put(calendar::select::<SR, AR>),
        )
}
