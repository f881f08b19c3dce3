//! Server-side rendered HTML dashboard (no JavaScript).
//!
//! Pages:
//!   - `GET  /`            : redirects to the default tab (services)
//!   - `GET  /services`    : add-service form + service list
//!   - `POST /services`    : register a service (PRG)
//!   - `GET  /appointments`: calendar, add-appointment form, upcoming list
//!   - `POST /appointments`: register an appointment (PRG)
//!   - `POST /calendar`    : change the calendar selection (PRG)
//!   - `GET  /contact`     : static contact block

#[allow(clippy::missing_errors_doc)]
pub mod appointments;
pub mod contact;
#[allow(clippy::missing_errors_doc)]
pub mod services;

use askama::Template;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};

use salon_app::ports::{AppointmentRepository, ServiceRepository};
use salon_domain::error::SalonError;

use crate::state::AppState;

/// Tab currently shown in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Services,
    Appointments,
    Contact,
}

impl Tab {
    /// Stable name used by templates to highlight the active tab.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Services => "services",
            Self::Appointments => "appointments",
            Self::Contact => "contact",
        }
    }
}

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<SR, AR>() -> Router<AppState<SR, AR>>
where
    SR: ServiceRepository + Send + Sync + 'static,
    AR: AppointmentRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route(
            "/services",
            get(services::list::<SR, AR>).post(services::create::<SR, AR>),
        )
        .route(
            "/appointments",
            get(appointments::list::<SR, AR>).post(appointments::create::<SR, AR>),
        )
        .route("/calendar", post(appointments::select_date::<SR, AR>))
        .route("/contact", get(contact::show))
}

/// `GET /`: the Services tab is the default view.
async fn index() -> Redirect {
    Redirect::to("/services")
}

/// Render a template into an HTML response with the given status.
pub(crate) fn render<T: Template>(status: StatusCode, template: &T) -> Response {
    match template.render() {
        Ok(body) => (status, Html(body)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "template render error");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Error page template.
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    refresh_seconds: u32,
    active_tab: &'static str,
    message: String,
}

/// Failure of a dashboard handler, rendered as an HTML error page.
pub struct DashboardError(SalonError);

impl From<SalonError> for DashboardError {
    fn from(err: SalonError) -> Self {
        Self(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, message) = crate::error::status_and_message(&self.0);
        render(
            status,
            &ErrorTemplate {
                refresh_seconds: 0,
                active_tab: "",
                message,
            },
        )
    }
}
