//! Dashboard page for the service catalog.

use askama::Template;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};

use salon_app::ports::{AppointmentRepository, ServiceRepository};
use salon_domain::error::SalonError;
use salon_domain::service::{Service, ServiceDraft};

use super::{DashboardError, Tab, render};
use crate::state::AppState;

/// One entry of the "Service List" card.
pub struct ServiceRow {
    name: String,
    duration: u32,
    cost: String,
}

impl From<Service> for ServiceRow {
    fn from(service: Service) -> Self {
        Self {
            cost: service.cost.with_currency(),
            name: service.name,
            duration: service.duration,
        }
    }
}

/// Services tab template.
#[derive(Template)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    refresh_seconds: u32,
    active_tab: &'static str,
    draft: ServiceDraft,
    error: Option<String>,
    services: Vec<ServiceRow>,
}

impl IntoResponse for ServicesTemplate {
    fn into_response(self) -> Response {
        let status = if self.error.is_some() {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            StatusCode::OK
        };
        render(status, &self)
    }
}

/// Response from the add-service form handler.
pub enum CreateServiceResponse {
    /// Accepted: back to an empty form (PRG).
    Redirect(Redirect),
    /// Rejected: the form again, with the submitted values and the reason.
    Rejected(ServicesTemplate),
}

impl IntoResponse for CreateServiceResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(redirect) => redirect.into_response(),
            Self::Rejected(page) => page.into_response(),
        }
    }
}

async fn page<SR, AR>(
    state: &AppState<SR, AR>,
    draft: ServiceDraft,
    error: Option<String>,
) -> Result<ServicesTemplate, DashboardError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    AR: AppointmentRepository + Send + Sync + 'static,
{
    let services = state.catalog_service.list_services().await?;
    Ok(ServicesTemplate {
        refresh_seconds: 0,
        active_tab: Tab::Services.as_str(),
        draft,
        error,
        services: services.into_iter().map(ServiceRow::from).collect(),
    })
}

/// `GET /services`: add-service form and service list.
pub async fn list<SR, AR>(
    State(state): State<AppState<SR, AR>>,
) -> Result<ServicesTemplate, DashboardError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    AR: AppointmentRepository + Send + Sync + 'static,
{
    page(&state, ServiceDraft::default(), None).await
}

/// `POST /services`: register a service from the form draft.
pub async fn create<SR, AR>(
    State(state): State<AppState<SR, AR>>,
    Form(draft): Form<ServiceDraft>,
) -> Result<CreateServiceResponse, DashboardError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    AR: AppointmentRepository + Send + Sync + 'static,
{
    match state.catalog_service.register_service(&draft).await {
        Ok(_) => Ok(CreateServiceResponse::Redirect(Redirect::to("/services"))),
        Err(SalonError::Validation(err)) => {
            let page = page(&state, draft, Some(err.to_string())).await?;
            Ok(CreateServiceResponse::Rejected(page))
        }
        Err(err) => Err(err.into()),
    }
}
