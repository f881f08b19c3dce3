//! Dashboard page for the calendar, appointment booking and the upcoming list.

use askama::Template;
use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::Deserialize;

use salon_app::ports::{AppointmentRepository, ServiceRepository};
use salon_domain::appointment::{Appointment, AppointmentDraft};
use salon_domain::calendar::MonthGrid;
use salon_domain::error::{SalonError, ValidationError};
use salon_domain::service::Service;
use salon_domain::time::{self, Timestamp};

use super::{DashboardError, Tab, render};
use crate::state::AppState;

const MONTH_FORMAT: &str = "%Y-%m";
const DAY_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// A day button in the calendar grid.
pub struct DayCell {
    day: u32,
    value: String,
    selected: bool,
    today: bool,
}

/// Month grid plus navigation and selection details.
pub struct CalendarView {
    title: String,
    previous_month: String,
    next_month: String,
    weeks: Vec<Vec<Option<DayCell>>>,
    /// `YYYY-MM-DD` of the selection; posted when only the time changes.
    selected_day: String,
    selected_label: String,
    selected_time: String,
}

impl CalendarView {
    fn build(month: NaiveDate, selected: Option<Timestamp>, today: NaiveDate) -> Self {
        let grid = MonthGrid::containing(month);
        let selected_day = selected.map(|ts| ts.date_naive());
        let weeks = grid
            .weeks()
            .iter()
            .map(|week| {
                week.iter()
                    .map(|cell| {
                        cell.map(|day| DayCell {
                            day: day.day(),
                            value: day.format(DAY_FORMAT).to_string(),
                            selected: selected_day == Some(day),
                            today: day == today,
                        })
                    })
                    .collect()
            })
            .collect();

        let month_link = |day: Option<NaiveDate>| {
            day.map(|d| d.format(MONTH_FORMAT).to_string())
                .unwrap_or_default()
        };

        Self {
            title: grid.title(),
            previous_month: month_link(grid.previous_month()),
            next_month: month_link(grid.next_month()),
            weeks,
            selected_day: selected_day
                .map(|day| day.format(DAY_FORMAT).to_string())
                .unwrap_or_default(),
            selected_label: selected.map_or_else(
                || "No date selected".to_string(),
                |ts| format!("Selected: {}", format_date(ts)),
            ),
            selected_time: selected
                .map(|ts| ts.format(TIME_FORMAT).to_string())
                .unwrap_or_default(),
        }
    }
}

/// An entry of the service picker.
pub struct ServiceOption {
    name: String,
    label: String,
    selected: bool,
}

/// One entry of the "Upcoming Appointments" card.
pub struct AppointmentRow {
    client_name: String,
    service_name: String,
    date: String,
}

impl From<Appointment> for AppointmentRow {
    fn from(apt: Appointment) -> Self {
        Self {
            date: format_date(apt.date),
            client_name: apt.client_name,
            service_name: apt.service_name,
        }
    }
}

fn format_date(ts: Timestamp) -> String {
    ts.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Appointments tab template.
#[derive(Template)]
#[template(path = "appointments.html")]
pub struct AppointmentsTemplate {
    refresh_seconds: u32,
    active_tab: &'static str,
    calendar: CalendarView,
    services: Vec<ServiceOption>,
    draft: AppointmentDraft,
    error: Option<String>,
    upcoming: Vec<AppointmentRow>,
}

impl IntoResponse for AppointmentsTemplate {
    fn into_response(self) -> Response {
        let status = if self.error.is_some() {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            StatusCode::OK
        };
        render(status, &self)
    }
}

/// Response from the add-appointment and calendar form handlers.
pub enum SubmitResponse {
    /// Accepted: back to the appointments tab (PRG).
    Redirect(Redirect),
    /// Rejected: the page again, with the submitted values and the reason.
    Rejected(AppointmentsTemplate),
}

impl IntoResponse for SubmitResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(redirect) => redirect.into_response(),
            Self::Rejected(page) => page.into_response(),
        }
    }
}

/// Query string for browsing the calendar.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MonthQuery {
    /// Month to show, `YYYY-MM`; defaults to the month of the selection.
    pub month: Option<String>,
}

/// Form data for the calendar's day buttons.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CalendarForm {
    /// Picked day, `YYYY-MM-DD`; empty clears the selection.
    pub date: String,
    /// Optional time of day, `HH:MM`.
    pub time: String,
}

fn parse_month(month: Option<&str>) -> Option<NaiveDate> {
    let month = month?.trim();
    NaiveDate::parse_from_str(&format!("{month}-01"), DAY_FORMAT).ok()
}

fn service_options(services: Vec<Service>, chosen: &str) -> Vec<ServiceOption> {
    services
        .into_iter()
        .map(|service| ServiceOption {
            label: service.option_label(),
            selected: service.name == chosen,
            name: service.name,
        })
        .collect()
}

async fn page<SR, AR>(
    state: &AppState<SR, AR>,
    month: Option<NaiveDate>,
    draft: AppointmentDraft,
    error: Option<String>,
) -> Result<AppointmentsTemplate, DashboardError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    AR: AppointmentRepository + Send + Sync + 'static,
{
    let now = time::now();
    let selected = state.booking_service.selected_date();
    let month = month
        .or_else(|| selected.map(|ts| ts.date_naive()))
        .unwrap_or_else(|| now.date_naive());

    let services = state.catalog_service.list_services().await?;
    let upcoming = state.booking_service.upcoming(now).await?;

    Ok(AppointmentsTemplate {
        refresh_seconds: state.settings.refresh_seconds,
        active_tab: Tab::Appointments.as_str(),
        calendar: CalendarView::build(month, selected, now.date_naive()),
        services: service_options(services, draft.service_name.trim()),
        draft,
        error,
        upcoming: upcoming.into_iter().map(AppointmentRow::from).collect(),
    })
}

/// `GET /appointments`: calendar, booking form and upcoming appointments.
pub async fn list<SR, AR>(
    State(state): State<AppState<SR, AR>>,
    Query(query): Query<MonthQuery>,
) -> Result<AppointmentsTemplate, DashboardError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    AR: AppointmentRepository + Send + Sync + 'static,
{
    let month = parse_month(query.month.as_deref());
    page(&state, month, AppointmentDraft::default(), None).await
}

/// `POST /appointments`: book on the currently selected date.
pub async fn create<SR, AR>(
    State(state): State<AppState<SR, AR>>,
    Form(draft): Form<AppointmentDraft>,
) -> Result<SubmitResponse, DashboardError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    AR: AppointmentRepository + Send + Sync + 'static,
{
    match state.booking_service.register_appointment(&draft).await {
        Ok(_) => Ok(SubmitResponse::Redirect(Redirect::to("/appointments"))),
        Err(SalonError::Validation(err)) => {
            let page = page(&state, None, draft, Some(err.to_string())).await?;
            Ok(SubmitResponse::Rejected(page))
        }
        Err(err) => Err(err.into()),
    }
}

fn parse_selection(form: &CalendarForm) -> Result<Option<Timestamp>, ValidationError> {
    let date = form.date.trim();
    if date.is_empty() {
        return Ok(None);
    }
    let day = NaiveDate::parse_from_str(date, DAY_FORMAT).map_err(|_| {
        ValidationError::InvalidDate {
            value: date.to_string(),
        }
    })?;

    let time = form.time.trim();
    let time = if time.is_empty() {
        None
    } else {
        let parsed = NaiveTime::parse_from_str(time, TIME_FORMAT).map_err(|_| {
            ValidationError::InvalidDate {
                value: format!("{date} {time}"),
            }
        })?;
        Some(parsed)
    };

    Ok(Some(time::on_day(day, time)))
}

/// `POST /calendar`: select a day (and optionally a time), or clear.
pub async fn select_date<SR, AR>(
    State(state): State<AppState<SR, AR>>,
    Form(form): Form<CalendarForm>,
) -> Result<SubmitResponse, DashboardError>
where
    SR: ServiceRepository + Send + Sync + 'static,
    AR: AppointmentRepository + Send + Sync + 'static,
{
    match parse_selection(&form) {
        Ok(selected) => {
            state.booking_service.select_date(selected);
            let location = match selected {
                Some(ts) => format!("/appointments?month={}", ts.format(MONTH_FORMAT)),
                None => "/appointments".to_string(),
            };
            Ok(SubmitResponse::Redirect(Redirect::to(&location)))
        }
        Err(err) => {
            let page = page(
                &state,
                None,
                AppointmentDraft::default(),
                Some(err.to_string()),
            )
            .await?;
            Ok(SubmitResponse::Rejected(page))
        }
    }
}
