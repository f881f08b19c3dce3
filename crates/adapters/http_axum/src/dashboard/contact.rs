//! Dashboard page for the salon's contact details.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use salon_domain::contact::{ContactInfo, SALON_CONTACT};

use super::{Tab, render};

/// Contact tab template.
#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    refresh_seconds: u32,
    active_tab: &'static str,
    contact: ContactInfo,
}

impl IntoResponse for ContactTemplate {
    fn into_response(self) -> Response {
        render(StatusCode::OK, &self)
    }
}

/// `GET /contact`: static contact block.
pub async fn show() -> ContactTemplate {
    ContactTemplate {
        refresh_seconds: 0,
        active_tab: Tab::Contact.as_str(),
        contact: SALON_CONTACT,
    }
}
