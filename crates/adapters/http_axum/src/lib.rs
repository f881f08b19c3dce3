//! # salon-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **server-side-rendered HTML dashboard** with three tabs
//!   (Services, Appointments, Contact) that works with **zero JavaScript**:
//!   pure HTML forms posting back to the server
//! - Serve a small **JSON API** (`/api/services`, `/api/appointments`,
//!   `/api/calendar`) for programmatic access
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses (JSON or HTML)
//!
//! ## No-JS dashboard approach
//! - Every page is rendered server-side as complete HTML with askama.
//! - Accepted form submissions redirect back to the page (PRG pattern), which
//!   leaves the form empty.
//! - Rejected submissions re-render the page with the submitted values and
//!   the reason, answered with `422 Unprocessable Entity`.
//! - The appointments page reloads itself with
//!   `<meta http-equiv="refresh">` so the upcoming list follows the clock.
//!
//! ## Dependency rule
//! Depends on `salon-app` (for port traits and services) and `salon-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
