//! # salon-domain
//!
//! Pure domain model for the salon admin dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Services** (treatments the salon offers, with duration and price)
//! - Define **Appointments** (a client booked for a service at a date)
//! - Define **Prices** (currency amounts stored as cents)
//! - Compute the **upcoming** view (appointments not before an instant, earliest first)
//! - Lay out the **calendar** month grid used by the date picker
//! - Contain all invariant enforcement and form-draft validation
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod appointment;
pub mod calendar;
pub mod contact;
pub mod price;
pub mod service;
