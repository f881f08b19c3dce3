//! # salon-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ServiceRepository`: append & list salon services
//!   - `AppointmentRepository`: append & list appointments
//! - Define **driving/inbound ports** as use-case structs:
//!   - `CatalogService`: register services from form drafts, list them
//!   - `BookingService`: calendar selection, appointment registration,
//!     the upcoming-appointments query
//! - Orchestrate domain objects without knowing *how* records are stored
//!
//! ## Dependency rule
//! Depends on `salon-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
