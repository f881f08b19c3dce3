//! # salon-adapter-storage-memory
//!
//! In-memory persistence adapter.
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `salon-app::ports::storage`
//! - Keep records in insertion order for the lifetime of the process
//!
//! Nothing survives a restart. Every repository instance owns its own
//! list, so two application states never see each other's records.
//!
//! ## Dependency rule
//! Depends on `salon-app` (for port traits) and `salon-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod appointment_repo;
mod log;
mod service_repo;

pub use appointment_repo::MemoryAppointmentRepository;
pub use service_repo::MemoryServiceRepository;
