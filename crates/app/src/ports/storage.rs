//! Storage port: repository traits for salon records.
//!
//! Records are append-only: services and appointments are never edited or
//! deleted once stored. `get_all` returns records in the order they were
//! appended.

use std::future::Future;

use salon_domain::appointment::Appointment;
use salon_domain::error::SalonError;
use salon_domain::id::{AppointmentId, ServiceId};
use salon_domain::service::Service;

/// Repository for the salon's service catalog.
pub trait ServiceRepository {
    /// Append a service after all existing ones.
    fn append(&self, service: Service) -> impl Future<Output = Result<Service, SalonError>> + Send;

    /// Get a service by its unique identifier.
    fn get_by_id(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, SalonError>> + Send;

    /// Get all services in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Service>, SalonError>> + Send;
}

/// Repository for booked appointments.
pub trait AppointmentRepository {
    /// Append an appointment after all existing ones.
    fn append(
        &self,
        appointment: Appointment,
    ) -> impl Future<Output = Result<Appointment, SalonError>> + Send;

    /// Get an appointment by its unique identifier.
    fn get_by_id(
        &self,
        id: AppointmentId,
    ) -> impl Future<Output = Result<Option<Appointment>, SalonError>> + Send;

    /// Get all appointments in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Appointment>, SalonError>> + Send;
}
