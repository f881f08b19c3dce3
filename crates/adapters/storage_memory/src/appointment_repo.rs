//! In-memory implementation of [`AppointmentRepository`].

use std::future::Future;

use salon_app::ports::AppointmentRepository;
use salon_domain::appointment::Appointment;
use salon_domain::error::SalonError;
use salon_domain::id::AppointmentId;

use crate::log::AppendLog;

/// Process-local appointment book.
pub struct MemoryAppointmentRepository {
    log: AppendLog<Appointment>,
}

impl Default for MemoryAppointmentRepository {
    fn default() -> Self {
        Self {
            log: AppendLog::new("appointment"),
        }
    }
}

impl MemoryAppointmentRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl AppointmentRepository for MemoryAppointmentRepository {
    fn append(
        &self,
        appointment: Appointment,
    ) -> impl Future<Output = Result<Appointment, SalonError>> + Send {
        let result = self.log.push(appointment.clone()).map(|()| appointment);
        async move { result.map_err(SalonError::from) }
    }

    fn get_by_id(
        &self,
        id: AppointmentId,
    ) -> impl Future<Output = Result<Option<Appointment>, SalonError>> + Send {
        let result = self.log.find(|apt| apt.id == id);
        async move { result.map_err(SalonError::from) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Appointment>, SalonError>> + Send {
        let result = self.log.snapshot();
        async move { result.map_err(SalonError::from) }
    }
}
