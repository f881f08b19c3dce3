//! Booking service: calendar selection, appointment registration and the
//! upcoming-appointments query.

use std::sync::{PoisonError, RwLock};

use salon_domain::appointment::{self, Appointment, AppointmentDraft};
use salon_domain::error::SalonError;
use salon_domain::id::AppointmentId;
use salon_domain::time::{Timestamp, now};

use crate::ports::AppointmentRepository;

/// Application service for appointments.
///
/// Holds the calendar's selected date: every appointment registered through
/// this service is stamped with whatever date is selected at submit time.
pub struct BookingService<R> {
    repo: R,
    selected: RwLock<Option<Timestamp>>,
}

impl<R: AppointmentRepository> BookingService<R> {
    /// Create a new service backed by the given repository.
    ///
    /// The calendar starts with the current instant selected.
    pub fn new(repo: R) -> Self {
        Self::with_selected(repo, Some(now()))
    }

    /// Create a new service with an explicit initial calendar selection.
    pub fn with_selected(repo: R, selected: Option<Timestamp>) -> Self {
        Self {
            repo,
            selected: RwLock::new(selected),
        }
    }

    /// Date new appointments will be stamped with, if any.
    pub fn selected_date(&self) -> Option<Timestamp> {
        *self.selected.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Change (or clear) the calendar selection.
    ///
    /// Existing appointments are not affected.
    pub fn select_date(&self, date: Option<Timestamp>) {
        *self.selected.write().unwrap_or_else(PoisonError::into_inner) = date;
        tracing::debug!(selected = ?date, "calendar selection changed");
    }

    /// Book an appointment on the currently selected date.
    ///
    /// # Errors
    ///
    /// Returns [`SalonError::Validation`] when no date is selected or the
    /// client name or service is blank, or a storage error propagated from
    /// the repository.
    pub async fn register_appointment(
        &self,
        draft: &AppointmentDraft,
    ) -> Result<Appointment, SalonError> {
        let appointment = draft.book(self.selected_date()).inspect_err(|err| {
            tracing::debug!(error = %err, "rejected appointment");
        })?;
        let appointment = self.repo.append(appointment).await?;
        tracing::info!(
            appointment_id = %appointment.id,
            client = %appointment.client_name,
            service = %appointment.service_name,
            date = %appointment.date,
            "appointment registered"
        );
        Ok(appointment)
    }

    /// Look up an appointment by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SalonError::NotFound`] when no appointment with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_appointment(&self, id: AppointmentId) -> Result<Appointment, SalonError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| id.not_found().into())
    }

    /// List every appointment in booking order, past ones included.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, SalonError> {
        self.repo.get_all().await
    }

    /// Appointments not before `at`, earliest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn upcoming(&self, at: Timestamp) -> Result<Vec<Appointment>, SalonError> {
        let all = self.repo.get_all().await?;
        Ok(appointment::upcoming(&all, at))
    }
}
