//! Appointment: a client booked for a service at a date.
//!
//! The service is referenced by a copy of its name taken at booking time,
//! not by id: the booking keeps its label even if the catalog changes.

use serde::{Deserialize, Serialize};

use crate::error::{SalonError, ValidationError};
use crate::id::AppointmentId;
use crate::time::Timestamp;

/// A booking. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub date: Timestamp,
    pub client_name: String,
    pub service_name: String,
}

/// Fields of the "Add New Appointment" form, as read at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppointmentDraft {
    pub client_name: String,
    pub service_name: String,
}

impl AppointmentDraft {
    /// Stamp the draft with the currently selected calendar date.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::NoDateSelected`] when `selected` is `None`
    /// - [`ValidationError::MissingField`] when the client name or the
    ///   service is blank
    pub fn book(&self, selected: Option<Timestamp>) -> Result<Appointment, SalonError> {
        let date = selected.ok_or(ValidationError::NoDateSelected)?;
        let client_name = self.client_name.trim();
        if client_name.is_empty() {
            return Err(ValidationError::MissingField {
                field: "client name",
            }
            .into());
        }
        let service_name = self.service_name.trim();
        if service_name.is_empty() {
            return Err(ValidationError::MissingField { field: "service" }.into());
        }

        Ok(Appointment {
            id: AppointmentId::new(),
            date,
            client_name: client_name.to_string(),
            service_name: service_name.to_string(),
        })
    }
}

/// Appointments whose date is not before `at`, earliest first.
///
/// The comparison is inclusive: an appointment exactly at `at` is upcoming.
/// Appointments sharing a date keep their booking order.
#[must_use]
pub fn upcoming(appointments: &[Appointment], at: Timestamp) -> Vec<Appointment> {
    let mut result: Vec<Appointment> = appointments
        .iter()
        .filter(|apt| apt.date >= at)
        .cloned()
        .collect();
    result.sort_by_key(|apt| apt.date);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use proptest::prelude::*;

    fn at(date: Timestamp, client: &str) -> Appointment {
        AppointmentDraft {
            client_name: client.to_string(),
            service_name: "Haircut".to_string(),
        }
        .book(Some(date))
        .unwrap()
    }

    fn base() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn should_stamp_appointment_with_selected_date() {
        let date = base();
        let apt = at(date, "Ada");
        assert_eq!(apt.date, date);
        assert_eq!(apt.client_name, "Ada");
        assert_eq!(apt.service_name, "Haircut");
    }

    #[test]
    fn should_reject_booking_without_selected_date() {
        let draft = AppointmentDraft {
            client_name: "Ada".to_string(),
            service_name: "Haircut".to_string(),
        };
        assert!(matches!(
            draft.book(None),
            Err(SalonError::Validation(ValidationError::NoDateSelected))
        ));
    }

    #[test]
    fn should_reject_booking_with_blank_client_name() {
        let draft = AppointmentDraft {
            client_name: "  ".to_string(),
            service_name: "Haircut".to_string(),
        };
        assert!(matches!(
            draft.book(Some(base())),
            Err(SalonError::Validation(ValidationError::MissingField { field: "client name" }))
        ));
    }

    #[test]
    fn should_reject_booking_with_empty_service() {
        let draft = AppointmentDraft {
            client_name: "Ada".to_string(),
            service_name: String::new(),
        };
        assert!(matches!(
            draft.book(Some(base())),
            Err(SalonError::Validation(ValidationError::MissingField { field: "service" }))
        ));
    }

    #[test]
    fn should_exclude_past_appointments_from_upcoming() {
        let now = base();
        let past = at(now - Duration::days(1), "Yesterday");
        let result = upcoming(&[past], now);
        assert!(result.is_empty());
    }

    #[test]
    fn should_include_appointment_exactly_at_evaluation_instant() {
        let now = base();
        let result = upcoming(&[at(now, "Now")], now);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn should_sort_upcoming_earliest_first() {
        let now = base();
        let later = at(now + Duration::days(3), "Later");
        let sooner = at(now + Duration::days(1), "Sooner");
        let result = upcoming(&[later, sooner], now);
        let names: Vec<_> = result.iter().map(|apt| apt.client_name.as_str()).collect();
        assert_eq!(names, ["Sooner", "Later"]);
    }

    #[test]
    fn should_keep_booking_order_for_equal_dates() {
        let when = base() + Duration::hours(2);
        let result = upcoming(&[at(when, "First"), at(when, "Second")], base());
        assert_eq!(result[0].client_name, "First");
        assert_eq!(result[1].client_name, "Second");
    }

    proptest! {
        #[test]
        fn should_never_list_past_appointments_and_stay_sorted(
            offsets in proptest::collection::vec(-10_000i64..10_000, 0..40),
            eval_offset in -10_000i64..10_000,
        ) {
            let appointments: Vec<Appointment> = offsets
                .iter()
                .map(|minutes| at(base() + Duration::minutes(*minutes), "Client"))
                .collect();
            let eval = base() + Duration::minutes(eval_offset);

            let result = upcoming(&appointments, eval);

            prop_assert!(result.iter().all(|apt| apt.date >= eval));
            prop_assert!(result.windows(2).all(|pair| pair[0].date <= pair[1].date));
            let expected = appointments.iter().filter(|apt| apt.date >= eval).count();
            prop_assert_eq!(result.len(), expected);
        }
    }
}
