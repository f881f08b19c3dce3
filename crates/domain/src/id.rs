//! Typed identifier newtypes backed by random UUIDs.
//!
//! Identifiers are never derived from the creation instant, so records
//! submitted back to back always get distinct ids.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NotFoundError, ValidationError};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident => $entity:literal) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl $name {
            /// Record kind named in lookup errors.
            pub const ENTITY: &'static str = $entity;

            /// Generate a fresh random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            /// Error for a lookup of this id that found nothing.
            #[must_use]
            pub fn not_found(self) -> NotFoundError {
                NotFoundError {
                    entity: Self::ENTITY,
                    id: self.to_string(),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                uuid::Uuid::parse_str(s.trim())
                    .map(Self)
                    .map_err(|_| ValidationError::InvalidId {
                        value: s.to_string(),
                    })
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Service`](crate::service::Service).
    ServiceId => "Service"
);

define_id!(
    /// Unique identifier for an [`Appointment`](crate::appointment::Appointment).
    AppointmentId => "Appointment"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_unique_ids_when_created_back_to_back() {
        let ids: std::collections::HashSet<ServiceId> =
            (0..1_000).map(|_| ServiceId::new()).collect();
        assert_eq!(ids.len(), 1_000);
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = AppointmentId::new();
        let parsed: AppointmentId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_plain_uuid_string() {
        let id = ServiceId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }

    #[test]
    fn should_reject_invalid_uuid_with_validation_error() {
        let result = ServiceId::from_str("not-a-uuid");
        assert_eq!(
            result,
            Err(ValidationError::InvalidId {
                value: "not-a-uuid".to_string()
            })
        );
    }

    #[test]
    fn should_name_entity_when_not_found() {
        let id = AppointmentId::new();
        let err = id.not_found();
        assert_eq!(err.entity, "Appointment");
        assert_eq!(err.to_string(), format!("Appointment {id} does not exist"));
        assert_eq!(ServiceId::new().not_found().entity, "Service");
    }
}
