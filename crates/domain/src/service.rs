//! Service: a treatment the salon offers, with a duration and a price.
//!
//! Services enter the system through the "Add New Service" form as a
//! [`ServiceDraft`] of raw strings. A draft only becomes a [`Service`] once
//! every field is present and parses; anything else is rejected without
//! touching the service list.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{SalonError, ValidationError};
use crate::id::ServiceId;
use crate::price::Price;

/// A salon-offered treatment. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    /// Length of the treatment in minutes.
    pub duration: u32,
    pub cost: Price,
}

impl Service {
    /// Create a builder for constructing a [`Service`].
    #[must_use]
    pub fn builder() -> ServiceBuilder {
        ServiceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SalonError::Validation`] when `name` is blank.
    pub fn validate(&self) -> Result<(), SalonError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Label used in the appointment form's service picker, e.g. `Haircut ($25.00)`.
    #[must_use]
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.name, self.cost.with_currency())
    }
}

/// Step-by-step builder for [`Service`].
#[derive(Debug, Default)]
pub struct ServiceBuilder {
    id: Option<ServiceId>,
    name: Option<String>,
    duration: u32,
    cost: Price,
}

impl ServiceBuilder {
    #[must_use]
    pub fn id(mut self, id: ServiceId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn duration(mut self, minutes: u32) -> Self {
        self.duration = minutes;
        self
    }

    #[must_use]
    pub fn cost(mut self, cost: Price) -> Self {
        self.cost = cost;
        self
    }

    /// Consume the builder, validate, and return a [`Service`].
    ///
    /// # Errors
    ///
    /// Returns [`SalonError::Validation`] if `name` is missing or blank.
    pub fn build(self) -> Result<Service, SalonError> {
        let service = Service {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            duration: self.duration,
            cost: self.cost,
        };
        service.validate()?;
        Ok(service)
    }
}

/// Raw, unvalidated contents of the new-service form.
///
/// `duration` and `cost` also accept JSON numbers; they are kept as their
/// textual form and validated by [`ServiceDraft::parse`] like form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceDraft {
    pub name: String,
    #[serde(deserialize_with = "text_or_number")]
    pub duration: String,
    #[serde(deserialize_with = "text_or_number")]
    pub cost: String,
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Decimal(f64),
    }

    Ok(match Field::deserialize(deserializer)? {
        Field::Text(text) => text,
        Field::Unsigned(value) => value.to_string(),
        Field::Signed(value) => value.to_string(),
        Field::Decimal(value) => value.to_string(),
    })
}

impl ServiceDraft {
    /// Turn the draft into a [`Service`] with a fresh id.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingField`] when any field is blank
    /// - [`ValidationError::InvalidDuration`] when the duration is not a
    ///   whole, non-negative number of minutes
    /// - [`ValidationError::InvalidCost`] when the cost is not a
    ///   non-negative amount with at most two decimals
    pub fn parse(&self) -> Result<Service, SalonError> {
        let name = self.name.trim();
        let duration = self.duration.trim();
        let cost = self.cost.trim();

        for (field, value) in [("name", name), ("duration", duration), ("cost", cost)] {
            if value.is_empty() {
                return Err(ValidationError::MissingField { field }.into());
            }
        }

        let duration: u32 = duration
            .parse()
            .map_err(|_| ValidationError::InvalidDuration {
                value: duration.to_string(),
            })?;
        let cost: Price = cost.parse().map_err(|_| ValidationError::InvalidCost {
            value: cost.to_string(),
        })?;

        Service::builder()
            .name(name)
            .duration(duration)
            .cost(cost)
            .build()
    }
}
