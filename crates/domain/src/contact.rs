//! Salon contact details shown on the Contact tab.

use serde::Serialize;

/// Fixed, read-only contact information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub email: &'static str,
    pub phone: &'static str,
}

/// The salon's contact block. Not configurable.
pub const SALON_CONTACT: ContactInfo = ContactInfo {
    email: "salon@example.com",
    phone: "(123) 456-7890",
};
