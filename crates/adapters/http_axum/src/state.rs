//! Shared application state for axum handlers.

use std::sync::Arc;

use salon_app::ports::{AppointmentRepository, ServiceRepository};
use salon_app::services::booking_service::BookingService;
use salon_app::services::catalog_service::CatalogService;

/// Presentation settings for the HTML dashboard.
#[derive(Debug, Clone, Copy)]
pub struct DashboardSettings {
    /// Auto-reload interval of the appointments page; `0` disables it.
    pub refresh_seconds: u32,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            refresh_seconds: 30,
        }
    }
}

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
///
/// Each `AppState` built with [`AppState::new`] owns its own services, so two
/// states never observe each other's services, appointments or calendar.
pub struct AppState<SR, AR> {
    /// Service catalog use-cases.
    pub catalog_service: Arc<CatalogService<SR>>,
    /// Calendar selection and appointment use-cases.
    pub booking_service: Arc<BookingService<AR>>,
    /// Dashboard presentation settings.
    pub settings: DashboardSettings,
}

impl<SR, AR> Clone for AppState<SR, AR> {
    fn clone(&self) -> Self {
        Self {
            catalog_service: Arc::clone(&self.catalog_service),
            booking_service: Arc::clone(&self.booking_service),
            settings: self.settings,
        }
    }
}

impl<SR, AR> AppState<SR, AR>
where
    SR: ServiceRepository + Send + Sync + 'static,
    AR: AppointmentRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        catalog_service: CatalogService<SR>,
        booking_service: BookingService<AR>,
        settings: DashboardSettings,
    ) -> Self {
        Self {
            catalog_service: Arc::new(catalog_service),
            booking_service: Arc::new(booking_service),
            settings,
        }
    }
}
