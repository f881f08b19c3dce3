//! Catalog service: use-cases for the salon's service list.

use salon_domain::error::SalonError;
use salon_domain::id::ServiceId;
use salon_domain::service::{Service, ServiceDraft};

use crate::ports::ServiceRepository;

/// Application service for registering and listing salon services.
pub struct CatalogService<R> {
    repo: R,
}

impl<R: ServiceRepository> CatalogService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validate a form draft and append the resulting service to the list.
    ///
    /// A rejected draft leaves the list untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SalonError::Validation`] if a field is missing or does not
    /// parse, or a storage error propagated from the repository.
    pub async fn register_service(&self, draft: &ServiceDraft) -> Result<Service, SalonError> {
        let service = draft.parse().inspect_err(|err| {
            tracing::debug!(error = %err, "rejected service draft");
        })?;
        let service = self.repo.append(service).await?;
        tracing::info!(
            service_id = %service.id,
            name = %service.name,
            duration = service.duration,
            cost = %service.cost,
            "service registered"
        );
        Ok(service)
    }

    /// Look up a service by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SalonError::NotFound`] when no service with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_service(&self, id: ServiceId) -> Result<Service, SalonError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| id.not_found().into())
    }

    /// List all services, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_services(&self) -> Result<Vec<Service>, SalonError> {
        self.repo.get_all().await
    }
}
