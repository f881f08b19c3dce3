//! In-memory implementation of [`ServiceRepository`].

use std::future::Future;

use salon_app::ports::ServiceRepository;
use salon_domain::error::SalonError;
use salon_domain::id::ServiceId;
use salon_domain::service::Service;

use crate::log::AppendLog;

/// Process-local service catalog.
pub struct MemoryServiceRepository {
    log: AppendLog<Service>,
}

impl Default for MemoryServiceRepository {
    fn default() -> Self {
        Self {
            log: AppendLog::new("service"),
        }
    }
}

impl MemoryServiceRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ServiceRepository for MemoryServiceRepository {
    fn append(&self, service: Service) -> impl Future<Output = Result<Service, SalonError>> + Send {
        let result = self.log.push(service.clone()).map(|()| service);
        async move { result.map_err(SalonError::from) }
    }

    fn get_by_id(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, SalonError>> + Send {
        let result = self.log.find(|service| service.id == id);
        async move { result.map_err(SalonError::from) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Service>, SalonError>> + Send {
        let result = self.log.snapshot();
        async move { result.map_err(SalonError::from) }
    }
}
