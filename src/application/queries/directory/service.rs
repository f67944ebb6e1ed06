use std::sync::Arc;

use crate::domain::business::BusinessRepository;

/// Read side of the public directory: categories and approved listings.
pub struct DirectoryQueryService {
    pub(super) business_repo: Arc<dyn BusinessRepository>,
}

impl DirectoryQueryService {
    pub fn new(business_repo: Arc<dyn BusinessRepository>) -> Self {
        Self { business_repo }
    }
}
