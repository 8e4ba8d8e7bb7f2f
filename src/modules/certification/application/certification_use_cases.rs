use std::sync::Arc;

use crate::modules::certification::application::ports::incoming::use_cases::{
    CreateCertificationUseCase, GetCertificationsUseCase, GetSingleCertificationUseCase,
    RemoveCertificationUseCase, UpdateCertificationUseCase,
};

#[derive(Clone)]
pub struct CertificationUseCases {
    pub get_list: Arc<dyn GetCertificationsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleCertificationUseCase + Send + Sync>,
    pub create: Arc<dyn CreateCertificationUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateCertificationUseCase + Send + Sync>,
    pub remove: Arc<dyn RemoveCertificationUseCase + Send + Sync>,
}
