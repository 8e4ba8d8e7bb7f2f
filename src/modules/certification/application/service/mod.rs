mod create_certification_service;
mod get_certifications_service;
mod get_single_certification_service;
mod remove_certification_service;
mod update_certification_service;

pub use create_certification_service::CreateCertificationService;
pub use get_certifications_service::GetCertificationsService;
pub use get_single_certification_service::GetSingleCertificationService;
pub use remove_certification_service::RemoveCertificationService;
pub use update_certification_service::UpdateCertificationService;
