mod create_certification;
mod get_certifications;
mod get_single_certification;
mod remove_certification;
mod update_certification;

pub use create_certification::{CreateCertificationError, CreateCertificationUseCase};
pub use get_certifications::{GetCertificationsError, GetCertificationsUseCase};
pub use get_single_certification::{GetSingleCertificationError, GetSingleCertificationUseCase};
pub use remove_certification::{RemoveCertificationError, RemoveCertificationUseCase};
pub use update_certification::{UpdateCertificationError, UpdateCertificationUseCase};
