pub mod certification_query;
pub mod certification_repository;

pub use certification_query::{CertificationQuery, CertificationQueryError};
pub use certification_repository::{CertificationRepository, CertificationRepositoryError};
