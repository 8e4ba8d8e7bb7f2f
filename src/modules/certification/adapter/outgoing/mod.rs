mod certification_query_postgres;
mod certification_repository_postgres;
pub mod sea_orm_entity;

pub use certification_query_postgres::CertificationQueryPostgres;
pub use certification_repository_postgres::CertificationRepositoryPostgres;
