mod create_certification;
mod get_certifications;
mod get_single_certification;
mod remove_certification;
mod update_certification;

pub use create_certification::create_certification_handler;
pub use create_certification::__path_create_certification_handler;
pub use get_certifications::get_certifications_handler;
pub use get_certifications::__path_get_certifications_handler;
pub use get_single_certification::get_single_certification_handler;
pub use get_single_certification::__path_get_single_certification_handler;
pub use remove_certification::remove_certification_handler;
pub use remove_certification::__path_remove_certification_handler;
pub use update_certification::update_certification_handler;
pub use update_certification::__path_update_certification_handler;
