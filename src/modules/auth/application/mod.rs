pub mod domain;
pub mod helpers;
pub mod ports;
pub mod use_cases;
pub mod admin_use_cases;
