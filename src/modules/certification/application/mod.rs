pub mod domain;
pub mod ports;
pub mod certification_use_cases;
pub mod service;
