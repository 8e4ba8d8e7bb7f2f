pub mod domain;
pub mod ports;
pub mod experience_use_cases;
pub mod service;
