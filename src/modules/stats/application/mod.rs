pub mod domain;
pub mod ports;
pub mod service;
pub mod stats_use_cases;
