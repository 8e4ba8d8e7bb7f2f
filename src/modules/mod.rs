pub mod auth;
pub mod certification;
pub mod experience;
pub mod project;
pub mod skill;
pub mod stats;
