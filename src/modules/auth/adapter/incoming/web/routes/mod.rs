mod admin_auth;
mod fetch_admin;

pub use admin_auth::{admin_auth_handler, AdminAuthRequest};
pub use admin_auth::__path_admin_auth_handler;
pub use fetch_admin::fetch_admin_handler;
pub use fetch_admin::__path_fetch_admin_handler;
