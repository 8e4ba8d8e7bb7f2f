pub mod admin_auth;
pub mod fetch_admin;
