pub mod json_config;
pub mod object_id;
pub mod response;

pub use json_config::custom_json_config;
pub use object_id::parse_object_id;
pub use response::ApiResponse;
