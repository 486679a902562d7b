pub mod panic;
pub mod request_id;
