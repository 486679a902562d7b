pub mod cache;
pub mod loader;
pub mod repositories;
