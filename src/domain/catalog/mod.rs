pub mod entity;
pub mod errors;
pub mod filters;
pub mod language;
pub mod repository;
