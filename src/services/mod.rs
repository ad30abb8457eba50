pub mod geocode_service;
pub mod search_service;

pub use geocode_service::*;
pub use search_service::*;
