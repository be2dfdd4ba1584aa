pub mod handlers;
pub mod models;
pub mod read_model;

pub use handlers::*;
pub use models::*;
pub use read_model::*;
