pub mod handlers;
pub mod models;
pub mod provider;

pub use handlers::*;
pub use models::*;
pub use provider::*;
