//! HTTP API module for the greeting, FAQ, and login/signup endpoints.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
