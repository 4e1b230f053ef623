//! Tutorial-grade HTTP greeting service.
//!
//! Serves a configurable greeting message, a static FAQ list, and a demo
//! login/signup flow backed by an in-memory user registry. All state lives
//! in the server process; nothing is persisted across restarts.
//!
//! # Endpoints
//!
//! ```text
//! GET  /greet            {"message": "Hello World!"}
//! GET  /greet/questions  static FAQ entries
//! GET  /greet/{name}     {"message": "Hello {name}!"}
//! PUT  /greet/greeting   replace the greeting template
//! POST /greet/login      credential lookup
//! POST /greet/signup     store a user record
//! GET  /greet/logout     stateless acknowledgement
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`greeting`]: Greeting template store
//! - [`registry`]: In-memory user registry
//! - [`faq`]: Static FAQ payload
//! - [`api`]: HTTP routes and handlers
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod faq;
pub mod greeting;
pub mod metrics;
pub mod registry;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServerError};
