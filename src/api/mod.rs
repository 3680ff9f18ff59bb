//! HTTP access to the Foody API
//!
//! Token acquisition and the authenticated session shared by every scenario.

pub mod auth;
pub mod protocol;
pub mod session;

pub use auth::Credentials;
pub use session::{Response, Session};
