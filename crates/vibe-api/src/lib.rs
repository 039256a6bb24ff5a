//! # Vibe API
//! 
//! HTTP handlers, response envelope, error mapping, and the router.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;
