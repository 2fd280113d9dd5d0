//! HTTP API for the Show Compensation Engine.
//!
//! This module provides the axum router, request/response types, and shared
//! application state for serving compensation calculations over HTTP.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BreedAssignmentRequest, CompensationRequest, ShowRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
