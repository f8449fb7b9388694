//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoints for gross-to-net
//! calculations, net-to-gross inversion, and declaration rendering.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculateRequest, DeclarationRequest, NetToGrossRequest};
pub use response::{ApiError, CalculateResponse, DeclarationResponse, NetToGrossResponse};
pub use state::AppState;
