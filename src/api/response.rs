//! Response types for the payroll engine API.
//!
//! This module defines the success envelopes and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::declaration::DeclarationFields;
use crate::error::EngineError;
use crate::models::{CalculationResult, LineItem};

/// Response body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The full calculation result.
    pub result: CalculationResult,
    /// Payslip line items projected from the result.
    pub line_items: Vec<LineItem>,
}

/// Response body for the `/net-to-gross` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetToGrossResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The base gross salary the solver found.
    pub gross_estimate: Decimal,
    /// The net produced by recomputing with the estimate, for verification.
    pub net_check: Decimal,
}

/// Response body for the `/declaration` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeclarationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the declaration was projected.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the declaration.
    pub engine_version: String,
    /// The projected declaration fields.
    pub fields: DeclarationFields,
    /// The rendered declaration XML document.
    pub xml: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidRateTable { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RATE_TABLE",
                    format!("Invalid rate table field '{}'", field),
                    message,
                ),
            },
            EngineError::RatesNotFound { date } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "RATES_NOT_FOUND",
                    format!("No rate table effective on {}", date),
                    "Supply a later payment_date or an inline rates override",
                ),
            },
            EngineError::SolverDidNotConverge {
                target_net,
                iterations,
            } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "SOLVER_DID_NOT_CONVERGE",
                    format!("Net-to-gross search failed for target net {}", target_net),
                    format!(
                        "The bisection exhausted {} iterations; the target may be too small \
                         relative to the minimum contribution base",
                        iterations
                    ),
                ),
            },
        }
    }
}
