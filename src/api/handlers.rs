//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{NaiveDate, Utc};
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate, net_to_gross};
use crate::config::RateTable;
use crate::declaration::project;
use crate::models::SalaryInputs;

use super::request::{CalculateRequest, DeclarationRequest, NetToGrossRequest};
use super::response::{
    ApiError, ApiErrorResponse, CalculateResponse, DeclarationResponse, NetToGrossResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/net-to-gross", post(net_to_gross_handler))
        .route("/declaration", post(declaration_handler))
        .with_state(state)
}

/// Unwraps a JSON payload, mapping rejections to a 400 response.
fn parse_payload<T: DeserializeOwned>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}

/// Picks the rate table for a request: a validated inline override when
/// supplied, otherwise the loaded table in force on the payment date
/// (today when no date is given).
fn resolve_rates(
    state: &AppState,
    rates_override: Option<RateTable>,
    payment_date: Option<NaiveDate>,
) -> Result<RateTable, ApiErrorResponse> {
    match rates_override {
        Some(rates) => {
            rates.validate()?;
            Ok(rates)
        }
        None => {
            let date = payment_date.unwrap_or_else(|| Utc::now().date_naive());
            Ok(state.rates().resolve_for_date(date)?.clone())
        }
    }
}

/// Handler for the POST /calculate endpoint.
///
/// Runs the gross-to-net waterfall and returns the full result together
/// with the payslip line items.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let rates = match resolve_rates(&state, request.rates, request.payment_date) {
        Ok(rates) => rates,
        Err(error) => {
            warn!(
                correlation_id = %correlation_id,
                code = %error.error.code,
                "Rate resolution failed"
            );
            return error.into_response();
        }
    };

    let result = calculate(&request.inputs, &rates);
    let line_items = result.line_items(&request.inputs, &rates);

    info!(
        correlation_id = %correlation_id,
        gross1 = %result.gross1,
        net = %result.net,
        warnings = result.warnings.len(),
        "Calculation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(CalculateResponse {
            calculation_id: correlation_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            result,
            line_items,
        }),
    )
        .into_response()
}

/// Handler for the POST /net-to-gross endpoint.
///
/// Finds the base gross salary producing the target net; a search that
/// exhausts its iteration budget maps to 422.
async fn net_to_gross_handler(
    State(state): State<AppState>,
    payload: Result<Json<NetToGrossRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing net-to-gross request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let rates = match resolve_rates(&state, request.rates, request.payment_date) {
        Ok(rates) => rates,
        Err(error) => return error.into_response(),
    };

    match net_to_gross(request.target_net, &request.inputs, &rates) {
        Ok(gross_estimate) => {
            let check_inputs = SalaryInputs {
                base_gross_salary: gross_estimate,
                ..request.inputs
            };
            let net_check = calculate(&check_inputs, &rates).net;

            info!(
                correlation_id = %correlation_id,
                target_net = %request.target_net,
                gross_estimate = %gross_estimate,
                "Net-to-gross completed successfully"
            );

            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(NetToGrossResponse {
                    calculation_id: correlation_id,
                    timestamp: Utc::now(),
                    engine_version: env!("CARGO_PKG_VERSION").to_string(),
                    gross_estimate,
                    net_check,
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Net-to-gross search failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for the POST /declaration endpoint.
///
/// Calculates the month and projects the result into the declaration
/// fields plus the rendered XML document.
async fn declaration_handler(
    State(state): State<AppState>,
    payload: Result<Json<DeclarationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing declaration request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let rates = match resolve_rates(&state, request.rates, request.payment_date) {
        Ok(rates) => rates,
        Err(error) => return error.into_response(),
    };

    let result = calculate(&request.inputs, &rates);
    // The projection expects the sanitized overtime hour count.
    let (clean_inputs, _) = request.inputs.sanitized();
    let fields = project(
        &result,
        clean_inputs.overtime_hours,
        &request.employee,
        &request.employer,
        request.period,
    );
    let xml = fields.to_xml();

    info!(
        correlation_id = %correlation_id,
        period = %fields.period,
        gross = %fields.gross,
        "Declaration rendered successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(DeclarationResponse {
            calculation_id: correlation_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            fields,
            xml,
        }),
    )
        .into_response()
}
