//! Request handlers.
//!
//! Bodies are extracted as `Result<Json<Value>, JsonRejection>` so that a
//! malformed body becomes an [`InternalFault`] envelope instead of axum's
//! default plain-text rejection.

use crate::model::InternalFault;
use crate::parser;
use crate::server::envelope::{
    BreakpointAck, BreakpointResponse, EchoResponse, LoadResponse, PingResponse,
};
use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value;
use tracing::{debug, info};

/// Parse a pseudo-file sent as `{"content": "..."}`.
pub async fn load_pseudo_file(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<LoadResponse>, InternalFault> {
    let Json(body) = body.map_err(|rejection| {
        InternalFault::new(format!(
            "Failed to parse pseudo file: {}",
            rejection.body_text()
        ))
    })?;

    let content = body.get("content").and_then(Value::as_str);
    let document = parser::parse_request(content)?;

    info!(
        bytes = document.raw_content().len(),
        levels = document.abstraction_levels().len(),
        sections = document.sections().len(),
        "POST /api/pseudo/load"
    );

    Ok(Json(LoadResponse::new(document)))
}

/// Liveness check.
pub async fn ping() -> Json<PingResponse> {
    debug!("GET /api/test/ping");
    Json(PingResponse {
        success: true,
        message: "pong".to_string(),
    })
}

/// Return the request body unchanged under `data`.
pub async fn echo(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<EchoResponse>, InternalFault> {
    let Json(data) = body.map_err(|rejection| InternalFault::new(rejection.body_text()))?;
    debug!("POST /api/test/echo");
    Ok(Json(EchoResponse {
        success: true,
        data,
    }))
}

/// Acknowledge a breakpoint request.
///
/// Nothing is stored and no debugger is involved; the three fields are
/// echoed back with a confirmation message. In that message string fields
/// appear unquoted and other values in JSON form, so a missing field reads
/// as `null`.
pub async fn set_breakpoint(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<BreakpointResponse>, InternalFault> {
    let Json(body) = body.map_err(|rejection| {
        InternalFault::new(format!(
            "Failed to set breakpoint: {}",
            rejection.body_text()
        ))
    })?;

    let fields = body.as_object().ok_or_else(|| {
        InternalFault::new("Failed to set breakpoint: request body must be a JSON object")
    })?;

    let field = |name: &str| fields.get(name).cloned().unwrap_or(Value::Null);
    let breakpoint = BreakpointAck {
        file_id: field("fileId"),
        line_number: field("lineNumber"),
        abstraction_level: field("abstractionLevel"),
    };

    let message = format!(
        "Breakpoint set at line {} in abstraction level {}",
        display_value(&breakpoint.line_number),
        display_value(&breakpoint.abstraction_level)
    );
    info!(file_id = %display_value(&breakpoint.file_id), "{}", message);

    Ok(Json(BreakpointResponse {
        success: true,
        message,
        breakpoint,
    }))
}

/// Render a JSON value for a message: strings without quotes, everything
/// else in its JSON form.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
