//! JSON envelopes returned by every endpoint.
//!
//! Success bodies carry `"success": true` plus one payload field; failures
//! are always `{"success": false, "error": <message>}` with status 400.

use crate::model::{InternalFault, ParsedDocument};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

/// `POST /api/pseudo/load` response.
#[derive(Debug, Serialize)]
pub struct LoadResponse {
    /// Always `true`.
    pub success: bool,
    /// The parsed document.
    pub content: ParsedDocument,
}

impl LoadResponse {
    /// Wrap a parsed document in a success envelope.
    pub fn new(content: ParsedDocument) -> Self {
        Self {
            success: true,
            content,
        }
    }
}

/// `GET /api/test/ping` response.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    /// Always `true`.
    pub success: bool,
    /// Always `"pong"`.
    pub message: String,
}

/// `POST /api/test/echo` response.
#[derive(Debug, Serialize)]
pub struct EchoResponse {
    /// Always `true`.
    pub success: bool,
    /// The request body, unchanged.
    pub data: Value,
}

/// Fields echoed back by `POST /api/debug/breakpoint`.
///
/// Values are passed through untouched, whatever their JSON type; absent
/// fields are `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakpointAck {
    /// `fileId` from the request.
    pub file_id: Value,
    /// `lineNumber` from the request.
    pub line_number: Value,
    /// `abstractionLevel` from the request.
    pub abstraction_level: Value,
}

/// `POST /api/debug/breakpoint` response.
#[derive(Debug, Serialize)]
pub struct BreakpointResponse {
    /// Always `true`.
    pub success: bool,
    /// Human-readable confirmation.
    pub message: String,
    /// The echoed breakpoint fields.
    pub breakpoint: BreakpointAck,
}

/// Failure body.
#[derive(Debug, Serialize)]
pub struct FaultResponse {
    /// Always `false`.
    pub success: bool,
    /// Fault message.
    pub error: String,
}

impl From<InternalFault> for FaultResponse {
    fn from(fault: InternalFault) -> Self {
        Self {
            success: false,
            error: fault.message().to_string(),
        }
    }
}

impl IntoResponse for InternalFault {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "Request failed");
        (StatusCode::BAD_REQUEST, Json(FaultResponse::from(self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;
    use serde_json::json;

    #[test]
    fn fault_response_shape() {
        let body = FaultResponse::from(InternalFault::new("bad input"));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"success": false, "error": "bad input"})
        );
    }

    #[test]
    fn internal_fault_response_is_bad_request() {
        let response = InternalFault::new("nope").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn load_response_wraps_document_under_content() {
        let body = LoadResponse::new(parser::parse("@level:high\nfoo"));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "success": true,
                "content": {
                    "raw_content": "@level:high\nfoo",
                    "abstraction_levels": ["high"],
                    "sections": [{"level": "high", "content": ["foo"]}]
                }
            })
        );
    }

    #[test]
    fn breakpoint_ack_uses_camel_case_keys() {
        let ack = BreakpointAck {
            file_id: json!("f1"),
            line_number: json!(3),
            abstraction_level: Value::Null,
        };
        assert_eq!(
            serde_json::to_value(&ack).unwrap(),
            json!({"fileId": "f1", "lineNumber": 3, "abstractionLevel": null})
        );
    }
}
