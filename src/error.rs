use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::error::Category;
use thiserror::Error;
use tracing::info;

/// One entry of the `detail` list returned with a rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub loc: Vec<String>,
    pub msg: String,
}

#[derive(Debug, Serialize)]
struct ValidationBody {
    detail: Vec<ValidationIssue>,
}

/// Request failures raised before a handler body runs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request body is not valid JSON: {0}")]
    JsonSyntax(String),

    #[error("request body does not match the expected shape: {0}")]
    ShapeMismatch(String),

    #[error("unsupported content type: {0}")]
    ContentType(String),

    #[error("failed to read request body: {msg}")]
    BodyRead { status: StatusCode, msg: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BodyRead { status, .. } => *status,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::JsonSyntax(_) => "json_invalid",
            Self::ShapeMismatch(_) => "shape_mismatch",
            Self::ContentType(_) => "content_type",
            Self::BodyRead { .. } => "body_read",
        }
    }

    pub fn issue(&self) -> ValidationIssue {
        let msg = match self {
            Self::JsonSyntax(msg)
            | Self::ShapeMismatch(msg)
            | Self::ContentType(msg)
            | Self::BodyRead { msg, .. } => msg.clone(),
        };

        let mut loc = vec!["body".to_string()];
        if let Self::ShapeMismatch(msg) = self {
            loc.extend(missing_field(msg).map(str::to_string));
        }

        ValidationIssue {
            kind: self.kind(),
            loc,
            msg,
        }
    }
}

/// Field name from serde's "missing field `name`" message.
fn missing_field(msg: &str) -> Option<&str> {
    msg.strip_prefix("missing field `")?.split('`').next()
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => Self::ShapeMismatch(err.to_string()),
            Category::Syntax | Category::Eof | Category::Io => Self::JsonSyntax(err.to_string()),
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        Self::BodyRead {
            status: rejection.status(),
            msg: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        info!(
            msg = "Rejecting request",
            kind = self.kind(),
            status = %status.as_u16(),
            error = %self
        );

        let body = ValidationBody {
            detail: vec![self.issue()],
        };

        (status, Json(body)).into_response()
    }
}
