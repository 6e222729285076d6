use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A payload together with the headers that authenticate it.
///
/// Built fresh for every submission and dropped once the request returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// Epoch milliseconds, decimal.
    pub timestamp: String,
    /// Lowercase hex HMAC-SHA256 of `timestamp || body`.
    pub signature: String,
    /// Serialized payload, sent byte for byte.
    pub body: String,
}

/// Envelope used by the email API for both outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
}

/// Stored submission returned by the email API.
///
/// Any field may be missing and unknown fields are kept in `extra`, so a
/// stored submission is never reported as a failure because of its shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    /// String or number depending on the backend.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
