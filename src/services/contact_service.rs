use crate::config::ContactConfig;
use crate::models::requests::ContactPayload;
use crate::models::responses::{ApiResponse, ContactRecord, SignedRequest};
use crate::services::crypto::{current_timestamp, RequestSigner};
use crate::services::transport::HttpSend;
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

pub const SIGNATURE_HEADER: &str = "X-HMAC-Signature";
pub const TIMESTAMP_HEADER: &str = "X-HMAC-Timestamp";

/// Shown to visitors when the server gave no specific reason.
pub const GENERIC_ERROR_MESSAGE: &str = "Erro ao enviar mensagem. Tente novamente.";

pub type ContactResponse = ApiResponse<ContactRecord>;

#[derive(Error, Debug)]
pub enum ContactError {
    /// The email API answered with a non-2xx status and a JSON error body.
    #[error("contact rejected with status {status}")]
    Validation {
        status: u16,
        response: ApiResponse<Value>,
    },

    /// No response was obtained.
    #[error("transport error: {0}")]
    Transport(String),

    /// A response arrived but its body could not be understood.
    #[error("unexpected response with status {status}: {reason}")]
    Protocol { status: u16, reason: String },

    #[error("failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to build request: {0}")]
    Request(#[from] http::Error),
}

impl ContactError {
    /// Text to show the visitor: the first server message, or a generic one.
    pub fn user_message(&self) -> String {
        match self {
            ContactError::Validation { response, .. } => response
                .errors
                .as_ref()
                .and_then(|errors| errors.first())
                .map(|e| e.message.clone())
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Client for `POST {API_URL}/emails` with HMAC authenticated requests.
///
/// Every call signs with a fresh timestamp and makes exactly one attempt.
#[derive(Debug, Clone)]
pub struct ContactClient {
    config: ContactConfig,
    signer: RequestSigner,
    http: Arc<dyn HttpSend>,
}

impl ContactClient {
    pub fn new(config: ContactConfig, http: impl HttpSend) -> Self {
        let signer = RequestSigner::new(&config.hmac_secret);
        Self {
            config,
            signer,
            http: Arc::new(http),
        }
    }

    pub fn signer(&self) -> &RequestSigner {
        &self.signer
    }

    pub async fn send_contact(&self, payload: &ContactPayload) -> Result<ContactResponse, ContactError> {
        let signed = self.signer.signed_request(payload, current_timestamp())?;
        self.send_signed(signed).await
    }

    pub async fn send_signed(&self, signed: SignedRequest) -> Result<ContactResponse, ContactError> {
        let req = http::Request::post(self.config.endpoint("/emails"))
            .header(CONTENT_TYPE, "application/json")
            .header(SIGNATURE_HEADER, &signed.signature)
            .header(TIMESTAMP_HEADER, &signed.timestamp)
            .body(Bytes::from(signed.body))?;

        let resp = self
            .http
            .http_send(req)
            .await
            .map_err(|e| ContactError::Transport(format!("{e:#}")))?;

        let status = resp.status();
        if status.is_success() {
            serde_json::from_slice::<ContactResponse>(resp.body()).map_err(|e| {
                ContactError::Protocol {
                    status: status.as_u16(),
                    reason: e.to_string(),
                }
            })
        } else {
            match serde_json::from_slice::<ApiResponse<Value>>(resp.body()) {
                Ok(response) => Err(ContactError::Validation {
                    status: status.as_u16(),
                    response,
                }),
                Err(e) => Err(ContactError::Protocol {
                    status: status.as_u16(),
                    reason: e.to_string(),
                }),
            }
        }
    }
}
