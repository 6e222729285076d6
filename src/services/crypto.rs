use crate::models::requests::ContactPayload;
use crate::models::responses::SignedRequest;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

/// Hex encoded HMAC with SHA256 hash, lowercase.
pub fn hex_hmac_sha256(key: &[u8], content: &[u8]) -> String {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(content);

    hex::encode(mac.finalize().into_bytes())
}

/// Current time as decimal epoch milliseconds.
pub fn current_timestamp() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}

/// Signs request bodies with a pre-shared key.
///
/// The secret is used as raw key bytes; no derivation is applied.
#[derive(Clone)]
pub struct RequestSigner {
    key: Vec<u8>,
}

impl RequestSigner {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            key: secret.as_ref().to_vec(),
        }
    }

    /// `hex(HMAC-SHA256(key, timestamp || body))`, no separator.
    pub fn sign(&self, timestamp: &str, body: &str) -> String {
        let mut content = Vec::with_capacity(timestamp.len() + body.len());
        content.extend_from_slice(timestamp.as_bytes());
        content.extend_from_slice(body.as_bytes());

        hex_hmac_sha256(&self.key, &content)
    }

    /// Serialize `payload` and sign the resulting bytes.
    pub fn signed_request(
        &self,
        payload: &ContactPayload,
        timestamp: String,
    ) -> Result<SignedRequest, serde_json::Error> {
        let body = serde_json::to_string(payload)?;
        let signature = self.sign(&timestamp, &body);

        Ok(SignedRequest {
            timestamp,
            signature,
            body,
        })
    }

    pub fn verify(&self, timestamp: &str, body: &str, signature: &str) -> bool {
        let expected = self.sign(timestamp, body);
        expected.as_bytes().ct_eq(signature.as_bytes()).unwrap_u8() == 1
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("key", &"<redacted>")
            .finish()
    }
}
