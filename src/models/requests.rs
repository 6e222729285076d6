use serde::{Deserialize, Serialize};

/// Subject attached to every submission coming from the landing page form.
pub const DEFAULT_SUBJECT: &str = "Nova ideia de software";

/// Body of `POST {API_URL}/emails`.
///
/// Field order is the wire order: the signature is computed over the exact
/// bytes `serde_json` produces for this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactPayload {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }
}

/// Fields posted by the landing page contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactForm {
    pub nome: String,
    pub email: String,
    pub descricao: String,
}

impl From<ContactForm> for ContactPayload {
    fn from(form: ContactForm) -> Self {
        ContactPayload {
            name: form.nome,
            email: form.email,
            subject: DEFAULT_SUBJECT.to_string(),
            message: form.descricao,
        }
    }
}
