use crate::models::requests::{ContactForm, ContactPayload};
use crate::models::responses::ApiResponse;
use crate::services::contact_service::{ContactClient, ContactError};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Result as ActixResult};
use log::{error, info};

pub const SUCCESS_MESSAGE: &str = "Mensagem enviada com sucesso!";

pub async fn contact(
    client: web::Data<ContactClient>,
    form: web::Json<ContactForm>,
) -> ActixResult<HttpResponse> {
    info!("Received contact form submission");

    let payload = ContactPayload::from(form.into_inner());
    match client.send_contact(&payload).await {
        Ok(response) => {
            info!("Successfully delivered contact submission");
            Ok(HttpResponse::Ok().json(ApiResponse {
                success: true,
                data: response.data,
                errors: None,
                message: Some(SUCCESS_MESSAGE.to_string()),
            }))
        }
        Err(e) => {
            error!("Error delivering contact submission: {}", e);
            let message = e.user_message();
            let (status, errors) = match e {
                ContactError::Validation { status, response } => (
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_REQUEST),
                    response.errors,
                ),
                _ => (StatusCode::BAD_GATEWAY, None),
            };

            Ok(HttpResponse::build(status).json(ApiResponse::<()> {
                success: false,
                data: None,
                errors,
                message: Some(message),
            }))
        }
    }
}
