use crate::domain::{SubscribeError, SubscriberStore};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};

impl ResponseError for SubscribeError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubscribeError::InvalidEmail(_) => StatusCode::BAD_REQUEST,
            SubscribeError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(serde::Deserialize)]
pub struct FormData {
    pub email: String,
}

#[tracing::instrument(
    name = "Handling a subscription request",
    skip(form, store),
    fields(subscriber_email = %form.email)
)]
pub async fn subscribe(
    form: web::Form<FormData>,
    store: web::Data<SubscriberStore>,
) -> Result<HttpResponse, SubscribeError> {
    store.add(form.0.email).await?;
    Ok(HttpResponse::Ok().finish())
}
