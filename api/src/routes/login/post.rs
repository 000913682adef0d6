use crate::authentication::{AdminCredentials, AdminSession};
use crate::session_state::TypedSession;
use crate::utils::{e500, see_other};
use actix_web::{web, HttpResponse};
use actix_web_flash_messages::FlashMessage;
use secrecy::Secret;

#[derive(serde::Deserialize)]
pub struct FormData {
    username: String,
    password: Secret<String>,
}

#[tracing::instrument(
    skip(form, credentials, session),
    fields(username=%form.username)
)]
pub async fn login(
    form: web::Form<FormData>,
    credentials: web::Data<AdminCredentials>,
    session: TypedSession,
) -> Result<HttpResponse, actix_web::Error> {
    let form = form.into_inner();
    let was_authenticated = session.is_authenticated().map_err(e500)?;
    let mut admin = AdminSession::restore(credentials.get_ref().clone(), was_authenticated);

    if admin.login(&form.username, form.password) {
        session.renew();
        session
            .insert_authenticated(admin.is_authenticated())
            .map_err(e500)?;
        Ok(see_other("/admin/dashboard"))
    } else {
        FlashMessage::error("Authentication failed").send();
        Ok(see_other("/login"))
    }
}
