use crate::authentication::{AdminCredentials, AdminSession};
use crate::session_state::TypedSession;
use crate::utils::{e500, see_other};
use actix_web::{web, HttpResponse};
use actix_web_flash_messages::FlashMessage;

#[tracing::instrument(name = "Logging the admin out", skip_all)]
pub async fn log_out(
    credentials: web::Data<AdminCredentials>,
    session: TypedSession,
) -> Result<HttpResponse, actix_web::Error> {
    let was_authenticated = session.is_authenticated().map_err(e500)?;
    let mut admin = AdminSession::restore(credentials.get_ref().clone(), was_authenticated);

    admin.logout();
    session.renew();
    session
        .insert_authenticated(admin.is_authenticated())
        .map_err(e500)?;

    FlashMessage::info("You have successfully logged out.").send();
    Ok(see_other("/login"))
}
