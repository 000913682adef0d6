use actix_session::{Session, SessionExt, SessionGetError, SessionInsertError};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use std::future::{ready, Ready};

/// Typed view over the cookie session holding the admin flag.
pub struct TypedSession(Session);

impl TypedSession {
    const ADMIN_AUTHENTICATED_KEY: &'static str = "admin_authenticated";

    pub fn renew(&self) {
        self.0.renew();
    }

    pub fn insert_authenticated(&self, authenticated: bool) -> Result<(), SessionInsertError> {
        self.0.insert(Self::ADMIN_AUTHENTICATED_KEY, authenticated)
    }

    pub fn is_authenticated(&self) -> Result<bool, SessionGetError> {
        Ok(self
            .0
            .get::<bool>(Self::ADMIN_AUTHENTICATED_KEY)?
            .unwrap_or(false))
    }
}

impl FromRequest for TypedSession {
    type Error = <Session as FromRequest>::Error;
    type Future = Ready<Result<TypedSession, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(TypedSession(req.get_session())))
    }
}
