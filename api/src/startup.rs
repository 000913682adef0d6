use crate::authentication::{reject_anonymous_users, AdminCredentials};
use crate::configuration::Settings;
use crate::domain::{SubscriberStore, TipStore};
use crate::routes::{
    admin_dashboard, export_daily_tips, health_check, home, log_out, login, login_form,
    save_daily_tip, subscribe,
};
use crate::telemetry::CustomLevelRootSpanBuilder;
use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::Key;
use actix_web::dev::{Server, Service};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::web::Data;
use actix_web::{web, App, HttpMessage, HttpServer};
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::FlashMessagesFramework;
use actix_web_lab::middleware::from_fn;
use anyhow::Context;
use secrecy::{ExposeSecret, Secret};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::{RequestId, TracingLogger};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let listener = TcpListener::bind(format!(
            "{}:{}",
            configuration.application.host_name, configuration.application.application_port
        ))?;
        let port = listener.local_addr()?.port();

        let tip_store = TipStore::new(Arc::new(configuration.storage.tip_collection()));
        let subscriber_store =
            SubscriberStore::new(Arc::new(configuration.storage.subscriber_collection()));

        tracing::info!(
            tips_path = %configuration.storage.tips_path.display(),
            subscribers_path = %configuration.storage.subscribers_path.display(),
            "Using JSON file storage"
        );

        let server = run(
            listener,
            tip_store,
            subscriber_store,
            configuration.admin,
            configuration.application.hmac_secret,
        )?;

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

fn run(
    listener: TcpListener,
    tip_store: TipStore,
    subscriber_store: SubscriberStore,
    admin_credentials: AdminCredentials,
    hmac_secret: Secret<String>,
) -> Result<Server, anyhow::Error> {
    let secret_key = Key::try_from(hmac_secret.expose_secret().as_bytes())
        .context("The session signing key must be at least 64 bytes long")?;
    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    // Shared by every worker: writes are serialised inside each store.
    let tip_store = Data::new(tip_store);
    let subscriber_store = Data::new(subscriber_store);
    let admin_credentials = Data::new(admin_credentials);

    let server = HttpServer::new(move || {
        App::new()
            .wrap_fn(|req, srv| {
                let request_id = req.extensions().get::<RequestId>().copied();
                let res = srv.call(req);
                async move {
                    let mut res = res.await?;
                    if let Some(request_id) = request_id {
                        if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
                            res.headers_mut()
                                .insert(HeaderName::from_static("x-request-id"), value);
                        }
                    }
                    Ok(res)
                }
            })
            .wrap(TracingLogger::<CustomLevelRootSpanBuilder>::new())
            .wrap(SessionMiddleware::new(
                CookieSessionStore::default(),
                secret_key.clone(),
            ))
            .wrap(message_framework.clone())
            .route("/", web::get().to(home))
            .route("/health_check", web::get().to(health_check))
            .route("/subscriptions", web::post().to(subscribe))
            .route("/login", web::get().to(login_form))
            .route("/login", web::post().to(login))
            .service(
                web::scope("/admin")
                    .wrap(from_fn(reject_anonymous_users))
                    .route("/dashboard", web::get().to(admin_dashboard))
                    .route("/tips", web::get().to(export_daily_tips))
                    .route("/tips", web::post().to(save_daily_tip))
                    .route("/logout", web::post().to(log_out)),
            )
            .app_data(tip_store.clone())
            .app_data(subscriber_store.clone())
            .app_data(admin_credentials.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
