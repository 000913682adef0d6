use crate::domain::{Subscriber, SubscriberStore, TipDate, TipStore};
use crate::utils::{e500, flash_contents};
use actix_web::{http::header::ContentType, web, HttpResponse};
use actix_web_flash_messages::IncomingFlashMessages;
use askama::Template;

const RECENT_SUBSCRIBERS: usize = 10;
const TIP_PREVIEW_GRAPHEMES: usize = 140;

struct SubscriberRow {
    email: String,
    status: &'static str,
    joined: String,
}

impl From<&Subscriber> for SubscriberRow {
    fn from(subscriber: &Subscriber) -> Self {
        Self {
            email: subscriber.email.to_string(),
            status: subscriber.status.as_str(),
            joined: subscriber.timestamp.format("%Y-%m-%d").to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
struct DashboardTemplate {
    messages: Vec<String>,
    total: usize,
    active: usize,
    tip_ready: bool,
    tip_from_admin: bool,
    admin_tip_preview: Option<String>,
    recent_subscribers: Vec<SubscriberRow>,
}

#[tracing::instrument(name = "Rendering the admin dashboard", skip_all)]
pub async fn admin_dashboard(
    tip_store: web::Data<TipStore>,
    subscriber_store: web::Data<SubscriberStore>,
    flash_messages: IncomingFlashMessages,
) -> Result<HttpResponse, actix_web::Error> {
    let stats = subscriber_store.stats().await.map_err(e500)?;
    let recent = subscriber_store
        .recent(RECENT_SUBSCRIBERS)
        .await
        .map_err(e500)?;
    let todays_tip = tip_store.todays_tip(TipDate::today()).await.map_err(e500)?;

    let tip_from_admin = todays_tip.as_ref().is_some_and(|tip| tip.is_from_admin());
    let template = DashboardTemplate {
        messages: flash_contents(&flash_messages),
        total: stats.total,
        active: stats.active,
        tip_ready: todays_tip.is_some(),
        tip_from_admin,
        admin_tip_preview: todays_tip
            .filter(|tip| tip.is_from_admin())
            .map(|tip| tip.content.preview(TIP_PREVIEW_GRAPHEMES)),
        recent_subscribers: recent.iter().map(SubscriberRow::from).collect(),
    };

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(template.render().map_err(e500)?))
}
