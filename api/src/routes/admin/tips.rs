use crate::domain::{TipDate, TipStore, TipStoreError};
use crate::utils::{e500, see_other};
use actix_web::http::header::{ContentDisposition, ContentType, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse};
use actix_web_flash_messages::FlashMessage;

#[derive(serde::Deserialize)]
pub struct TipFormData {
    content: String,
}

/// Store the admin's tip for today, replacing any tip already present.
#[tracing::instrument(name = "Saving today's admin tip", skip(form, tip_store))]
pub async fn save_daily_tip(
    form: web::Form<TipFormData>,
    tip_store: web::Data<TipStore>,
) -> Result<HttpResponse, actix_web::Error> {
    match tip_store
        .put_admin_tip(form.into_inner().content, TipDate::today())
        .await
    {
        Ok(tip) => {
            tracing::info!(tip_date = %tip.date, "Admin tip saved");
            FlashMessage::info(
                "The daily tip has been saved and will be used for today's newsletter.",
            )
            .send();
        }
        Err(TipStoreError::ValidationError(_)) => {
            FlashMessage::error("Please enter a daily tip.").send();
        }
        Err(e) => return Err(e500(e)),
    }
    Ok(see_other("/admin/dashboard"))
}

/// Download the tip collection in the exact format the automation reads.
pub async fn export_daily_tips(
    tip_store: web::Data<TipStore>,
) -> Result<HttpResponse, actix_web::Error> {
    let tips = tip_store.list().await.map_err(e500)?;
    let body = serde_json::to_string_pretty(&tips).map_err(e500)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename("daily_tips.json".to_string())],
        })
        .body(body))
}
