use crate::helpers::{assert_is_redirect_to, spawn_app};
use sqldaily::domain::{TipDate, TipSource};

#[tokio::test]
async fn you_must_be_logged_in_to_save_a_tip() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.post_daily_tip("Use EXPLAIN ANALYZE").await;

    // Assert
    assert_is_redirect_to(&response, "/login");
    assert!(app.stored_tips().is_empty());
}

#[tokio::test]
async fn you_must_be_logged_in_to_export_tips() {
    let app = spawn_app().await;

    let response = app.get_tips_export().await;

    assert_is_redirect_to(&response, "/login");
}

#[tokio::test]
async fn saving_a_tip_stores_it_as_todays_admin_tip() {
    // Arrange
    let app = spawn_app().await;
    app.login_as_admin().await;

    // Act - Part 1 - Submit the tip
    let response = app.post_daily_tip("Use EXPLAIN ANALYZE").await;
    assert_is_redirect_to(&response, "/admin/dashboard");

    // Act - Part 2 - Follow the redirect
    let html_page = app.get_admin_dashboard_html().await;
    assert!(html_page.contains("<p><i>The daily tip has been saved and will be used for today"));
    assert!(html_page.contains(r#"<strong id="tip-status">Ready</strong> (Added by admin)"#));
    assert!(html_page.contains("Update Today's Tip"));

    // Assert
    let tips = app.stored_tips();
    assert_eq!(tips.len(), 1);
    assert_eq!(tips[0].content.as_ref(), "Use EXPLAIN ANALYZE");
    assert_eq!(tips[0].date, TipDate::today());
    assert_eq!(tips[0].source, TipSource::Admin);
}

#[tokio::test]
async fn saving_twice_on_the_same_day_keeps_only_the_latest_tip() {
    // Arrange
    let app = spawn_app().await;
    app.login_as_admin().await;

    // Act
    app.post_daily_tip("Use EXPLAIN ANALYZE").await;
    app.post_daily_tip("Prefer EXISTS over IN for correlated checks").await;

    // Assert
    let tips = app.stored_tips();
    assert_eq!(tips.len(), 1);
    assert_eq!(
        tips[0].content.as_ref(),
        "Prefer EXISTS over IN for correlated checks"
    );
}

#[tokio::test]
async fn a_blank_tip_is_rejected_with_a_flash_message() {
    // Arrange
    let app = spawn_app().await;
    app.login_as_admin().await;

    // Act - Part 1 - Submit whitespace
    let response = app.post_daily_tip("   \n ").await;
    assert_is_redirect_to(&response, "/admin/dashboard");

    // Act - Part 2 - Follow the redirect
    let html_page = app.get_admin_dashboard_html().await;
    assert!(html_page.contains("<p><i>Please enter a daily tip.</i></p>"));

    // Assert
    assert!(app.stored_tips().is_empty());
}

#[tokio::test]
async fn tip_content_is_escaped_on_the_dashboard() {
    let app = spawn_app().await;
    app.login_as_admin().await;

    app.post_daily_tip("<script>alert(1)</script>").await;

    let html_page = app.get_admin_dashboard_html().await;
    assert!(!html_page.contains("<script>alert(1)</script>"));
    assert!(html_page.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn the_export_is_the_stored_collection() {
    // Arrange
    let app = spawn_app().await;
    app.login_as_admin().await;
    app.post_daily_tip("Use EXPLAIN ANALYZE").await;

    // Act
    let response = app.get_tips_export().await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let disposition = response
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();
    assert!(disposition.contains("attachment"));
    assert!(disposition.contains("daily_tips.json"));

    let exported: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        exported,
        serde_json::json!([{
            "content": "Use EXPLAIN ANALYZE",
            "date": TipDate::today().to_string(),
            "source": "admin"
        }])
    );
}
